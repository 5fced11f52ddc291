//! Tron-specific model implementations.

mod address;
mod transaction;

pub use address::{hex_address_to_base58, TRON_ADDRESS_PREFIX};
pub use transaction::{
	decode_trc20_call_data, DecodedTrc20Transfer, TronContract, TronContractParameter, TronRawData,
	TronRet, TronTransaction, TronTransferValue, TronTriggerValue, TRANSFER_CONTRACT,
	TRC20_TRANSFER_SELECTOR, TRIGGER_SMART_CONTRACT,
};
