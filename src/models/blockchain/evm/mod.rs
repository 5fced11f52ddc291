//! EVM-specific model implementations.

mod transaction;

pub use transaction::{
	address_to_string, DecodedErc20Transfer, EVMLog, EVMTransaction, EVMTransactionReceipt,
	DECIMALS_SELECTOR, ERC20_TRANSFER_TOPIC,
};
