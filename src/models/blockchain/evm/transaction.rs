//! EVM transaction, receipt and log wire shapes.
//!
//! Field types lean on alloy's primitives so JSON-RPC hex quantities
//! deserialize directly.

use alloy::primitives::{b256, Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// keccak256("Transfer(address,address,uint256)") — the ERC-20 transfer
/// event signature.
pub const ERC20_TRANSFER_TOPIC: B256 =
	b256!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

/// 4-byte selector of `decimals()`
pub const DECIMALS_SELECTOR: &str = "0x313ce567";

/// Subset of `eth_getTransactionByHash` the engine consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EVMTransaction {
	pub hash: B256,
	pub from: Address,
	/// `None` for contract creation
	pub to: Option<Address>,
	pub value: U256,
	#[serde(rename = "blockNumber", default)]
	pub block_number: Option<U64>,
}

impl EVMTransaction {
	/// Whether the transaction carries native value (the native-transfer
	/// decoding path)
	pub fn has_native_value(&self) -> bool {
		!self.value.is_zero()
	}
}

/// Subset of `eth_getTransactionReceipt` the engine consumes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EVMTransactionReceipt {
	#[serde(rename = "transactionHash")]
	pub transaction_hash: B256,
	/// 0x1 success, 0x0 reverted; absent on pre-Byzantium receipts
	#[serde(default)]
	pub status: Option<U64>,
	#[serde(default)]
	pub logs: Vec<EVMLog>,
}

impl EVMTransactionReceipt {
	pub fn is_success(&self) -> bool {
		self.status == Some(U64::from(1))
	}

	/// First log that decodes as an ERC-20 transfer, if any
	pub fn first_erc20_transfer(&self) -> Option<DecodedErc20Transfer> {
		self.logs.iter().find_map(EVMLog::decode_erc20_transfer)
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EVMLog {
	pub address: Address,
	pub topics: Vec<B256>,
	pub data: Bytes,
}

/// An ERC-20 `Transfer` log sliced into its parts
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedErc20Transfer {
	pub token: Address,
	pub from: Address,
	pub to: Address,
	pub amount: U256,
}

impl EVMLog {
	/// Decodes the log as an ERC-20 `Transfer(address,address,uint256)`.
	///
	/// Requires the signature topic, both indexed address topics and a
	/// 32-byte amount word; anything else is not a qualifying log.
	pub fn decode_erc20_transfer(&self) -> Option<DecodedErc20Transfer> {
		if self.topics.len() < 3 || self.topics[0] != ERC20_TRANSFER_TOPIC {
			return None;
		}
		if self.data.len() != 32 {
			return None;
		}
		Some(DecodedErc20Transfer {
			token: self.address,
			from: Address::from_word(self.topics[1]),
			to: Address::from_word(self.topics[2]),
			amount: U256::from_be_slice(&self.data),
		})
	}
}

/// Lowercase `0x`-prefixed rendering used for all EVM addresses the engine
/// returns
pub fn address_to_string(address: &Address) -> String {
	format!("{:#x}", address)
}
