//! Tron transaction wire shapes and TRC-20 call-data slicing.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Contract type of a direct TRX value transfer
pub const TRANSFER_CONTRACT: &str = "TransferContract";
/// Contract type of a smart-contract invocation
pub const TRIGGER_SMART_CONTRACT: &str = "TriggerSmartContract";
/// 4-byte selector of `transfer(address,uint256)`
pub const TRC20_TRANSFER_SELECTOR: &str = "a9059cbb";

/// Subset of `wallet/gettransactionbyid` the engine consumes.
///
/// The node returns an empty object for unknown hashes, so every field is
/// optional and [`TronTransaction::exists`] gates the rest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronTransaction {
	#[serde(rename = "txID", default)]
	pub tx_id: Option<String>,
	#[serde(default)]
	pub ret: Vec<TronRet>,
	#[serde(default)]
	pub raw_data: Option<TronRawData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronRet {
	#[serde(rename = "contractRet", default)]
	pub contract_ret: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronRawData {
	#[serde(default)]
	pub contract: Vec<TronContract>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronContract {
	#[serde(rename = "type")]
	pub contract_type: String,
	pub parameter: TronContractParameter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronContractParameter {
	pub value: serde_json::Value,
}

/// `parameter.value` of a `TransferContract`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronTransferValue {
	pub amount: u64,
	pub owner_address: String,
	pub to_address: String,
}

/// `parameter.value` of a `TriggerSmartContract`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronTriggerValue {
	pub owner_address: String,
	pub contract_address: String,
	#[serde(default)]
	pub data: Option<String>,
}

impl TronTransaction {
	pub fn exists(&self) -> bool {
		self.tx_id.is_some()
	}

	/// Execution result code, absent while the transaction is unexecuted
	pub fn contract_ret(&self) -> Option<&str> {
		self.ret.first().and_then(|ret| ret.contract_ret.as_deref())
	}

	/// The embedded contract call; Tron transactions carry exactly one in
	/// practice
	pub fn first_contract(&self) -> Option<&TronContract> {
		self.raw_data
			.as_ref()
			.and_then(|raw_data| raw_data.contract.first())
	}
}

impl TronContract {
	pub fn as_transfer(&self) -> Option<TronTransferValue> {
		if self.contract_type != TRANSFER_CONTRACT {
			return None;
		}
		serde_json::from_value(self.parameter.value.clone()).ok()
	}

	pub fn as_trigger(&self) -> Option<TronTriggerValue> {
		if self.contract_type != TRIGGER_SMART_CONTRACT {
			return None;
		}
		serde_json::from_value(self.parameter.value.clone()).ok()
	}
}

/// Recipient (hex form) and raw amount sliced out of TRC-20
/// `transfer(address,uint256)` call data
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTrc20Transfer {
	pub to_hex: String,
	pub amount: U256,
}

/// Slices TRC-20 transfer call data at fixed offsets.
///
/// Layout: 8 selector chars, 64 chars for the padded recipient, 64 chars for
/// the amount word. Anything that is not exactly this shape is rejected
/// rather than mis-decoded.
pub fn decode_trc20_call_data(data: &str) -> Option<DecodedTrc20Transfer> {
	if !data.is_ascii() || !data.starts_with(TRC20_TRANSFER_SELECTOR) || data.len() < 136 {
		return None;
	}
	let to_hex = format!("41{}", &data[32..72]);
	let amount = U256::from_str_radix(&data[72..136], 16).ok()?;
	Some(DecodedTrc20Transfer { to_hex, amount })
}
