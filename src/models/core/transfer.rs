//! The canonical transfer record every chain adapter must produce.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::models::ChainId;

/// Whether a transfer moved the chain's native asset or a token
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransferKind {
	Native,
	Token,
}

/// Finality of a transaction's effect on its ledger
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransferStatus {
	/// Not yet included / no receipt; still mutable
	Pending,
	/// Permanently applied
	Confirmed,
	/// Rejected by the ledger
	Failed,
}

/// Unified representation of "asset X moved from A to B" regardless of
/// source chain.
///
/// `amount` is a decimal string already scaled by the asset's decimals, never
/// a raw integer. `token_address` is `Some` iff `kind == Token`; the
/// constructors below make the invariant unrepresentable rather than checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalTransfer {
	pub chain: ChainId,
	#[serde(rename = "type")]
	pub kind: TransferKind,
	pub from: String,
	pub to: String,
	pub amount: String,
	pub token_address: Option<String>,
	pub status: TransferStatus,
}

impl CanonicalTransfer {
	/// Builds a native-asset transfer (`token_address` forced to `None`)
	pub fn native(
		chain: ChainId,
		from: impl Into<String>,
		to: impl Into<String>,
		amount: impl Into<String>,
		status: TransferStatus,
	) -> Self {
		Self {
			chain,
			kind: TransferKind::Native,
			from: from.into(),
			to: to.into(),
			amount: amount.into(),
			token_address: None,
			status,
		}
	}

	/// Builds a token transfer (`token_address` required)
	pub fn token(
		chain: ChainId,
		from: impl Into<String>,
		to: impl Into<String>,
		amount: impl Into<String>,
		token_address: impl Into<String>,
		status: TransferStatus,
	) -> Self {
		Self {
			chain,
			kind: TransferKind::Token,
			from: from.into(),
			to: to.into(),
			amount: amount.into(),
			token_address: Some(token_address.into()),
			status,
		}
	}

	pub fn is_token(&self) -> bool {
		self.kind == TransferKind::Token
	}
}

/// Renders an integer asset amount as a decimal string scaled by `decimals`.
///
/// Trailing zeros in the fractional part are trimmed so repeated validations
/// of the same transfer produce an identical string.
pub fn format_scaled_amount(value: U256, decimals: u8) -> String {
	if decimals == 0 {
		return value.to_string();
	}
	let scale = U256::from(10u8).pow(U256::from(decimals));
	let whole = value / scale;
	let frac = value % scale;
	if frac.is_zero() {
		return whole.to_string();
	}
	let frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
	format!("{}.{}", whole, frac.trim_end_matches('0'))
}
