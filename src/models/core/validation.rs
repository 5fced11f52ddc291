//! Validation outcome records returned across the engine boundary.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::models::CanonicalTransfer;

/// User-facing failure taxonomy for a validation attempt.
///
/// Every variant is terminal for the attempt except `RpcError`, which is
/// transient: the caller may re-submit the same hash. Messages are stable —
/// the conversation layer keys guidance text off them.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
	/// The requested chain has no configured network
	UnsupportedChain,
	/// The hash does not exist on the target chain
	TransactionNotFound,
	/// The transaction exists but moves no recognizable asset
	NoTransferFound,
	/// The transaction shape is one the engine refuses to decode
	UnsupportedTransactionType,
	/// Transient node/endpoint failure; carries the underlying cause
	RpcError(String),
	/// Decoded recipient differs from the expected deposit address
	RecipientMismatch,
}

impl ValidationError {
	/// Whether re-submitting the same hash may succeed
	pub fn is_transient(&self) -> bool {
		matches!(self, Self::RpcError(_))
	}

	fn format_message(&self) -> String {
		match self {
			Self::UnsupportedChain => "Unsupported blockchain".to_string(),
			Self::TransactionNotFound => "Transaction not found".to_string(),
			Self::NoTransferFound => "No transfer found in transaction".to_string(),
			Self::UnsupportedTransactionType => "Unsupported transaction type".to_string(),
			Self::RpcError(cause) => format!("Validation error: {}", cause),
			Self::RecipientMismatch => {
				"Transaction recipient does not match expected address".to_string()
			}
		}
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.format_message())
	}
}

/// Result of a single validation call.
///
/// Constructed once, never mutated. On recipient mismatch the decoded
/// transfer is still carried so the caller can show the user what was
/// actually found.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationResult {
	pub is_valid: bool,
	pub error: Option<ValidationError>,
	#[serde(flatten)]
	pub transfer: Option<CanonicalTransfer>,
}

impl ValidationResult {
	/// A transfer was found and passed every applied check
	pub fn valid(transfer: CanonicalTransfer) -> Self {
		Self {
			is_valid: true,
			error: None,
			transfer: Some(transfer),
		}
	}

	/// Validation failed before a transfer could be decoded
	pub fn invalid(error: ValidationError) -> Self {
		Self {
			is_valid: false,
			error: Some(error),
			transfer: None,
		}
	}

	/// Validation failed but the decoded transfer is retained
	pub fn invalid_with_transfer(error: ValidationError, transfer: CanonicalTransfer) -> Self {
		Self {
			is_valid: false,
			error: Some(error),
			transfer: Some(transfer),
		}
	}
}
