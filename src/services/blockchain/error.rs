//! Adapter error types and handling.
//!
//! Shared failure taxonomy for every chain adapter. `RpcError` is the only
//! transient kind; everything else is terminal for the validation attempt
//! and surfaced to the caller verbatim.

use tracing::{debug, error, warn};

use crate::services::blockchain::transports::TransportError;

/// Represents possible errors that can occur while fetching and decoding a
/// transaction
#[derive(Debug)]
pub enum AdapterError {
	/// The transaction does not exist on the queried endpoint
	NotFound,

	/// The transaction exists but contains no recognizable transfer
	NoTransferFound,

	/// The transaction shape is one the adapter refuses to decode; carries
	/// detail for logging
	UnsupportedTransactionType(String),

	/// Network/endpoint failure or malformed RPC response (transient)
	RpcError(String),
}

impl AdapterError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::NotFound => "Transaction not found".to_string(),
			Self::NoTransferFound => "No transfer found in transaction".to_string(),
			Self::UnsupportedTransactionType(detail) => {
				format!("Unsupported transaction type: {}", detail)
			}
			Self::RpcError(msg) => format!("RPC error: {}", msg),
		}
	}

	/// Creates a new not-found error; logged at debug, it is an expected
	/// outcome for mistyped hashes
	pub fn not_found() -> Self {
		let error = Self::NotFound;
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new no-transfer error with logging
	pub fn no_transfer_found() -> Self {
		let error = Self::NoTransferFound;
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new unsupported-transaction-type error with logging
	pub fn unsupported_transaction_type(detail: impl Into<String>) -> Self {
		let error = Self::UnsupportedTransactionType(detail.into());
		warn!("{}", error.format_message());
		error
	}

	/// Creates a new RPC error with logging
	pub fn rpc_error(msg: impl Into<String>) -> Self {
		let error = Self::RpcError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

// Standard error trait implementations
impl std::fmt::Display for AdapterError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for AdapterError {}

/// Transport failures are transient by definition at this layer
impl From<TransportError> for AdapterError {
	fn from(err: TransportError) -> Self {
		Self::rpc_error(err.to_string())
	}
}
