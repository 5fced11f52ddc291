//! Chain-specific client implementations.

mod evm {
	pub mod client;
}
mod solana {
	pub mod client;
}
mod tron {
	pub mod client;
}

pub use evm::client::{EvmClient, EvmClientTrait};
pub use solana::client::{SolanaClient, SolanaClientTrait};
pub use tron::client::{TronClient, TronClientTrait};

use serde_json::Value;

use crate::services::blockchain::AdapterError;

/// Pulls the `result` member out of a JSON-RPC response, surfacing the
/// node's `error` member as an `RpcError` when present
pub(crate) fn extract_rpc_result(response: &Value) -> Result<&Value, AdapterError> {
	if let Some(error) = response.get("error") {
		let message = error
			.get("message")
			.and_then(|m| m.as_str())
			.unwrap_or("unknown RPC error");
		return Err(AdapterError::rpc_error(format!(
			"Node returned an error: {}",
			message
		)));
	}
	response
		.get("result")
		.ok_or_else(|| AdapterError::rpc_error("Missing 'result' field".to_string()))
}
