use serde::{Deserialize, Serialize};

use crate::models::ChainId;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcUrl {
	pub type_: String,
	pub url: String,
	pub weight: u32,
}

/// Configuration for a single supported network.
///
/// One record per chain; the engine issues read-only queries against
/// `rpc_urls` and never holds key material.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Network {
	pub chain: ChainId,
	pub slug: String,
	pub name: String,
	pub rpc_urls: Vec<RpcUrl>,
	/// Per-request timeout in milliseconds. Defaults to 30_000.
	pub rpc_timeout_ms: Option<u64>,
	/// Bounded retry count for idempotent read calls. Defaults to 1.
	pub max_rpc_retries: Option<u32>,
}

impl Network {
	pub fn rpc_timeout_ms(&self) -> u64 {
		self.rpc_timeout_ms.unwrap_or(30_000)
	}

	pub fn max_rpc_retries(&self) -> u32 {
		self.max_rpc_retries.unwrap_or(1)
	}
}
