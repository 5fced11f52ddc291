//! Core chain client interface and traits.
//!
//! This module defines the common interface that all chain adapters must
//! follow, ensuring consistent behavior across different chain families.

use async_trait::async_trait;

use crate::models::CanonicalTransfer;
use crate::services::blockchain::AdapterError;

/// Defines the core capability every chain adapter provides
///
/// This trait must be implemented by all chain-specific clients. It is the
/// only surface the validation orchestrator dispatches through; no caller
/// branches on chain-native shapes.
#[async_trait]
pub trait ChainClient: Send + Sync {
	/// Fetches the transaction behind `hash` from the chain endpoint and
	/// decodes it into the canonical transfer shape
	///
	/// # Arguments
	/// * `hash` - Chain-native transaction hash/signature
	///
	/// # Returns
	/// * `Result<CanonicalTransfer, AdapterError>` - Decoded transfer or a
	///   taxonomy error (`NotFound`, `NoTransferFound`,
	///   `UnsupportedTransactionType`, `RpcError`)
	async fn fetch_transfer(&self, hash: &str) -> Result<CanonicalTransfer, AdapterError>;
}
