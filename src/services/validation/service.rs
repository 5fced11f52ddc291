//! Validation orchestrator.
//!
//! Receives `(hash, chain, expected recipient)`, dispatches to the matching
//! chain adapter through the client pool, applies the recipient and finality
//! policy, and returns a canonical validation result. Every failure path
//! produces a tagged result; no error escapes the engine boundary uncaught.

use std::{collections::HashMap, sync::Arc};

use tracing::{debug, instrument};

use crate::{
	models::{
		CanonicalTransfer, ChainFamily, ChainId, Network, ValidationError, ValidationResult,
	},
	services::{
		blockchain::{AdapterError, ChainClient, ClientPoolTrait},
		validation::helpers::are_same_address,
	},
};

impl From<AdapterError> for ValidationError {
	fn from(err: AdapterError) -> Self {
		match err {
			AdapterError::NotFound => Self::TransactionNotFound,
			AdapterError::NoTransferFound => Self::NoTransferFound,
			AdapterError::UnsupportedTransactionType(_) => Self::UnsupportedTransactionType,
			AdapterError::RpcError(cause) => Self::RpcError(cause),
		}
	}
}

/// Validation orchestrator over a client pool.
///
/// Stateless between calls: each validation is a pure function of its
/// arguments against live chain state, so concurrent validations interleave
/// freely without locking.
pub struct ValidationService<P: ClientPoolTrait> {
	pool: Arc<P>,
	networks: HashMap<ChainId, Network>,
}

impl<P: ClientPoolTrait> ValidationService<P> {
	/// Creates a new validation service
	///
	/// # Arguments
	/// * `pool` - Client pool the per-chain adapters are drawn from
	/// * `networks` - Configured networks, one per supported chain
	pub fn new(pool: Arc<P>, networks: HashMap<ChainId, Network>) -> Self {
		Self { pool, networks }
	}

	/// Builds the service from loader output keyed by config file name
	pub fn from_network_configs(pool: Arc<P>, configs: HashMap<String, Network>) -> Self {
		let networks = configs
			.into_values()
			.map(|network| (network.chain, network))
			.collect();
		Self::new(pool, networks)
	}

	/// Validates a user-submitted transaction against an expected deposit
	/// address
	///
	/// # Arguments
	/// * `hash` - Transaction hash in the chain's native form
	/// * `chain` - Chain the hash belongs to (from `identify` or user choice)
	/// * `expected_recipient` - Deposit address the transfer must pay; when
	///   `None` the recipient check is skipped (status-only check)
	///
	/// # Returns
	/// * `ValidationResult` - Never an error: every failure is a tagged,
	///   serializable result
	#[instrument(skip(self), fields(chain = %chain))]
	pub async fn validate(
		&self,
		hash: &str,
		chain: ChainId,
		expected_recipient: Option<&str>,
	) -> ValidationResult {
		// Fail fast before any I/O for unconfigured chains
		let Some(network) = self.networks.get(&chain) else {
			return ValidationResult::invalid(ValidationError::UnsupportedChain);
		};

		let fetched = self.fetch_transfer(network, chain, hash).await;

		let transfer = match fetched {
			Ok(transfer) => transfer,
			Err(err) => return ValidationResult::invalid(err.into()),
		};

		let Some(expected) = expected_recipient else {
			// Status-only check: a decoded transfer is enough
			return ValidationResult::valid(transfer);
		};

		if are_same_address(chain.family(), &transfer.to, expected) {
			ValidationResult::valid(transfer)
		} else {
			debug!(
				"recipient mismatch: expected={}, actual={}",
				expected, transfer.to
			);
			ValidationResult::invalid_with_transfer(ValidationError::RecipientMismatch, transfer)
		}
	}

	/// Dispatches the fetch to the adapter matching the chain's family —
	/// the single point where families branch
	async fn fetch_transfer(
		&self,
		network: &Network,
		chain: ChainId,
		hash: &str,
	) -> Result<CanonicalTransfer, AdapterError> {
		match chain.family() {
			ChainFamily::Evm => {
				let client = self.pool.get_evm_client(network).await?;
				client.fetch_transfer(hash).await
			}
			ChainFamily::Solana => {
				let client = self.pool.get_solana_client(network).await?;
				client.fetch_transfer(hash).await
			}
			ChainFamily::Tron => {
				let client = self.pool.get_tron_client(network).await?;
				client.fetch_transfer(hash).await
			}
		}
	}
}
