//! Tron chain client implementation.
//!
//! Fetches transactions from a Tron full node and branches on the embedded
//! contract type: a `TransferContract` is a native TRX transfer; a
//! `TriggerSmartContract` is decoded only when its call data carries the
//! standard TRC-20 `transfer(address,uint256)` selector. Everything else is
//! rejected rather than mis-decoded.

use alloy::primitives::U256;
use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::{
	models::{
		decode_trc20_call_data, format_scaled_amount, hex_address_to_base58, CanonicalTransfer,
		ChainId, Network, TronTransaction, TransferStatus,
	},
	services::blockchain::{
		client::ChainClient,
		transports::{BlockchainTransport, TronTransportClient},
		AdapterError,
	},
};

/// Contract-return code a successfully executed transaction reports
const CONTRACT_RET_SUCCESS: &str = "SUCCESS";

/// Decimals assumed when the token contract does not answer `decimals()`.
/// 6 is the TRC-20 convention (USDT, the dominant token, uses it).
const FALLBACK_TOKEN_DECIMALS: u8 = 6;

/// Zero address used as the caller of constant contract queries
const QUERY_OWNER_ADDRESS: &str = "410000000000000000000000000000000000000000";

/// Client implementation for the Tron blockchain
#[derive(Clone)]
pub struct TronClient<T: Send + Sync + Clone> {
	/// The underlying transport client for node communication
	http_client: T,
	chain: ChainId,
}

impl<T: Send + Sync + Clone> TronClient<T> {
	/// Creates a new Tron client instance with a specific transport client
	pub fn new_with_transport(http_client: T) -> Self {
		Self {
			http_client,
			chain: ChainId::Tron,
		}
	}
}

impl TronClient<TronTransportClient> {
	/// Creates a new Tron client instance
	///
	/// # Arguments
	/// * `network` - Network configuration containing full-node URLs
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(network: &Network) -> Result<Self, anyhow::Error> {
		let http_client = TronTransportClient::new(network).await?;
		Ok(Self::new_with_transport(http_client))
	}
}

/// Extended functionality specific to Tron
#[async_trait]
pub trait TronClientTrait {
	/// Retrieves a transaction by its hash
	///
	/// # Returns
	/// * `Result<Option<TronTransaction>, AdapterError>` - `None` when the
	///   node answers with its empty-object not-found shape
	async fn get_transaction(&self, hash: &str) -> Result<Option<TronTransaction>, AdapterError>;

	/// Queries a TRC-20 contract for its `decimals()` value
	async fn get_token_decimals(&self, contract_address: &str) -> Result<u8, AdapterError>;
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> TronClientTrait for TronClient<T> {
	async fn get_transaction(&self, hash: &str) -> Result<Option<TronTransaction>, AdapterError> {
		let body = json!({ "value": hash, "visible": false });

		let response = self
			.http_client
			.send_raw_request("wallet/gettransactionbyid", Some(body))
			.await?;

		// The node returns the transaction object directly; unknown hashes
		// come back as an empty object
		let tx: TronTransaction = serde_json::from_value(response)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse transaction: {}", e)))?;

		Ok(tx.exists().then_some(tx))
	}

	async fn get_token_decimals(&self, contract_address: &str) -> Result<u8, AdapterError> {
		let body = json!({
			"owner_address": QUERY_OWNER_ADDRESS,
			"contract_address": contract_address,
			"function_selector": "decimals()"
		});

		let response = self
			.http_client
			.send_raw_request("wallet/triggerconstantcontract", Some(body))
			.await?;

		let hex_word = response
			.get("constant_result")
			.and_then(|results| results.get(0))
			.and_then(|word| word.as_str())
			.ok_or_else(|| AdapterError::rpc_error("decimals() returned no data".to_string()))?;

		let word = U256::from_str_radix(hex_word, 16)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse decimals: {}", e)))?;

		u8::try_from(word)
			.map_err(|_| AdapterError::rpc_error(format!("Implausible decimals value: {}", word)))
	}
}

impl<T: Send + Sync + Clone + BlockchainTransport> TronClient<T> {
	fn to_base58(&self, hex_address: &str) -> Result<String, AdapterError> {
		hex_address_to_base58(hex_address).map_err(|e| {
			AdapterError::rpc_error(format!("Failed to convert address {}: {}", hex_address, e))
		})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> ChainClient for TronClient<T> {
	async fn fetch_transfer(&self, hash: &str) -> Result<CanonicalTransfer, AdapterError> {
		let tx = self
			.get_transaction(hash)
			.await?
			.ok_or_else(AdapterError::not_found)?;

		let status = match tx.contract_ret() {
			Some(CONTRACT_RET_SUCCESS) => TransferStatus::Confirmed,
			Some(_) => TransferStatus::Failed,
			// Not yet executed: no ret entry recorded
			None => TransferStatus::Pending,
		};

		let contract = tx.first_contract().ok_or_else(|| {
			AdapterError::unsupported_transaction_type("transaction carries no contract entry")
		})?;

		if let Some(transfer) = contract.as_transfer() {
			// Native TRX transfer
			return Ok(CanonicalTransfer::native(
				self.chain,
				self.to_base58(&transfer.owner_address)?,
				self.to_base58(&transfer.to_address)?,
				format_scaled_amount(U256::from(transfer.amount), self.chain.native_decimals()),
				status,
			));
		}

		if let Some(trigger) = contract.as_trigger() {
			let data = trigger.data.as_deref().ok_or_else(|| {
				AdapterError::unsupported_transaction_type("contract call without call data")
			})?;

			let decoded = decode_trc20_call_data(data).ok_or_else(|| {
				AdapterError::unsupported_transaction_type(
					"call data does not match transfer(address,uint256)",
				)
			})?;

			let decimals = match self.get_token_decimals(&trigger.contract_address).await {
				Ok(decimals) => decimals,
				Err(e) => {
					warn!(
						"decimals() query failed for contract {}, assuming {}: {}",
						trigger.contract_address, FALLBACK_TOKEN_DECIMALS, e
					);
					FALLBACK_TOKEN_DECIMALS
				}
			};

			return Ok(CanonicalTransfer::token(
				self.chain,
				self.to_base58(&trigger.owner_address)?,
				self.to_base58(&decoded.to_hex)?,
				format_scaled_amount(decoded.amount, decimals),
				self.to_base58(&trigger.contract_address)?,
				status,
			));
		}

		Err(AdapterError::unsupported_transaction_type(
			contract.contract_type.clone(),
		))
	}
}
