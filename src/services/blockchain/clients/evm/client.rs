//! EVM-compatible chain client implementation.
//!
//! Fetches transactions and receipts from Ethereum-family JSON-RPC
//! endpoints and decodes them into the canonical transfer shape: a non-zero
//! native value is a native transfer; otherwise the first ERC-20 transfer
//! log in the receipt decides.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::{
	models::{
		address_to_string, format_scaled_amount, CanonicalTransfer, ChainId, EVMTransaction,
		EVMTransactionReceipt, Network, TransferStatus, DECIMALS_SELECTOR,
	},
	services::blockchain::{
		client::ChainClient,
		clients::extract_rpc_result,
		transports::{BlockchainTransport, HttpTransportClient},
		AdapterError,
	},
};

/// Decimals assumed when the token contract does not answer `decimals()`.
/// 18 is the ERC-20 convention and what the overwhelming majority of
/// fungible tokens use.
const FALLBACK_TOKEN_DECIMALS: u8 = 18;

/// Client implementation for Ethereum Virtual Machine (EVM) compatible
/// chains
#[derive(Clone)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	http_client: T,
	/// Which EVM-family chain this client serves
	chain: ChainId,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(http_client: T, chain: ChainId) -> Self {
		Self { http_client, chain }
	}
}

impl EvmClient<HttpTransportClient> {
	/// Creates a new EVM client instance
	///
	/// # Arguments
	/// * `network` - Network configuration containing RPC endpoints and chain details
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(network: &Network) -> Result<Self, anyhow::Error> {
		let http_client = HttpTransportClient::new(network, None).await?;
		Ok(Self::new_with_transport(http_client, network.chain))
	}
}

/// Extended functionality specific to EVM-compatible chains
#[async_trait]
pub trait EvmClientTrait {
	/// Retrieves a transaction by its hash
	///
	/// # Returns
	/// * `Result<Option<EVMTransaction>, AdapterError>` - `None` when the
	///   hash is unknown to the endpoint
	async fn get_transaction(&self, hash: &str) -> Result<Option<EVMTransaction>, AdapterError>;

	/// Retrieves a transaction receipt by hash
	///
	/// # Returns
	/// * `Result<Option<EVMTransactionReceipt>, AdapterError>` - `None`
	///   while the transaction is pending
	async fn get_transaction_receipt(
		&self,
		hash: &str,
	) -> Result<Option<EVMTransactionReceipt>, AdapterError>;

	/// Queries a token contract for its `decimals()` value
	async fn get_token_decimals(&self, token: &Address) -> Result<u8, AdapterError>;
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> EvmClientTrait for EvmClient<T> {
	async fn get_transaction(&self, hash: &str) -> Result<Option<EVMTransaction>, AdapterError> {
		let response = self
			.http_client
			.send_raw_request("eth_getTransactionByHash", Some(json!([hash])))
			.await?;

		let result = extract_rpc_result(&response)?;
		if result.is_null() {
			return Ok(None);
		}

		serde_json::from_value(result.clone())
			.map(Some)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse transaction: {}", e)))
	}

	async fn get_transaction_receipt(
		&self,
		hash: &str,
	) -> Result<Option<EVMTransactionReceipt>, AdapterError> {
		let response = self
			.http_client
			.send_raw_request("eth_getTransactionReceipt", Some(json!([hash])))
			.await?;

		let result = extract_rpc_result(&response)?;
		if result.is_null() {
			return Ok(None);
		}

		serde_json::from_value(result.clone())
			.map(Some)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse receipt: {}", e)))
	}

	async fn get_token_decimals(&self, token: &Address) -> Result<u8, AdapterError> {
		let params = json!([
			{
				"to": address_to_string(token),
				"data": DECIMALS_SELECTOR
			},
			"latest"
		]);

		let response = self
			.http_client
			.send_raw_request("eth_call", Some(params))
			.await?;

		let hex_word = extract_rpc_result(&response)?
			.as_str()
			.ok_or_else(|| AdapterError::rpc_error("decimals() returned no data".to_string()))?
			.to_string();

		let word = U256::from_str_radix(hex_word.trim_start_matches("0x"), 16)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse decimals: {}", e)))?;

		u8::try_from(word)
			.map_err(|_| AdapterError::rpc_error(format!("Implausible decimals value: {}", word)))
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> ChainClient for EvmClient<T> {
	async fn fetch_transfer(&self, hash: &str) -> Result<CanonicalTransfer, AdapterError> {
		let tx = self
			.get_transaction(hash)
			.await?
			.ok_or_else(AdapterError::not_found)?;

		let receipt = self.get_transaction_receipt(hash).await?;
		let status = match &receipt {
			None => TransferStatus::Pending,
			Some(receipt) if receipt.is_success() => TransferStatus::Confirmed,
			Some(_) => TransferStatus::Failed,
		};

		if tx.has_native_value() {
			// Native transfer; a contract creation carries no payable
			// recipient
			let to = tx.to.ok_or_else(AdapterError::no_transfer_found)?;
			let amount = format_scaled_amount(tx.value, self.chain.native_decimals());
			return Ok(CanonicalTransfer::native(
				self.chain,
				address_to_string(&tx.from),
				address_to_string(&to),
				amount,
				status,
			));
		}

		// Zero native value: the first ERC-20 transfer log decides
		let transfer = receipt
			.as_ref()
			.and_then(|receipt| receipt.first_erc20_transfer())
			.ok_or_else(AdapterError::no_transfer_found)?;

		let decimals = match self.get_token_decimals(&transfer.token).await {
			Ok(decimals) => decimals,
			Err(e) => {
				warn!(
					"decimals() query failed for token {}, assuming {}: {}",
					address_to_string(&transfer.token),
					FALLBACK_TOKEN_DECIMALS,
					e
				);
				FALLBACK_TOKEN_DECIMALS
			}
		};

		Ok(CanonicalTransfer::token(
			self.chain,
			address_to_string(&transfer.from),
			address_to_string(&transfer.to),
			format_scaled_amount(transfer.amount, decimals),
			address_to_string(&transfer.token),
			status,
		))
	}
}
