//! Solana chain client implementation.
//!
//! Fetches transactions in the `jsonParsed` encoding and walks the decoded
//! instruction list: the first instruction recognized as a native or SPL
//! token transfer determines the canonical transfer.

use alloy::primitives::U256;
use async_trait::async_trait;
use serde_json::json;

use crate::{
	models::{
		format_scaled_amount, CanonicalTransfer, ChainId, Network, SolanaTokenAccount,
		SolanaTransaction, TransferStatus,
	},
	services::blockchain::{
		client::ChainClient,
		clients::extract_rpc_result,
		transports::{BlockchainTransport, HttpTransportClient, TestConnectionRequest},
		AdapterError,
	},
};

/// Client implementation for the Solana blockchain
#[derive(Clone)]
pub struct SolanaClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	http_client: T,
	chain: ChainId,
}

impl<T: Send + Sync + Clone> SolanaClient<T> {
	/// Creates a new Solana client instance with a specific transport client
	pub fn new_with_transport(http_client: T) -> Self {
		Self {
			http_client,
			chain: ChainId::Solana,
		}
	}
}

impl SolanaClient<HttpTransportClient> {
	/// Creates a new Solana client instance
	///
	/// # Arguments
	/// * `network` - Network configuration containing RPC endpoints
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(network: &Network) -> Result<Self, anyhow::Error> {
		let http_client = HttpTransportClient::new(
			network,
			Some(TestConnectionRequest {
				path: None,
				payload: json!({
					"jsonrpc": "2.0",
					"id": 1,
					"method": "getHealth"
				}),
			}),
		)
		.await?;
		Ok(Self::new_with_transport(http_client))
	}
}

/// Extended functionality specific to Solana
#[async_trait]
pub trait SolanaClientTrait {
	/// Retrieves a parsed transaction by signature
	///
	/// Requests the `jsonParsed` encoding: the walk needs decoded
	/// instructions, not raw bytes.
	async fn get_transaction(
		&self,
		signature: &str,
	) -> Result<Option<SolanaTransaction>, AdapterError>;

	/// Resolves an SPL token account to its mint and decimals
	async fn get_token_account(
		&self,
		pubkey: &str,
	) -> Result<Option<SolanaTokenAccount>, AdapterError>;
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> SolanaClientTrait for SolanaClient<T> {
	async fn get_transaction(
		&self,
		signature: &str,
	) -> Result<Option<SolanaTransaction>, AdapterError> {
		let params = json!([
			signature,
			{
				"encoding": "jsonParsed",
				"maxSupportedTransactionVersion": 0
			}
		]);

		let response = self
			.http_client
			.send_raw_request("getTransaction", Some(params))
			.await?;

		let result = extract_rpc_result(&response)?;
		if result.is_null() {
			return Ok(None);
		}

		serde_json::from_value(result.clone())
			.map(Some)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse transaction: {}", e)))
	}

	async fn get_token_account(
		&self,
		pubkey: &str,
	) -> Result<Option<SolanaTokenAccount>, AdapterError> {
		let params = json!([pubkey, { "encoding": "jsonParsed" }]);

		let response = self
			.http_client
			.send_raw_request("getAccountInfo", Some(params))
			.await?;

		let result = extract_rpc_result(&response)?;
		let value = result.get("value").unwrap_or(&serde_json::Value::Null);
		if value.is_null() {
			return Ok(None);
		}

		// jsonParsed token accounts carry {data: {parsed: {type: "account",
		// info: {...}}}}; anything else is not a token account
		let parsed = value.pointer("/data/parsed");
		let is_token_account = parsed
			.and_then(|parsed| parsed.get("type"))
			.and_then(|kind| kind.as_str())
			== Some("account");
		if !is_token_account {
			return Ok(None);
		}

		let info = parsed
			.and_then(|parsed| parsed.get("info"))
			.cloned()
			.unwrap_or(serde_json::Value::Null);

		serde_json::from_value(info)
			.map(Some)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse token account: {}", e)))
	}
}

impl<T: Send + Sync + Clone + BlockchainTransport> SolanaClient<T> {
	fn parse_base_units(&self, amount: &str) -> Result<U256, AdapterError> {
		U256::from_str_radix(amount, 10)
			.map_err(|e| AdapterError::rpc_error(format!("Failed to parse token amount: {}", e)))
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> ChainClient for SolanaClient<T> {
	async fn fetch_transfer(&self, signature: &str) -> Result<CanonicalTransfer, AdapterError> {
		let tx = self
			.get_transaction(signature)
			.await?
			.ok_or_else(AdapterError::not_found)?;

		// Once the node returns a result the transaction is on-ledger:
		// absence of a result is not_found, so no pending state remains
		let status = if tx.is_failed() {
			TransferStatus::Failed
		} else {
			TransferStatus::Confirmed
		};

		for instruction in tx.instructions() {
			if let Some(native) = instruction.as_native_transfer() {
				return Ok(CanonicalTransfer::native(
					self.chain,
					native.source,
					native.destination,
					format_scaled_amount(
						U256::from(native.lamports),
						self.chain.native_decimals(),
					),
					status,
				));
			}

			if let Some(checked) = instruction.as_token_transfer_checked() {
				let amount = self.parse_base_units(&checked.token_amount.amount)?;
				return Ok(CanonicalTransfer::token(
					self.chain,
					checked.source,
					checked.destination,
					format_scaled_amount(amount, checked.token_amount.decimals),
					checked.mint,
					status,
				));
			}

			if let Some(transfer) = instruction.as_token_transfer() {
				// Plain transfers carry no mint; resolve it through the
				// destination token account
				let account = self
					.get_token_account(&transfer.destination)
					.await?
					.ok_or_else(|| {
						AdapterError::unsupported_transaction_type(format!(
							"token account {} could not be resolved",
							transfer.destination
						))
					})?;

				let amount = self.parse_base_units(&transfer.amount)?;
				return Ok(CanonicalTransfer::token(
					self.chain,
					transfer.source,
					transfer.destination,
					format_scaled_amount(amount, account.token_amount.decimals),
					account.mint,
					status,
				));
			}
		}

		Err(AdapterError::no_transfer_found())
	}
}
