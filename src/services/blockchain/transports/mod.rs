//! Network transport implementations for chain clients.
//!
//! Provides the HTTP JSON-RPC transport shared by the EVM and Solana
//! clients, the REST-style transport for Tron full nodes, and the endpoint
//! manager that rotates between fallback RPC URLs on failure.

mod endpoint_manager;
mod http;
mod tron;

pub use endpoint_manager::EndpointManager;
pub use http::{HttpTransportClient, TestConnectionRequest};
pub use tron::TronTransportClient;

use async_trait::async_trait;
use reqwest_retry::{Retryable, RetryableStrategy};
use serde::Serialize;
use serde_json::{json, Value};

/// HTTP status codes that trigger RPC endpoint rotation
/// - 429: Too Many Requests - indicates rate limiting from the current endpoint
pub const ROTATE_ON_ERROR_CODES: [u16; 1] = [429];

/// Errors raised below the adapter layer: request framing, network I/O,
/// HTTP status failures, response parsing and URL rotation
#[derive(Debug)]
pub enum TransportError {
	/// Request could not be serialized
	RequestSerialization(String),

	/// Network-level failure (connect, timeout, reset)
	Network(String),

	/// Endpoint answered with a non-success HTTP status
	Http { status: u16, url: String, body: String },

	/// Response body was not the expected JSON
	ResponseParse(String),

	/// No healthy fallback endpoint could be promoted
	UrlRotation(String),
}

impl TransportError {
	fn format_message(&self) -> String {
		match self {
			Self::RequestSerialization(msg) => format!("Request serialization error: {}", msg),
			Self::Network(msg) => format!("Network error: {}", msg),
			Self::Http { status, url, body } => {
				format!("HTTP error {} from {}: {}", status, url, body)
			}
			Self::ResponseParse(msg) => format!("Response parse error: {}", msg),
			Self::UrlRotation(msg) => format!("URL rotation error: {}", msg),
		}
	}

	pub fn request_serialization(msg: impl Into<String>) -> Self {
		let error = Self::RequestSerialization(msg.into());
		tracing::error!("{}", error.format_message());
		error
	}

	pub fn network(msg: impl Into<String>) -> Self {
		let error = Self::Network(msg.into());
		tracing::warn!("{}", error.format_message());
		error
	}

	pub fn http(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
		let error = Self::Http {
			status,
			url: url.into(),
			body: body.into(),
		};
		tracing::warn!("{}", error.format_message());
		error
	}

	pub fn response_parse(msg: impl Into<String>) -> Self {
		let error = Self::ResponseParse(msg.into());
		tracing::error!("{}", error.format_message());
		error
	}

	pub fn url_rotation(msg: impl Into<String>) -> Self {
		let error = Self::UrlRotation(msg.into());
		tracing::warn!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for TransportError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for TransportError {}

/// Base trait for all chain transport clients
#[async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Get the current URL being used by the transport
	async fn get_current_url(&self) -> String;

	/// Send a raw request to the chain endpoint
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize;

	/// Customizes the request body for specific chain requirements
	async fn customize_request<P>(&self, method: &str, params: Option<P>) -> Value
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		// Default implementation for JSON-RPC
		json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params.map(|p| p.into())
		})
	}

	/// Builds the URL a request for `method` is posted to. JSON-RPC
	/// endpoints take everything at the base URL; REST-style node APIs
	/// override this to append a path.
	fn request_url(&self, base_url: &str, _method: &str) -> String {
		base_url.to_string()
	}
}

/// Extension trait for transports that support URL rotation
#[async_trait]
pub trait RotatingTransport: BlockchainTransport {
	/// Attempts to establish a connection with a new URL
	async fn try_connect(&self, url: &str) -> Result<(), anyhow::Error>;

	/// Updates the client with a new URL
	async fn update_client(&self, url: &str) -> Result<(), anyhow::Error>;
}

/// Retry strategy marking network failures, 429s and server errors as
/// transient so the middleware retries them (bounded) before the endpoint
/// manager considers rotation
pub struct TransientErrorRetryStrategy;

impl RetryableStrategy for TransientErrorRetryStrategy {
	fn handle(
		&self,
		res: &Result<reqwest::Response, reqwest_middleware::Error>,
	) -> Option<Retryable> {
		match res {
			Ok(response)
				if response.status().is_server_error()
					|| ROTATE_ON_ERROR_CODES.contains(&response.status().as_u16()) =>
			{
				Some(Retryable::Transient)
			}
			Ok(_) => None,
			Err(_) => Some(Retryable::Transient),
		}
	}
}
