//! HTTP transport implementation for chain interactions.
//!
//! Generic JSON-RPC client over HTTP used by the EVM and Solana adapters,
//! supporting:
//! - Multiple RPC endpoints with automatic failover
//! - Bounded retry of idempotent read calls (middleware)
//! - Per-network request timeouts
//! - Connection health checks at construction

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use url::Url;

use crate::{
	models::Network,
	services::blockchain::transports::{
		BlockchainTransport, EndpointManager, RotatingTransport, TransientErrorRetryStrategy,
		TransportError,
	},
	utils::{create_retryable_http_client, HttpRetryConfig},
};

/// Connect timeout applied to every endpoint
const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);

/// Health-check request issued against candidate endpoints.
///
/// JSON-RPC endpoints take the payload at the base URL; REST-style node APIs
/// set `path` to the probe route.
#[derive(Clone, Debug)]
pub struct TestConnectionRequest {
	pub path: Option<String>,
	pub payload: Value,
}

impl TestConnectionRequest {
	/// Default JSON-RPC probe
	fn net_version() -> Self {
		Self {
			path: None,
			payload: json!({
				"jsonrpc": "2.0",
				"id": 1,
				"method": "net_version",
				"params": []
			}),
		}
	}

	fn target_url(&self, base_url: &str) -> String {
		match &self.path {
			Some(path) => format!("{}/{}", base_url.trim_end_matches('/'), path),
			None => base_url.to_string(),
		}
	}
}

/// Basic HTTP transport client for chain interactions
///
/// Thread-safe; a single instance is shared by every validation hitting the
/// same network.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// Bare HTTP client, used for connection health checks
	pub client: Arc<Client>,
	/// Manages RPC endpoint rotation and request dispatch
	pub(crate) endpoint_manager: EndpointManager,
	/// Probe used when testing candidate endpoints
	test_request: TestConnectionRequest,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client with automatic endpoint
	/// management
	///
	/// Candidate endpoints are tried in descending weight order until one
	/// answers the health probe; the rest become rotation fallbacks.
	///
	/// # Arguments
	/// * `network` - Network configuration containing RPC URLs, weights and timeouts
	/// * `test_request` - Optional health probe (default is JSON-RPC `net_version`)
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(
		network: &Network,
		test_request: Option<TestConnectionRequest>,
	) -> Result<Self, anyhow::Error> {
		let mut rpc_urls: Vec<_> = network
			.rpc_urls
			.iter()
			.filter(|rpc_url| rpc_url.type_ == "rpc" && rpc_url.weight > 0)
			.collect();

		rpc_urls.sort_by(|a, b| b.weight.cmp(&a.weight));

		let test_request = test_request.unwrap_or_else(TestConnectionRequest::net_version);

		let http_client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_millis(network.rpc_timeout_ms()))
			.connect_timeout(CONNECT_TIMEOUT)
			.build()
			.context("Failed to create HTTP client")?;

		let retry_config = HttpRetryConfig::with_max_retries(network.max_rpc_retries());
		let middleware_client = create_retryable_http_client(
			&retry_config,
			http_client.clone(),
			Some(TransientErrorRetryStrategy),
		);

		for rpc_url in rpc_urls.iter() {
			let url = match Url::parse(&rpc_url.url) {
				Ok(url) => url,
				Err(_) => continue,
			};

			let probe = http_client
				.post(test_request.target_url(url.as_str().trim_end_matches('/')))
				.json(&test_request.payload);

			match probe.send().await {
				Ok(response) if response.status().is_success() => {
					let fallback_urls: Vec<String> = rpc_urls
						.iter()
						.filter(|candidate| candidate.url != rpc_url.url)
						.map(|candidate| candidate.url.clone())
						.collect();

					return Ok(Self {
						client: Arc::new(http_client),
						endpoint_manager: EndpointManager::new(
							middleware_client,
							rpc_url.url.as_ref(),
							fallback_urls,
						),
						test_request,
					});
				}
				// Error status or connection failure - try next URL
				_ => continue,
			}
		}

		Err(anyhow::anyhow!(
			"All RPC URLs failed to connect for network {}",
			network.slug
		))
	}

	/// Dispatches a request through the endpoint manager on behalf of
	/// `transport`, whose framing overrides apply
	pub(crate) async fn send_via<T, P>(
		&self,
		transport: &T,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		T: RotatingTransport,
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.endpoint_manager
			.send_raw_request(transport, method, params)
			.await
	}

	pub(crate) async fn probe_url(&self, url: &str) -> Result<(), anyhow::Error> {
		let url = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL: {}", url))?;

		let request = self
			.client
			.post(
				self.test_request
					.target_url(url.as_str().trim_end_matches('/')),
			)
			.json(&self.test_request.payload);

		match request.send().await {
			Ok(response) => {
				let status = response.status();
				if !status.is_success() {
					Err(anyhow::anyhow!(
						"Failed to connect to {}: {}",
						url,
						status.as_u16()
					))
				} else {
					Ok(())
				}
			}
			Err(e) => Err(anyhow::anyhow!("Failed to connect to {}: {}", url, e)),
		}
	}

	pub(crate) async fn set_active_url(&self, url: &str) -> Result<(), anyhow::Error> {
		let parsed_url = Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid URL: {}", url))?;
		let normalized_url = parsed_url.as_str().trim_end_matches('/');

		let mut active_url = self.endpoint_manager.active_url.write().await;
		*active_url = normalized_url.to_string();
		Ok(())
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	/// Retrieves the currently active RPC endpoint URL
	async fn get_current_url(&self) -> String {
		self.endpoint_manager.active_url.read().await.clone()
	}

	/// Sends a JSON-RPC request to the chain endpoint
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.send_via(self, method, params).await
	}
}

#[async_trait]
impl RotatingTransport for HttpTransportClient {
	async fn try_connect(&self, url: &str) -> Result<(), anyhow::Error> {
		self.probe_url(url).await
	}

	async fn update_client(&self, url: &str) -> Result<(), anyhow::Error> {
		self.set_active_url(url).await
	}
}
