//! Tron full-node transport.
//!
//! Tron nodes expose a REST-style API instead of JSON-RPC: each method is a
//! path under the base URL (`wallet/gettransactionbyid`, ...) taking a plain
//! JSON body. This transport reuses the HTTP client and endpoint rotation
//! and overrides only the request framing.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
	models::Network,
	services::blockchain::transports::{
		BlockchainTransport, HttpTransportClient, RotatingTransport, TestConnectionRequest,
		TransportError,
	},
};

/// Probe route used to health-check Tron endpoints
const TEST_CONNECTION_PATH: &str = "wallet/getnowblock";

#[derive(Clone, Debug)]
pub struct TronTransportClient {
	http_client: HttpTransportClient,
}

impl TronTransportClient {
	/// Creates a new Tron transport client
	///
	/// # Arguments
	/// * `network` - Network configuration containing RPC URLs and timeouts
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(network: &Network) -> Result<Self, anyhow::Error> {
		let http_client = HttpTransportClient::new(
			network,
			Some(TestConnectionRequest {
				path: Some(TEST_CONNECTION_PATH.to_string()),
				payload: json!({}),
			}),
		)
		.await?;
		Ok(Self { http_client })
	}
}

#[async_trait]
impl BlockchainTransport for TronTransportClient {
	async fn get_current_url(&self) -> String {
		self.http_client.get_current_url().await
	}

	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.http_client.send_via(self, method, params).await
	}

	/// Tron requests carry the parameters as the whole body, no JSON-RPC
	/// envelope
	async fn customize_request<P>(&self, _method: &str, params: Option<P>) -> Value
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		params.map(|p| p.into()).unwrap_or_else(|| json!({}))
	}

	/// The method is a path under the node base URL
	fn request_url(&self, base_url: &str, method: &str) -> String {
		format!("{}/{}", base_url.trim_end_matches('/'), method)
	}
}

#[async_trait]
impl RotatingTransport for TronTransportClient {
	async fn try_connect(&self, url: &str) -> Result<(), anyhow::Error> {
		self.http_client.probe_url(url).await
	}

	async fn update_client(&self, url: &str) -> Result<(), anyhow::Error> {
		self.http_client.set_active_url(url).await
	}
}
