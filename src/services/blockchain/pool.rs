//! Client pool for managing chain clients.
//!
//! Thread-safe pooling that caches one client per network slug and creates
//! clients lazily on first use. Caching is a resource optimization only —
//! validation correctness never depends on it. The pool uses a fast path
//! for existing clients and a slow path for creating new ones.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::{
	models::Network,
	services::blockchain::{
		client::ChainClient,
		clients::{EvmClient, SolanaClient, TronClient},
		transports::{HttpTransportClient, TronTransportClient},
		AdapterError,
	},
};

/// Trait for the client pool.
#[async_trait]
pub trait ClientPoolTrait: Send + Sync {
	type EvmClient: ChainClient;
	type SolanaClient: ChainClient;
	type TronClient: ChainClient;

	async fn get_evm_client(
		&self,
		network: &Network,
	) -> Result<Arc<Self::EvmClient>, AdapterError>;
	async fn get_solana_client(
		&self,
		network: &Network,
	) -> Result<Arc<Self::SolanaClient>, AdapterError>;
	async fn get_tron_client(
		&self,
		network: &Network,
	) -> Result<Arc<Self::TronClient>, AdapterError>;
}

/// Client storage for one family, keyed by network slug
struct ClientStorage<T> {
	clients: Arc<RwLock<HashMap<String, Arc<T>>>>,
}

impl<T> ClientStorage<T> {
	fn new() -> Self {
		Self {
			clients: Arc::new(RwLock::new(HashMap::new())),
		}
	}

	/// Double-checked locking: fast read path for existing clients, write
	/// path creating the client while holding the lock so concurrent
	/// validations share one instance
	async fn get_or_create(
		&self,
		network: &Network,
		create_fn: impl Fn(&Network) -> BoxFuture<'static, Result<T, anyhow::Error>>,
	) -> Result<Arc<T>, AdapterError> {
		if let Some(client) = self.clients.read().await.get(&network.slug) {
			return Ok(client.clone());
		}

		let mut clients = self.clients.write().await;
		if let Some(client) = clients.get(&network.slug) {
			return Ok(client.clone());
		}

		let client = Arc::new(
			create_fn(network)
				.await
				.map_err(|e| AdapterError::rpc_error(e.to_string()))?,
		);
		clients.insert(network.slug.clone(), client.clone());
		Ok(client)
	}
}

/// Main client pool manager covering the supported chain families.
///
/// Clients are created on demand when first requested and then cached for
/// future use. Construction is explicit — no module-level singletons; the
/// embedding layer owns the pool's lifetime.
pub struct ClientPool {
	evm_clients: ClientStorage<EvmClient<HttpTransportClient>>,
	solana_clients: ClientStorage<SolanaClient<HttpTransportClient>>,
	tron_clients: ClientStorage<TronClient<TronTransportClient>>,
}

impl ClientPool {
	/// Creates a new empty client pool.
	pub fn new() -> Self {
		Self {
			evm_clients: ClientStorage::new(),
			solana_clients: ClientStorage::new(),
			tron_clients: ClientStorage::new(),
		}
	}

	/// Number of cached EVM clients (one per network slug)
	pub async fn evm_client_count(&self) -> usize {
		self.evm_clients.clients.read().await.len()
	}
}

impl Default for ClientPool {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl ClientPoolTrait for ClientPool {
	type EvmClient = EvmClient<HttpTransportClient>;
	type SolanaClient = SolanaClient<HttpTransportClient>;
	type TronClient = TronClient<TronTransportClient>;

	async fn get_evm_client(
		&self,
		network: &Network,
	) -> Result<Arc<Self::EvmClient>, AdapterError> {
		self.evm_clients
			.get_or_create(network, |network| {
				let network = network.clone();
				Box::pin(async move { EvmClient::new(&network).await })
			})
			.await
	}

	async fn get_solana_client(
		&self,
		network: &Network,
	) -> Result<Arc<Self::SolanaClient>, AdapterError> {
		self.solana_clients
			.get_or_create(network, |network| {
				let network = network.clone();
				Box::pin(async move { SolanaClient::new(&network).await })
			})
			.await
	}

	async fn get_tron_client(
		&self,
		network: &Network,
	) -> Result<Arc<Self::TronClient>, AdapterError> {
		self.tron_clients
			.get_or_create(network, |network| {
				let network = network.clone();
				Box::pin(async move { TronClient::new(&network).await })
			})
			.await
	}
}
