//! Chain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for interacting with
//! the supported chain families. Includes:
//!
//! - Generic chain client trait
//! - Family-specific clients (EVM, Solana, Tron)
//! - Network transport implementations
//! - Error handling for adapter operations
//! - Client pool for managing multiple clients

mod client;
mod clients;
mod error;
mod pool;
mod transports;

pub use client::ChainClient;
pub use clients::{
	EvmClient, EvmClientTrait, SolanaClient, SolanaClientTrait, TronClient, TronClientTrait,
};
pub use error::AdapterError;
pub use pool::{ClientPool, ClientPoolTrait};
pub use transports::{
	BlockchainTransport, EndpointManager, HttpTransportClient, RotatingTransport,
	TestConnectionRequest, TransientErrorRetryStrategy, TransportError, TronTransportClient,
	ROTATE_ON_ERROR_CODES,
};
