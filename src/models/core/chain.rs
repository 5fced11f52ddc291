//! Supported chain identifiers and chain families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of ledgers the engine can validate against.
///
/// Adding a chain means adding a grammar entry, a network config and (for a
/// new family) a client implementation.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
	/// Ethereum mainnet
	Ethereum,
	/// BNB Smart Chain
	Bsc,
	/// Solana mainnet-beta
	Solana,
	/// Tron mainnet
	Tron,
}

/// Group of ledgers sharing a transaction/receipt model.
///
/// Client dispatch happens on the family, never on the individual chain.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
	/// Ethereum Virtual Machine compatible chains
	Evm,
	/// Solana
	Solana,
	/// Tron
	Tron,
}

impl ChainId {
	/// All supported chains in identification priority order.
	///
	/// The order is load-bearing: a bare `0x` + 64-hex hash matches the first
	/// EVM entry (ethereum) when no explorer URL disambiguates.
	pub const ALL: [ChainId; 4] = [
		ChainId::Ethereum,
		ChainId::Bsc,
		ChainId::Solana,
		ChainId::Tron,
	];

	/// The chain family this chain belongs to
	pub fn family(&self) -> ChainFamily {
		match self {
			ChainId::Ethereum | ChainId::Bsc => ChainFamily::Evm,
			ChainId::Solana => ChainFamily::Solana,
			ChainId::Tron => ChainFamily::Tron,
		}
	}

	/// Lowercase identifier used in config files and user-facing results
	pub fn slug(&self) -> &'static str {
		match self {
			ChainId::Ethereum => "ethereum",
			ChainId::Bsc => "bsc",
			ChainId::Solana => "solana",
			ChainId::Tron => "tron",
		}
	}

	/// Parses a slug back into a chain identifier
	pub fn from_slug(slug: &str) -> Option<ChainId> {
		match slug {
			"ethereum" => Some(ChainId::Ethereum),
			"bsc" => Some(ChainId::Bsc),
			"solana" => Some(ChainId::Solana),
			"tron" => Some(ChainId::Tron),
			_ => None,
		}
	}

	/// Decimals of the chain's native asset (wei, lamports, sun)
	pub fn native_decimals(&self) -> u8 {
		match self.family() {
			ChainFamily::Evm => 18,
			ChainFamily::Solana => 9,
			ChainFamily::Tron => 6,
		}
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.slug())
	}
}

/// A user-supplied transaction reference after identification.
///
/// Ephemeral: produced per user message, never persisted. A hash string is
/// only meaningful paired with its chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionLocator {
	pub chain: ChainId,
	pub hash: String,
}
