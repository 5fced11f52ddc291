//! Domain models and data structures for payment-proof validation.
//!
//! This module contains all the core data structures used throughout the
//! engine:
//!
//! - `blockchain`: Wire shapes for each supported chain family (EVM, Solana,
//!   Tron)
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (chains, networks, transfers, validation
//!   results)

pub mod blockchain;
mod config;
mod core;

pub use blockchain::evm::{
	address_to_string, DecodedErc20Transfer, EVMLog, EVMTransaction, EVMTransactionReceipt,
	DECIMALS_SELECTOR, ERC20_TRANSFER_TOPIC,
};

pub use blockchain::solana::{
	SolanaInstruction, SolanaNativeTransfer, SolanaTokenAccount, SolanaTokenAmount,
	SolanaTokenTransfer, SolanaTokenTransferChecked, SolanaTransaction,
};

pub use blockchain::tron::{
	decode_trc20_call_data, hex_address_to_base58, DecodedTrc20Transfer, TronContract,
	TronTransaction, TronTransferValue, TronTriggerValue,
};

// Re-export core types
pub use core::{
	format_scaled_amount, CanonicalTransfer, ChainFamily, ChainId, Network, RpcUrl,
	TransactionLocator, TransferKind, TransferStatus, ValidationError, ValidationResult,
};

// Re-export config types
pub use config::{ConfigError, ConfigLoader};
