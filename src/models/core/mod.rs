//! Core domain models shared across the engine.

mod chain;
mod network;
mod transfer;
mod validation;

pub use chain::{ChainFamily, ChainId, TransactionLocator};
pub use network::{Network, RpcUrl};
pub use transfer::{format_scaled_amount, CanonicalTransfer, TransferKind, TransferStatus};
pub use validation::{ValidationError, ValidationResult};
