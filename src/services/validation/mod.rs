//! Transaction validation service.
//!
//! Orchestrates hash validation: adapter dispatch by chain family,
//! recipient/finality policy, and the typed failure taxonomy.

mod helpers;
mod service;

pub use helpers::{are_same_address, are_same_evm_address, normalize_evm_address};
pub use service::ValidationService;
