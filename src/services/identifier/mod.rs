//! Chain identification service.
//!
//! Classifies raw user text into a `(chain, hash)` locator using a static,
//! closed per-chain grammar table, and generates the matching help text.

mod grammar;
mod service;

pub use grammar::{ChainGrammar, CHAIN_GRAMMARS};
pub use service::{identify, transaction_hash_guidance};
