//! # Chainproof
//!
//! Cross-chain transaction identification and payment-proof validation
//! engine. Given an arbitrary user-supplied string (a bare hash or an
//! explorer URL), the engine determines which supported ledger it belongs
//! to, fetches the transaction from that ledger's node interface, and
//! normalizes the result into one canonical transfer record verified
//! against an expected deposit address.
//!
//! ## Structure
//!
//! - `models`: Domain models (chains, networks, canonical transfers,
//!   validation results) and per-chain wire shapes
//! - `services`: Chain identification, chain clients/transports and the
//!   validation orchestrator
//! - `utils`: HTTP retry and logging utilities
//!
//! ## Entry points
//!
//! The conversation layer consumes exactly three surfaces:
//! [`services::identifier::identify`],
//! [`services::validation::ValidationService::validate`] and
//! [`services::identifier::transaction_hash_guidance`].
//!
//! The engine holds no custody, submits no transactions and owns no durable
//! state: every validation is a pure function of `(hash, chain, expected
//! recipient)` against live chain state.

pub mod models;
pub mod services;
pub mod utils;
