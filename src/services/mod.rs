//! Core engine services.
//!
//! - `identifier`: Chain identification from raw user text
//! - `blockchain`: Chain clients, transports and the adapter error taxonomy
//! - `validation`: The validation orchestrator

pub mod blockchain;
pub mod identifier;
pub mod validation;
