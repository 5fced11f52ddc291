//! Chain-specific model implementations.
//!
//! Each submodule defines the raw wire shapes one chain family's node
//! returns, plus the helpers the clients use to recognize and slice transfer
//! data out of them. Nothing outside `services::blockchain` should need
//! these types.

pub mod evm;
pub mod solana;
pub mod tron;
