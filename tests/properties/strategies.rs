//! Proptest strategies for chain grammar inputs.

use proptest::prelude::*;

/// A well-formed EVM transaction hash: `0x` + 64 hex chars, mixed case
pub fn evm_hash() -> impl Strategy<Value = String> {
	proptest::string::string_regex("0x[0-9a-fA-F]{64}").expect("valid strategy regex")
}

/// A well-formed Tron transaction hash: 64 hex chars, no prefix
pub fn tron_hash() -> impl Strategy<Value = String> {
	proptest::string::string_regex("[0-9a-fA-F]{64}").expect("valid strategy regex")
}

/// A well-formed Solana signature: 88-98 base58 chars
pub fn solana_signature() -> impl Strategy<Value = String> {
	proptest::string::string_regex("[1-9A-HJ-NP-Za-km-z]{88,98}").expect("valid strategy regex")
}

/// Strings that match no chain grammar: too short for every hash shape
pub fn junk_input() -> impl Strategy<Value = String> {
	proptest::string::string_regex("[0-9a-zA-Z ._-]{0,40}").expect("valid strategy regex")
}
