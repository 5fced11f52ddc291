//! Address equality helpers used by the recipient policy.

use crate::models::ChainFamily;

pub fn normalize_evm_address(address: &str) -> String {
	address
		.strip_prefix("0x")
		.unwrap_or(address)
		.replace(" ", "")
		.to_lowercase()
}

pub fn are_same_evm_address(address1: &str, address2: &str) -> bool {
	normalize_evm_address(address1) == normalize_evm_address(address2)
}

/// Canonical address equality per chain family: EVM hex addresses compare
/// case-insensitively, base58-form chains compare exactly (base58 is
/// case-sensitive by construction)
pub fn are_same_address(family: ChainFamily, address1: &str, address2: &str) -> bool {
	match family {
		ChainFamily::Evm => are_same_evm_address(address1, address2),
		ChainFamily::Solana | ChainFamily::Tron => address1 == address2,
	}
}
