//! Tron address format conversion.
//!
//! Node responses carry addresses as 21-byte hex strings prefixed with the
//! `0x41` version byte; users and explorers use the base58check form
//! (`T...`).

/// Version byte of a Tron mainnet address
pub const TRON_ADDRESS_PREFIX: u8 = 0x41;

/// Converts a node-side hex address (`41` + 20 bytes) into base58check
pub fn hex_address_to_base58(hex_address: &str) -> Result<String, Box<dyn std::error::Error>> {
	let bytes = hex::decode(hex_address.strip_prefix("0x").unwrap_or(hex_address))?;
	if bytes.len() != 21 || bytes[0] != TRON_ADDRESS_PREFIX {
		return Err(format!("not a Tron address: {}", hex_address).into());
	}
	Ok(bs58::encode(bytes).with_check().into_string())
}
