//! Per-chain hash grammars and explorer URL shapes.
//!
//! A static, closed table. Its correctness is load-bearing: a malformed
//! pattern silently misclassifies chains, so every entry is exercised by the
//! unit tests in `service.rs` for both its URL and bare-hash form.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::ChainId;

/// Recognition rules for one chain.
///
/// `url_pattern` is case-insensitive on the scheme/host/path portion only;
/// the hash capture group preserves the input's case (base58 is
/// case-sensitive). `hash_pattern` is anchored to match a whole trimmed
/// input.
pub struct ChainGrammar {
	pub chain: ChainId,
	pub url_pattern: Regex,
	pub hash_pattern: Regex,
	/// One user-facing line describing the accepted format; surfaced
	/// verbatim by the guidance text
	pub guidance: &'static str,
}

lazy_static! {
	/// Grammar entries in identification priority order.
	///
	/// Hash grammars are disjoint in length/alphabet across families; within
	/// the EVM family a bare hash resolves to the first entry and the URL
	/// disambiguates the rest.
	pub static ref CHAIN_GRAMMARS: Vec<ChainGrammar> = vec![
		ChainGrammar {
			chain: ChainId::Ethereum,
			url_pattern: Regex::new(
				r"(?i:https?://(?:www\.)?etherscan\.io/tx/)(0x[a-fA-F0-9]{64})"
			)
			.expect("static ethereum URL pattern"),
			hash_pattern: Regex::new(r"^0x[a-fA-F0-9]{64}$")
				.expect("static ethereum hash pattern"),
			guidance: "Ethereum: starts with '0x' followed by 64 hexadecimal characters \
				(66 total). Explorer: etherscan.io",
		},
		ChainGrammar {
			chain: ChainId::Bsc,
			url_pattern: Regex::new(
				r"(?i:https?://(?:www\.)?bscscan\.com/tx/)(0x[a-fA-F0-9]{64})"
			)
			.expect("static bsc URL pattern"),
			hash_pattern: Regex::new(r"^0x[a-fA-F0-9]{64}$").expect("static bsc hash pattern"),
			guidance: "BSC: starts with '0x' followed by 64 hexadecimal characters (66 total). \
				Explorer: bscscan.com",
		},
		ChainGrammar {
			chain: ChainId::Solana,
			url_pattern: Regex::new(
				r"(?i:https?://(?:www\.)?solscan\.io/tx/)([1-9A-HJ-NP-Za-km-z]{88,98})"
			)
			.expect("static solana URL pattern"),
			hash_pattern: Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{88,98}$")
				.expect("static solana hash pattern"),
			guidance: "Solana: 88 to 98 base58 characters (letters and digits, never 0, O, I \
				or l). Explorer: solscan.io",
		},
		ChainGrammar {
			chain: ChainId::Tron,
			url_pattern: Regex::new(
				r"(?i:https?://(?:www\.)?tronscan\.org/#/transaction/)([a-fA-F0-9]{64})"
			)
			.expect("static tron URL pattern"),
			hash_pattern: Regex::new(r"^[a-fA-F0-9]{64}$").expect("static tron hash pattern"),
			guidance: "Tron: 64 hexadecimal characters without a '0x' prefix. \
				Explorer: tronscan.org",
		},
	];
}
