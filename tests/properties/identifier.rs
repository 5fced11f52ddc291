use proptest::prelude::*;

use crate::properties::strategies::{evm_hash, junk_input, solana_signature, tron_hash};
use chainproof::{models::ChainId, services::identifier::identify};

proptest! {
	#[test]
	fn prop_bare_evm_hash_identifies_as_ethereum(hash in evm_hash()) {
		let locator = identify(&hash).expect("well-formed EVM hash must identify");
		prop_assert_eq!(locator.chain, ChainId::Ethereum);
		prop_assert_eq!(locator.hash, hash);
	}

	#[test]
	fn prop_bsc_url_identifies_as_bsc(hash in evm_hash()) {
		let input = format!("https://bscscan.com/tx/{}", hash);
		let locator = identify(&input).expect("bscscan URL must identify");
		prop_assert_eq!(locator.chain, ChainId::Bsc);
		prop_assert_eq!(locator.hash, hash);
	}

	#[test]
	fn prop_etherscan_url_identifies_as_ethereum(hash in evm_hash()) {
		let input = format!("https://www.etherscan.io/tx/{}", hash);
		let locator = identify(&input).expect("etherscan URL must identify");
		prop_assert_eq!(locator.chain, ChainId::Ethereum);
		prop_assert_eq!(locator.hash, hash);
	}

	#[test]
	fn prop_bare_tron_hash_identifies_as_tron(hash in tron_hash()) {
		// A 64-hex string without 0x can never be EVM; the grammars are
		// disjoint on the prefix
		let locator = identify(&hash).expect("well-formed Tron hash must identify");
		prop_assert_eq!(locator.chain, ChainId::Tron);
		prop_assert_eq!(locator.hash, hash);
	}

	#[test]
	fn prop_tronscan_url_identifies_as_tron(hash in tron_hash()) {
		let input = format!("https://tronscan.org/#/transaction/{}", hash);
		let locator = identify(&input).expect("tronscan URL must identify");
		prop_assert_eq!(locator.chain, ChainId::Tron);
		prop_assert_eq!(locator.hash, hash);
	}

	#[test]
	fn prop_bare_solana_signature_identifies_as_solana(signature in solana_signature()) {
		let locator = identify(&signature).expect("well-formed signature must identify");
		prop_assert_eq!(locator.chain, ChainId::Solana);
		prop_assert_eq!(locator.hash, signature);
	}

	#[test]
	fn prop_solscan_url_identifies_as_solana(signature in solana_signature()) {
		let input = format!("https://solscan.io/tx/{}", signature);
		let locator = identify(&input).expect("solscan URL must identify");
		prop_assert_eq!(locator.chain, ChainId::Solana);
		prop_assert_eq!(locator.hash, signature);
	}

	#[test]
	fn prop_identification_is_deterministic(hash in evm_hash()) {
		prop_assert_eq!(identify(&hash), identify(&hash));
	}

	#[test]
	fn prop_whitespace_padding_never_changes_the_result(hash in tron_hash()) {
		let padded = format!("  {}\t\n", hash);
		prop_assert_eq!(identify(&padded), identify(&hash));
	}

	#[test]
	fn prop_short_junk_never_identifies(junk in junk_input()) {
		prop_assert_eq!(identify(&junk), None);
	}
}
