//! Chain identification: classify raw user text into a transaction locator.

use crate::models::TransactionLocator;
use crate::services::identifier::grammar::CHAIN_GRAMMARS;

/// Classifies user-supplied text as a transaction reference.
///
/// Accepts either a bare hash or a known explorer URL. Chains are tried in
/// the grammar table's priority order; for each chain the URL pattern is
/// tried first, then the bare-hash pattern. The first match wins.
///
/// Returns `None` when nothing matches — unrecognized input, not a
/// validation failure; callers surface [`transaction_hash_guidance`] in that
/// case. Pure function, no I/O.
pub fn identify(text: &str) -> Option<TransactionLocator> {
	let input = text.trim();
	if input.is_empty() {
		return None;
	}

	for grammar in CHAIN_GRAMMARS.iter() {
		if let Some(captures) = grammar.url_pattern.captures(input) {
			if let Some(hash) = captures.get(1) {
				return Some(TransactionLocator {
					chain: grammar.chain,
					hash: hash.as_str().to_string(),
				});
			}
		}

		if grammar.hash_pattern.is_match(input) {
			return Some(TransactionLocator {
				chain: grammar.chain,
				hash: input.to_string(),
			});
		}
	}

	None
}

/// Help text describing accepted hash/URL formats, one line per supported
/// chain.
///
/// Built from the grammar table itself so documentation and grammar cannot
/// drift apart.
pub fn transaction_hash_guidance() -> String {
	let mut text = String::from(
		"A transaction hash is a unique identifier for a blockchain transaction. \
		 Accepted formats:\n",
	);
	for (index, grammar) in CHAIN_GRAMMARS.iter().enumerate() {
		text.push_str(&format!("\n{}. {}", index + 1, grammar.guidance));
	}
	text.push_str(
		"\n\nYou can usually find the transaction hash on the page where you made the \
		 transaction or in your wallet's transaction history. Pasting the explorer link \
		 works too.",
	);
	text
}
