//! Solana parsed-transaction wire shapes.
//!
//! Models the `jsonParsed` encoding of `getTransaction`: the node decodes
//! instructions for well-known programs into `{program, parsed: {type,
//! info}}` objects, which is the only representation the engine walks (raw
//! byte instructions carry no reliable decimals metadata).

use serde::{Deserialize, Serialize};

/// Program label the node assigns to decoded system-program instructions
pub const SYSTEM_PROGRAM: &str = "system";
/// Program label the node assigns to decoded SPL token instructions
pub const SPL_TOKEN_PROGRAM: &str = "spl-token";

/// Subset of a `getTransaction(jsonParsed)` result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaTransaction {
	#[serde(default)]
	pub meta: Option<SolanaTransactionMeta>,
	pub transaction: SolanaTransactionEnvelope,
}

impl SolanaTransaction {
	/// Whether the runtime recorded an execution error
	pub fn is_failed(&self) -> bool {
		self.meta
			.as_ref()
			.map(|meta| meta.err.is_some())
			.unwrap_or(false)
	}

	pub fn instructions(&self) -> &[SolanaInstruction] {
		&self.transaction.message.instructions
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaTransactionMeta {
	/// Arbitrary error object; `null` on success
	#[serde(default)]
	pub err: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaTransactionEnvelope {
	pub message: SolanaMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaMessage {
	#[serde(default)]
	pub instructions: Vec<SolanaInstruction>,
}

/// One instruction as the node decoded it.
///
/// `program`/`parsed` are only present for programs the node knows how to
/// decode; anything else is opaque and skipped by the walk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaInstruction {
	#[serde(default)]
	pub program: Option<String>,
	#[serde(rename = "programId", default)]
	pub program_id: Option<String>,
	#[serde(default)]
	pub parsed: Option<SolanaParsedInstruction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaParsedInstruction {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default)]
	pub info: serde_json::Value,
}

impl SolanaInstruction {
	fn parsed_info(&self, program: &str, kind: &str) -> Option<&serde_json::Value> {
		if self.program.as_deref() != Some(program) {
			return None;
		}
		let parsed = self.parsed.as_ref()?;
		(parsed.kind == kind).then_some(&parsed.info)
	}

	/// Decodes the instruction as a native SOL transfer
	pub fn as_native_transfer(&self) -> Option<SolanaNativeTransfer> {
		let info = self.parsed_info(SYSTEM_PROGRAM, "transfer")?;
		serde_json::from_value(info.clone()).ok()
	}

	/// Decodes the instruction as an SPL token transfer (plain form; the
	/// instruction itself carries no mint)
	pub fn as_token_transfer(&self) -> Option<SolanaTokenTransfer> {
		let info = self.parsed_info(SPL_TOKEN_PROGRAM, "transfer")?;
		serde_json::from_value(info.clone()).ok()
	}

	/// Decodes the instruction as an SPL `transferChecked`, which carries
	/// mint and decimals inline
	pub fn as_token_transfer_checked(&self) -> Option<SolanaTokenTransferChecked> {
		let info = self.parsed_info(SPL_TOKEN_PROGRAM, "transferChecked")?;
		serde_json::from_value(info.clone()).ok()
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaNativeTransfer {
	pub source: String,
	pub destination: String,
	pub lamports: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaTokenTransfer {
	pub source: String,
	pub destination: String,
	/// Raw integer amount in token base units
	pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaTokenTransferChecked {
	pub source: String,
	pub destination: String,
	pub mint: String,
	#[serde(rename = "tokenAmount")]
	pub token_amount: SolanaTokenAmount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaTokenAmount {
	/// Raw integer amount in token base units
	pub amount: String,
	pub decimals: u8,
}

/// `getAccountInfo(jsonParsed)` shape for an SPL token account, used to
/// resolve the mint and decimals behind a plain token transfer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolanaTokenAccount {
	pub mint: String,
	pub owner: String,
	#[serde(rename = "tokenAmount")]
	pub token_amount: SolanaTokenAmount,
}
