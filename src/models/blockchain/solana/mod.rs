//! Solana-specific model implementations.

mod transaction;

pub use transaction::{
	SolanaInstruction, SolanaMessage, SolanaNativeTransfer, SolanaParsedInstruction,
	SolanaTokenAccount, SolanaTokenAmount, SolanaTokenTransfer, SolanaTokenTransferChecked,
	SolanaTransaction, SolanaTransactionEnvelope, SolanaTransactionMeta, SPL_TOKEN_PROGRAM,
	SYSTEM_PROGRAM,
};
