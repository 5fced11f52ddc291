use std::sync::Arc;

use crate::integration::mocks::{create_test_network_with_urls, MockChain, MockClientPool};
use chainproof::{
	models::{
		CanonicalTransfer, ChainId, Network, TransferStatus, ValidationError,
	},
	services::{blockchain::AdapterError, validation::ValidationService},
};
use std::collections::HashMap;

const EVM_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
const EVM_RECIPIENT: &str = "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb";
const TRON_RECIPIENT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

fn networks(chains: &[ChainId]) -> HashMap<ChainId, Network> {
	chains
		.iter()
		.map(|&chain| {
			(
				chain,
				create_test_network_with_urls(chain, vec!["https://rpc.example.com"]),
			)
		})
		.collect()
}

fn evm_native_transfer(to: &str) -> CanonicalTransfer {
	CanonicalTransfer::native(
		ChainId::Ethereum,
		"0xa7d9ddbe1f17865597fbd27ec712455208b6b76d",
		to,
		"1.5",
		TransferStatus::Confirmed,
	)
}

fn pool_with_evm_transfer(transfer: CanonicalTransfer) -> MockClientPool {
	let mut client = MockChain::new();
	client
		.expect_fetch_transfer()
		.returning(move |_| Ok(transfer.clone()));
	MockClientPool {
		evm_client: Some(Arc::new(client)),
		..Default::default()
	}
}

#[tokio::test]
async fn test_matching_recipient_is_valid() {
	let pool = pool_with_evm_transfer(evm_native_transfer(EVM_RECIPIENT));
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let result = service
		.validate(EVM_HASH, ChainId::Ethereum, Some(EVM_RECIPIENT))
		.await;

	assert!(result.is_valid);
	assert_eq!(result.error, None);
	assert_eq!(result.transfer.unwrap().amount, "1.5");
}

#[tokio::test]
async fn test_evm_recipient_compare_is_case_insensitive() {
	let pool = pool_with_evm_transfer(evm_native_transfer(EVM_RECIPIENT));
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let expected = EVM_RECIPIENT.to_uppercase().replace("0X", "0x");
	let result = service
		.validate(EVM_HASH, ChainId::Ethereum, Some(&expected))
		.await;

	assert!(result.is_valid);
}

#[tokio::test]
async fn test_mismatched_recipient_keeps_decoded_fields() {
	let pool = pool_with_evm_transfer(evm_native_transfer(EVM_RECIPIENT));
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let result = service
		.validate(
			EVM_HASH,
			ChainId::Ethereum,
			Some("0x1111111111111111111111111111111111111111"),
		)
		.await;

	assert!(!result.is_valid);
	assert_eq!(result.error, Some(ValidationError::RecipientMismatch));
	// Decoded fields are retained so the caller can show what was found
	let transfer = result.transfer.unwrap();
	assert_eq!(transfer.to, EVM_RECIPIENT);
	assert_eq!(transfer.amount, "1.5");
	assert_eq!(transfer.status, TransferStatus::Confirmed);
}

#[tokio::test]
async fn test_base58_recipient_compare_is_exact() {
	let transfer = CanonicalTransfer::native(
		ChainId::Tron,
		"T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb",
		TRON_RECIPIENT,
		"32",
		TransferStatus::Confirmed,
	);
	let mut client = MockChain::new();
	client
		.expect_fetch_transfer()
		.returning(move |_| Ok(transfer.clone()));
	let pool = MockClientPool {
		tron_client: Some(Arc::new(client)),
		..Default::default()
	};
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Tron]));

	// Same address, different case: base58 is case-sensitive
	let result = service
		.validate(
			"7c2d4206c03a883dd9066d620335dc1be272a8dc733cfa3f6d10308faa37facc",
			ChainId::Tron,
			Some(&TRON_RECIPIENT.to_lowercase()),
		)
		.await;

	assert!(!result.is_valid);
	assert_eq!(result.error, Some(ValidationError::RecipientMismatch));
}

#[tokio::test]
async fn test_status_only_check_skips_recipient_comparison() {
	let pool = pool_with_evm_transfer(evm_native_transfer(EVM_RECIPIENT));
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let result = service.validate(EVM_HASH, ChainId::Ethereum, None).await;

	assert!(result.is_valid);
	assert!(result.transfer.is_some());
}

#[tokio::test]
async fn test_unconfigured_chain_fails_before_any_io() {
	// Empty pool: any dispatch would error with "no ... client configured"
	let pool = MockClientPool::default();
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let result = service
		.validate("signature", ChainId::Solana, Some("recipient"))
		.await;

	assert!(!result.is_valid);
	assert_eq!(result.error, Some(ValidationError::UnsupportedChain));
	assert_eq!(result.transfer, None);
}

#[tokio::test]
async fn test_not_found_surfaces_as_typed_result() {
	let mut client = MockChain::new();
	client
		.expect_fetch_transfer()
		.returning(|_| Err(AdapterError::NotFound));
	let pool = MockClientPool {
		evm_client: Some(Arc::new(client)),
		..Default::default()
	};
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let result = service
		.validate(EVM_HASH, ChainId::Ethereum, Some(EVM_RECIPIENT))
		.await;

	assert!(!result.is_valid);
	assert_eq!(result.error, Some(ValidationError::TransactionNotFound));
	assert_eq!(
		result.error.unwrap().to_string(),
		"Transaction not found"
	);
}

#[tokio::test]
async fn test_rpc_error_preserves_cause() {
	let mut client = MockChain::new();
	client
		.expect_fetch_transfer()
		.returning(|_| Err(AdapterError::RpcError("connection reset by peer".to_string())));
	let pool = MockClientPool {
		evm_client: Some(Arc::new(client)),
		..Default::default()
	};
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let result = service
		.validate(EVM_HASH, ChainId::Ethereum, Some(EVM_RECIPIENT))
		.await;

	assert!(!result.is_valid);
	let error = result.error.unwrap();
	assert!(error.is_transient());
	assert!(error.to_string().contains("connection reset by peer"));
}

#[tokio::test]
async fn test_validate_is_idempotent_against_unchanged_state() {
	let pool = pool_with_evm_transfer(evm_native_transfer(EVM_RECIPIENT));
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Ethereum]));

	let first = service
		.validate(EVM_HASH, ChainId::Ethereum, Some(EVM_RECIPIENT))
		.await;
	let second = service
		.validate(EVM_HASH, ChainId::Ethereum, Some(EVM_RECIPIENT))
		.await;

	assert_eq!(first, second);
}

#[tokio::test]
async fn test_unsupported_transaction_type_maps_to_taxonomy() {
	let mut client = MockChain::new();
	client.expect_fetch_transfer().returning(|_| {
		Err(AdapterError::UnsupportedTransactionType(
			"VoteWitnessContract".to_string(),
		))
	});
	let pool = MockClientPool {
		tron_client: Some(Arc::new(client)),
		..Default::default()
	};
	let service = ValidationService::new(Arc::new(pool), networks(&[ChainId::Tron]));

	let result = service
		.validate(
			"7c2d4206c03a883dd9066d620335dc1be272a8dc733cfa3f6d10308faa37facc",
			ChainId::Tron,
			Some(TRON_RECIPIENT),
		)
		.await;

	assert_eq!(
		result.error,
		Some(ValidationError::UnsupportedTransactionType)
	);
	// The user-facing message never leaks internal detail
	assert_eq!(
		result.error.unwrap().to_string(),
		"Unsupported transaction type"
	);
}
