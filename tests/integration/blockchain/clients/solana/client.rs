use serde_json::json;

use crate::integration::mocks::MockTransport;
use chainproof::{
	models::{ChainId, TransferKind, TransferStatus},
	services::blockchain::{AdapterError, ChainClient, SolanaClient, SolanaClientTrait},
};

const SIGNATURE: &str = "5wHu1qwD4kLwyvCvVHso9vAQAuPhwihwtx4TefVGNGxZ55fFMGD7AnegaXzwy3Xu2zwuoK6BsFsH5xqZ8TAkZAMh";
const SOURCE: &str = "9aE476sH92Vz7DMPyq5WLPkrKWivxeuTKEFKd2sZZcde";
const DESTINATION: &str = "3emsAVdmGKERbHjmGfQ6oZ1e35dkf5iYcS6U4CPKFVaa";
const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

fn rpc_result(result: serde_json::Value) -> serde_json::Value {
	json!({ "jsonrpc": "2.0", "id": 1, "result": result })
}

fn transaction_result(instructions: serde_json::Value, err: serde_json::Value) -> serde_json::Value {
	rpc_result(json!({
		"slot": 322000000u64,
		"meta": { "err": err },
		"transaction": { "message": { "instructions": instructions } }
	}))
}

fn native_transfer_instruction(lamports: u64) -> serde_json::Value {
	json!({
		"program": "system",
		"programId": "11111111111111111111111111111111",
		"parsed": {
			"type": "transfer",
			"info": {
				"source": SOURCE,
				"destination": DESTINATION,
				"lamports": lamports
			}
		}
	})
}

fn expect_rpc(
	mock: &mut MockTransport,
	method: &'static str,
	response: serde_json::Value,
) {
	mock.expect_send_raw_request()
		.withf(move |m, _| m == method)
		.times(1)
		.return_once(move |_, _| Ok(response));
}

#[tokio::test]
async fn test_native_transfer_is_decoded() {
	let mut mock = MockTransport::new();
	expect_rpc(
		&mut mock,
		"getTransaction",
		transaction_result(
			json!([native_transfer_instruction(1_500_000_000)]),
			serde_json::Value::Null,
		),
	);

	let client = SolanaClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(SIGNATURE).await.unwrap();

	assert_eq!(transfer.chain, ChainId::Solana);
	assert_eq!(transfer.kind, TransferKind::Native);
	assert_eq!(transfer.from, SOURCE);
	assert_eq!(transfer.to, DESTINATION);
	assert_eq!(transfer.amount, "1.5");
	assert_eq!(transfer.token_address, None);
	assert_eq!(transfer.status, TransferStatus::Confirmed);
}

#[tokio::test]
async fn test_transfer_checked_is_decoded_from_inline_decimals() {
	let mut mock = MockTransport::new();
	expect_rpc(
		&mut mock,
		"getTransaction",
		transaction_result(
			json!([{
				"program": "spl-token",
				"programId": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
				"parsed": {
					"type": "transferChecked",
					"info": {
						"source": SOURCE,
						"destination": DESTINATION,
						"mint": USDC_MINT,
						"tokenAmount": { "amount": "2500000", "decimals": 6, "uiAmountString": "2.5" }
					}
				}
			}]),
			serde_json::Value::Null,
		),
	);

	let client = SolanaClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(SIGNATURE).await.unwrap();

	assert_eq!(transfer.kind, TransferKind::Token);
	assert_eq!(transfer.amount, "2.5");
	assert_eq!(transfer.token_address.as_deref(), Some(USDC_MINT));
}

#[tokio::test]
async fn test_plain_token_transfer_resolves_mint_via_account() {
	let mut mock = MockTransport::new();
	expect_rpc(
		&mut mock,
		"getTransaction",
		transaction_result(
			json!([{
				"program": "spl-token",
				"programId": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
				"parsed": {
					"type": "transfer",
					"info": {
						"source": SOURCE,
						"destination": DESTINATION,
						"amount": "1000000",
						"authority": "ownerPubkey111111111111111111111111111111111"
					}
				}
			}]),
			serde_json::Value::Null,
		),
	);
	expect_rpc(
		&mut mock,
		"getAccountInfo",
		rpc_result(json!({
			"context": { "slot": 322000000u64 },
			"value": {
				"lamports": 2039280u64,
				"owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
				"data": {
					"program": "spl-token",
					"parsed": {
						"type": "account",
						"info": {
							"mint": USDC_MINT,
							"owner": DESTINATION,
							"state": "initialized",
							"tokenAmount": { "amount": "5000000", "decimals": 6 }
						}
					}
				}
			}
		})),
	);

	let client = SolanaClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(SIGNATURE).await.unwrap();

	assert_eq!(transfer.kind, TransferKind::Token);
	assert_eq!(transfer.amount, "1");
	assert_eq!(transfer.token_address.as_deref(), Some(USDC_MINT));
}

#[tokio::test]
async fn test_unresolvable_token_account_is_rejected() {
	let mut mock = MockTransport::new();
	expect_rpc(
		&mut mock,
		"getTransaction",
		transaction_result(
			json!([{
				"program": "spl-token",
				"parsed": {
					"type": "transfer",
					"info": {
						"source": SOURCE,
						"destination": DESTINATION,
						"amount": "1000000"
					}
				}
			}]),
			serde_json::Value::Null,
		),
	);
	// Closed account
	expect_rpc(
		&mut mock,
		"getAccountInfo",
		rpc_result(json!({ "context": { "slot": 322000000u64 }, "value": null })),
	);

	let client = SolanaClient::new_with_transport(mock);
	let error = client.fetch_transfer(SIGNATURE).await.unwrap_err();
	assert!(matches!(error, AdapterError::UnsupportedTransactionType(_)));
}

#[tokio::test]
async fn test_first_recognized_instruction_wins() {
	let mut mock = MockTransport::new();
	expect_rpc(
		&mut mock,
		"getTransaction",
		transaction_result(
			json!([
				{
					"programId": "ComputeBudget111111111111111111111111111111",
					"accounts": [],
					"data": "3gJqkocMWaMm"
				},
				native_transfer_instruction(250_000_000),
				native_transfer_instruction(999_000_000)
			]),
			serde_json::Value::Null,
		),
	);

	let client = SolanaClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(SIGNATURE).await.unwrap();
	assert_eq!(transfer.amount, "0.25");
}

#[tokio::test]
async fn test_failed_transaction_status() {
	let mut mock = MockTransport::new();
	expect_rpc(
		&mut mock,
		"getTransaction",
		transaction_result(
			json!([native_transfer_instruction(1_000_000_000)]),
			json!({ "InstructionError": [0, { "Custom": 1 }] }),
		),
	);

	let client = SolanaClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(SIGNATURE).await.unwrap();
	assert_eq!(transfer.status, TransferStatus::Failed);
}

#[tokio::test]
async fn test_unknown_signature_is_not_found() {
	let mut mock = MockTransport::new();
	expect_rpc(&mut mock, "getTransaction", rpc_result(serde_json::Value::Null));

	let client = SolanaClient::new_with_transport(mock);
	let error = client.fetch_transfer(SIGNATURE).await.unwrap_err();
	assert!(matches!(error, AdapterError::NotFound));
}

#[tokio::test]
async fn test_no_recognized_instruction_is_no_transfer() {
	let mut mock = MockTransport::new();
	expect_rpc(
		&mut mock,
		"getTransaction",
		transaction_result(json!([]), serde_json::Value::Null),
	);

	let client = SolanaClient::new_with_transport(mock);
	let error = client.fetch_transfer(SIGNATURE).await.unwrap_err();
	assert!(matches!(error, AdapterError::NoTransferFound));
}

#[tokio::test]
async fn test_get_token_account_rejects_non_token_account() {
	let mut mock = MockTransport::new();
	// A plain system account: data is base64, not a parsed token account
	expect_rpc(
		&mut mock,
		"getAccountInfo",
		rpc_result(json!({
			"context": { "slot": 322000000u64 },
			"value": {
				"lamports": 1000000u64,
				"owner": "11111111111111111111111111111111",
				"data": ["", "base64"]
			}
		})),
	);

	let client = SolanaClient::new_with_transport(mock);
	let account = client.get_token_account(DESTINATION).await.unwrap();
	assert!(account.is_none());
}
