use serde_json::json;

use crate::integration::mocks::MockTransport;
use chainproof::{
	models::{ChainId, TransferKind, TransferStatus},
	services::blockchain::{AdapterError, ChainClient, TronClient, TronClientTrait},
};

const TX_HASH: &str = "7c2d4206c03a883dd9066d620335dc1be272a8dc733cfa3f6d10308faa37facc";
// USDT contract, hex and base58 forms
const CONTRACT_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";
const CONTRACT_BASE58: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
const OWNER_HEX: &str = "410000000000000000000000000000000000000000";

fn native_tx(ret: serde_json::Value, amount: u64) -> serde_json::Value {
	json!({
		"txID": TX_HASH,
		"ret": ret,
		"raw_data": {
			"contract": [{
				"type": "TransferContract",
				"parameter": {
					"value": {
						"amount": amount,
						"owner_address": OWNER_HEX,
						"to_address": CONTRACT_HEX
					}
				}
			}]
		}
	})
}

fn trc20_tx(data: &str) -> serde_json::Value {
	json!({
		"txID": TX_HASH,
		"ret": [{ "contractRet": "SUCCESS" }],
		"raw_data": {
			"contract": [{
				"type": "TriggerSmartContract",
				"parameter": {
					"value": {
						"owner_address": OWNER_HEX,
						"contract_address": CONTRACT_HEX,
						"data": data
					}
				}
			}]
		}
	})
}

fn expect_node(
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
	// 32 TRX in sun
	expect_node(
		&mut mock,
		"wallet/gettransactionbyid",
		native_tx(json!([{ "contractRet": "SUCCESS" }]), 32_000_000),
	);

	let client = TronClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(TX_HASH).await.unwrap();

	assert_eq!(transfer.chain, ChainId::Tron);
	assert_eq!(transfer.kind, TransferKind::Native);
	assert_eq!(transfer.amount, "32");
	assert_eq!(transfer.to, CONTRACT_BASE58);
	assert!(transfer.from.starts_with('T'));
	assert_eq!(transfer.token_address, None);
	assert_eq!(transfer.status, TransferStatus::Confirmed);
}

#[tokio::test]
async fn test_trc20_transfer_is_decoded_with_queried_decimals() {
	let data = format!(
		"a9059cbb{}{}",
		"000000000000000000000000a614f803b6fd780986a42c78ec9c7f77e6ded13c",
		// 12_500_000 base units
		"0000000000000000000000000000000000000000000000000000000000bebc20"
	);

	let mut mock = MockTransport::new();
	expect_node(&mut mock, "wallet/gettransactionbyid", trc20_tx(&data));
	expect_node(
		&mut mock,
		"wallet/triggerconstantcontract",
		json!({
			"result": { "result": true },
			"constant_result": [
				"0000000000000000000000000000000000000000000000000000000000000006"
			]
		}),
	);

	let client = TronClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(TX_HASH).await.unwrap();

	assert_eq!(transfer.kind, TransferKind::Token);
	assert_eq!(transfer.amount, "12.5");
	assert_eq!(transfer.to, CONTRACT_BASE58);
	assert_eq!(transfer.token_address.as_deref(), Some(CONTRACT_BASE58));
	assert_eq!(transfer.status, TransferStatus::Confirmed);
}

#[tokio::test]
async fn test_decimals_query_failure_falls_back_to_6() {
	let data = format!(
		"a9059cbb{}{}",
		"000000000000000000000000a614f803b6fd780986a42c78ec9c7f77e6ded13c",
		"0000000000000000000000000000000000000000000000000000000000bebc20"
	);

	let mut mock = MockTransport::new();
	expect_node(&mut mock, "wallet/gettransactionbyid", trc20_tx(&data));
	// Node without the query endpoint answers with an empty object
	expect_node(&mut mock, "wallet/triggerconstantcontract", json!({}));

	let client = TronClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(TX_HASH).await.unwrap();
	assert_eq!(transfer.amount, "12.5");
}

#[tokio::test]
async fn test_other_selector_is_rejected() {
	// approve(address,uint256)
	let data = format!(
		"095ea7b3{}{}",
		"000000000000000000000000a614f803b6fd780986a42c78ec9c7f77e6ded13c",
		"0000000000000000000000000000000000000000000000000000000000bebc20"
	);

	let mut mock = MockTransport::new();
	expect_node(&mut mock, "wallet/gettransactionbyid", trc20_tx(&data));

	let client = TronClient::new_with_transport(mock);
	let error = client.fetch_transfer(TX_HASH).await.unwrap_err();
	assert!(matches!(error, AdapterError::UnsupportedTransactionType(_)));
}

#[tokio::test]
async fn test_other_contract_type_is_rejected() {
	let mut mock = MockTransport::new();
	expect_node(
		&mut mock,
		"wallet/gettransactionbyid",
		json!({
			"txID": TX_HASH,
			"ret": [{ "contractRet": "SUCCESS" }],
			"raw_data": {
				"contract": [{
					"type": "VoteWitnessContract",
					"parameter": { "value": {} }
				}]
			}
		}),
	);

	let client = TronClient::new_with_transport(mock);
	let error = client.fetch_transfer(TX_HASH).await.unwrap_err();
	assert!(matches!(error, AdapterError::UnsupportedTransactionType(_)));
}

#[tokio::test]
async fn test_unknown_hash_is_not_found() {
	let mut mock = MockTransport::new();
	expect_node(&mut mock, "wallet/gettransactionbyid", json!({}));

	let client = TronClient::new_with_transport(mock);
	let error = client.fetch_transfer(TX_HASH).await.unwrap_err();
	assert!(matches!(error, AdapterError::NotFound));
}

#[tokio::test]
async fn test_reverted_contract_reads_as_failed() {
	let mut mock = MockTransport::new();
	expect_node(
		&mut mock,
		"wallet/gettransactionbyid",
		native_tx(json!([{ "contractRet": "REVERT" }]), 1_000_000),
	);

	let client = TronClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(TX_HASH).await.unwrap();
	assert_eq!(transfer.status, TransferStatus::Failed);
}

#[tokio::test]
async fn test_missing_ret_reads_as_pending() {
	let mut mock = MockTransport::new();
	expect_node(
		&mut mock,
		"wallet/gettransactionbyid",
		native_tx(json!([]), 1_000_000),
	);

	let client = TronClient::new_with_transport(mock);
	let transfer = client.fetch_transfer(TX_HASH).await.unwrap();
	assert_eq!(transfer.status, TransferStatus::Pending);
}

#[tokio::test]
async fn test_get_transaction_visible_flag_is_false() {
	// Address conversion assumes hex-form responses, so the request must
	// pin visible=false
	let mut mock = MockTransport::new();
	mock.expect_send_raw_request()
		.withf(|method, params| {
			method == "wallet/gettransactionbyid"
				&& params
					.as_ref()
					.and_then(|p| p.get("visible"))
					.and_then(|v| v.as_bool())
					== Some(false)
		})
		.times(1)
		.return_once(|_, _| Ok(json!({})));

	let client = TronClient::new_with_transport(mock);
	let result = client.get_transaction(TX_HASH).await.unwrap();
	assert!(result.is_none());
}
