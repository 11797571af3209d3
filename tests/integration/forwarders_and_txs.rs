//! Integration tests for forwarder, transaction, transfer and attempt commands

use crate::integration::{context, document, resource, run, MockHttpClient};
use nodectl::client::Method;
use serde_json::{json, Value};

fn forwarder(id: &str, address: &str) -> Value {
    resource(
        "evm_forwarder",
        id,
        json!({
            "address": address,
            "evmChainId": "5",
            "createdAt": "2024-01-02T03:04:05Z",
            "updatedAt": "2024-01-02T03:04:05Z"
        }),
    )
}

fn evm_tx(hash: &str, state: &str) -> Value {
    resource(
        "evm_transactions",
        hash,
        json!({
            "state": state,
            "hash": hash,
            "nonce": "4",
            "from": "0xaaa",
            "to": "0xbbb",
            "value": "0.010000000000000000",
            "sentAt": "112",
            "evmChainID": "5"
        }),
    )
}

#[tokio::test]
async fn test_forwarder_list_pages_and_aligns_fields() {
    let client = MockHttpClient::new();
    client.respond(200, document(json!([forwarder("1", "0xf0f0")])));

    let (result, out) = run(&context(&client), &["forwarders", "list", "--page", "2"]).await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/v2/nodes/evm/forwarders?page=2&size=25");
    assert!(out.contains("ID:         1\n"));
    assert!(out.contains("Address:    0xf0f0\n"));
    assert!(out.contains("Chain ID:   5\n"));
    assert!(out.contains("Created At: 2024-01-02T03:04:05Z\n"));
}

#[tokio::test]
async fn test_forwarder_track_posts_chain_and_address() {
    let client = MockHttpClient::new();
    client.respond(201, document(forwarder("7", "0xf0f0")));

    let (result, out) = run(
        &context(&client),
        &["forwarders", "track", "0xf0f0", "--evm-chain-id", "5"],
    )
    .await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/v2/nodes/evm/forwarders");
    assert_eq!(
        request.body,
        Some(json!({ "evmChainId": "5", "address": "0xf0f0" }))
    );
    assert!(out.starts_with("Forwarder created\n"));
    assert!(out.contains("ID:         7\n"));
}

#[tokio::test]
async fn test_forwarder_delete_with_yes() {
    let client = MockHttpClient::new();
    client.respond_raw(204, "");

    let (result, out) = run(&context(&client), &["forwarders", "delete", "7", "--yes"]).await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/v2/nodes/evm/forwarders/7");
    assert_eq!(out, "Deleted forwarder 7\n");
}

#[tokio::test]
async fn test_evm_tx_list_and_show() {
    let client = MockHttpClient::new();
    client
        .respond(200, document(json!([evm_tx("0x5f3", "confirmed")])))
        .respond(200, document(evm_tx("0x5f3", "confirmed")));

    let ctx = context(&client);
    let (result, listed) = run(&ctx, &["txs", "evm", "list"]).await;
    result.unwrap();
    let (result, shown) = run(&ctx, &["txs", "evm", "show", "0x5f3"]).await;
    result.unwrap();

    let requests = client.requests();
    assert_eq!(requests[0].path, "/v2/transactions/evm?page=1&size=25");
    assert_eq!(requests[1].path, "/v2/transactions/evm/0x5f3");
    for out in [&listed, &shown] {
        assert!(out.contains("Hash"));
        assert!(out.contains("0x5f3"));
        assert!(out.contains("confirmed"));
    }
}

#[tokio::test]
async fn test_evm_send_posts_transfer_request() {
    let client = MockHttpClient::new();
    client.respond(200, document(evm_tx("0xabc", "unstarted")));

    let (result, out) = run(
        &context(&client),
        &[
            "txs",
            "evm",
            "create",
            "0.01",
            "0xaaa",
            "0xbbb",
            "--evm-chain-id",
            "5",
            "--force",
        ],
    )
    .await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/v2/transfers/evm");
    assert_eq!(
        request.body,
        Some(json!({
            "address": "0xbbb",
            "from": "0xaaa",
            "amount": "0.01",
            "evmChainID": "5",
            "allowHigherAmounts": true
        }))
    );
    assert!(out.contains("unstarted"));
}

#[tokio::test]
async fn test_evm_send_without_chain_sends_null_chain_id() {
    let client = MockHttpClient::new();
    client.respond(200, document(evm_tx("0xabc", "unstarted")));

    let (result, _) = run(
        &context(&client),
        &["txs", "evm", "create", "1", "0xaaa", "0xbbb"],
    )
    .await;
    result.unwrap();

    let body = client.requests()[0].body.clone().unwrap();
    assert_eq!(body["evmChainID"], Value::Null);
    assert_eq!(body["allowHigherAmounts"], false);
}

#[tokio::test]
async fn test_solana_transfer_uses_solana_chain_field() {
    let client = MockHttpClient::new();
    client.respond(
        200,
        document(resource(
            "solana_messages",
            "sig1",
            json!({ "chainID": "devnet", "from": "SoLfrom", "to": "SoLto", "amount": "12" }),
        )),
    );

    let (result, out) = run(
        &context(&client),
        &[
            "txs", "solana", "create", "12", "SoLfrom", "SoLto", "--chain-id", "devnet",
        ],
    )
    .await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.path, "/v2/transfers/solana");
    assert_eq!(
        request.body,
        Some(json!({
            "from": "SoLfrom",
            "to": "SoLto",
            "amount": "12",
            "allowHigherAmounts": false,
            "solanaChainID": "devnet"
        }))
    );
    assert!(out.contains("Chain ID:   devnet\n"));
    assert!(out.contains("From:       SoLfrom\n"));
    assert!(out.contains("Amount:     12\n"));
}

#[tokio::test]
async fn test_cosmos_transfer_uses_cosmos_chain_field() {
    let client = MockHttpClient::new();
    client.respond(
        200,
        document(resource(
            "cosmos_messages",
            "msg1",
            json!({ "chainID": "Chainlink-99", "from": "wasm1a", "to": "wasm1b", "amount": "3" }),
        )),
    );

    let (result, _) = run(
        &context(&client),
        &[
            "txs",
            "cosmos",
            "create",
            "3",
            "wasm1a",
            "wasm1b",
            "--chain-id",
            "Chainlink-99",
            "--force",
        ],
    )
    .await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.path, "/v2/transfers/cosmos");
    let body = request.body.clone().unwrap();
    assert_eq!(body["cosmosChainID"], "Chainlink-99");
    assert_eq!(body["allowHigherAmounts"], true);
    assert!(body.get("solanaChainID").is_none());
}

#[tokio::test]
async fn test_attempts_list_as_json() {
    let client = MockHttpClient::new();
    client.respond(200, document(json!([evm_tx("0x5f3", "broadcast")])));

    let (result, out) = run(&context(&client), &["attempts", "list", "--json"]).await;
    result.unwrap();

    assert_eq!(client.requests()[0].path, "/v2/tx_attempts/evm?page=1&size=25");
    let value: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["hash"], "0x5f3");
    assert_eq!(value[0]["state"], "broadcast");
}
