//! Integration tests for chain and node listings

use crate::integration::{context, document, resource, run, MockHttpClient};
use serde_json::json;

#[tokio::test]
async fn test_chain_list_requests_first_page() {
    let client = MockHttpClient::new();
    client.respond(
        200,
        document(json!([resource(
            "evm_chain",
            "1",
            json!({ "enabled": true, "config": "ChainID = '1'" })
        )])),
    );

    let (result, out) = run(&context(&client), &["chains", "list", "evm"]).await;
    result.unwrap();

    assert_eq!(client.requests()[0].path, "/v2/chains/evm?page=1&size=25");
    assert!(out.contains("ID:      1\n"));
    assert!(out.contains("Enabled: true\n"));
    assert!(out.contains("Config:  ChainID = '1'\n"));
}

#[tokio::test]
async fn test_chain_list_honours_page_flag() {
    let client = MockHttpClient::new();
    client.respond(200, document(json!([])));

    let (result, _) = run(
        &context(&client),
        &["chains", "list", "cosmos", "--page", "3"],
    )
    .await;
    result.unwrap();
    assert_eq!(client.requests()[0].path, "/v2/chains/cosmos?page=3&size=25");
}

#[tokio::test]
async fn test_node_list_keeps_server_order() {
    let client = MockHttpClient::new();
    let node = |name: &str| {
        resource(
            "solana_node",
            name,
            json!({ "name": name, "chainID": "mainnet", "state": "Alive", "config": "" }),
        )
    };
    client.respond(
        200,
        document(json!([node("Test node 2"), node("Test node 1")])),
    );

    let (result, out) = run(&context(&client), &["nodes", "list", "solana"]).await;
    result.unwrap();

    assert_eq!(client.requests()[0].path, "/v2/nodes/solana?page=1&size=25");
    let second = out.find("Name:     Test node 2").unwrap();
    let first = out.find("Name:     Test node 1").unwrap();
    assert!(second < first);
    assert!(out.contains("Chain ID: mainnet"));
}

#[tokio::test]
async fn test_node_list_json_is_flat_objects() {
    let client = MockHttpClient::new();
    client.respond(
        200,
        document(json!([resource(
            "evm_node",
            "primary",
            json!({ "name": "primary", "chainID": "1", "state": "Alive", "config": "" })
        )])),
    );

    let (result, out) = run(&context(&client), &["nodes", "list", "evm", "--json"]).await;
    result.unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["id"], "primary");
    assert_eq!(value[0]["chainID"], "1");
}
