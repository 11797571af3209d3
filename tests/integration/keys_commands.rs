//! Integration tests for key commands

use crate::integration::{context, document, resource, run, MockHttpClient};
use nodectl::client::Method;
use serde_json::{json, Value};
use tempfile::TempDir;

fn vrf_key() -> Value {
    resource(
        "encryptedVRFKeys",
        "0x02c8",
        json!({
            "compressed": "0x02c8",
            "uncompressed": "0x04c8e1",
            "hash": "0x9f"
        }),
    )
}

fn eth_key(address: &str) -> Value {
    resource(
        "eTHKeys",
        address,
        json!({
            "address": address,
            "evmChainID": "5",
            "nextNonce": 3,
            "ethBalance": "1.5",
            "linkBalance": "20",
            "disabled": false,
            "createdAt": "2024-01-02T03:04:05Z",
            "updatedAt": "2024-01-02T03:04:05Z"
        }),
    )
}

fn csa_key(id: &str) -> Value {
    resource("csaKeys", id, json!({ "publicKey": id, "version": 1 }))
}

#[tokio::test]
async fn test_vrf_list_renders_aligned_card() {
    let client = MockHttpClient::new();
    client.respond(200, document(json!([vrf_key()])));

    let (result, out) = run(&context(&client), &["keys", "list", "vrf"]).await;
    result.unwrap();

    let divider = "-".repeat(22);
    let expected = format!(
        "🔑 VRF Keys\n{d}\nCompressed:   0x02c8\nUncompressed: 0x04c8e1\nHash:         0x9f\n{d}\n",
        d = divider
    );
    assert_eq!(out, expected);

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].path, "/v2/keys/vrf");
}

#[tokio::test]
async fn test_created_key_renders_like_a_one_element_list() {
    let client = MockHttpClient::new();
    client.respond(200, document(json!([vrf_key()])));
    client.respond(200, document(vrf_key()));
    let ctx = context(&client);

    let (listed, list_out) = run(&ctx, &["keys", "list", "vrf"]).await;
    let (created, create_out) = run(&ctx, &["keys", "create", "vrf"]).await;
    listed.unwrap();
    created.unwrap();

    assert_eq!(create_out, format!("🔑 Created VRF key\n{}", list_out));
    assert_eq!(client.requests()[1].method, Method::Post);
    assert_eq!(client.requests()[1].body, None);
}

#[tokio::test]
async fn test_eth_create_passes_chain_id() {
    let client = MockHttpClient::new();
    client.respond(201, document(eth_key("0xabc")));

    let (result, out) = run(
        &context(&client),
        &["keys", "create", "eth", "--evm-chain-id", "5"],
    )
    .await;
    result.unwrap();

    assert_eq!(client.requests()[0].path, "/v2/keys/eth?evmChainID=5");
    assert!(out.starts_with("🔑 Created ETH key\n🔑 ETH Keys\n"));
    assert!(out.contains("Address:           0xabc"));
    assert!(out.contains("Created:           2024-01-02T03:04:05Z"));
    assert!(out.contains("Max Gas Price Wei: \n"));
}

#[tokio::test]
async fn test_eth_delete_with_yes_skips_prompt() {
    let client = MockHttpClient::new();
    client.respond(200, document(eth_key("0xabc")));

    let (result, out) = run(
        &context(&client),
        &["keys", "delete", "eth", "0xabc", "--yes"],
    )
    .await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/v2/keys/eth/0xabc");
    assert!(out.starts_with("🔑 Deleted ETH key\n"));
}

#[tokio::test]
async fn test_json_output_is_array_for_list_and_object_for_create() {
    let client = MockHttpClient::new();
    client.respond(200, document(json!([csa_key("csa_1"), csa_key("csa_2")])));
    client.respond(200, document(csa_key("csa_3")));
    let ctx = context(&client);

    let (_, listed) = run(&ctx, &["keys", "list", "csa", "--json"]).await;
    let (_, created) = run(&ctx, &["keys", "create", "csa", "--json"]).await;

    let listed: Value = serde_json::from_str(&listed).unwrap();
    let created: Value = serde_json::from_str(&created).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[1]["publicKey"], "csa_2");
    assert_eq!(created["id"], "csa_3");
    assert!(!created.to_string().contains("Created CSA key"));
}

#[tokio::test]
async fn test_empty_key_list_renders_framing_only() {
    let client = MockHttpClient::new();
    client.respond(200, document(json!([])));

    let (result, out) = run(&context(&client), &["keys", "list", "p2p"]).await;
    result.unwrap();
    assert_eq!(out, format!("🔑 P2P Keys\n{}\n", "-".repeat(11)));
}

const KEY_JSON: &str = r#"{"address":"69ca211a68100e18b40683e96b55cd217ac95006","crypto":{"cipher":"aes-128-ctr"},"version":3}"#;

#[tokio::test]
async fn test_eth_import_posts_key_json_with_encoded_password() {
    let dir = TempDir::new().unwrap();
    let key_file = dir.path().join("testkey.json");
    let password_file = dir.path().join("password.txt");
    std::fs::write(&key_file, KEY_JSON).unwrap();
    std::fs::write(&password_file, "p@ss word\n").unwrap();
    let client = MockHttpClient::new();
    client.respond(200, document(eth_key("0x69Ca211a68100E18B40683E96b55cD217AC95006")));

    let (result, out) = run(
        &context(&client),
        &[
            "keys",
            "import",
            "eth",
            key_file.to_str().unwrap(),
            "--old-password-file",
            password_file.to_str().unwrap(),
            "--evm-chain-id",
            "5",
        ],
    )
    .await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.path,
        "/v2/keys/eth/import?oldpassword=p%40ss+word&evmChainID=5"
    );
    assert_eq!(request.body, Some(serde_json::from_str(KEY_JSON).unwrap()));
    assert!(out.starts_with("🔑 Imported ETH key\n🔑 ETH Keys\n"));
    assert!(out.contains("0x69Ca211a68100E18B40683E96b55cD217AC95006"));
}

#[tokio::test]
async fn test_import_rejects_key_file_that_is_not_json() {
    let dir = TempDir::new().unwrap();
    let key_file = dir.path().join("key.json");
    let password_file = dir.path().join("password.txt");
    std::fs::write(&key_file, "not json").unwrap();
    std::fs::write(&password_file, "secret\n").unwrap();
    let client = MockHttpClient::new();

    let (result, _) = run(
        &context(&client),
        &[
            "keys",
            "import",
            "ocr",
            key_file.to_str().unwrap(),
            "--old-password-file",
            password_file.to_str().unwrap(),
        ],
    )
    .await;
    assert!(matches!(
        result,
        Err(nodectl::error::ApiError::InvalidArgument(_))
    ));
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_p2p_export_writes_owner_only_key_file() {
    let dir = TempDir::new().unwrap();
    let password_file = dir.path().join("password.txt");
    let output = dir.path().join("p2p_key.json");
    std::fs::write(&password_file, "new-secret\n").unwrap();
    let client = MockHttpClient::new();
    client.respond_raw(200, KEY_JSON);

    let (result, out) = run(
        &context(&client),
        &[
            "keys",
            "export",
            "p2p",
            "p2p_12D3KooW",
            "--new-password-file",
            password_file.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
    )
    .await;
    result.unwrap();

    let request = &client.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.path,
        "/v2/keys/p2p/export/p2p_12D3KooW?newpassword=new-secret"
    );
    assert_eq!(std::fs::read_to_string(&output).unwrap(), KEY_JSON);
    assert_eq!(
        out,
        format!("🔑 Exported P2P key p2p_12D3KooW to {}\n", output.display())
    );
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&output).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[tokio::test]
async fn test_failed_export_writes_no_file() {
    let dir = TempDir::new().unwrap();
    let password_file = dir.path().join("password.txt");
    let output = dir.path().join("ocr_key.json");
    std::fs::write(&password_file, "new-secret\n").unwrap();
    let client = MockHttpClient::new();
    client.respond(404, json!({ "errors": [{ "detail": "key not found" }] }));

    let (result, _) = run(
        &context(&client),
        &[
            "keys",
            "export",
            "ocr",
            "missing",
            "--new-password-file",
            password_file.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
    )
    .await;
    assert!(matches!(
        result,
        Err(nodectl::error::ApiError::Status { status: 404, .. })
    ));
    assert!(!output.exists());
}
