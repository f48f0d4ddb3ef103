// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for CLI commands against a mock Etherscan server

use std::io::Write as _;

use clap::Parser;
use etherscan::ChainId;
use etherscan_cli::{cli::Cli, execute, settings::Settings};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const API_PATH: &str = "/v2/api";
const TEST_API_KEY: &str = "cli-test-key";

fn settings_for(server: &MockServer) -> Settings {
    Settings {
        api_key: Some(TEST_API_KEY.to_string()),
        default_chain: ChainId::ETHEREUM_MAINNET,
        endpoints_config: None,
        base_url: format!("{}{API_PATH}", server.uri()),
        timeout_seconds: Some(5),
    }
}

fn command(args: &[&str]) -> etherscan_cli::cli::Command {
    Cli::try_parse_from(std::iter::once("etherscan").chain(args.iter().copied()))
        .unwrap()
        .command
}

#[tokio::test]
async fn call_prints_the_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("module", "gastracker"))
        .and(query_param("action", "gasoracle"))
        .and(query_param("chainid", "10"))
        .and(query_param("apikey", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "message": "OK",
            "result": {"SafeGasPrice": "20"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = execute(
        command(&["call", "get_gas_oracle", "--chain", "optimism"]),
        &settings_for(&mock_server),
    )
    .await
    .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["result"]["SafeGasPrice"], "20");
}

#[tokio::test]
async fn result_flag_unwraps_the_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "txlist"))
        .and(query_param("sort", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "message": "OK",
            "result": [{"hash": "0x01"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let output = execute(
        command(&[
            "call",
            "get_normal_txs_by_address",
            "0xde0B295669a9FD93d5F28D9Ec85E40f4cb697BAe",
            "0",
            "99999999",
            "sort=desc",
            "--result",
        ]),
        &settings_for(&mock_server),
    )
    .await
    .unwrap();

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value, json!([{"hash": "0x01"}]));
}

#[tokio::test]
async fn result_flag_surfaces_upstream_errors() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Invalid API Key"
        })))
        .mount(&mock_server)
        .await;

    let error = execute(
        command(&["call", "get_eth_last_price", "--result"]),
        &settings_for(&mock_server),
    )
    .await
    .unwrap_err();
    assert!(error.to_string().contains("Invalid API Key"));
}

#[tokio::test]
async fn dry_run_sends_nothing_and_redacts_the_key() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let output = execute(
        command(&["call", "get_eth_last_price", "--dry-run"]),
        &settings_for(&mock_server),
    )
    .await
    .unwrap();

    assert!(output.ends_with("module=stats&action=ethprice&chainid=1&apikey=<redacted>"));
    assert!(!output.contains(TEST_API_KEY));
}

#[tokio::test]
async fn endpoints_file_limits_callable_endpoints() {
    let mock_server = MockServer::start().await;
    let mut endpoints = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    endpoints
        .write_all(br#"{"get_gas_oracle": {"module": "gastracker"}}"#)
        .unwrap();

    let settings = Settings {
        endpoints_config: Some(endpoints.path().to_path_buf()),
        ..settings_for(&mock_server)
    };

    let listing = execute(command(&["endpoints"]), &settings).await.unwrap();
    assert!(listing.starts_with("get_gas_oracle"));
    assert_eq!(listing.lines().count(), 1);

    let error = execute(command(&["call", "get_eth_last_price"]), &settings)
        .await
        .unwrap_err();
    assert!(error.to_string().contains("get_eth_last_price"));
}

#[tokio::test]
async fn call_without_a_key_fails_before_sending() {
    let mock_server = MockServer::start().await;
    let settings = Settings {
        api_key: None,
        ..settings_for(&mock_server)
    };

    assert!(
        execute(command(&["call", "get_gas_oracle"]), &settings)
            .await
            .is_err()
    );
    assert!(execute(command(&["chains"]), &settings).await.is_ok());
}

#[tokio::test]
async fn proxy_quantities_pass_through_in_hex() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("action", "eth_estimateGas"))
        .and(query_param("value", "0xff22"))
        .and(query_param("gasPrice", "0x51da038cc"))
        .and(query_param("gas", "0x5f5e0ff"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x5208"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = settings_for(&mock_server);

    let url = execute(
        command(&[
            "call",
            "get_proxy_transaction_by_block_number_and_index",
            "tag=0x10d4f",
            "index=0x0",
            "--dry-run",
        ]),
        &settings,
    )
    .await
    .unwrap();
    assert!(url.contains("&tag=0x10d4f&index=0x0&chainid=1"));

    let output = execute(
        command(&[
            "call",
            "get_proxy_est_gas",
            "0xf0160428a8552ac9bb7e050d90eeade4ddd52843",
            "0xff22",
            "0x51da038cc",
            "0x5f5e0ff",
            "--result",
        ]),
        &settings,
    )
    .await
    .unwrap();
    assert_eq!(output, "\"0x5208\"");
}
