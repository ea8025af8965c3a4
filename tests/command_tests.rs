mod common;

use block_tx_finder::commands::{execute_search, resolve_config, validate_args, SearchArgs};
use block_tx_finder::output::read_report;
use block_tx_finder::search::Status;
use common::{start_mock_node, ADDRESS, BLOCK_0XCED189};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn valid_args() -> SearchArgs {
    SearchArgs {
        rpc_url: Some("http://localhost:8545".to_string()),
        block_number: "0xced189".to_string(),
        address: ADDRESS.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_validate_args_valid() {
    assert!(validate_args(&valid_args()).is_ok());
}

#[test]
fn test_validate_args_empty_block_number() {
    let args = SearchArgs {
        block_number: String::new(),
        ..valid_args()
    };

    let err = validate_args(&args).unwrap_err();
    assert_eq!(
        err.to_string(),
        "BlockNumber/Address input fields must have a value"
    );
}

#[test]
fn test_validate_args_empty_address() {
    let args = SearchArgs {
        address: String::new(),
        ..valid_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_invalid_rpc_scheme() {
    let args = SearchArgs {
        rpc_url: Some("ftp://localhost:8545".to_string()),
        ..valid_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_empty_rpc_is_unset() {
    let args = SearchArgs {
        rpc_url: Some(String::new()),
        ..valid_args()
    };

    assert!(validate_args(&args).is_ok());
    assert!(resolve_config(&args).unwrap().ethereum_server.is_none());
}

#[test]
fn test_validate_args_without_rpc_is_ok() {
    let args = SearchArgs {
        rpc_url: None,
        ..valid_args()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_zero_timeout() {
    let args = SearchArgs {
        timeout: Some(Duration::ZERO),
        ..valid_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_resolve_config_cli_overrides_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ethereum_server = \"http://from-file:8545\"").unwrap();
    writeln!(file, "request_timeout_secs = 7").unwrap();

    let from_file = resolve_config(&SearchArgs {
        rpc_url: None,
        config_path: Some(file.path().to_path_buf()),
        ..valid_args()
    })
    .unwrap();
    assert_eq!(
        from_file.ethereum_server.as_deref(),
        Some("http://from-file:8545")
    );
    assert_eq!(from_file.request_timeout, Duration::from_secs(7));

    let overridden = resolve_config(&SearchArgs {
        config_path: Some(file.path().to_path_buf()),
        timeout: Some(Duration::from_secs(2)),
        ..valid_args()
    })
    .unwrap();
    assert_eq!(
        overridden.ethereum_server.as_deref(),
        Some("http://localhost:8545")
    );
    assert_eq!(overridden.request_timeout, Duration::from_secs(2));
}

#[test]
fn test_resolve_config_missing_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = SearchArgs {
        config_path: Some(temp_dir.path().join("absent.toml")),
        ..valid_args()
    };

    assert!(resolve_config(&args).is_err());
}

#[tokio::test]
async fn test_execute_search_writes_report() {
    let url = start_mock_node(200, BLOCK_0XCED189.to_string(), Duration::ZERO).await;
    let temp_dir = tempfile::tempdir().unwrap();
    let report_path = temp_dir.path().join("nested/report.json");

    let args = SearchArgs {
        rpc_url: Some(url),
        output_json: Some(report_path.clone()),
        ..valid_args()
    };

    let result = execute_search(args).await.unwrap();
    assert_eq!(result.status(), Status::Success);

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.block_number, "0xced189");
    assert_eq!(report.address, ADDRESS);
    assert_eq!(report.result, result);
}

#[tokio::test]
async fn test_execute_search_without_endpoint_fails_softly() {
    let args = SearchArgs {
        rpc_url: None,
        ..valid_args()
    };

    let result = execute_search(args).await.unwrap();

    let error = result.error().unwrap();
    assert_eq!(error.description, "Internal Error");
    assert_eq!(error.message, "RPC endpoint is not configured");
}
