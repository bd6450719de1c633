//! CLI integration tests.
//!
//! These tests verify the CLI argument parsing and configuration loading.

use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

use guess_number::cli::{parse_args_from, Args};
use guess_number::config::{Config, ConfigError};

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("guess-number")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(result.host.is_none());
    assert!(result.port.is_none());
    assert!(result.config.is_none());
    assert!(result.log_level.is_none());
    assert!(!result.help);
    assert!(!result.version);
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "-H",
        "0.0.0.0",
        "-p",
        "8080",
        "-l",
        "debug",
        "-c",
        "/etc/guess-number.json",
    ]))
    .unwrap();

    assert_eq!(result.host.unwrap().to_string(), "0.0.0.0");
    assert_eq!(result.port, Some(8080));
    assert_eq!(result.log_level, Some("debug".to_string()));
    assert_eq!(
        result.config.unwrap().to_str().unwrap(),
        "/etc/guess-number.json"
    );
}

#[test]
fn test_cli_invalid_port() {
    let result = parse_args_from(args(&["-p", "70000"]));
    assert!(result.is_err());
}

#[test]
fn test_cli_missing_value() {
    let result = parse_args_from(args(&["--port"]));
    assert!(result.is_err());
}

// ============================================================================
// Configuration Loading Tests
// ============================================================================

#[test]
fn test_config_from_json_file() {
    let json = r#"{
        "server": {
            "host": "192.168.1.100",
            "port": 9000,
            "graceful_shutdown": false
        },
        "logging": {
            "level": "debug"
        }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.server.host, "192.168.1.100");
    assert_eq!(config.server.port, 9000);
    assert!(!config.server.graceful_shutdown);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_priority_cli_over_file() {
    let json = r#"{
        "server": {
            "host": "10.0.0.1",
            "port": 5000
        }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let args = Args {
        port: Some(8080),
        config: Some(file.path().to_path_buf()),
        ..Args::default()
    };

    let mut config = Config::from_file(file.path()).unwrap();
    config.apply_args(&args);

    // CLI port wins, file host survives
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "10.0.0.1");
}

#[test]
fn test_config_load_missing_file() {
    let args = Args {
        config: Some("/nonexistent/guess-number.json".into()),
        ..Args::default()
    };

    let result = Config::load(&args);
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_config_to_server_config() {
    let json = r#"{ "server": { "host": "0.0.0.0", "port": 8081 } }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let server = Config::from_file(file.path())
        .unwrap()
        .to_server_config()
        .unwrap();

    assert_eq!(server.bind_address(), "0.0.0.0:8081");
    assert!(server.graceful_shutdown);
}
