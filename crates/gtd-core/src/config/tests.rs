//! Tests for configuration loading, environment resolution, and validation

use super::*;
use crate::errors::GtdError;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const FULL_CONFIG: &str = r#"
board_name: Things To Do
list_names:
  incoming: Inbound
trello:
  api_key: key123
  api_secret: secret123
  oauth_token: token123
  oauth_token_secret: tokensecret123
"#;

fn clear_trello_env() {
    for var in [
        "TRELLO_API_KEY",
        "TRELLO_API_SECRET",
        "TRELLO_OAUTH_TOKEN",
        "TRELLO_OAUTH_TOKEN_SECRET",
    ] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn parses_documented_config_shape() {
    clear_trello_env();
    let config = ConfigLoader::from_str(FULL_CONFIG).unwrap();
    assert_eq!(config.board_name, "Things To Do");
    assert_eq!(config.list_names.incoming, "Inbound");
    assert_eq!(config.trello.api_key, "key123");
    assert_eq!(config.trello.oauth_token_secret, "tokensecret123");
}

#[test]
#[serial]
fn missing_board_name_is_a_config_error() {
    clear_trello_env();
    let yaml = r#"
list_names:
  incoming: Inbound
trello:
  api_key: key
  oauth_token: token
"#;
    let err = ConfigLoader::from_str(yaml).unwrap_err();
    assert!(matches!(err, GtdError::ConfigError(_)));
}

#[test]
#[serial]
fn malformed_yaml_is_a_config_error() {
    clear_trello_env();
    let err = ConfigLoader::from_str("board_name: [unclosed").unwrap_err();
    assert!(matches!(err, GtdError::ConfigError(_)));
}

#[test]
#[serial]
fn credentials_resolve_from_environment() {
    clear_trello_env();
    env::set_var("TRELLO_API_KEY", "env-key");
    env::set_var("TRELLO_OAUTH_TOKEN", "env-token");
    let yaml = r#"
board_name: Things To Do
list_names:
  incoming: Inbound
trello: {}
"#;
    let config = ConfigLoader::from_str(yaml).unwrap();
    clear_trello_env();
    assert_eq!(config.trello.api_key, "env-key");
    assert_eq!(config.trello.oauth_token, "env-token");
    assert_eq!(config.trello.api_secret, "");
}

#[test]
#[serial]
fn missing_credentials_fail_validation_by_name() {
    clear_trello_env();
    let yaml = r#"
board_name: Things To Do
list_names:
  incoming: Inbound
trello:
  oauth_token: token
"#;
    let err = ConfigLoader::from_str(yaml).unwrap_err();
    match err {
        GtdError::ConfigError(message) => assert!(message.contains("trello.api_key")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
#[serial]
fn empty_incoming_list_fails_validation() {
    clear_trello_env();
    let yaml = r#"
board_name: Things To Do
list_names:
  incoming: ""
trello:
  api_key: key
  oauth_token: token
"#;
    let err = ConfigLoader::from_str(yaml).unwrap_err();
    match err {
        GtdError::ConfigError(message) => assert!(message.contains("list_names.incoming")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn loads_from_file() {
    clear_trello_env();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FULL_CONFIG.as_bytes()).unwrap();
    let config = load_config(file.path()).await.unwrap();
    assert_eq!(config.board_name, "Things To Do");
}

#[tokio::test]
async fn missing_file_is_a_config_error() {
    let err = load_config("no-such-gtd.yaml").await.unwrap_err();
    match err {
        GtdError::ConfigError(message) => assert!(message.contains("no-such-gtd.yaml")),
        other => panic!("unexpected error: {:?}", other),
    }
}
