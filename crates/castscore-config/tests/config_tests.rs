// SPDX-FileCopyrightText: 2026 Castscore Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the castscore configuration system.

use castscore_config::diagnostic::ConfigError;
use castscore_config::model::{CastscoreConfig, DEFAULT_HUB_URL, DEFAULT_PAGE_SIZE};
use castscore_config::{load_and_validate_str, load_config_from_str};

#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[server]
host = "0.0.0.0"
port = 8080
client_max_age_secs = 30

[hub]
base_url = "http://localhost:2281"
page_size = 50
timeout_secs = 4

[log]
level = "debug"

[metrics]
enabled = false
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.client_max_age_secs, 30);
    assert_eq!(config.hub.base_url, "http://localhost:2281");
    assert_eq!(config.hub.page_size, 50);
    assert_eq!(config.hub.timeout_secs, 4);
    assert_eq!(config.log.level, "debug");
    assert!(!config.metrics.enabled);
}

#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").expect("empty config is valid");
    assert_eq!(config, CastscoreConfig::default());
    assert_eq!(config.hub.base_url, DEFAULT_HUB_URL);
    assert_eq!(config.hub.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(config.server.client_max_age_secs, 60);
    assert!(config.metrics.enabled);
}

#[test]
fn unknown_field_in_hub_produces_suggestion() {
    let toml = r#"
[hub]
page_sise = 10
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    let unknown = errors
        .iter()
        .find_map(|e| match e {
            ConfigError::UnknownKey {
                key, suggestion, ..
            } => Some((key.clone(), suggestion.clone())),
            _ => None,
        })
        .expect("should produce UnknownKey");
    assert_eq!(unknown.0, "page_sise");
    assert_eq!(unknown.1.as_deref(), Some("page_size"));
}

#[test]
fn unknown_section_is_rejected() {
    let toml = r#"
[cache]
ttl = 10
"#;
    assert!(load_config_from_str(toml).is_err());
}

#[test]
fn wrong_type_produces_invalid_type() {
    let toml = r#"
[server]
port = "eighty"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject wrong type");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))));
}

#[test]
fn semantic_errors_surface_through_load_and_validate() {
    let toml = r#"
[hub]
page_size = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("page_size 0 is invalid");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("page_size"))));
}
