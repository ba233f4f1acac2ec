//! Tests for defaults and for `resolve_token` / `api_base` resolution.

use rstest::rstest;

use crate::QuotawatchConfig;
use crate::error::GateError;
use crate::gate::GateInputs;

#[rstest]
fn unset_inputs_fall_back_to_defaults() {
    let config = QuotawatchConfig::default();

    assert_eq!(
        config.gate_inputs(),
        GateInputs {
            threshold: Some("10%"),
            action_to_take: "sweep",
            alarm: None,
            delay: None,
            resource: "core",
        }
    );
}

#[rstest]
fn blank_inputs_fall_back_to_defaults() {
    let config = QuotawatchConfig {
        threshold: Some(String::new()),
        action_to_take: Some("  ".to_owned()),
        resource: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(config.threshold(), "10%");
    assert_eq!(config.action_to_take(), "sweep");
    assert_eq!(config.resource(), "core");
}

#[rstest]
fn configured_inputs_are_passed_through() {
    let config = QuotawatchConfig {
        threshold: Some("90%".to_owned()),
        action_to_take: Some("sleep".to_owned()),
        alarm: Some(5.0),
        delay: Some(3.0),
        resource: Some("graphql".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.gate_inputs(),
        GateInputs {
            threshold: Some("90%"),
            action_to_take: "sleep",
            alarm: Some(5.0),
            delay: Some(3.0),
            resource: "graphql",
        }
    );
}

#[rstest]
fn resolve_token_returns_value_when_present() {
    let config = QuotawatchConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token().ok(), Some("my-token".to_owned()));
}

#[rstest]
fn resolve_token_falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = QuotawatchConfig {
        token: Some("   ".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.resolve_token().ok(), Some("legacy-token".to_owned()));
}

#[rstest]
fn resolve_token_returns_error_when_none() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = QuotawatchConfig::default();

    assert_eq!(config.resolve_token(), Err(GateError::MissingToken));
}

#[rstest]
fn api_base_defaults_to_github_com() {
    let _guard = env_lock::lock_env([("GITHUB_API_URL", None::<&str>)]);
    let config = QuotawatchConfig::default();

    let base = config.api_base().expect("default API base should parse");
    assert_eq!(base.as_str(), "https://api.github.com/");
}

#[rstest]
fn api_base_uses_runner_variable() {
    let _guard = env_lock::lock_env([("GITHUB_API_URL", Some("https://ghe.example.com/api/v3"))]);
    let config = QuotawatchConfig::default();

    let base = config.api_base().expect("runner API base should parse");
    assert_eq!(base.as_str(), "https://ghe.example.com/api/v3");
}

#[rstest]
fn configured_api_url_wins_over_runner_variable() {
    let _guard = env_lock::lock_env([("GITHUB_API_URL", Some("https://ghe.example.com/api/v3"))]);
    let config = QuotawatchConfig {
        api_url: Some("http://localhost:8080".to_owned()),
        ..Default::default()
    };

    let base = config.api_base().expect("configured API base should parse");
    assert_eq!(base.as_str(), "http://localhost:8080/");
}

#[rstest]
fn rejects_invalid_api_url() {
    let config = QuotawatchConfig {
        api_url: Some("not a url".to_owned()),
        ..Default::default()
    };

    let result = config.api_base();
    assert!(
        matches!(result, Err(GateError::InvalidUrl(_))),
        "expected InvalidUrl, got {result:?}"
    );
}
