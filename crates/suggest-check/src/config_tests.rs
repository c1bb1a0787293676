// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_parse_minimal_case() {
    let config: FixtureConfig = toml::from_str(
        r#"
        [[cases]]
        command = "state bob.testnet"
        suggestion_pattern = "account view-account-summary .*"
        expected_output = "Native account balance"
        "#,
    )
    .unwrap();

    assert!(config.binary.is_none());
    assert_eq!(config.cases.len(), 1);
    let case = &config.cases[0];
    assert_eq!(case.command, "state bob.testnet");
    assert!(case.name.is_none());
    assert_eq!(case.stream, OutputStream::Stderr);
}

#[test]
fn test_parse_binary_and_stream() {
    let config: FixtureConfig = toml::from_str(
        r#"
        binary = "near"

        [[cases]]
        name = "keys"
        command = "keys bob.testnet"
        suggestion_pattern = "account list-keys .*"
        expected_output = "full access"
        stream = "both"
        "#,
    )
    .unwrap();

    assert_eq!(config.binary.as_deref(), Some("near"));
    assert_eq!(config.cases[0].name.as_deref(), Some("keys"));
    assert_eq!(config.cases[0].stream, OutputStream::Both);
}

#[test]
fn test_unknown_field_rejected() {
    let result: Result<FixtureConfig, _> = toml::from_str(
        r#"
        [[cases]]
        command = "keys bob.testnet"
        suggestion_pattern = "x"
        expected_output = "y"
        expectedResult = "z"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_missing_expected_output_rejected() {
    let result: Result<FixtureConfig, _> = toml::from_str(
        r#"
        [[cases]]
        command = "keys bob.testnet"
        suggestion_pattern = "x"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_empty_fixture_has_no_cases() {
    let config: FixtureConfig = toml::from_str("").unwrap();
    assert!(config.cases.is_empty());
}

#[test]
fn test_parse_json_fixture() {
    let config: FixtureConfig = serde_json::from_str(
        r#"{"cases": [{"command": "a", "suggestion_pattern": "b", "expected_output": "c", "stream": "stdout"}]}"#,
    )
    .unwrap();
    assert_eq!(config.cases[0].stream, OutputStream::Stdout);
}
