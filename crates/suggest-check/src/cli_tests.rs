// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;

fn fixture_with_binary(binary: Option<&str>) -> FixtureConfig {
    FixtureConfig {
        binary: binary.map(str::to_string),
        cases: Vec::new(),
    }
}

#[test]
fn test_parse_all_flags() {
    let cli = Cli::try_parse_from([
        "suggest-check",
        "--bin",
        "near",
        "--fixtures",
        "cases.toml",
        "--filter",
        "keys",
        "--fail-fast",
        "--timeout-secs",
        "30",
        "--cwd",
        "/tmp",
        "--list",
        "-v",
    ])
    .unwrap();

    assert_eq!(cli.binary.as_deref(), Some("near"));
    assert_eq!(cli.fixtures, Some(PathBuf::from("cases.toml")));
    assert_eq!(cli.filter.as_deref(), Some("keys"));
    assert_eq!(cli.policy(), FailurePolicy::FailFast);
    assert_eq!(cli.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(cli.cwd, Some(PathBuf::from("/tmp")));
    assert!(cli.list);
    assert_eq!(cli.log_level(), "debug");
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["suggest-check"]).unwrap();
    assert_eq!(cli.policy(), FailurePolicy::Continue);
    assert!(!cli.list);
    assert_eq!(cli.log_level(), "warn");
}

#[rstest]
#[case(Some("flag-bin"), Some("fixture-bin"), "flag-bin")]
#[case(None, Some("fixture-bin"), "fixture-bin")]
#[case(None, None, DEFAULT_BINARY)]
fn test_resolve_binary_precedence(
    #[case] flag: Option<&str>,
    #[case] fixture: Option<&str>,
    #[case] expected: &str,
) {
    let mut cli = Cli::try_parse_from(["suggest-check"]).unwrap();
    cli.binary = flag.map(str::to_string);
    assert_eq!(cli.resolve_binary(&fixture_with_binary(fixture)), expected);
}

#[test]
fn test_rejects_non_numeric_timeout() {
    assert!(Cli::try_parse_from(["suggest-check", "--timeout-secs", "soon"]).is_err());
}
