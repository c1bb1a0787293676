// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture file types for TOML/JSON test case files.

use serde::{Deserialize, Serialize};

/// Binary under test when neither the command line, the environment nor the
/// fixture names one.
pub const DEFAULT_BINARY: &str = "./target/release/near";

/// Top-level fixture file
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Path of the binary under test, overridden by `--bin`
    #[serde(default)]
    pub binary: Option<String>,

    /// Ordered list of test cases
    #[serde(default)]
    pub cases: Vec<CaseSpec>,
}

/// A single test case as written in a fixture file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    /// Display name (default: the command)
    #[serde(default)]
    pub name: Option<String>,

    /// Arguments passed to the binary on the first run
    pub command: String,

    /// Regex for the suggested command, without the binary path prefix
    pub suggestion_pattern: String,

    /// Text the suggested command must print
    pub expected_output: String,

    /// Which stream of the suggested run is compared
    #[serde(default)]
    pub stream: OutputStream,
}

impl CaseSpec {
    pub fn new(
        command: impl Into<String>,
        suggestion_pattern: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            command: command.into(),
            suggestion_pattern: suggestion_pattern.into(),
            expected_output: expected_output.into(),
            stream: OutputStream::default(),
        }
    }
}

/// Output stream selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStream {
    #[default]
    Stderr,
    Stdout,
    /// stdout followed by stderr
    Both,
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
