// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture loading and test case compilation.

use crate::config::{CaseSpec, FixtureConfig, OutputStream};
use crate::pattern::{build_suggestion_pattern, literal_pattern, PatternError};
use regex::Regex;
use std::path::Path;
use thiserror::Error;

/// Fixture shipped with the binary, used when no `--fixtures` file is given.
pub const BUNDLED_FIXTURE: &str = include_str!("../fixtures/account_actions.toml");

/// Errors that can occur when loading fixtures
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern in case '{case}': {source}")]
    Pattern {
        case: String,
        #[source]
        source: PatternError,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Read a fixture from a TOML or JSON file.
pub fn load(path: &Path) -> Result<FixtureConfig, FixtureError> {
    let content = std::fs::read_to_string(path)?;
    if path.extension().is_some_and(|e| e == "json") {
        Ok(serde_json::from_str(&content)?)
    } else {
        parse_toml(&content)
    }
}

pub fn parse_toml(content: &str) -> Result<FixtureConfig, FixtureError> {
    Ok(toml::from_str(content)?)
}

pub fn bundled() -> Result<FixtureConfig, FixtureError> {
    parse_toml(BUNDLED_FIXTURE)
}

/// A test case compiled for a specific binary path.
#[derive(Clone, Debug)]
pub struct TestCase {
    pub name: String,
    pub command: String,
    pub expected_output: String,
    pub stream: OutputStream,
    suggestion: Regex,
    expected: Regex,
}

impl TestCase {
    pub fn compile(spec: &CaseSpec, binary: &str) -> Result<Self, FixtureError> {
        let name = spec.name.clone().unwrap_or_else(|| spec.command.clone());

        if spec.command.trim().is_empty() {
            return Err(FixtureError::Validation(format!(
                "case '{}' has an empty command",
                name
            )));
        }
        if spec.expected_output.is_empty() {
            return Err(FixtureError::Validation(format!(
                "case '{}' has an empty expected_output",
                name
            )));
        }

        let suggestion = build_suggestion_pattern(binary, &spec.suggestion_pattern).map_err(
            |source| FixtureError::Pattern {
                case: name.clone(),
                source,
            },
        )?;
        let expected =
            literal_pattern(&spec.expected_output).map_err(|source| FixtureError::Pattern {
                case: name.clone(),
                source,
            })?;

        Ok(Self {
            name,
            command: spec.command.clone(),
            expected_output: spec.expected_output.clone(),
            stream: spec.stream,
            suggestion,
            expected,
        })
    }

    /// Pattern locating the suggested command in diagnostic text
    pub fn suggestion_pattern(&self) -> &Regex {
        &self.suggestion
    }

    /// Pattern locating the expected output in the final run
    pub fn expected_pattern(&self) -> &Regex {
        &self.expected
    }
}

/// Compile every case of a fixture, keeping fixture order.
///
/// With a `filter`, only cases whose name or command contains it are kept.
pub fn compile_all(
    config: &FixtureConfig,
    binary: &str,
    filter: Option<&str>,
) -> Result<Vec<TestCase>, FixtureError> {
    let mut cases = Vec::with_capacity(config.cases.len());
    for spec in &config.cases {
        let case = TestCase::compile(spec, binary)?;
        if let Some(filter) = filter {
            if !case.name.contains(filter) && !case.command.contains(filter) {
                continue;
            }
        }
        cases.push(case);
    }
    Ok(cases)
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
