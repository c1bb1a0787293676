// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{FixtureConfig, DEFAULT_BINARY};
use crate::env;
use crate::runner::FailurePolicy;

/// Replay legacy CLI invocations and check the commands suggested for them
#[derive(Parser, Clone, Debug)]
#[command(name = "suggest-check", version, about)]
pub struct Cli {
    /// Binary under test [default: fixture `binary`, then ./target/release/near]
    #[arg(long = "bin", value_name = "PATH", env = env::SUGGEST_CHECK_BIN)]
    pub binary: Option<String>,

    /// TOML or JSON fixture file (default: bundled account actions)
    #[arg(long, value_name = "PATH", env = env::SUGGEST_CHECK_FIXTURES)]
    pub fixtures: Option<PathBuf>,

    /// Only run cases whose name or command contains this text
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// Stop after the first failed case
    #[arg(long)]
    pub fail_fast: bool,

    /// Kill a command still running after this many seconds
    #[arg(long, value_name = "SECS", env = env::SUGGEST_CHECK_TIMEOUT_SECS)]
    pub timeout_secs: Option<u64>,

    /// Working directory for spawned commands
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// List the selected cases without running them
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Binary path: flag or env, then the fixture, then the default.
    pub fn resolve_binary(&self, fixture: &FixtureConfig) -> String {
        self.binary
            .clone()
            .or_else(|| fixture.binary.clone())
            .unwrap_or_else(|| DEFAULT_BINARY.to_string())
    }

    pub fn policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
