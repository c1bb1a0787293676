// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suggested-command checker.
//!
//! Runs a CLI with legacy-style invocations, pulls the command it suggests
//! instead out of its diagnostic output, runs that command and checks that it
//! prints the expected text.
//!
//! The loop lives in [`runner::Runner`] and talks to processes only through
//! [`executor::Executor`], so it can be driven without spawning anything.

pub mod cli;
pub mod config;
pub mod env;
pub mod executor;
pub mod fixture;
pub mod pattern;
pub mod report;
pub mod runner;
pub mod telemetry;

use anyhow::Context;

use crate::cli::Cli;
use crate::config::FixtureConfig;
use crate::executor::ShellExecutor;
use crate::report::{print_warning, Report};
use crate::runner::Runner;

/// Process exit codes
pub mod exit_codes {
    /// Every selected case passed
    pub const SUCCESS: i32 = 0;
    /// At least one case failed or was skipped
    pub const FAILED: i32 = 1;
    /// Fixtures or arguments could not be used
    pub const SETUP_ERROR: i32 = 2;
}

/// Load the fixture named on the command line, or the bundled one.
pub fn load_fixture(cli: &Cli) -> anyhow::Result<FixtureConfig> {
    match cli.fixtures {
        Some(ref path) => fixture::load(path)
            .with_context(|| format!("loading fixtures from {}", path.display())),
        None => fixture::bundled().context("parsing bundled fixtures"),
    }
}

/// Run the harness for parsed arguments and return the process exit code.
pub async fn run_cli(cli: Cli) -> anyhow::Result<i32> {
    let fixture = load_fixture(&cli)?;
    let binary = cli.resolve_binary(&fixture);
    let cases = fixture::compile_all(&fixture, &binary, cli.filter.as_deref())?;

    if cases.is_empty() && cli.filter.is_some() {
        print_warning("no test cases match the filter");
    }

    if cli.list {
        for case in &cases {
            println!(
                "{}\t{} {}",
                case.name,
                pattern::quote_program(&binary),
                case.command
            );
        }
        return Ok(exit_codes::SUCCESS);
    }

    let executor = ShellExecutor::new()
        .with_cwd(cli.cwd.clone())
        .with_timeout(cli.timeout());
    let runner = Runner::new(executor, binary).with_policy(cli.policy());

    let mut report = Report::stdout();
    let summary = runner
        .run(&cases, &mut report)
        .await
        .context("writing report")?;

    Ok(if summary.all_passed() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILED
    })
}
