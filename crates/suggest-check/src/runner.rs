// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential test loop.
//!
//! Each case moves through the stages
//! `Start -> RanOriginal -> ExtractedSuggestion -> RanSuggestion -> Compared`
//! and ends with exactly one verdict. Cases never share state and a failing
//! case does not stop the run unless [`FailurePolicy::FailFast`] is set.

use crate::executor::{ExecError, Executor};
use crate::fixture::TestCase;
use crate::pattern::{extract, quote_program, shell_invocation};
use crate::report::Report;
use std::fmt;
use std::io::{self, Write};

/// What to do after a case fails
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Run every case regardless of earlier failures
    #[default]
    Continue,
    /// Stop after the first failed case
    FailFast,
}

/// Progress of a single case
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Start,
    RanOriginal,
    ExtractedSuggestion,
    RanSuggestion,
    Compared,
}

/// Why a case failed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailReason {
    /// The original command produced no output to inspect
    OriginalNotRun(ExecError),
    /// The suggestion pattern did not match the diagnostic text
    NoSuggestion,
    /// The suggested command produced no output to inspect
    SuggestionNotRun(ExecError),
    /// The suggested command ran but did not print the expected output
    Mismatch,
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailReason::OriginalNotRun(e) => write!(f, "original command failed to run: {}", e),
            FailReason::NoSuggestion => write!(f, "no suggested command found"),
            FailReason::SuggestionNotRun(e) => {
                write!(f, "suggested command failed to run: {}", e)
            }
            FailReason::Mismatch => write!(f, "expected output not found"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(FailReason),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Outcome of one case
#[derive(Clone, Debug)]
pub struct CaseReport {
    pub name: String,
    /// Full command line of the first run
    pub command: String,
    pub suggestion: Option<String>,
    /// Expected output as found in the final run
    pub result: Option<String>,
    pub last_stage: Stage,
    pub verdict: Verdict,
}

/// Outcome of a whole run
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<CaseReport>,
    /// Cases not run because of [`FailurePolicy::FailFast`]
    pub skipped: usize,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.verdict.is_pass()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0 && self.skipped == 0
    }
}

/// Drives test cases through an [`Executor`]
pub struct Runner<E> {
    executor: E,
    binary: String,
    policy: FailurePolicy,
}

impl<E: Executor> Runner<E> {
    pub fn new(executor: E, binary: impl Into<String>) -> Self {
        Self {
            executor,
            binary: binary.into(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Run every case in order, writing progress to `report`.
    pub async fn run<W: Write>(
        &self,
        cases: &[TestCase],
        report: &mut Report<W>,
    ) -> io::Result<RunSummary> {
        tracing::info!(
            executor = self.executor.name(),
            binary = %self.binary,
            cases = cases.len(),
            "starting run"
        );
        report.banner(cases.len(), &self.binary)?;

        let mut summary = RunSummary::default();
        for (index, case) in cases.iter().enumerate() {
            let case_report = self.run_case(case, report).await?;
            let failed = !case_report.verdict.is_pass();
            summary.reports.push(case_report);

            if failed && self.policy == FailurePolicy::FailFast {
                summary.skipped = cases.len() - index - 1;
                tracing::warn!(skipped = summary.skipped, "stopping after first failure");
                break;
            }
        }

        report.summary(&summary)?;
        Ok(summary)
    }

    /// Run a single case and write its progress lines.
    pub async fn run_case<W: Write>(
        &self,
        case: &TestCase,
        report: &mut Report<W>,
    ) -> io::Result<CaseReport> {
        let command = format!("{} {}", quote_program(&self.binary), case.command);
        let mut outcome = CaseReport {
            name: case.name.clone(),
            command: command.clone(),
            suggestion: None,
            result: None,
            last_stage: Stage::Start,
            verdict: Verdict::Pass,
        };

        report.command(&command)?;

        let original = self.executor.run(&command).await;
        outcome.last_stage = Stage::RanOriginal;
        let diagnostic = match original {
            Ok(output) => {
                tracing::debug!(case = %case.name, code = ?output.code, "ran original command");
                output.stderr
            }
            Err(e) => {
                tracing::warn!(case = %case.name, error = %e, "original command did not run");
                report.suggestion(None)?;
                report.result(None)?;
                return self.finish(outcome, FailReason::OriginalNotRun(e), report);
            }
        };

        outcome.suggestion = extract(case.suggestion_pattern(), &diagnostic).map(str::to_string);
        outcome.last_stage = Stage::ExtractedSuggestion;
        report.suggestion(outcome.suggestion.as_deref())?;

        let Some(suggestion) = outcome.suggestion.clone() else {
            tracing::debug!(case = %case.name, "suggestion pattern did not match");
            report.result(None)?;
            return self.finish(outcome, FailReason::NoSuggestion, report);
        };

        let invocation = shell_invocation(&self.binary, &suggestion);
        let followup = self.executor.run(&invocation).await;
        outcome.last_stage = Stage::RanSuggestion;
        let output = match followup {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(case = %case.name, error = %e, "suggested command did not run");
                report.result(None)?;
                return self.finish(outcome, FailReason::SuggestionNotRun(e), report);
            }
        };
        tracing::debug!(case = %case.name, code = ?output.code, "ran suggested command");

        let text = output.text(case.stream);
        outcome.result = extract(case.expected_pattern(), &text).map(str::to_string);
        outcome.last_stage = Stage::Compared;
        report.result(outcome.result.as_deref())?;

        if outcome.result.as_deref() == Some(case.expected_output.as_str()) {
            report.verdict(&outcome.verdict)?;
            Ok(outcome)
        } else {
            self.finish(outcome, FailReason::Mismatch, report)
        }
    }

    fn finish<W: Write>(
        &self,
        mut outcome: CaseReport,
        reason: FailReason,
        report: &mut Report<W>,
    ) -> io::Result<CaseReport> {
        tracing::info!(case = %outcome.name, stage = ?outcome.last_stage, reason = %reason, "case failed");
        outcome.verdict = Verdict::Fail(reason);
        report.verdict(&outcome.verdict)?;
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
