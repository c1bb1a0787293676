// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console output: per-case progress lines and diagnostics.
//!
//! Progress is human-readable only. Color is applied when the target is a
//! terminal.

use crate::runner::{RunSummary, Verdict};
use std::io::{self, IsTerminal, Write};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

const SEPARATOR: &str = "---";

/// Progress writer for a run.
pub struct Report<W> {
    writer: W,
    color: bool,
}

impl Report<io::Stdout> {
    /// Report to stdout, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let color = stdout.is_terminal();
        Self::new(stdout, color)
    }
}

impl<W: Write> Report<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn banner(&mut self, count: usize, binary: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "Running {} test case(s) against {}\n",
            count, binary
        )
    }

    pub fn command(&mut self, command: &str) -> io::Result<()> {
        writeln!(self.writer, "▶️ Running the command:\n\t{}", command)
    }

    pub fn suggestion(&mut self, suggestion: Option<&str>) -> io::Result<()> {
        writeln!(
            self.writer,
            "\nSuggested command:\n\t{}",
            suggestion.unwrap_or("(none)")
        )
    }

    pub fn result(&mut self, result: Option<&str>) -> io::Result<()> {
        writeln!(
            self.writer,
            "\nRunning the suggested command...\n\t{}",
            result.unwrap_or("(no match)")
        )
    }

    pub fn verdict(&mut self, verdict: &Verdict) -> io::Result<()> {
        match verdict {
            Verdict::Pass => self.colored(GREEN, format_args!("\n✅ Test passed"))?,
            Verdict::Fail(reason) => {
                self.colored(RED, format_args!("\n❌ Test failed: {}", reason))?
            }
        }
        writeln!(self.writer, "\n{}\n", SEPARATOR)
    }

    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let color = if summary.all_passed() { GREEN } else { RED };
        if summary.skipped > 0 {
            self.colored(
                color,
                format_args!(
                    "{} passed, {} failed, {} skipped",
                    summary.passed(),
                    summary.failed(),
                    summary.skipped
                ),
            )
        } else {
            self.colored(
                color,
                format_args!("{} passed, {} failed", summary.passed(), summary.failed()),
            )
        }
    }

    fn colored(&mut self, code: &str, msg: std::fmt::Arguments<'_>) -> io::Result<()> {
        if self.color {
            writeln!(self.writer, "{}{}{}", code, msg, RESET)
        } else {
            writeln!(self.writer, "{}", msg)
        }
    }
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), "Error", RED, msg, is_tty);
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), "Warning", YELLOW, msg, is_tty);
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    label: &str,
    code: &str,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(writer, "{}{}: {}{}", code, label, msg, RESET);
    } else {
        let _ = writeln!(writer, "{}: {}", label, msg);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
