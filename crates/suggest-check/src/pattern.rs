// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suggestion extraction from diagnostic text.
//!
//! A suggestion pattern is the binary path, matched literally, followed by a
//! space and a caller-supplied regex describing the suggested arguments.
//! The path may appear raw or shell-quoted in the diagnostic text.

use regex::Regex;
use std::borrow::Cow;

pub type PatternError = regex::Error;

/// Compile the pattern for a suggested command.
///
/// `prefix` is escaped, `shape` is used as written.
pub fn build_suggestion_pattern(prefix: &str, shape: &str) -> Result<Regex, PatternError> {
    let quoted = quote_program(prefix);
    if quoted == prefix {
        Regex::new(&format!("{} {}", regex::escape(prefix), shape))
    } else {
        Regex::new(&format!(
            "(?:{}|{}) {}",
            regex::escape(&quoted),
            regex::escape(prefix),
            shape
        ))
    }
}

/// Shell-quote a program path for use as the first word of an `sh -c` line.
pub fn quote_program(program: &str) -> Cow<'_, str> {
    shell_words::quote(program)
}

/// Make a suggested command line runnable through the shell.
///
/// A suggestion that starts with the raw, unquoted `program` gets that prefix
/// replaced by its quoted form; anything else is returned unchanged.
pub fn shell_invocation<'a>(program: &str, suggestion: &'a str) -> Cow<'a, str> {
    let quoted = quote_program(program);
    if quoted == program {
        return Cow::Borrowed(suggestion);
    }
    match suggestion.strip_prefix(program) {
        Some(rest) if rest.starts_with(' ') => Cow::Owned(format!("{}{}", quoted, rest)),
        _ => Cow::Borrowed(suggestion),
    }
}

/// Compile a pattern matching `text` literally.
pub fn literal_pattern(text: &str) -> Result<Regex, PatternError> {
    Regex::new(&regex::escape(text))
}

/// First match of `pattern` in `text`, if any.
pub fn extract<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern.find(text.trim()).map(|m| m.as_str())
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
