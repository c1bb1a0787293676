// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution trait and the shell-backed implementation.

use crate::config::OutputStream;
use std::borrow::Cow;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Captured result of a finished process.
///
/// A non-zero exit still produces a `CommandOutput`; the binary under test
/// reports its suggestions on stderr while failing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Text of the selected stream.
    pub fn text(&self, stream: OutputStream) -> Cow<'_, str> {
        match stream {
            OutputStream::Stderr => Cow::Borrowed(&self.stderr),
            OutputStream::Stdout => Cow::Borrowed(&self.stdout),
            OutputStream::Both => {
                // Keep the last stdout line from running into the first stderr line.
                let sep = if self.stdout.is_empty() || self.stdout.ends_with('\n') {
                    ""
                } else {
                    "\n"
                };
                Cow::Owned(format!("{}{}{}", self.stdout, sep, self.stderr))
            }
        }
    }
}

/// Errors that prevent a command from producing output at all
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    #[error("Empty command line")]
    EmptyCommand,

    #[error("Failed to spawn command: {0}")]
    Spawn(String),

    #[error("Command I/O error: {0}")]
    Io(String),

    #[error("Command timed out after {0:?}")]
    Timeout(Duration),
}

/// Boxed future returned by [`Executor::run`].
pub type ExecFuture<'a> = Pin<Box<dyn Future<Output = Result<CommandOutput, ExecError>> + Send + 'a>>;

/// Trait for command execution engines.
pub trait Executor: Send + Sync {
    /// Run a command line to completion.
    fn run<'a>(&'a self, command: &'a str) -> ExecFuture<'a>;

    /// Get the name of this executor for debugging.
    fn name(&self) -> &'static str;
}

/// Executor running command lines through `sh -c`.
#[derive(Clone, Debug)]
pub struct ShellExecutor {
    shell: PathBuf,
    cwd: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from("sh"),
            cwd: None,
            timeout: None,
        }
    }

    /// Set the working directory of spawned commands.
    pub fn with_cwd(mut self, cwd: Option<PathBuf>) -> Self {
        self.cwd = cwd;
        self
    }

    /// Kill commands still running after `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn run_shell(&self, command: &str) -> Result<CommandOutput, ExecError> {
        if command.trim().is_empty() {
            return Err(ExecError::EmptyCommand);
        }

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        let child = cmd.spawn().map_err(|e| ExecError::Spawn(e.to_string()))?;

        let output = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result.map_err(|e| ExecError::Io(e.to_string()))?,
                // Dropping the child handle kills the process.
                Err(_) => return Err(ExecError::Timeout(limit)),
            },
            None => child
                .wait_with_output()
                .await
                .map_err(|e| ExecError::Io(e.to_string()))?,
        };

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl Executor for ShellExecutor {
    fn run<'a>(&'a self, command: &'a str) -> ExecFuture<'a> {
        Box::pin(self.run_shell(command))
    }

    fn name(&self) -> &'static str {
        "shell"
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
