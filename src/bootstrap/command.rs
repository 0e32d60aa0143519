//! Captured outcomes for external commands
//!
//! Every subprocess the bootstrapper runs (venv creation, pip install,
//! entrypoint launch) reports back through [`CommandOutcome`] so the
//! orchestrator decides whether a failure halts the run instead of the
//! failure vanishing into the terminal.

use std::io;
use std::process::Command;

/// Result of running an external command to completion
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Exit code, if the process exited normally
    pub code: Option<i32>,
    /// Whether the process exited with status zero
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// Run a command to completion, capturing stdout and stderr.
    ///
    /// Returns `Err` only when the process could not be spawned at all;
    /// a non-zero exit is a successful spawn with `success == false`.
    pub fn run(cmd: &mut Command) -> io::Result<Self> {
        let output = cmd.output()?;
        Ok(Self {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// First non-empty line of stdout, falling back to stderr.
    ///
    /// `python --version` historically printed to stderr, so the probe
    /// checks both streams.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout
            .lines()
            .chain(self.stderr.lines())
            .map(str::trim)
            .find(|l| !l.is_empty())
    }

    /// Short failure description for logs: exit code plus trimmed stderr
    pub fn failure_detail(&self) -> String {
        let code = self
            .code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            format!("exit status {code}")
        } else {
            format!("exit status {code}: {stderr}")
        }
    }
}
