//! User acknowledgment prompts
//!
//! The bootstrap procedure blocks twice: once after seeding a default
//! configuration (so the operator can add real credentials) and once after
//! the launched application exits (so the terminal stays open). Both go
//! through the [`Acknowledge`] trait, which lets automated harnesses run
//! the procedure headless.

use std::io::{self, BufRead, Write};

/// A blocking acknowledgment point in the bootstrap procedure
pub trait Acknowledge {
    /// Display `prompt` and block until the user acknowledges.
    ///
    /// I/O failures (e.g. a closed stdin) are reported but callers treat
    /// them as acknowledgment rather than aborting the run.
    fn wait(&mut self, prompt: &str) -> io::Result<()>;
}

/// Terminal-backed prompt: prints the message and waits for Enter
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Acknowledge for TerminalPrompt {
    fn wait(&mut self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// Non-interactive acknowledgment: proceeds immediately.
///
/// Used for `--yes` runs and in tests.
#[derive(Debug, Default)]
pub struct AutoAck {
    prompts: Vec<String>,
}

impl AutoAck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompts that would have been shown, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Acknowledge for AutoAck {
    fn wait(&mut self, prompt: &str) -> io::Result<()> {
        self.prompts.push(prompt.to_string());
        Ok(())
    }
}
