//! Virtual environment creation
//!
//! The sandbox lives at a project-local directory (`.venv` by default) and
//! is created once with `python -m venv`. Subsequent runs detect the
//! existing interpreter binary and skip creation without inspecting the
//! environment's contents.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::util::paths::venv_python;

use super::command::CommandOutcome;

/// What the environment step did
#[derive(Debug)]
pub enum VenvOutcome {
    /// The venv interpreter already exists; nothing was run
    AlreadyPresent,
    /// `python -m venv` was invoked; the outcome carries its exit status
    Created(CommandOutcome),
}

/// Ensure a virtual environment exists at `venv_dir`.
///
/// Idempotent: an existing environment is left untouched. Returns `Err`
/// only when the interpreter could not be spawned.
pub fn ensure(interpreter: &Path, venv_dir: &Path) -> io::Result<VenvOutcome> {
    if venv_python(venv_dir).exists() {
        tracing::debug!(venv = %venv_dir.display(), "Virtual environment already present");
        return Ok(VenvOutcome::AlreadyPresent);
    }

    tracing::info!(venv = %venv_dir.display(), "Creating virtual environment");
    let outcome = CommandOutcome::run(
        Command::new(interpreter)
            .arg("-m")
            .arg("venv")
            .arg(venv_dir),
    )?;
    Ok(VenvOutcome::Created(outcome))
}
