//! Handoff to the Nanobot entrypoint
//!
//! The entrypoint script runs as a foreground child under the venv
//! interpreter with inherited stdio; the launcher simply waits for it to
//! exit. No supervision, no restart.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::util::paths::venv_python;

/// Dashboard address served by the entrypoint once it is up
pub const DASHBOARD_URL: &str = "http://localhost:8080";

/// Run the entrypoint to completion and return its exit status.
///
/// The entrypoint itself receives no arguments; it reads its configuration
/// from `~/.nanobot/config.json` on its own.
pub fn run_entrypoint(
    venv_dir: &Path,
    entrypoint: &Path,
    project_dir: &Path,
) -> io::Result<ExitStatus> {
    tracing::info!(entrypoint = %entrypoint.display(), "Handing off to Nanobot");
    Command::new(venv_python(venv_dir))
        .arg(entrypoint)
        .current_dir(project_dir)
        .status()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    #[test]
    fn test_entrypoint_runs_once_with_no_arguments() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("launch.log");

        // Stub venv interpreter records the argument count it was given:
        // exactly one (the entrypoint path) means the entrypoint itself
        // received no arguments.
        let venv = dir.path().join(".venv");
        fs::create_dir_all(venv.join("bin")).unwrap();
        let python = venv.join("bin").join("python");
        fs::write(
            &python,
            format!("#!/bin/sh\necho \"argc=$#\" >> {}\nexit 7\n", log.display()),
        )
        .unwrap();
        fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();

        let entrypoint = dir.path().join("nanobot_core.py");
        fs::write(&entrypoint, "").unwrap();

        let status = run_entrypoint(&venv, &entrypoint, dir.path()).unwrap();
        assert_eq!(status.code(), Some(7));

        let calls = fs::read_to_string(&log).unwrap();
        assert_eq!(calls.trim(), "argc=1");
    }
}
