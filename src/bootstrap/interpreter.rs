//! Python interpreter detection
//!
//! Resolves a usable Python either from an explicitly configured path or
//! by searching PATH for the usual binary names. The version string is
//! captured for display only; presence of a working interpreter is the
//! gate, not a parsed version comparison.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::command::CommandOutcome;
use super::error::BootstrapError;

/// Minimum Python version shown in remediation messages
pub const MIN_PYTHON_VERSION: &str = "3.10";

/// Where to send the operator when no interpreter is found
pub const DOWNLOAD_URL: &str = "https://www.python.org/downloads/";

/// Binary names probed on PATH, in order
const CANDIDATES: &[&str] = &["python3", "python"];

/// A resolved, probe-verified Python interpreter
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// Absolute path to the interpreter binary
    pub path: PathBuf,
    /// Output of `--version`, e.g. "Python 3.12.1"
    pub version: String,
}

impl Interpreter {
    /// Resolve an interpreter, preferring an explicit override.
    ///
    /// With an override the path is validated and probed; without one the
    /// PATH candidates are tried in order and the first that answers
    /// `--version` wins. This is the only fatal check in the bootstrap
    /// procedure.
    pub fn resolve(override_path: Option<&Path>) -> Result<Self, BootstrapError> {
        if let Some(path) = override_path {
            if !is_valid_executable(path) {
                return Err(BootstrapError::InterpreterInvalid {
                    path: path.to_path_buf(),
                });
            }
            return probe(path);
        }

        for name in CANDIDATES {
            let Ok(path) = which::which(name) else {
                continue;
            };
            match probe(&path) {
                Ok(interpreter) => return Ok(interpreter),
                Err(err) => {
                    tracing::debug!(binary = *name, error = %err, "Version probe failed, trying next candidate");
                }
            }
        }

        Err(BootstrapError::InterpreterNotFound {
            tried: CANDIDATES.join(", "),
        })
    }
}

/// Run `<path> --version` and require a successful exit
fn probe(path: &Path) -> Result<Interpreter, BootstrapError> {
    let outcome = CommandOutcome::run(Command::new(path).arg("--version")).map_err(|e| {
        BootstrapError::InterpreterProbeFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        }
    })?;

    if !outcome.success {
        return Err(BootstrapError::InterpreterProbeFailed {
            path: path.to_path_buf(),
            detail: outcome.failure_detail(),
        });
    }

    Ok(Interpreter {
        path: path.to_path_buf(),
        version: outcome.first_line().unwrap_or("Python (unknown)").to_string(),
    })
}

/// Check if a path points to a valid executable
fn is_valid_executable(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }

    // On Unix, check if the file is executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = path.metadata() {
            let permissions = metadata.permissions();
            return permissions.mode() & 0o111 != 0;
        }
        false
    }

    // On Windows, just check if the file exists
    #[cfg(not(unix))]
    {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn write_stub(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_missing_override_is_invalid() {
        let err = Interpreter::resolve(Some(Path::new("/nonexistent/python"))).unwrap_err();
        assert!(matches!(err, BootstrapError::InterpreterInvalid { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_with_working_override() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "python", "echo 'Python 3.12.1'");

        let interpreter = Interpreter::resolve(Some(&stub)).unwrap();
        assert_eq!(interpreter.path, stub);
        assert_eq!(interpreter.version, "Python 3.12.1");
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_with_broken_override() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "python", "echo 'boom' >&2; exit 1");

        let err = Interpreter::resolve(Some(&stub)).unwrap_err();
        match err {
            BootstrapError::InterpreterProbeFailed { detail, .. } => {
                assert!(detail.contains("boom"), "detail: {detail}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_override_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("python");
        fs::write(&path, "not a program").unwrap();

        let err = Interpreter::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, BootstrapError::InterpreterInvalid { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_version_probe_accepts_stderr_output() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path(), "python", "echo 'Python 2.7.18' >&2");

        let interpreter = Interpreter::resolve(Some(&stub)).unwrap();
        assert_eq!(interpreter.version, "Python 2.7.18");
    }
}
