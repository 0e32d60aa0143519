//! Editable installation of the local package into the sandbox
//!
//! Mirrors `pip install -e .`: no pinning, no lockfile. The venv's own pip
//! shim is preferred; when it is missing (some venvs are created without
//! one) the venv interpreter runs `-m pip` instead.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::util::paths::{venv_pip, venv_python};

use super::command::CommandOutcome;

/// Install the project at `project_dir` into the venv in editable mode
pub fn editable_install(venv_dir: &Path, project_dir: &Path) -> io::Result<CommandOutcome> {
    let pip = venv_pip(venv_dir);

    let mut cmd = if pip.exists() {
        let mut c = Command::new(pip);
        c.arg("install");
        c
    } else {
        let mut c = Command::new(venv_python(venv_dir));
        c.arg("-m").arg("pip").arg("install");
        c
    };

    tracing::info!(project = %project_dir.display(), "Installing project in editable mode");
    CommandOutcome::run(cmd.arg("-e").arg(".").current_dir(project_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[cfg(unix)]
    fn stub_venv(dir: &Path, log: &Path, with_pip: bool) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let venv = dir.join(".venv");
        let bin = venv.join("bin");
        fs::create_dir_all(&bin).unwrap();

        let body = format!("#!/bin/sh\necho \"$0 $@\" >> {}\n", log.display());
        for name in ["python", "pip"] {
            if name == "pip" && !with_pip {
                continue;
            }
            let path = bin.join(name);
            fs::write(&path, &body).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        venv
    }

    #[cfg(unix)]
    #[test]
    fn test_prefers_venv_pip() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let venv = stub_venv(dir.path(), &log, true);

        let outcome = editable_install(&venv, dir.path()).unwrap();
        assert!(outcome.success);

        let calls = fs::read_to_string(&log).unwrap();
        assert!(calls.contains("pip install -e ."), "calls: {calls}");
        assert!(!calls.contains("-m pip"), "calls: {calls}");
    }

    #[cfg(unix)]
    #[test]
    fn test_falls_back_to_python_dash_m_pip() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let venv = stub_venv(dir.path(), &log, false);

        let outcome = editable_install(&venv, dir.path()).unwrap();
        assert!(outcome.success);

        let calls = fs::read_to_string(&log).unwrap();
        assert!(calls.contains("-m pip install -e ."), "calls: {calls}");
    }
}
