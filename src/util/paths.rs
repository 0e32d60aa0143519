//! Path resolution for Nanobot data directories and virtual environments

use std::path::{Path, PathBuf};

/// Get the base Nanobot data directory (~/.nanobot).
///
/// Falls back to a relative `.nanobot` when the home directory cannot be
/// resolved, so the launcher still works in stripped-down containers.
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".nanobot"))
        .unwrap_or_else(|| PathBuf::from(".nanobot"))
}

/// Get the user configuration file path (~/.nanobot/config.json)
pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

/// Default virtual environment directory for a project (`<project>/.venv`)
pub fn default_venv_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(".venv")
}

/// Default entrypoint script for a project (`<project>/nanobot_core.py`)
pub fn default_entrypoint(project_dir: &Path) -> PathBuf {
    project_dir.join("nanobot_core.py")
}

/// Path of the interpreter inside a virtual environment.
///
/// Unix venvs place binaries under `bin/`, Windows venvs under `Scripts/`.
pub fn venv_python(venv_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_dir.join("Scripts").join("python.exe")
    } else {
        venv_dir.join("bin").join("python")
    }
}

/// Path of the pip shim inside a virtual environment
pub fn venv_pip(venv_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        venv_dir.join("Scripts").join("pip.exe")
    } else {
        venv_dir.join("bin").join("pip")
    }
}
