//! Bootstrap error types

use std::path::PathBuf;

use thiserror::Error;

use super::interpreter::{DOWNLOAD_URL, MIN_PYTHON_VERSION};

#[derive(Error, Debug)]
pub enum BootstrapError {
    /// No usable Python interpreter was found. This is the only fatal
    /// condition in the procedure: the message carries the remediation
    /// text shown to the operator before the launcher exits with status 1.
    #[error(
        "Python {MIN_PYTHON_VERSION}+ is required but was not found on PATH.\n\
         Install it from {DOWNLOAD_URL} and run the launcher again.\n\
         (tried: {tried})"
    )]
    InterpreterNotFound { tried: String },

    /// An interpreter path was configured but does not point at a runnable
    /// executable.
    #[error(
        "Configured Python at {} is not a runnable executable.\n\
         Install Python {MIN_PYTHON_VERSION}+ from {DOWNLOAD_URL} or fix the --python path.",
        .path.display()
    )]
    InterpreterInvalid { path: PathBuf },

    /// The interpreter exists but its version probe failed
    #[error(
        "`{} --version` failed: {detail}\n\
         Install a working Python {MIN_PYTHON_VERSION}+ from {DOWNLOAD_URL}.",
        .path.display()
    )]
    InterpreterProbeFailed { path: PathBuf, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
