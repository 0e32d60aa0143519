//! CLI definition for the `nanobot-launcher` binary
//!
//! The launcher runs with no arguments; every flag is an override for one
//! of the environment-derived defaults, which keeps the procedure
//! scriptable and testable without touching the real host layout.

use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::bootstrap::BootstrapOptions;

/// Set up and start Nanobot in one step.
#[derive(Debug, Parser)]
#[command(name = "nanobot-launcher", version, about, long_about = None)]
pub struct Cli {
    /// Python interpreter to use instead of searching PATH.
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Directory containing the Nanobot sources (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Virtual environment directory (default: <project>/.venv).
    #[arg(long, value_name = "DIR")]
    pub venv: Option<PathBuf>,

    /// Configuration file location (default: ~/.nanobot/config.json).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Entrypoint script run after setup (default: <project>/nanobot_core.py).
    #[arg(long, value_name = "FILE")]
    pub entrypoint: Option<PathBuf>,

    /// Skip the interactive pauses.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve CLI flags into explicit bootstrap options
    pub fn to_options(&self) -> io::Result<BootstrapOptions> {
        let project_dir = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let mut options = BootstrapOptions::for_project(project_dir);
        options.python = self.python.clone();
        if let Some(venv) = &self.venv {
            options.venv_dir = venv.clone();
        }
        if let Some(config) = &self.config {
            options.config_path = config.clone();
        }
        if let Some(entrypoint) = &self.entrypoint {
            options.entrypoint = entrypoint.clone();
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_needed() {
        let cli = Cli::parse_from(["nanobot-launcher"]);
        assert!(cli.python.is_none());
        assert!(!cli.yes);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides_flow_into_options() {
        let cli = Cli::parse_from([
            "nanobot-launcher",
            "--python",
            "/opt/python3",
            "--project-dir",
            "/srv/nanobot",
            "--venv",
            "/srv/env",
            "--config",
            "/srv/config.json",
            "--entrypoint",
            "/srv/core.py",
            "--yes",
        ]);

        let options = cli.to_options().unwrap();
        assert_eq!(options.python, Some(PathBuf::from("/opt/python3")));
        assert_eq!(options.project_dir, PathBuf::from("/srv/nanobot"));
        assert_eq!(options.venv_dir, PathBuf::from("/srv/env"));
        assert_eq!(options.config_path, PathBuf::from("/srv/config.json"));
        assert_eq!(options.entrypoint, PathBuf::from("/srv/core.py"));
        assert!(cli.yes);
    }

    #[test]
    fn test_defaults_derive_from_project_dir() {
        let cli = Cli::parse_from(["nanobot-launcher", "--project-dir", "/srv/nanobot"]);
        let options = cli.to_options().unwrap();
        assert_eq!(options.venv_dir, PathBuf::from("/srv/nanobot/.venv"));
        assert_eq!(
            options.entrypoint,
            PathBuf::from("/srv/nanobot/nanobot_core.py")
        );
    }
}
