//! Environment bootstrap orchestration
//!
//! Drives the strictly linear procedure that takes a host from nothing
//! installed to Nanobot running: check interpreter, ensure the virtual
//! environment, install the package, seed the configuration, launch.
//! There is no branching back and no retry; only the interpreter check is
//! fatal. Later steps record their outcome in a [`BootstrapReport`] and
//! the run carries on regardless, so the success banner prints even after
//! a failed install. That is a deliberate, known gap: first-run
//! convenience over installer-grade robustness.

pub mod command;
pub mod error;
pub mod install;
pub mod interpreter;
pub mod launch;
pub mod venv;

use std::path::PathBuf;

pub use command::CommandOutcome;
pub use error::BootstrapError;
pub use interpreter::{Interpreter, DOWNLOAD_URL, MIN_PYTHON_VERSION};
pub use launch::DASHBOARD_URL;
pub use venv::VenvOutcome;

use crate::config::{ensure_config, ConfigOutcome};
use crate::util::paths;
use crate::util::prompt::Acknowledge;

/// Steps of the bootstrap procedure, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CheckInterpreter,
    EnsureEnv,
    Install,
    EnsureConfig,
    Launch,
}

impl Step {
    /// Human-readable step name for console output and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            Step::CheckInterpreter => "Check Python",
            Step::EnsureEnv => "Create virtual environment",
            Step::Install => "Install package",
            Step::EnsureConfig => "Seed configuration",
            Step::Launch => "Launch Nanobot",
        }
    }

    /// All steps, in order
    pub fn all() -> &'static [Step] {
        &[
            Step::CheckInterpreter,
            Step::EnsureEnv,
            Step::Install,
            Step::EnsureConfig,
            Step::Launch,
        ]
    }
}

/// Outcome of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    /// Nothing to do (e.g. venv or config already present)
    Skipped(String),
    /// The step failed; the run continued anyway
    Failed(String),
}

/// One executed step and its outcome
#[derive(Debug, Clone)]
pub struct StepRecord {
    pub step: Step,
    pub status: StepStatus,
}

/// Collected outcomes of a bootstrap run
#[derive(Debug, Clone, Default)]
pub struct BootstrapReport {
    records: Vec<StepRecord>,
}

impl BootstrapReport {
    fn record(&mut self, step: Step, status: StepStatus) {
        if let StepStatus::Failed(detail) = &status {
            tracing::warn!(step = step.display_name(), detail = %detail, "Step failed; continuing");
        }
        self.records.push(StepRecord { step, status });
    }

    /// Outcome of a step, if it ran
    pub fn status_of(&self, step: Step) -> Option<&StepStatus> {
        self.records
            .iter()
            .find(|r| r.step == step)
            .map(|r| &r.status)
    }

    /// Steps that failed during the run
    pub fn failures(&self) -> Vec<&StepRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.status, StepStatus::Failed(_)))
            .collect()
    }

    /// All step records, in execution order
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }
}

/// Explicit inputs for a bootstrap run.
///
/// Everything ambient (PATH lookup, home directory, working directory) is
/// resolved up front into these fields so the procedure itself never
/// consults the host environment. Tests override freely.
#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Interpreter override; `None` searches PATH
    pub python: Option<PathBuf>,
    /// Directory holding the Nanobot package sources
    pub project_dir: PathBuf,
    /// Sandbox directory for the isolated environment
    pub venv_dir: PathBuf,
    /// User configuration file location
    pub config_path: PathBuf,
    /// Entrypoint script handed the foreground at the end
    pub entrypoint: PathBuf,
}

impl BootstrapOptions {
    /// Environment-derived defaults for a project directory
    pub fn for_project(project_dir: PathBuf) -> Self {
        Self {
            python: None,
            venv_dir: paths::default_venv_dir(&project_dir),
            config_path: paths::config_path(),
            entrypoint: paths::default_entrypoint(&project_dir),
            project_dir,
        }
    }
}

/// Runs the bootstrap procedure end to end
pub struct Bootstrapper {
    options: BootstrapOptions,
    ack: Box<dyn Acknowledge>,
}

impl Bootstrapper {
    pub fn new(options: BootstrapOptions, ack: Box<dyn Acknowledge>) -> Self {
        Self { options, ack }
    }

    /// Execute the full procedure.
    ///
    /// Returns `Err` only from the interpreter check; every later failure
    /// is recorded in the report and the run continues. The final
    /// acknowledgment pause happens regardless of the entrypoint's exit
    /// status, keeping the terminal open for inspection.
    pub fn run(&mut self) -> Result<BootstrapReport, BootstrapError> {
        let mut report = BootstrapReport::default();

        // Gate: nothing is touched on disk before this passes.
        let interpreter = Interpreter::resolve(self.options.python.as_deref())?;
        println!(
            "[1/5] {} ({})",
            interpreter.version,
            interpreter.path.display()
        );
        report.record(Step::CheckInterpreter, StepStatus::Succeeded);

        self.ensure_env(&interpreter, &mut report);
        self.install(&mut report);
        self.ensure_config(&mut report);
        self.launch(&mut report);

        if let Err(err) = self.ack.wait("Press Enter to close this window... ") {
            tracing::debug!(error = %err, "Final pause skipped");
        }

        Ok(report)
    }

    fn ensure_env(&mut self, interpreter: &Interpreter, report: &mut BootstrapReport) {
        match venv::ensure(&interpreter.path, &self.options.venv_dir) {
            Ok(VenvOutcome::AlreadyPresent) => {
                println!(
                    "[2/5] Virtual environment already present at {}",
                    self.options.venv_dir.display()
                );
                report.record(Step::EnsureEnv, StepStatus::Skipped("already present".into()));
            }
            Ok(VenvOutcome::Created(out)) if out.success => {
                println!(
                    "[2/5] Created virtual environment at {}",
                    self.options.venv_dir.display()
                );
                report.record(Step::EnsureEnv, StepStatus::Succeeded);
            }
            Ok(VenvOutcome::Created(out)) => {
                eprintln!("[2/5] venv creation failed: {}", out.failure_detail());
                report.record(Step::EnsureEnv, StepStatus::Failed(out.failure_detail()));
            }
            Err(err) => {
                eprintln!("[2/5] venv creation failed: {err}");
                report.record(Step::EnsureEnv, StepStatus::Failed(err.to_string()));
            }
        }
    }

    fn install(&mut self, report: &mut BootstrapReport) {
        match install::editable_install(&self.options.venv_dir, &self.options.project_dir) {
            Ok(out) if out.success => {
                println!("[3/5] Installed nanobot into the sandbox");
                report.record(Step::Install, StepStatus::Succeeded);
            }
            Ok(out) => {
                eprintln!("[3/5] pip install failed: {}", out.failure_detail());
                report.record(Step::Install, StepStatus::Failed(out.failure_detail()));
            }
            Err(err) => {
                eprintln!("[3/5] pip install failed: {err}");
                report.record(Step::Install, StepStatus::Failed(err.to_string()));
            }
        }
    }

    fn ensure_config(&mut self, report: &mut BootstrapReport) {
        match ensure_config(&self.options.config_path) {
            Ok(ConfigOutcome::Existing) => {
                println!(
                    "[4/5] Using existing configuration at {}",
                    self.options.config_path.display()
                );
                report.record(Step::EnsureConfig, StepStatus::Skipped("already present".into()));
            }
            Ok(ConfigOutcome::Created) => {
                println!(
                    "[4/5] Wrote default configuration to {}",
                    self.options.config_path.display()
                );
                println!("      WARNING: it contains a placeholder API key.");
                println!("      Edit the file to add your real credentials.");
                if let Err(err) = self
                    .ack
                    .wait("Press Enter to continue once you have edited it (or to keep the placeholders)... ")
                {
                    tracing::debug!(error = %err, "Configuration pause skipped");
                }
                report.record(Step::EnsureConfig, StepStatus::Succeeded);
            }
            Err(err) => {
                eprintln!("[4/5] could not write configuration: {err}");
                report.record(Step::EnsureConfig, StepStatus::Failed(err.to_string()));
            }
        }
    }

    fn launch(&mut self, report: &mut BootstrapReport) {
        println!("[5/5] Setup complete. Starting Nanobot...");
        println!();
        println!("==================================================");
        println!("  NANOBOT CORE ONLINE");
        println!("  Web dashboard: {DASHBOARD_URL}");
        println!("  Configuration: {}", self.options.config_path.display());
        println!("==================================================");
        println!();

        match launch::run_entrypoint(
            &self.options.venv_dir,
            &self.options.entrypoint,
            &self.options.project_dir,
        ) {
            Ok(status) if status.success() => {
                report.record(Step::Launch, StepStatus::Succeeded);
            }
            Ok(status) => {
                // Exit status is logged, not propagated.
                tracing::warn!(status = ?status.code(), "Nanobot exited with a failure status");
                report.record(
                    Step::Launch,
                    StepStatus::Failed(format!("entrypoint exit status {:?}", status.code())),
                );
            }
            Err(err) => {
                eprintln!("[5/5] failed to start Nanobot: {err}");
                report.record(Step::Launch, StepStatus::Failed(err.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_in_order() {
        assert_eq!(
            Step::all(),
            &[
                Step::CheckInterpreter,
                Step::EnsureEnv,
                Step::Install,
                Step::EnsureConfig,
                Step::Launch,
            ]
        );
    }

    #[test]
    fn test_report_tracks_failures() {
        let mut report = BootstrapReport::default();
        report.record(Step::CheckInterpreter, StepStatus::Succeeded);
        report.record(Step::Install, StepStatus::Failed("boom".into()));

        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].step, Step::Install);
        assert_eq!(
            report.status_of(Step::CheckInterpreter),
            Some(&StepStatus::Succeeded)
        );
        assert_eq!(report.status_of(Step::Launch), None);
    }

    #[test]
    fn test_options_defaults_derive_from_project_dir() {
        let options = BootstrapOptions::for_project(PathBuf::from("/srv/nanobot"));
        assert_eq!(options.venv_dir, PathBuf::from("/srv/nanobot/.venv"));
        assert_eq!(
            options.entrypoint,
            PathBuf::from("/srv/nanobot/nanobot_core.py")
        );
        assert!(options.python.is_none());
        assert!(options.config_path.ends_with("config.json"));
    }
}
