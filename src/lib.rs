pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod util;

pub use bootstrap::{
    BootstrapError, BootstrapOptions, BootstrapReport, Bootstrapper, CommandOutcome, Interpreter,
    Step, StepRecord, StepStatus, DASHBOARD_URL, DOWNLOAD_URL, MIN_PYTHON_VERSION,
};
pub use cli::Cli;
pub use config::{default_document, ensure_config, ConfigOutcome};
pub use util::{Acknowledge, AutoAck, TerminalPrompt};
