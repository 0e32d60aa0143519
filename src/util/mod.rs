pub mod paths;
pub mod prompt;

pub use paths::{config_path, data_dir, default_entrypoint, default_venv_dir, venv_pip, venv_python};
pub use prompt::{Acknowledge, AutoAck, TerminalPrompt};
