pub mod seed;

pub use seed::{default_document, ensure_config, ConfigOutcome, DEFAULT_MODEL, PLACEHOLDER_API_KEY};
