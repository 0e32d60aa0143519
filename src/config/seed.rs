//! Default configuration seeding
//!
//! The launcher owns first-run creation of `~/.nanobot/config.json` and
//! nothing else about it: an existing file is never read, merged, or
//! validated, so whatever the operator (or the dashboard) wrote there
//! survives every subsequent run byte for byte.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

/// Placeholder credential written on first run; the operator replaces it
pub const PLACEHOLDER_API_KEY: &str = "sk-or-v1-YOUR_KEY";

/// Default model identifier for new installs
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-5-sonnet-latest";

#[derive(Debug, Serialize)]
struct DefaultConfig {
    providers: Providers,
    agents: Agents,
}

#[derive(Debug, Serialize)]
struct Providers {
    openrouter: Provider,
}

#[derive(Debug, Serialize)]
struct Provider {
    #[serde(rename = "apiKey")]
    api_key: &'static str,
}

#[derive(Debug, Serialize)]
struct Agents {
    defaults: AgentDefaults,
}

#[derive(Debug, Serialize)]
struct AgentDefaults {
    model: &'static str,
}

/// The minimal default configuration document, as a single JSON line
pub fn default_document() -> String {
    let config = DefaultConfig {
        providers: Providers {
            openrouter: Provider {
                api_key: PLACEHOLDER_API_KEY,
            },
        },
        agents: Agents {
            defaults: AgentDefaults {
                model: DEFAULT_MODEL,
            },
        },
    };
    // Serialization of a static value cannot fail
    serde_json::to_string(&config).unwrap_or_default()
}

/// What the configuration step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// A file already exists at the path; it was not touched
    Existing,
    /// The default document was written (parent directories included)
    Created,
}

/// Ensure a configuration file exists at `path`, seeding the default if
/// absent. Never overwrites.
pub fn ensure_config(path: &Path) -> io::Result<ConfigOutcome> {
    if path.exists() {
        tracing::debug!(config = %path.display(), "Configuration already present");
        return Ok(ConfigOutcome::Existing);
    }

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, default_document())?;
    tracing::info!(config = %path.display(), "Seeded default configuration");
    Ok(ConfigOutcome::Created)
}
