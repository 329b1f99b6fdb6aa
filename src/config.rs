//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/swaycycle/config.json`
//! when it exists.  Without a file, swaycycle behaves exactly as with
//! `{}`: it queries `swaymsg -t get_workspaces`, runs the swap helper that
//! sits next to the executable, and cycles through every workspace.
//!
//! # Example
//!
//! ```json
//! {
//!   "query_command": ["swaymsg", "-t", "get_workspaces"],
//!   "helper": "/home/me/.local/bin/sway-swap-workspaces.sh",
//!   "scope": "output"
//! }
//! ```

use crate::cycle::CycleScope;
use crate::sway::wm::default_query;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Argv of the command that prints the workspace list as JSON.
    pub query_command: Vec<String>,

    /// Path of the swap helper.  `None` means the helper next to the
    /// running executable.
    pub helper: Option<PathBuf>,

    /// Which workspaces take part in the cycle.
    pub scope: CycleScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_command: default_query(),
            helper: None,
            scope: CycleScope::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&contents)
            .map_err(|e| ConfigError(format!("{}: {}", path.display(), e.0)))
    }

    /// Parse and validate configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError(format!("failed to parse: {}", e)))?;
        if config.query_command.is_empty() {
            return Err(ConfigError("query_command must not be empty".into()));
        }
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
