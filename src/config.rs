//! Shell configuration
//!
//! Read from YAML. Looked up at an explicit path, or at
//! `<config dir>/wordgraph/config.yaml` when that file exists.
//!
//! ```yaml
//! seed: 42
//! log_level: debug
//! top: 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixed seed for text generation and random walks; entropy when unset
    pub seed: Option<u64>,
    /// Log level: error, warn, info, debug or trace
    pub log_level: String,
    /// Rows shown when ranking without a word
    pub top: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "warn".to_string(),
            top: 10,
        }
    }
}

impl Config {
    /// Parse a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicit file if given, else the default file if present,
    /// else defaults
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/wordgraph/config.yaml`, e.g. `~/.config/wordgraph/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordgraph").join("config.yaml"))
}
