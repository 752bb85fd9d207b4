//! Runtime configuration for the roster binary.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! then `ROSTER_*` environment variables. CLI flags are applied on top with
//! [`RosterConfig::override_data_file`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::source::DEFAULT_DATA_FILE;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "beneficiary-roster.toml";

/// `tracing` filter used when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RosterConfig {
    /// JSON document holding the beneficiary array
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl RosterConfig {
    /// Load defaults, then `path` (or [`DEFAULT_CONFIG_FILE`]) if it exists,
    /// then the environment.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        config::Config::builder()
            .set_default("data_file", DEFAULT_DATA_FILE)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("ROSTER"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Built-in defaults only; touches neither the filesystem nor the environment.
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Apply a `--file` flag, which wins over every other layer
    pub fn override_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(file) = data_file {
            self.data_file = file;
        }
        self
    }
}
