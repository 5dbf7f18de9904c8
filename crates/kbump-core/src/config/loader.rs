//! Layered configuration loader
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Config file (`--config` or `KBUMP_CONFIG`)
//! 3. Environment variables (KBUMP_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::{BumpConfig, TagPolicy};
use camino::{Utf8Path, Utf8PathBuf};
use std::env;
use std::fs;
use tracing::debug;

/// Environment variable naming an optional config file
pub const CONFIG_ENV: &str = "KBUMP_CONFIG";

/// Configuration loader
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Explicit config file, takes precedence over `KBUMP_CONFIG`
    config_file: Option<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that only consults defaults and the environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader reading the given config file before the environment
    pub fn with_file(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            config_file: Some(path.into()),
        }
    }

    /// Load the bump configuration with layered precedence
    pub fn load(&self) -> Result<BumpConfig> {
        let mut config = match self.config_path() {
            Some(path) => Self::load_yaml_file(&path)?,
            None => BumpConfig::default(),
        };

        Self::apply_env_overrides(&mut config)?;

        Ok(config)
    }

    fn config_path(&self) -> Option<Utf8PathBuf> {
        self.config_file
            .clone()
            .or_else(|| env::var(CONFIG_ENV).ok().map(Utf8PathBuf::from))
    }

    /// Load a YAML file and parse it
    fn load_yaml_file(path: &Utf8Path) -> Result<BumpConfig> {
        debug!("Loading configuration from {}", path);

        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(config: &mut BumpConfig) -> Result<()> {
        if let Ok(val) = env::var("KBUMP_FILEPATH") {
            config.manifest.path = Utf8PathBuf::from(val);
        }

        if let Ok(val) = env::var("KBUMP_FORBIDDEN_WORDS") {
            config.policy.forbidden_words = TagPolicy::parse_word_list(&val);
        }

        if let Ok(val) = env::var("KBUMP_NODIGITS") {
            config.policy.require_digit = parse_bool(&val).ok_or_else(|| {
                Error::invalid_config(format!("KBUMP_NODIGITS must be a boolean, got '{}'", val))
            })?;
        }

        if let Ok(val) = env::var("KBUMP_FEED_URL") {
            config.feed.base_url = val;
        }

        if let Ok(val) = env::var("KBUMP_HTTP_TIMEOUT_SECS") {
            config.feed.http_timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("KBUMP_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        Ok(())
    }
}

/// Parse a truth value the way shell-facing tools usually accept them
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
