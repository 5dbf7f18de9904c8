//! Error types for kbump-core

use thiserror::Error;

/// Result type alias using kbump-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for kbump
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Manifest does not have the expected shape
    #[error("Invalid manifest: {message}")]
    InvalidManifest { message: String },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tag feed could not be fetched or parsed
    #[error("Failed to fetch tag feed for {repository}: {source:#}")]
    Feed {
        repository: String,
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Wrap a transport failure for the given repository
    pub fn feed(repository: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Feed {
            repository: repository.into(),
            source,
        }
    }
}
