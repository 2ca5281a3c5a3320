//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section and field has a default so partial files are valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("server.port cannot be 0")]
    InvalidPort,

    #[error("server.bind cannot be empty")]
    EmptyBindAddress,

    #[error("store.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("store.collection cannot be empty")]
    EmptyCollectionName,

    #[error("store.require_data_file is set but store.data_file is missing")]
    MissingDataFile,
}

/// Raw HTTP server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to bind the listener to
    pub bind: String,
    /// TCP port to listen on
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5001,
        }
    }
}

impl FileServerConfig {
    /// `bind:port` string suitable for a TCP listener
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Raw document store configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// JSON file holding the question sets (in-memory only when unset)
    pub data_file: Option<String>,
    /// Name of the question set collection
    pub collection: String,
    /// Timeout in seconds for a single store call
    pub timeout_seconds: Option<u64>,
    /// Fail at startup when the data file does not exist
    pub require_data_file: bool,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            collection: "questions".to_string(),
            timeout_seconds: Some(5),
            require_data_file: false,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one record per keyword update attempt
    pub audit_log: Option<String>,
    /// Directory for daily rolling diagnostic log files
    pub log_dir: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Document store settings
    pub store: FileStoreConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if self.server.bind.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBindAddress);
        }

        // Timeout of 0 seconds would fail every store call
        if let Some(0) = self.store.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.store.collection.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCollectionName);
        }

        if self.store.require_data_file && self.store.data_file.is_none() {
            return Err(ConfigValidationError::MissingDataFile);
        }

        Ok(())
    }
}
