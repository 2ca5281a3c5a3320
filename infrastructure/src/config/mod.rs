//! Configuration file loading for quizbank
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZBANK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizbank.toml` or `./.quizbank.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quizbank/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileServerConfig, FileStoreConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
