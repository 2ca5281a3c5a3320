//! Application-level configuration.
//!
//! This module provides configuration types that control how the repository
//! talks to its document store, such as the per-call timeout.

use std::time::Duration;

/// Store call behavior configuration.
///
/// Every call the repository makes against its [`DocumentStore`] is bounded
/// by `timeout`; expiry is reported as an unavailable store.
///
/// [`DocumentStore`]: crate::ports::document_store::DocumentStore
#[derive(Debug, Clone, Default)]
pub struct StoreBehavior {
    /// Maximum time to wait for a single store call.
    pub timeout: Option<Duration>,
}

impl StoreBehavior {
    /// Creates a StoreBehavior with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
        }
    }

    /// Creates a StoreBehavior from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, store calls are not bounded.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }
}
