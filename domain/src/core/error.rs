//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Both variants describe malformed client input and are meant to be
/// reported back to the caller, never to reach storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question id: {0}")]
    InvalidQuestionId(String),

    #[error("Invalid keywords: {0}")]
    InvalidKeywords(String),
}
