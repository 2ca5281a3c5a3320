//! Application layer for quizbank
//!
//! This crate contains the question repository, the port definitions it
//! depends on, and store call configuration. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::StoreBehavior;
pub use ports::{
    document_store::{Document, DocumentStore, Filter, PositionalSet, StoreError, UpdateResult},
    keyword_audit::{AuditOutcome, KeywordAuditEvent, KeywordAuditLog, NoKeywordAudit},
};
pub use use_cases::question_repository::{
    KeywordUpdate, QuestionRepository, QuestionRepositoryError,
};
