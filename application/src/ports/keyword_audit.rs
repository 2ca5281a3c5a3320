//! Port for the keyword change audit trail.
//!
//! Defines the [`KeywordAuditLog`] trait for recording every keyword update
//! attempt and its outcome to a structured log.
//!
//! This is separate from `tracing`-based diagnostics: tracing handles
//! human-readable operation messages, while this port captures a
//! machine-readable history of tag changes (JSONL).

use quizbank_domain::{Keywords, QuestionId};
use serde::Serialize;

/// How a keyword update attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Updated,
    NoChange,
    NotFound,
    StoreUnavailable,
}

/// One recorded keyword update attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordAuditEvent {
    pub question_id: QuestionId,
    pub keywords: Keywords,
    pub outcome: AuditOutcome,
}

impl KeywordAuditEvent {
    pub fn new(question_id: QuestionId, keywords: Keywords, outcome: AuditOutcome) -> Self {
        Self {
            question_id,
            keywords,
            outcome,
        }
    }
}

/// Port for logging keyword update attempts.
///
/// The `record` method is synchronous and non-fallible: audit failures are
/// swallowed by the implementation and never change a request's result.
pub trait KeywordAuditLog: Send + Sync {
    /// Record one keyword update attempt.
    fn record(&self, event: KeywordAuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoKeywordAudit;

impl KeywordAuditLog for NoKeywordAudit {
    fn record(&self, _event: KeywordAuditEvent) {}
}
