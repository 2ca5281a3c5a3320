//! Logging infrastructure: keyword audit trail.
//!
//! Provides [`JsonlKeywordAuditLog`], a JSONL file writer that implements
//! the [`KeywordAuditLog`](quizbank_application::KeywordAuditLog) port.

mod jsonl_audit;

pub use jsonl_audit::JsonlKeywordAuditLog;
