//! Question entity

use super::keywords::Keywords;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Identifier of a question, unique across every question set.
///
/// Ids are assigned outside the service; uniqueness is assumed, not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for QuestionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidQuestionId(s.to_string()))
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quiz question embedded in a question set (Entity)
///
/// Only `question_id` and `keywords` carry meaning for the service. The
/// remaining fields (`text`, options, answers, ...) are kept in `details`
/// and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: QuestionId,
    /// Absent until the question is first tagged; reads as empty.
    #[serde(default)]
    pub keywords: Keywords,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Question {
    /// Create a question without descriptive fields
    pub fn new(question_id: i64, keywords: impl Into<Keywords>) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            keywords: keywords.into(),
            details: Map::new(),
        }
    }

    /// Question text, if the document carries one
    pub fn text(&self) -> Option<&str> {
        self.details.get("text").and_then(Value::as_str)
    }
}
