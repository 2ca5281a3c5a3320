//! Keyword list value object

use crate::core::error::DomainError;
use crate::core::string::clip;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const MAX_REPORTED_VALUE_LEN: usize = 40;

/// Ordered list of keyword tags attached to a question (Value Object)
///
/// Order and duplicates are preserved exactly as supplied; the stored list is
/// compared verbatim when deciding whether an update changed anything.
///
/// A missing or `null` keywords field deserializes to an empty list, so
/// readers never see anything but a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Keywords(Vec<String>);

impl Keywords {
    /// Parse a keyword list from a raw JSON payload.
    ///
    /// The payload must be a JSON array whose elements are all strings.
    /// An empty array is valid and clears the tags.
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let Value::Array(items) = value else {
            return Err(DomainError::InvalidKeywords(format!(
                "expected a JSON array of strings, got {}",
                json_kind(value)
            )));
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(DomainError::InvalidKeywords(format!(
                    "element {} is not a string: {}",
                    index,
                    clip(&other.to_string(), MAX_REPORTED_VALUE_LEN)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Parse a keyword list from a raw request body.
    ///
    /// An empty body is rejected the same way as a non-array payload.
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(DomainError::InvalidKeywords(
                "request body is empty".to_string(),
            ));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DomainError::InvalidKeywords(format!("body is not valid JSON: {}", e)))?;
        Self::from_json(&value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into the JSON array stored in the document
    pub fn to_value(&self) -> Value {
        Value::Array(self.0.iter().cloned().map(Value::String).collect())
    }
}

impl<'de> Deserialize<'de> for Keywords {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Vec<String>>::deserialize(deserializer).map(|v| Self(v.unwrap_or_default()))
    }
}

impl From<Vec<String>> for Keywords {
    fn from(keywords: Vec<String>) -> Self {
        Self(keywords)
    }
}

impl From<&[&str]> for Keywords {
    fn from(keywords: &[&str]) -> Self {
        Self(keywords.iter().map(|k| k.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Keywords {
    fn from(keywords: [&str; N]) -> Self {
        Self(keywords.iter().map(|k| k.to_string()).collect())
    }
}

impl std::fmt::Display for Keywords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
