//! Document store port
//!
//! Defines the contract the question repository needs from a document
//! database: reading parent documents and patching one element of an
//! embedded array in a single atomic call.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// A stored document: a JSON object, including its store-internal `_id`.
pub type Document = Map<String, Value>;

/// Errors that can occur during document store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    #[error("Timeout")]
    Timeout,
}

/// Selects documents of a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every document.
    All,
    /// Matches documents whose `array` field contains at least one element
    /// whose `field` equals `value`.
    ArrayElementEq {
        array: String,
        field: String,
        value: Value,
    },
}

impl Filter {
    pub fn all() -> Self {
        Filter::All
    }

    pub fn array_element_eq(
        array: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Filter::ArrayElementEq {
            array: array.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Sets `field` on the array element matched by the accompanying filter.
///
/// Only meaningful together with a [`Filter::ArrayElementEq`] on the same
/// `array`: the store mutates exactly the element that satisfied the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionalSet {
    pub array: String,
    pub field: String,
    pub value: Value,
}

impl PositionalSet {
    pub fn new(array: impl Into<String>, field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            array: array.into(),
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Outcome counts of an `update_one` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Documents that satisfied the filter (0 or 1).
    pub matched_count: u64,
    /// Documents whose content actually changed (0 or 1).
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            matched_count,
            modified_count,
        }
    }
}

/// Store holding a named collection of parent documents
///
/// Implementations (adapters) live in the infrastructure layer. `update_one`
/// must locate and patch as one atomic operation: concurrent calls never
/// observe or produce a half-applied array.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the collection this store serves
    fn collection(&self) -> &str;

    /// Every document matching the filter, in store order
    async fn find(&self, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    /// First document matching the filter
    async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError>;

    /// Apply a positional set to the first document matching the filter
    async fn update_one(
        &self,
        filter: &Filter,
        update: &PositionalSet,
    ) -> Result<UpdateResult, StoreError>;
}
