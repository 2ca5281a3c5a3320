//! Document store adapters.
//!
//! Provides [`JsonDocumentStore`], an implementation of the
//! [`DocumentStore`](quizbank_application::DocumentStore) port over an
//! in-memory collection optionally persisted to a JSON file.

mod json_store;
mod matcher;

pub use json_store::JsonDocumentStore;
