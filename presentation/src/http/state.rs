//! Shared handler state

use quizbank_application::{DocumentStore, QuestionRepository};
use std::sync::Arc;

/// State handed to every request handler
pub struct AppState<S: DocumentStore + 'static> {
    pub repository: Arc<QuestionRepository<S>>,
}

impl<S: DocumentStore + 'static> AppState<S> {
    pub fn new(repository: QuestionRepository<S>) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

// Manual impl: deriving would require `S: Clone`
impl<S: DocumentStore + 'static> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
