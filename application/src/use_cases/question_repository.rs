//! Question repository use case
//!
//! Reads the whole question corpus and replaces the keyword list of a single
//! embedded question through the [`DocumentStore`] port.

use crate::config::StoreBehavior;
use crate::ports::document_store::{
    Document, DocumentStore, Filter, PositionalSet, StoreError, UpdateResult,
};
use crate::ports::keyword_audit::{AuditOutcome, KeywordAuditEvent, KeywordAuditLog, NoKeywordAudit};
use quizbank_domain::{
    DomainError, KEYWORDS_FIELD, Keywords, QUESTION_ID_FIELD, QUESTIONS_FIELD, Question,
    QuestionId, QuestionSet,
};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur during repository operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuestionRepositoryError {
    #[error("{0}")]
    InvalidInput(#[from] DomainError),

    #[error("Question {0} not found")]
    NotFound(QuestionId),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

/// Successful outcome of a keyword update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordUpdate {
    /// The stored keyword list was replaced.
    Updated,
    /// The question already carried exactly these keywords.
    NoChange,
}

impl KeywordUpdate {
    fn audit_outcome(self) -> AuditOutcome {
        match self {
            KeywordUpdate::Updated => AuditOutcome::Updated,
            KeywordUpdate::NoChange => AuditOutcome::NoChange,
        }
    }
}

/// Repository over question sets held by a document store
///
/// Holds no mutable state of its own; atomicity of keyword updates is
/// delegated to the store's `update_one`.
pub struct QuestionRepository<S: DocumentStore + 'static> {
    store: Arc<S>,
    behavior: StoreBehavior,
    audit: Arc<dyn KeywordAuditLog>,
}

impl<S: DocumentStore + 'static> QuestionRepository<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            behavior: StoreBehavior::default(),
            audit: Arc::new(NoKeywordAudit),
        }
    }

    pub fn with_behavior(mut self, behavior: StoreBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_audit_log(mut self, audit: Arc<dyn KeywordAuditLog>) -> Self {
        self.audit = audit;
        self
    }

    /// Get a reference to the underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Flatten every question set into one ordered list of questions.
    ///
    /// Documents come in store order and questions in array order. Either
    /// the full corpus is returned or the call fails as a whole.
    pub async fn fetch_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let documents = self
            .call_store("find", self.store.find(&Filter::all()))
            .await
            .inspect_err(|e| error!("Error fetching questions: {}", e))?;

        let mut questions = Vec::new();
        for document in documents {
            let set = decode_question_set(document)
                .inspect_err(|e| error!("Error decoding question set: {}", e))?;
            questions.extend(set.into_questions());
        }

        debug!(
            "Fetched {} questions from collection {}",
            questions.len(),
            self.store.collection()
        );
        Ok(questions)
    }

    /// Look up a single question by id.
    pub async fn find(&self, question_id: QuestionId) -> Result<Question, QuestionRepositoryError> {
        let document = self
            .call_store("find_one", self.store.find_one(&question_filter(question_id)))
            .await
            .inspect_err(|e| error!("Error fetching question {}: {}", question_id, e))?;

        let Some(document) = document else {
            info!("Question {} not found", question_id);
            return Err(QuestionRepositoryError::NotFound(question_id));
        };

        let question = decode_question_set(document)?
            .into_questions()
            .into_iter()
            .find(|q| q.question_id == question_id)
            .ok_or(QuestionRepositoryError::NotFound(question_id))?;
        debug!(
            "Found question {}: {}",
            question_id,
            question.text().unwrap_or("<no text>")
        );
        Ok(question)
    }

    /// Parse a raw request body and replace the question's keywords.
    ///
    /// Malformed bodies fail with `InvalidInput` before the store is touched.
    pub async fn update_keywords_from_slice(
        &self,
        question_id: QuestionId,
        body: &[u8],
    ) -> Result<KeywordUpdate, QuestionRepositoryError> {
        let keywords = Keywords::from_slice(body).inspect_err(|e| {
            warn!("Invalid data received for question {}: {}", question_id, e)
        })?;
        self.update_keywords(question_id, keywords).await
    }

    /// Replace the keyword list of one question in a single atomic store call.
    ///
    /// The store locates the parent document whose `questions` array holds
    /// the id and sets `keywords` on exactly that element; siblings and other
    /// fields are left untouched.
    pub async fn update_keywords(
        &self,
        question_id: QuestionId,
        keywords: Keywords,
    ) -> Result<KeywordUpdate, QuestionRepositoryError> {
        if keywords.is_empty() {
            debug!("Clearing keywords for question {}", question_id);
        } else {
            debug!(
                "Updating keywords for question {} ({} tags): {}",
                question_id,
                keywords.len(),
                keywords
            );
        }

        let filter = question_filter(question_id);
        let update = PositionalSet::new(QUESTIONS_FIELD, KEYWORDS_FIELD, keywords.to_value());

        let result = self
            .call_store("update_one", self.store.update_one(&filter, &update))
            .await;

        let outcome = match result {
            Ok(counts) => interpret_update(question_id, counts),
            Err(e) => {
                error!("Error updating keywords for question {}: {}", question_id, e);
                Err(QuestionRepositoryError::StoreUnavailable(e))
            }
        };

        let audit_outcome = match &outcome {
            Ok(update) => update.audit_outcome(),
            Err(QuestionRepositoryError::NotFound(_)) => AuditOutcome::NotFound,
            Err(_) => AuditOutcome::StoreUnavailable,
        };
        self.audit
            .record(KeywordAuditEvent::new(question_id, keywords, audit_outcome));

        outcome
    }

    /// Run one store call under the configured timeout
    async fn call_store<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        match self.behavior.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Store call {} timed out after {:?}", operation, limit);
                    Err(StoreError::Timeout)
                }
            },
            None => call.await,
        }
    }
}

fn question_filter(question_id: QuestionId) -> Filter {
    Filter::array_element_eq(QUESTIONS_FIELD, QUESTION_ID_FIELD, question_id.value())
}

fn interpret_update(
    question_id: QuestionId,
    counts: UpdateResult,
) -> Result<KeywordUpdate, QuestionRepositoryError> {
    debug!(
        "Update result for question {}: matched={}, modified={}",
        question_id, counts.matched_count, counts.modified_count
    );

    if counts.matched_count == 0 {
        warn!("Question {} not found", question_id);
        return Err(QuestionRepositoryError::NotFound(question_id));
    }

    if counts.modified_count == 0 {
        info!("No changes made for question {}", question_id);
        return Ok(KeywordUpdate::NoChange);
    }

    info!("Keywords updated successfully for question {}", question_id);
    Ok(KeywordUpdate::Updated)
}

fn decode_question_set(document: Document) -> Result<QuestionSet, QuestionRepositoryError> {
    serde_json::from_value(Value::Object(document)).map_err(|e| {
        QuestionRepositoryError::StoreUnavailable(StoreError::CorruptDocument(e.to_string()))
    })
}
