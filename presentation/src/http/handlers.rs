//! Request handlers
//!
//! Each handler translates one HTTP request into a repository call and the
//! result back into a status code and JSON body.

use super::error::ApiError;
use super::state::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use quizbank_application::{DocumentStore, KeywordUpdate};
use quizbank_domain::{Question, QuestionId};
use serde::Serialize;
use tracing::debug;

pub const GREETING: &str = "Hello, World!";

const NO_CHANGE_MESSAGE: &str = "No changes made";

/// Body of a successful keyword update
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UpdateStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl From<KeywordUpdate> for UpdateStatus {
    fn from(update: KeywordUpdate) -> Self {
        Self {
            status: "success",
            message: match update {
                KeywordUpdate::Updated => None,
                KeywordUpdate::NoChange => Some(NO_CHANGE_MESSAGE),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

/// `GET /`
pub async fn greeting() -> &'static str {
    GREETING
}

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// `GET /questions`
pub async fn list_questions<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = state.repository.fetch_all().await?;
    debug!("Returning {} questions", questions.len());
    Ok(Json(questions))
}

/// `GET /questions/{question_id}`
pub async fn get_question<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let question_id: QuestionId = raw_id.parse()?;
    Ok(Json(state.repository.find(question_id).await?))
}

/// `POST /questions/{question_id}/keywords`
///
/// The body is taken as raw bytes so a missing or non-JSON body is reported
/// as a 400 with the usual error shape.
pub async fn update_keywords<S: DocumentStore + 'static>(
    State(state): State<AppState<S>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<UpdateStatus>, ApiError> {
    let question_id: QuestionId = raw_id.parse()?;
    debug!(
        "Received {} bytes for question {}",
        body.len(),
        question_id
    );

    let update = state
        .repository
        .update_keywords_from_slice(question_id, &body)
        .await?;
    Ok(Json(update.into()))
}
