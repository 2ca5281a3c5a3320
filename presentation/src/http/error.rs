//! API error type and its HTTP mapping

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizbank_application::QuestionRepositoryError;
use quizbank_domain::DomainError;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by HTTP handlers
///
/// Every variant renders as `{"error": <message>}` with its own status code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request data: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<QuestionRepositoryError> for ApiError {
    fn from(error: QuestionRepositoryError) -> Self {
        match error {
            QuestionRepositoryError::InvalidInput(e) => e.into(),
            QuestionRepositoryError::NotFound(id) => {
                ApiError::NotFound(format!("Question {} not found", id))
            }
            QuestionRepositoryError::StoreUnavailable(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store details stay in the logs, not in the response body
        if let ApiError::Internal(detail) = &self {
            debug!("Internal error detail: {}", detail);
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizbank_application::StoreError;
    use quizbank_domain::QuestionId;

    #[test]
    fn test_repository_errors_map_to_status() {
        let cases = [
            (
                QuestionRepositoryError::InvalidInput(DomainError::InvalidKeywords("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                QuestionRepositoryError::NotFound(QuestionId::new(9999)),
                StatusCode::NOT_FOUND,
            ),
            (
                QuestionRepositoryError::StoreUnavailable(StoreError::Timeout),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }

    #[test]
    fn test_internal_error_hides_store_detail() {
        let error = ApiError::from(QuestionRepositoryError::StoreUnavailable(
            StoreError::ConnectionError("mongodb://10.0.0.3 refused".into()),
        ));
        assert_eq!(error.to_string(), "Internal server error");
    }

    #[test]
    fn test_not_found_message_names_question() {
        let error = ApiError::from(QuestionRepositoryError::NotFound(QuestionId::new(7)));
        assert_eq!(error.to_string(), "Question 7 not found");
    }
}
