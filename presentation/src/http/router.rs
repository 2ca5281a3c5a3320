//! Route table and middleware stack

use super::handlers::{get_question, greeting, health, list_questions, update_keywords};
use super::state::AppState;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use quizbank_application::DocumentStore;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router
///
/// Cross-origin requests are accepted from any origin.
pub fn build_router<S: DocumentStore + 'static>(state: AppState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health))
        .route("/questions", get(list_questions::<S>))
        .route("/questions/{question_id}", get(get_question::<S>))
        .route("/questions/{question_id}/keywords", post(update_keywords::<S>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header::ACCESS_CONTROL_ALLOW_ORIGIN},
    };
    use http_body_util::BodyExt;
    use quizbank_application::{
        Document, Filter, PositionalSet, QuestionRepository, StoreError, UpdateResult,
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Single-collection store double with first-match positional updates
    struct MemoryStore {
        documents: Mutex<Vec<Document>>,
        calls: AtomicUsize,
        offline: bool,
    }

    impl MemoryStore {
        fn new(documents: Value) -> Self {
            let documents = documents
                .as_array()
                .unwrap()
                .iter()
                .map(|d| d.as_object().cloned().unwrap())
                .collect();
            Self {
                documents: Mutex::new(documents),
                calls: AtomicUsize::new(0),
                offline: false,
            }
        }

        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::new(json!([]))
            }
        }

        fn check(&self) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.offline {
                return Err(StoreError::ConnectionError("offline".to_string()));
            }
            Ok(())
        }

        fn position(documents: &[Document], filter: &Filter) -> Option<(usize, usize)> {
            let Filter::ArrayElementEq {
                array,
                field,
                value,
            } = filter
            else {
                return None;
            };
            documents.iter().enumerate().find_map(|(d, document)| {
                document
                    .get(array)?
                    .as_array()?
                    .iter()
                    .position(|element| element.get(field) == Some(value))
                    .map(|e| (d, e))
            })
        }
    }

    #[async_trait]
    impl DocumentStore for MemoryStore {
        fn collection(&self) -> &str {
            "questions"
        }

        async fn find(&self, _filter: &Filter) -> Result<Vec<Document>, StoreError> {
            self.check()?;
            Ok(self.documents.lock().unwrap().clone())
        }

        async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError> {
            self.check()?;
            let documents = self.documents.lock().unwrap();
            Ok(Self::position(&documents, filter).map(|(d, _)| documents[d].clone()))
        }

        async fn update_one(
            &self,
            filter: &Filter,
            update: &PositionalSet,
        ) -> Result<UpdateResult, StoreError> {
            self.check()?;
            let mut documents = self.documents.lock().unwrap();
            let Some((d, e)) = Self::position(&documents, filter) else {
                return Ok(UpdateResult::new(0, 0));
            };
            let element = documents[d][&update.array][e].as_object_mut().unwrap();
            if element.get(&update.field) == Some(&update.value) {
                return Ok(UpdateResult::new(1, 0));
            }
            element.insert(update.field.clone(), update.value.clone());
            Ok(UpdateResult::new(1, 1))
        }
    }

    fn sample_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new(json!([
            {
                "_id": "set-a",
                "questions": [
                    {"question_id": 1, "text": "What keeps a quadcopter level?", "keywords": []},
                    {"question_id": 2, "text": "What is yaw?", "keywords": ["easy"]}
                ]
            },
            {
                "_id": "set-b",
                "questions": [{"question_id": 3, "text": "What is a gimbal?"}]
            }
        ])))
    }

    fn app(store: Arc<MemoryStore>) -> Router {
        build_router(AppState::new(QuestionRepository::new(store)))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_keywords(id: &str, body: &str) -> Request<Body> {
        Request::post(format!("/questions/{}/keywords", id))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn greeting_is_plain_text() {
        let response = app(sample_store()).oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Hello, World!");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(app(sample_store()), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn list_questions_flattens_and_fills_keywords() {
        let (status, body) = send(app(sample_store()), get("/questions")).await;

        assert_eq!(status, StatusCode::OK);
        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[2]["question_id"], 3);
        assert_eq!(questions[2]["keywords"], json!([]));
        assert!(questions.iter().all(|q| q.get("_id").is_none()));
    }

    #[tokio::test]
    async fn list_questions_store_failure_is_500() {
        let (status, body) = send(app(Arc::new(MemoryStore::offline())), get("/questions")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn get_question_by_id() {
        let (status, body) = send(app(sample_store()), get("/questions/2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "What is yaw?");

        let (status, body) = send(app(sample_store()), get("/questions/9999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn update_then_list_shows_new_keywords() {
        let store = sample_store();

        let (status, body) = send(
            app(Arc::clone(&store)),
            post_keywords("1", r#"["rotor", "thrust"]"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "success"}));

        let (_, body) = send(app(store), get("/questions")).await;
        assert_eq!(body[0]["keywords"], json!(["rotor", "thrust"]));
        assert_eq!(body[1]["keywords"], json!(["easy"]));
    }

    #[tokio::test]
    async fn repeated_update_reports_no_change() {
        let store = sample_store();

        let (_, first) = send(app(Arc::clone(&store)), post_keywords("2", r#"["hard"]"#)).await;
        let (status, second) = send(app(store), post_keywords("2", r#"["hard"]"#)).await;

        assert_eq!(first, json!({"status": "success"}));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            second,
            json!({"status": "success", "message": "No changes made"})
        );
    }

    #[tokio::test]
    async fn update_unknown_question_is_404() {
        let store = sample_store();
        let (status, body) = send(app(Arc::clone(&store)), post_keywords("9999", "[]")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Question 9999 not found"}));
    }

    #[tokio::test]
    async fn malformed_body_is_400_without_store_access() {
        let store = sample_store();

        for body in ["", "{\"keywords\": []}", "\"rotor\"", "[1]", "not json"] {
            let (status, response) = send(app(Arc::clone(&store)), post_keywords("1", body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert!(response["error"].is_string());
        }
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let store = sample_store();
        let (status, body) = send(app(Arc::clone(&store)), post_keywords("abc", "[]")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("abc"));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_store_failure_is_500() {
        let (status, body) = send(
            app(Arc::new(MemoryStore::offline())),
            post_keywords("1", "[]"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::get("/questions")
            .header("origin", "http://quiz.example")
            .body(Body::empty())
            .unwrap();
        let response = app(sample_store()).oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
