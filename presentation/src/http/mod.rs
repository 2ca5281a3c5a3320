//! HTTP API
//!
//! | Method | Path | Result |
//! |--------|------|--------|
//! | GET | `/` | greeting |
//! | GET | `/health` | `{"status":"ok"}` |
//! | GET | `/questions` | every question, flattened across question sets |
//! | GET | `/questions/{question_id}` | one question |
//! | POST | `/questions/{question_id}/keywords` | replace the question's keywords |
//!
//! Errors are always `{"error": <message>}` with status 400, 404 or 500.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use server::{serve, serve_on};
pub use state::AppState;
