//! Presentation layer for quizbank
//!
//! This crate contains the HTTP API (router, handlers, error mapping) and
//! the command line definitions of the server binary.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, build_router, serve, serve_on};
