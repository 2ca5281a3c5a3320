//! Domain layer for quizbank
//!
//! This crate contains the entities and value objects of the question bank.
//! It has no dependencies on storage, HTTP, or configuration concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A single quiz question identified by a [`QuestionId`] that is unique across
//! the whole corpus. Besides its id, the only field the service understands is
//! its [`Keywords`] list; everything else (text, options, answers) is carried
//! through untouched.
//!
//! ## QuestionSet
//!
//! Questions are never stored on their own. They live as elements of the
//! `questions` array embedded in a [`QuestionSet`] parent document, and a
//! corpus may be spread over any number of such documents.

pub mod core;
pub mod question;

// Re-export commonly used types
pub use core::error::DomainError;
pub use question::{
    entities::{Question, QuestionId},
    keywords::Keywords,
    set::{DOCUMENT_ID_FIELD, KEYWORDS_FIELD, QUESTION_ID_FIELD, QUESTIONS_FIELD, QuestionSet},
};
