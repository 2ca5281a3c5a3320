//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level validation errors
//! - [`string::clip`]: shortens values quoted in error messages

pub mod error;
pub mod string;
