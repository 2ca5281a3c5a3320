//! Question subdomain.
//!
//! - [`entities::Question`]: one question embedded in a question set
//! - [`keywords::Keywords`]: the ordered tag list attached to a question
//! - [`set::QuestionSet`]: the parent document owning a `questions` array

pub mod entities;
pub mod keywords;
pub mod set;
