//! Question set parent document

use super::entities::Question;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field holding the store-internal document identifier
pub const DOCUMENT_ID_FIELD: &str = "_id";
/// Array field of a question set that embeds its questions
pub const QUESTIONS_FIELD: &str = "questions";
/// Identifier field of an embedded question
pub const QUESTION_ID_FIELD: &str = "question_id";
/// Keyword list field of an embedded question
pub const KEYWORDS_FIELD: &str = "keywords";

/// A parent document owning an embedded array of questions (Entity)
///
/// The document id is opaque and store-specific; it never leaves the
/// repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            id: None,
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Drop the document identifier and keep the embedded questions
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::entities::QuestionId;
    use serde_json::json;

    #[test]
    fn test_deserialize_parent_document() {
        let set: QuestionSet = serde_json::from_value(json!({
            "_id": "set-1",
            "title": "Drone basics",
            "questions": [
                {"question_id": 1, "keywords": []},
                {"question_id": 2, "keywords": ["easy"]}
            ]
        }))
        .unwrap();

        assert_eq!(set.id, Some(json!("set-1")));
        assert_eq!(set.len(), 2);
        let ids: Vec<_> = set.into_questions().iter().map(|q| q.question_id).collect();
        assert_eq!(ids, vec![QuestionId::new(1), QuestionId::new(2)]);
    }

    #[test]
    fn test_missing_questions_array_is_empty() {
        let set: QuestionSet = serde_json::from_value(json!({"_id": 5})).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_serialize_omits_missing_id() {
        let set = QuestionSet::new(vec![Question::new(1, ["a"])]);
        let value = serde_json::to_value(&set).unwrap();
        assert!(value.get(DOCUMENT_ID_FIELD).is_none());
        assert_eq!(value[QUESTIONS_FIELD][0][KEYWORDS_FIELD], json!(["a"]));
        assert_eq!(value[QUESTIONS_FIELD][0][QUESTION_ID_FIELD], json!(1));
    }
}
