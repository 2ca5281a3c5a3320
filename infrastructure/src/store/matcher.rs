//! Filter evaluation against in-memory documents.

use quizbank_application::{Document, Filter};

/// Position of a filter match: the document and, for array element filters,
/// the first element that satisfied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match {
    pub document: usize,
    pub element: Option<usize>,
}

/// Evaluate a filter against a single document.
///
/// Returns `None` when the document does not match. For
/// [`Filter::ArrayElementEq`] the index of the first matching element is
/// reported so a positional update can patch that exact element. Values
/// compare exactly as stored: the integer `1` never matches `1.0` or `"1"`.
pub(crate) fn match_document(filter: &Filter, document: &Document) -> Option<Option<usize>> {
    match filter {
        Filter::All => Some(None),
        Filter::ArrayElementEq {
            array,
            field,
            value,
        } => {
            let elements = document.get(array)?.as_array()?;
            elements
                .iter()
                .position(|element| {
                    element
                        .get(field)
                        .is_some_and(|candidate| candidate == value)
                })
                .map(Some)
        }
    }
}

/// First match in store order
pub(crate) fn first_match(filter: &Filter, documents: &[Document]) -> Option<Match> {
    documents.iter().enumerate().find_map(|(index, document)| {
        match_document(filter, document).map(|element| Match {
            document: index,
            element,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn by_id(id: i64) -> Filter {
        Filter::array_element_eq("questions", "question_id", id)
    }

    #[test]
    fn all_matches_every_document() {
        assert_eq!(match_document(&Filter::All, &doc(json!({}))), Some(None));
    }

    #[test]
    fn array_filter_reports_element_position() {
        let document = doc(json!({
            "questions": [{"question_id": 1}, {"question_id": 2}, {"question_id": 3}]
        }));
        assert_eq!(match_document(&by_id(2), &document), Some(Some(1)));
        assert_eq!(match_document(&by_id(4), &document), None);
    }

    #[test]
    fn array_filter_ignores_missing_or_scalar_array() {
        assert_eq!(match_document(&by_id(1), &doc(json!({"_id": 1}))), None);
        assert_eq!(
            match_document(&by_id(1), &doc(json!({"questions": "oops"}))),
            None
        );
    }

    #[test]
    fn array_filter_skips_non_object_elements() {
        let document = doc(json!({"questions": [7, null, {"question_id": 1}]}));
        assert_eq!(match_document(&by_id(1), &document), Some(Some(2)));
    }

    #[test]
    fn first_match_follows_store_order() {
        let documents = vec![
            doc(json!({"questions": [{"question_id": 1}]})),
            doc(json!({"questions": [{"question_id": 5}, {"question_id": 6}]})),
        ];
        assert_eq!(
            first_match(&by_id(6), &documents),
            Some(Match {
                document: 1,
                element: Some(1)
            })
        );
        assert_eq!(first_match(&by_id(9), &documents), None);
    }

    #[test]
    fn integer_id_does_not_match_float_or_string() {
        let document = doc(json!({
            "questions": [{"question_id": 1.0}, {"question_id": "1"}]
        }));
        assert_eq!(match_document(&by_id(1), &document), None);
    }
}
