//! JSON-file backed document store
//!
//! Holds one collection of question set documents in memory and, when a data
//! file is configured, writes the whole collection back after every change.

use super::matcher::{first_match, match_document};
use async_trait::async_trait;
use quizbank_application::{
    Document, DocumentStore, Filter, PositionalSet, StoreError, UpdateResult,
};
use quizbank_domain::DOCUMENT_ID_FIELD;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

/// Document store over a single named collection
///
/// Reads share the lock; `update_one` takes it exclusively for the whole
/// locate, patch and persist sequence, so each update is atomic and updates
/// are applied one at a time (the later writer wins on the same element).
///
/// Updates run on a spawned task that owns the collection state. A caller
/// that stops waiting (for example on a timeout) never leaves memory and the
/// data file out of step: the task still persists or reverts.
pub struct JsonDocumentStore {
    collection: String,
    state: Arc<CollectionState>,
}

/// Documents and their backing file, shared with in-flight update tasks
struct CollectionState {
    documents: RwLock<Vec<Document>>,
    data_file: Option<PathBuf>,
}

impl JsonDocumentStore {
    /// Create a store that lives only in memory
    pub fn in_memory(collection: impl Into<String>, documents: Vec<Document>) -> Self {
        Self::with_state(collection, documents, None)
    }

    /// Create an in-memory store from raw JSON values
    ///
    /// Every value must be a JSON object.
    pub fn from_values(
        collection: impl Into<String>,
        values: Vec<Value>,
    ) -> Result<Self, StoreError> {
        let documents = into_documents(Value::Array(values))?;
        Ok(Self::in_memory(collection, documents))
    }

    /// Open a store backed by a JSON data file
    ///
    /// The file holds either an array of documents or a single document.
    /// A missing file starts an empty collection unless `require_file` is
    /// set; the file is created on the first successful update.
    pub async fn open(
        collection: impl Into<String>,
        path: impl AsRef<Path>,
        require_file: bool,
    ) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let collection = collection.into();

        let documents = match tokio::fs::read(path).await {
            Ok(bytes) => {
                let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
                    StoreError::CorruptDocument(format!("{}: {}", path.display(), e))
                })?;
                into_documents(value)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !require_file => {
                warn!(
                    "Data file {} not found, starting with an empty collection",
                    path.display()
                );
                Vec::new()
            }
            Err(e) => {
                return Err(StoreError::ConnectionError(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        info!(
            "Opened collection {} with {} documents from {}",
            collection,
            documents.len(),
            path.display()
        );

        Ok(Self::with_state(collection, documents, Some(path.to_path_buf())))
    }

    fn with_state(
        collection: impl Into<String>,
        documents: Vec<Document>,
        data_file: Option<PathBuf>,
    ) -> Self {
        Self {
            collection: collection.into(),
            state: Arc::new(CollectionState {
                documents: RwLock::new(with_document_ids(documents)),
                data_file,
            }),
        }
    }

    /// Number of documents in the collection
    pub async fn len(&self) -> usize {
        self.state.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.documents.read().await.is_empty()
    }
}

impl CollectionState {
    /// Locate, patch and persist under the write lock
    async fn update_one(
        &self,
        filter: &Filter,
        update: &PositionalSet,
    ) -> Result<UpdateResult, StoreError> {
        let Filter::ArrayElementEq { array, .. } = filter else {
            return Err(StoreError::InvalidUpdate(
                "positional update requires an array element filter".to_string(),
            ));
        };
        if *array != update.array {
            return Err(StoreError::InvalidUpdate(format!(
                "positional update on `{}` does not match filter array `{}`",
                update.array, array
            )));
        }

        let mut documents = self.documents.write().await;

        let Some(found) = first_match(filter, &documents) else {
            return Ok(UpdateResult::new(0, 0));
        };
        let Some(element_index) = found.element else {
            return Ok(UpdateResult::new(0, 0));
        };

        let element = element_mut(&mut documents, found.document, array, element_index)?;
        if element.get(&update.field) == Some(&update.value) {
            return Ok(UpdateResult::new(1, 0));
        }
        let previous = element.insert(update.field.clone(), update.value.clone());

        if let Err(e) = self.persist(&documents).await {
            warn!("Reverting update after persistence failure: {}", e);
            let element = element_mut(&mut documents, found.document, array, element_index)?;
            match previous {
                Some(value) => element.insert(update.field.clone(), value),
                None => element.remove(&update.field),
            };
            return Err(e);
        }

        Ok(UpdateResult::new(1, 1))
    }

    /// Write the whole collection to the data file (temp file + rename)
    async fn persist(&self, documents: &[Document]) -> Result<(), StoreError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };

        let bytes = serde_json::to_vec_pretty(documents)
            .map_err(|e| StoreError::Io(format!("cannot serialize collection: {}", e)))?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Io(format!("{}: {}", parent.display(), e)))?;
        }

        let tmp = tmp_path(path);
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, path)
            .await
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;

        debug!("Persisted {} documents to {}", documents.len(), path.display());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonDocumentStore {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn find(&self, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let documents = self.state.documents.read().await;
        Ok(documents
            .iter()
            .filter(|document| match_document(filter, document).is_some())
            .cloned()
            .collect())
    }

    async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError> {
        let documents = self.state.documents.read().await;
        Ok(first_match(filter, &documents).map(|m| documents[m.document].clone()))
    }

    async fn update_one(
        &self,
        filter: &Filter,
        update: &PositionalSet,
    ) -> Result<UpdateResult, StoreError> {
        let state = Arc::clone(&self.state);
        let filter = filter.clone();
        let update = update.clone();

        // Dropping the join handle detaches the task; it still runs to completion
        tokio::spawn(async move { state.update_one(&filter, &update).await })
            .await
            .map_err(|e| {
                error!("Update task failed: {}", e);
                StoreError::Io(format!("update task failed: {}", e))
            })?
    }
}

fn element_mut<'a>(
    documents: &'a mut [Document],
    document: usize,
    array: &str,
    element: usize,
) -> Result<&'a mut Map<String, Value>, StoreError> {
    documents
        .get_mut(document)
        .and_then(|d| d.get_mut(array))
        .and_then(Value::as_array_mut)
        .and_then(|elements| elements.get_mut(element))
        .and_then(Value::as_object_mut)
        .ok_or_else(|| {
            StoreError::CorruptDocument(format!(
                "element {} of `{}` in document {} is not an object",
                element, array, document
            ))
        })
}

fn into_documents(value: Value) -> Result<Vec<Document>, StoreError> {
    let values = match value {
        Value::Array(values) => values,
        object @ Value::Object(_) => vec![object],
        other => {
            return Err(StoreError::CorruptDocument(format!(
                "expected an array of documents, got {}",
                other
            )));
        }
    };

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(document) => Ok(document),
            _ => Err(StoreError::CorruptDocument(format!(
                "document {} is not an object",
                index
            ))),
        })
        .collect()
}

/// Give every document a store-internal id if it lacks one
fn with_document_ids(mut documents: Vec<Document>) -> Vec<Document> {
    for document in &mut documents {
        if !document.contains_key(DOCUMENT_ID_FIELD) {
            document.insert(
                DOCUMENT_ID_FIELD.to_string(),
                Value::String(uuid::Uuid::new_v4().to_string()),
            );
        }
    }
    documents
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
