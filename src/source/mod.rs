//! Document store interfaces and built-in stores.
//!
//! Ownership model:
//! - `DocumentStore` is the corpus-facing interface: at most one
//!   blocking `load` per session, at corpus construction time.
//! - Stores own their retrieval mechanism; the flattener only sees
//!   the returned `RawDocument` list.

use std::sync::Arc;

use crate::data::RawDocument;
use crate::errors::DatasetError;
use crate::types::StoreId;

/// Directory-backed JSON document store.
pub mod json_dir;

pub use json_dir::JsonDirStore;

/// Corpus-facing document store interface.
///
/// `load` returns every document the store knows about, in a stable
/// order; for a fixed backing state the output is deterministic.
pub trait DocumentStore: Send + Sync {
    /// Stable store identifier used in errors and logging.
    fn id(&self) -> &str;
    /// Load all documents. Called once, at corpus construction.
    fn load(&self) -> Result<Vec<RawDocument>, DatasetError>;
}

/// In-memory document store for tests and small corpora.
pub struct InMemoryStore {
    id: StoreId,
    documents: Arc<Vec<RawDocument>>,
}

impl InMemoryStore {
    /// Create an in-memory store from prebuilt documents.
    pub fn new(id: impl Into<StoreId>, documents: Vec<RawDocument>) -> Self {
        Self {
            id: id.into(),
            documents: Arc::new(documents),
        }
    }
}

impl DocumentStore for InMemoryStore {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<RawDocument>, DatasetError> {
        Ok(self.documents.as_ref().clone())
    }
}
