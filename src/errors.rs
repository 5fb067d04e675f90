use std::io;

use thiserror::Error;

use crate::types::{DocumentId, StoreId};

/// Error type for configuration, document loading, and sampling failures.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("document store '{store_id}' is unavailable: {reason}")]
    StoreUnavailable { store_id: StoreId, reason: String },
    #[error("document '{document_id}' produced no sentences after filtering")]
    EmptyDocument { document_id: DocumentId },
    #[error(
        "index {index} needs two distinct earlier sentences in its document, found {available}"
    )]
    InsufficientContext { index: usize, available: usize },
    #[error("index {index} is out of range for a corpus with {len} addressable records")]
    OutOfRange { index: usize, len: usize },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed document payload: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}
