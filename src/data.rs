use serde::{Deserialize, Serialize};

pub use crate::types::{DocumentId, RawLabel, Sentence};

/// One labeled line of a candidate solution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LabeledLine {
    /// Raw section token (resolved through the vocabulary's synonyms).
    pub label: RawLabel,
    /// Line content rendered after the section display-tag.
    pub content: String,
}

/// Raw per-document payload produced by a DocumentStore.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawDocument {
    /// Stable document identifier.
    pub id: DocumentId,
    /// Natural-language problem statement.
    pub prompt: String,
    /// Candidate labeled-line solutions, each an ordered line list.
    #[serde(default)]
    pub candidates: Vec<Vec<LabeledLine>>,
}

/// One line of the flattened corpus.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Rendered sentence (display-tag + content + trailing separator).
    pub text: Sentence,
    /// 0-based position within the document's flattened sequence,
    /// contiguous across all candidates of the document.
    pub local_index: usize,
    /// Source document identifier.
    pub document_id: DocumentId,
    /// Total surviving sentences for the document; identical on every
    /// record of the same document.
    pub document_length: usize,
}

/// Contiguous block occupied by one document inside the flat corpus.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentSpan {
    /// Document the block belongs to.
    pub document_id: DocumentId,
    /// Global index of the document's first record.
    pub start: usize,
    /// Number of records in the block.
    pub len: usize,
}

/// One sampled training triplet.
///
/// Serialized field names follow the trainer contract: the early draw
/// is `y_0`/`t_`, the later draw `y_t`/`t`, and the query `y_T`/`T`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripletSample {
    /// Sentence at the early draw.
    #[serde(rename = "y_0")]
    pub y_early: Sentence,
    /// Sentence at the later draw.
    #[serde(rename = "y_t")]
    pub y_later: Sentence,
    /// Sentence at the (corrected) query position.
    #[serde(rename = "y_T")]
    pub y_query: Sentence,
    /// Early draw offset within the document.
    #[serde(rename = "t_")]
    pub t_early: usize,
    /// Later draw offset within the document.
    #[serde(rename = "t")]
    pub t_later: usize,
    /// Query offset within the document.
    #[serde(rename = "T")]
    pub t_query: usize,
    /// Total sentence count of the queried document.
    pub total_t: usize,
}
