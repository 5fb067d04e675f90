//! Document flattening and the immutable flat corpus.
//!
//! Ownership model:
//! - [`FlatCorpus::flatten`] runs once at load time and owns the full
//!   in-memory sequence; nothing mutates the corpus afterwards.
//! - Per-document [`DocumentSpan`] blocks make a record's document
//!   start and length recoverable without offset arithmetic.

use tracing::debug;

use crate::config::FlattenConfig;
use crate::constants::flatten::SENTENCE_SEPARATOR;
use crate::data::{DocumentSpan, RawDocument, SentenceRecord};
use crate::errors::DatasetError;
use crate::types::Sentence;
use crate::utils::{is_degenerate, normalize_line_breaks, split_prompt_units};

/// Globally indexed, immutable concatenation of all documents' sentences.
#[derive(Clone, Debug, Default)]
pub struct FlatCorpus {
    records: Vec<SentenceRecord>,
    spans: Vec<DocumentSpan>,
}

impl FlatCorpus {
    /// Flatten raw documents into the corpus, in input order.
    ///
    /// Builds in two passes per document: the surviving sentence list
    /// is collected first, then records are materialized with the
    /// final count already known.
    pub fn flatten(
        documents: &[RawDocument],
        config: &FlattenConfig,
    ) -> Result<Self, DatasetError> {
        let mut records = Vec::new();
        let mut spans = Vec::with_capacity(documents.len());
        for document in documents {
            let sentences = expand_document(document, config)?;
            let start = records.len();
            let total = sentences.len();
            debug!(
                document_id = %document.id,
                sentences = total,
                "flattened document"
            );
            for (local_index, text) in sentences.into_iter().enumerate() {
                records.push(SentenceRecord {
                    text,
                    local_index,
                    document_id: document.id.clone(),
                    document_length: total,
                });
            }
            spans.push(DocumentSpan {
                document_id: document.id.clone(),
                start,
                len: total,
            });
        }
        Ok(Self { records, spans })
    }

    /// All sentence records in global order.
    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }

    /// Record at a global index.
    pub fn record(&self, global_index: usize) -> Option<&SentenceRecord> {
        self.records.get(global_index)
    }

    /// Total number of sentence records.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when no document contributed any records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-document spans in corpus order.
    pub fn spans(&self) -> &[DocumentSpan] {
        &self.spans
    }

    /// Span of the document containing a global index.
    pub fn span_of(&self, global_index: usize) -> Option<&DocumentSpan> {
        if global_index >= self.records.len() {
            return None;
        }
        let position = self
            .spans
            .partition_point(|span| span.start + span.len <= global_index);
        self.spans.get(position)
    }
}

/// Expand one document into its surviving sentence list.
///
/// Each candidate's full list is the prompt units followed by its own
/// emitted units; the document list concatenates candidates in order.
/// A document without candidates contributes its prompt units alone.
fn expand_document(
    document: &RawDocument,
    config: &FlattenConfig,
) -> Result<Vec<Sentence>, DatasetError> {
    let vocabulary = &config.vocabulary;
    let prompt_units = render_prompt_units(document, config);
    let mut kept: Vec<Sentence> = Vec::new();
    if document.candidates.is_empty() {
        kept.extend(
            prompt_units
                .iter()
                .filter(|unit| !is_degenerate(unit.as_str()))
                .cloned(),
        );
    }
    for (ordinal, candidate) in document.candidates.iter().enumerate() {
        let mut units = prompt_units.clone();
        units.push(format!(
            "{} {ordinal}{SENTENCE_SEPARATOR}",
            vocabulary.solution_tag()
        ));
        for line in candidate {
            let tag = vocabulary
                .resolve(&line.label)
                .and_then(|section| vocabulary.display_tag(section));
            let Some(tag) = tag else {
                // Truncation policy: an unrecognized label ends this
                // candidate; the partial output already emitted is kept.
                debug!(
                    document_id = %document.id,
                    candidate = ordinal,
                    label = %line.label,
                    "unrecognized section label truncates candidate"
                );
                break;
            };
            units.push(format!("{tag} {}{SENTENCE_SEPARATOR}", line.content));
        }
        kept.extend(units.into_iter().filter(|unit| !is_degenerate(unit)));
    }
    if kept.is_empty() {
        return Err(DatasetError::EmptyDocument {
            document_id: document.id.clone(),
        });
    }
    Ok(kept)
}

/// Normalize and split the prompt, tag the first unit, append separators.
fn render_prompt_units(document: &RawDocument, config: &FlattenConfig) -> Vec<Sentence> {
    let normalized = normalize_line_breaks(&document.prompt);
    let mut units = split_prompt_units(&normalized, &config.sentence_boundary_pattern);
    units[0] = format!("{} {}", config.vocabulary.question_tag(), units[0]);
    units
        .into_iter()
        .map(|unit| format!("{unit}{SENTENCE_SEPARATOR}"))
        .collect()
}
