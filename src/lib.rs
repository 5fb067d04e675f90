#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Flattening and sampling configuration types.
pub mod config;
/// Centralized constants used across flattening and sampling.
pub mod constants;
/// Document flattening and the immutable flat corpus.
pub mod corpus;
/// Raw document, sentence record, and triplet sample types.
pub mod data;
/// Session-level dataset facade.
pub mod dataset;
/// Triplet sampling over the flat corpus.
pub mod sampler;
/// Section vocabulary and synonym resolution.
pub mod sections;
/// Document store interfaces and built-in stores.
pub mod source;
/// Shared type aliases.
pub mod types;
/// Prompt normalization helpers.
pub mod utils;

mod errors;

pub use config::{FlattenConfig, SamplerConfig};
pub use corpus::FlatCorpus;
pub use data::{DocumentSpan, LabeledLine, RawDocument, SentenceRecord, TripletSample};
pub use dataset::TripletDataset;
pub use errors::DatasetError;
pub use sampler::TripletSampler;
pub use sections::SectionVocabulary;
pub use source::{DocumentStore, InMemoryStore, JsonDirStore};
pub use types::{DocumentId, RawLabel, SectionId, SectionName, Sentence, StoreId};
