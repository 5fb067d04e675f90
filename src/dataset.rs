//! Session-level dataset facade.

use std::sync::Arc;

use crate::config::{FlattenConfig, SamplerConfig};
use crate::corpus::FlatCorpus;
use crate::data::TripletSample;
use crate::errors::DatasetError;
use crate::sampler::TripletSampler;
use crate::source::DocumentStore;
use rand::Rng;

/// Owns the flattened corpus and its sampler for one training session.
pub struct TripletDataset {
    corpus: Arc<FlatCorpus>,
    sampler: TripletSampler,
}

impl TripletDataset {
    /// Wrap an already-flattened corpus.
    pub fn new(corpus: Arc<FlatCorpus>, config: &SamplerConfig) -> Self {
        let sampler = TripletSampler::new(Arc::clone(&corpus), config);
        Self { corpus, sampler }
    }

    /// Load documents from a store, flatten them, and build the sampler.
    ///
    /// This is the one blocking load of a session; everything after it
    /// is in-memory.
    pub fn from_store(
        store: &dyn DocumentStore,
        flatten: &FlattenConfig,
        sampler: &SamplerConfig,
    ) -> Result<Self, DatasetError> {
        let documents = store.load()?;
        let corpus = Arc::new(FlatCorpus::flatten(&documents, flatten)?);
        Ok(Self::new(corpus, sampler))
    }

    /// Addressable size (the final record is excluded as a query anchor).
    pub fn len(&self) -> usize {
        self.sampler.len()
    }

    /// True when no query positions are addressable.
    pub fn is_empty(&self) -> bool {
        self.sampler.is_empty()
    }

    /// The session's flattened corpus.
    pub fn corpus(&self) -> &FlatCorpus {
        &self.corpus
    }

    /// Sample a triplet with the internal seeded RNG.
    pub fn sample(&self, global_index: usize) -> Result<TripletSample, DatasetError> {
        self.sampler.sample(global_index)
    }

    /// Sample a triplet with a caller-supplied RNG.
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        global_index: usize,
    ) -> Result<TripletSample, DatasetError> {
        self.sampler.sample_with(rng, global_index)
    }
}
