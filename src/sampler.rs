//! Triplet sampling over the flat corpus.
//!
//! Each call reads the immutable corpus and an independent random
//! draw; the only mutable state is the seeded internal RNG. Callers
//! needing full determinism inject their own generator through
//! [`TripletSampler::sample_with`].

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::config::SamplerConfig;
use crate::constants::sampler::{
    MIN_QUERY_OFFSET, SECOND_OF_DOCUMENT_ADVANCE, START_OF_DOCUMENT_ADVANCE,
};
use crate::corpus::FlatCorpus;
use crate::data::TripletSample;
use crate::errors::DatasetError;

/// Samples `(y_0, y_t, y_T)` triplets from a [`FlatCorpus`].
pub struct TripletSampler {
    corpus: Arc<FlatCorpus>,
    rng: Mutex<StdRng>,
}

impl TripletSampler {
    /// Create a sampler over `corpus`, seeded from the config.
    pub fn new(corpus: Arc<FlatCorpus>, config: &SamplerConfig) -> Self {
        Self {
            corpus,
            rng: Mutex::new(StdRng::seed_from_u64(config.seed)),
        }
    }

    /// Addressable size: the final record is excluded as a query anchor.
    pub fn len(&self) -> usize {
        self.corpus.record_count().saturating_sub(1)
    }

    /// True when the corpus has no addressable query positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Corpus backing this sampler.
    pub fn corpus(&self) -> &FlatCorpus {
        &self.corpus
    }

    /// Sample a triplet at `global_index` with the internal seeded RNG.
    pub fn sample(&self, global_index: usize) -> Result<TripletSample, DatasetError> {
        let mut rng = self.rng.lock().expect("sampler rng poisoned");
        self.sample_with(&mut *rng, global_index)
    }

    /// Sample a triplet at `global_index` with a caller-supplied RNG.
    ///
    /// Queries landing on a document's first two records are advanced
    /// (+2 for local offset 0, +1 for offset 1, applied once) so the
    /// corrected query offset `T` is at least 2. The correction is
    /// inherited behavior: callers addressing the first two positions
    /// of a document receive the triplet of the advanced index, and
    /// documents shorter than three sentences are never queryable at
    /// their start.
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        global_index: usize,
    ) -> Result<TripletSample, DatasetError> {
        let len = self.len();
        let record = self
            .corpus
            .record(global_index)
            .filter(|_| global_index < len)
            .ok_or(DatasetError::OutOfRange {
                index: global_index,
                len,
            })?;
        let corrected = match record.local_index {
            0 => global_index + START_OF_DOCUMENT_ADVANCE,
            1 => global_index + SECOND_OF_DOCUMENT_ADVANCE,
            _ => global_index,
        };
        let record = self
            .corpus
            .record(corrected)
            .ok_or(DatasetError::InsufficientContext {
                index: corrected,
                available: 0,
            })?;
        let t_query = record.local_index;
        if t_query < MIN_QUERY_OFFSET {
            return Err(DatasetError::InsufficientContext {
                index: corrected,
                available: t_query,
            });
        }
        let span = self
            .corpus
            .span_of(corrected)
            .ok_or(DatasetError::OutOfRange {
                index: corrected,
                len,
            })?;

        // Two distinct offsets drawn uniformly without replacement
        // from {0, .., T-1}; the smaller is the early point.
        let drawn = index::sample(rng, t_query, 2);
        let (t_early, t_later) = match (drawn.index(0), drawn.index(1)) {
            (a, b) if a < b => (a, b),
            (a, b) => (b, a),
        };

        let records = self.corpus.records();
        Ok(TripletSample {
            y_early: records[span.start + t_early].text.clone(),
            y_later: records[span.start + t_later].text.clone(),
            y_query: record.text.clone(),
            t_early,
            t_later,
            t_query,
            total_t: record.document_length,
        })
    }
}
