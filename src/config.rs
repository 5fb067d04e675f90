use crate::constants::flatten::DEFAULT_BOUNDARY_PATTERN;
use crate::constants::sampler::DEFAULT_SEED;
use crate::sections::SectionVocabulary;

/// Controls how raw documents are flattened into tagged sentences.
#[derive(Clone, Debug)]
pub struct FlattenConfig {
    /// Delimiter used to split prompts into sentence units.
    pub sentence_boundary_pattern: String,
    /// Canonical section labels and their synonym table.
    pub vocabulary: SectionVocabulary,
    /// Opaque tokenizer name forwarded to downstream tokenization;
    /// never consumed here.
    pub tokenizer_identifier: Option<String>,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            sentence_boundary_pattern: DEFAULT_BOUNDARY_PATTERN.to_string(),
            vocabulary: SectionVocabulary::default(),
            tokenizer_identifier: None,
        }
    }
}

/// Top-level sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SamplerConfig {
    /// RNG seed that controls the sampler's internal draw sequence.
    pub seed: u64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}
