//! Section vocabulary and synonym resolution.
//!
//! Vocabulary order is semantic: a label's position defines its
//! [`SectionId`], and positions 0 and 1 are reserved for the prompt
//! (question) and solution-header sections.

use indexmap::{IndexMap, IndexSet};

use crate::constants::sections::{
    DEFAULT_SECTION_NAMES, DEFAULT_SYNONYMS, QUESTION_SECTION, SOLUTION_SECTION,
};
use crate::errors::DatasetError;
use crate::types::{RawLabel, SectionId, SectionName};

/// Ordered set of canonical section labels plus a raw-token synonym table.
#[derive(Clone, Debug)]
pub struct SectionVocabulary {
    names: IndexSet<SectionName>,
    tags: Vec<String>,
    synonyms: IndexMap<RawLabel, SectionName>,
}

impl SectionVocabulary {
    /// Build a vocabulary from canonical names (in id order) and synonyms.
    ///
    /// Fails when fewer than two names are given (the question and
    /// solution positions must exist), when a name repeats, or when a
    /// synonym maps to a name outside the vocabulary.
    pub fn new<N, S>(names: N, synonyms: S) -> Result<Self, DatasetError>
    where
        N: IntoIterator<Item = SectionName>,
        S: IntoIterator<Item = (RawLabel, SectionName)>,
    {
        let mut unique = IndexSet::new();
        for name in names {
            if !unique.insert(name.clone()) {
                return Err(DatasetError::Configuration(format!(
                    "duplicate section name '{name}'"
                )));
            }
        }
        if unique.len() <= SOLUTION_SECTION {
            return Err(DatasetError::Configuration(
                "section vocabulary needs at least question and solution entries".into(),
            ));
        }
        let mut table = IndexMap::new();
        for (raw, canonical) in synonyms {
            if !unique.contains(&canonical) {
                return Err(DatasetError::Configuration(format!(
                    "synonym '{raw}' maps to unknown section '{canonical}'"
                )));
            }
            table.insert(raw, canonical);
        }
        let tags = unique
            .iter()
            .map(|name| format!("[ {} ]", name.to_uppercase()))
            .collect();
        Ok(Self {
            names: unique,
            tags,
            synonyms: table,
        })
    }

    /// Number of canonical labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the vocabulary has no labels.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a raw label token to a section id.
    ///
    /// Synonyms take precedence; a token that is already canonical
    /// resolves to itself. Unrecognized tokens are `None` — callers
    /// treat that as a normal control-flow value, not an error.
    pub fn resolve(&self, raw: &str) -> Option<SectionId> {
        let canonical = self.synonyms.get(raw).map(String::as_str).unwrap_or(raw);
        self.names.get_index_of(canonical)
    }

    /// Canonical name for a section id.
    pub fn name(&self, id: SectionId) -> Option<&str> {
        self.names.get_index(id).map(String::as_str)
    }

    /// Bracketed uppercase display tag for a section id.
    pub fn display_tag(&self, id: SectionId) -> Option<&str> {
        self.tags.get(id).map(String::as_str)
    }

    /// Display tag for the prompt (question) section.
    pub fn question_tag(&self) -> &str {
        &self.tags[QUESTION_SECTION]
    }

    /// Display tag for the solution-header section.
    pub fn solution_tag(&self) -> &str {
        &self.tags[SOLUTION_SECTION]
    }
}

impl Default for SectionVocabulary {
    fn default() -> Self {
        Self::new(
            DEFAULT_SECTION_NAMES.iter().map(|name| name.to_string()),
            DEFAULT_SYNONYMS
                .iter()
                .map(|(raw, canonical)| (raw.to_string(), canonical.to_string())),
        )
        .expect("default section vocabulary is valid")
    }
}
