/// Constants used by prompt normalization and sentence rendering.
pub mod flatten {
    /// Separator token appended to every rendered sentence.
    pub const SENTENCE_SEPARATOR: &str = " . ";
    /// Default delimiter used to split prompts into sentence units.
    pub const DEFAULT_BOUNDARY_PATTERN: &str = ". ";
    /// Prompt line break rewritten before splitting.
    pub const NEWLINE_BREAK: &str = ".\n";
    /// Replacement for [`NEWLINE_BREAK`] so the boundary pattern matches.
    pub const NEWLINE_BREAK_REPLACEMENT: &str = ". ";
}

/// Constants used by the section vocabulary and synonym resolution.
pub mod sections {
    use crate::types::SectionId;

    /// Vocabulary position of the prompt (question) section.
    pub const QUESTION_SECTION: SectionId = 0;
    /// Vocabulary position of the solution-header section.
    pub const SOLUTION_SECTION: SectionId = 1;

    /// Canonical section names in id order.
    pub const DEFAULT_SECTION_NAMES: &[&str] = &[
        "question",
        "solution",
        "break_statement",
        "class_statement",
        "continue_statement",
        "def_statement",
        "elif_statement",
        "else_statement",
        "expression_statement",
        "for_statement",
        "if_statement",
        "import_statement",
        "return_statement",
        "while_statement",
    ];

    /// Raw label tokens mapped to their canonical section names.
    pub const DEFAULT_SYNONYMS: &[(&str, &str)] = &[
        ("if", "if_statement"),
        ("break", "break_statement"),
        ("class", "class_statement"),
        ("continue", "continue_statement"),
        ("def", "def_statement"),
        ("elif", "elif_statement"),
        ("else", "else_statement"),
        ("expression", "expression_statement"),
        ("for", "for_statement"),
        ("import", "import_statement"),
        ("return", "return_statement"),
        ("while", "while_statement"),
    ];
}

/// Constants used by triplet sampling runtime behavior.
pub mod sampler {
    /// Smallest query offset that leaves room for two distinct earlier draws.
    pub const MIN_QUERY_OFFSET: usize = 2;
    /// Index advance applied when a query lands on a document's first record.
    pub const START_OF_DOCUMENT_ADVANCE: usize = 2;
    /// Index advance applied when a query lands on a document's second record.
    pub const SECOND_OF_DOCUMENT_ADVANCE: usize = 1;
    /// Default RNG seed for samplers built without an explicit seed.
    pub const DEFAULT_SEED: u64 = 42;
}
