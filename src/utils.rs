//! Prompt normalization helpers shared by the flattener.

use crate::constants::flatten::{
    NEWLINE_BREAK, NEWLINE_BREAK_REPLACEMENT, SENTENCE_SEPARATOR,
};

/// Rewrite sentence-final line breaks so the boundary pattern matches.
pub fn normalize_line_breaks<T: AsRef<str>>(prompt: T) -> String {
    prompt
        .as_ref()
        .replace(NEWLINE_BREAK, NEWLINE_BREAK_REPLACEMENT)
}

/// Split a prompt into sentence units on the boundary pattern.
///
/// A trailing empty unit produced by a trailing delimiter is dropped.
/// When splitting yields nothing, the whole prompt is one unit, so a
/// document always contributes at least one prompt unit.
pub fn split_prompt_units(prompt: &str, boundary_pattern: &str) -> Vec<String> {
    let mut units: Vec<String> = if boundary_pattern.is_empty() {
        Vec::new()
    } else {
        prompt.split(boundary_pattern).map(str::to_string).collect()
    };
    if units.last().is_some_and(|unit| unit.is_empty()) {
        units.pop();
    }
    if units.is_empty() {
        units.push(prompt.to_string());
    }
    units
}

/// True for units with no semantic content: empty strings and lines
/// holding only the bare separator token.
pub fn is_degenerate(unit: &str) -> bool {
    unit.is_empty() || unit == SENTENCE_SEPARATOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::flatten::DEFAULT_BOUNDARY_PATTERN;

    #[test]
    fn trailing_delimiter_drops_only_the_empty_unit() {
        let units = split_prompt_units("Read input. Sort it. ", DEFAULT_BOUNDARY_PATTERN);
        assert_eq!(units, vec!["Read input", "Sort it."]);
    }

    #[test]
    fn prompt_without_delimiter_is_a_single_unit() {
        let units = split_prompt_units("Print the answer", DEFAULT_BOUNDARY_PATTERN);
        assert_eq!(units, vec!["Print the answer"]);
    }

    #[test]
    fn empty_prompt_still_yields_one_unit() {
        let units = split_prompt_units("", DEFAULT_BOUNDARY_PATTERN);
        assert_eq!(units, vec![String::new()]);
    }

    #[test]
    fn newline_breaks_become_boundary_matches() {
        let normalized = normalize_line_breaks("First line.\nSecond line.");
        assert_eq!(normalized, "First line. Second line.");
        let units = split_prompt_units(&normalized, DEFAULT_BOUNDARY_PATTERN);
        assert_eq!(units, vec!["First line", "Second line."]);
    }

    #[test]
    fn degenerate_units_are_detected() {
        assert!(is_degenerate(""));
        assert!(is_degenerate(" . "));
        assert!(!is_degenerate("[ QUESTION ] Sort the list . "));
    }
}
