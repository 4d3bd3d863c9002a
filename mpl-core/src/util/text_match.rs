//! Word-subset search used by the incremental filter.
//!
//! The query is split on spaces; every non-empty word must occur somewhere in
//! the text. Word order does not matter and repeated words count once.

use std::collections::BTreeSet;

/// True when every space-separated word of `query` is a substring of `text`,
/// ignoring case. An empty query matches everything.
#[must_use]
pub fn matches(query: &str, text: &str) -> bool {
    let query = query.to_lowercase();
    let text = text.to_lowercase();

    let words: BTreeSet<&str> = query
        .split(' ')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .collect();

    words.iter().all(|word| text.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_must_be_substrings() {
        assert!(matches("ban ana", "banana"));
        assert!(!matches("ban xyz", "banana"));
        assert!(matches("a b", "xaybz"));
    }

    #[test]
    fn not_a_character_subsequence() {
        assert!(!matches("ab", "xaybz"));
    }

    #[test]
    fn case_is_ignored_both_ways() {
        assert!(matches("MATRIX", "the.matrix.1999.mkv"));
        assert!(matches("matrix", "The.Matrix.1999.MKV"));
    }

    #[test]
    fn order_and_duplicates_do_not_matter() {
        assert!(matches("1999 matrix matrix", "The.Matrix.1999.mkv"));
    }

    #[test]
    fn empty_and_blank_queries_match_everything() {
        assert!(matches("", "anything"));
        assert!(matches("   ", "anything"));
        assert!(matches("a  b", "ab"));
    }
}
