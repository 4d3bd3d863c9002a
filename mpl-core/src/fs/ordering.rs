//! `src/fs/ordering.rs`
//!
//! Listing order strategy, chosen once at startup.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Requested sort mode, as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Natural,
    Lexical,
}

/// Name comparator used by the directory lister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrdering {
    /// Numeric-aware: `ep2` sorts before `ep10`.
    Natural,
    /// Plain code-point order; the degraded mode when natural order is
    /// not compiled in.
    Lexicographic,
}

impl EntryOrdering {
    /// Resolve the requested mode against what this build supports.
    #[must_use]
    pub fn select(mode: SortMode) -> Self {
        match mode {
            SortMode::Natural if Self::natural_available() => Self::Natural,
            SortMode::Natural => {
                tracing::warn!(
                    marker = "SORT_DEGRADED",
                    "natural ordering not compiled in, using lexicographic order"
                );
                Self::Lexicographic
            }
            SortMode::Lexical => Self::Lexicographic,
        }
    }

    #[must_use]
    pub const fn natural_available() -> bool {
        cfg!(feature = "natural-sort")
    }

    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            #[cfg(feature = "natural-sort")]
            Self::Natural => natord::compare(a, b),
            #[cfg(not(feature = "natural-sort"))]
            Self::Natural => a.cmp(b),
            Self::Lexicographic => a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(ordering: EntryOrdering, names: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = names.iter().map(ToString::to_string).collect();
        out.sort_by(|a, b| ordering.compare(a, b));
        out
    }

    #[test]
    fn lexicographic_is_code_point_order() {
        assert_eq!(
            sorted(EntryOrdering::Lexicographic, &["ep10", "ep2", "Ep1"]),
            vec!["Ep1", "ep10", "ep2"]
        );
    }

    #[cfg(feature = "natural-sort")]
    #[test]
    fn natural_orders_numbers_by_value() {
        assert_eq!(
            sorted(EntryOrdering::Natural, &["ep10.mkv", "ep2.mkv", "ep1.mkv"]),
            vec!["ep1.mkv", "ep2.mkv", "ep10.mkv"]
        );
    }

    #[cfg(feature = "natural-sort")]
    #[test]
    fn natural_is_selected_when_available() {
        assert_eq!(EntryOrdering::select(SortMode::Natural), EntryOrdering::Natural);
        assert_eq!(
            EntryOrdering::select(SortMode::Lexical),
            EntryOrdering::Lexicographic
        );
    }
}
