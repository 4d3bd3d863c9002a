//! ``src/model/filter.rs``
//! ============================================================================
//! # Filter Pipeline
//!
//! Turns a raw directory listing into the visible list. Predicates, in order:
//! 1. the name is not in the ignore-set,
//! 2. directories are shown (`show_dirs`),
//! 3. dotfiles are shown (`show_hidden`),
//! 4. files carry a whitelisted extension (directories always pass),
//! 5. the name matches the search text.
//!
//! The pipeline is re-run in full after every mutation. It only ever drops
//! entries, so the output is an order-preserving subsequence of the input.

use std::collections::BTreeSet;

use compact_str::CompactString;

use crate::config::BrowserConfig;
use crate::fs::entry::Entry;
use crate::util::text_match;

/// The user-adjustable part of filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub show_hidden: bool,

    pub show_dirs: bool,

    /// Lower-case extensions; empty means no restriction.
    pub allowed_extensions: BTreeSet<CompactString>,

    pub search_text: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            show_dirs: true,
            allowed_extensions: BTreeSet::new(),
            search_text: String::new(),
        }
    }
}

impl FilterConfig {
    /// Initial filters as configured for this session.
    #[must_use]
    pub fn from_browser(config: &BrowserConfig) -> Self {
        Self {
            show_hidden: config.show_hidden,
            show_dirs: config.show_dirs,
            allowed_extensions: config.allowed_extensions.clone(),
            search_text: String::new(),
        }
    }
}

/// Holds the fixed ignore-set; everything else comes in per call.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    ignored_names: BTreeSet<CompactString>,
}

impl FilterPipeline {
    #[must_use]
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            ignored_names: config.ignored_names.clone(),
        }
    }

    #[must_use]
    pub fn apply(&self, raw_entries: &[Entry], filter: &FilterConfig) -> Vec<Entry> {
        raw_entries
            .iter()
            .filter(|entry| self.accepts(entry, filter))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn accepts(&self, entry: &Entry, filter: &FilterConfig) -> bool {
        if self.ignored_names.contains(entry.name.as_str()) {
            return false;
        }

        if !filter.show_dirs && entry.is_dir {
            return false;
        }

        if !filter.show_hidden && entry.is_hidden {
            return false;
        }

        if !filter.allowed_extensions.is_empty()
            && !entry.is_dir
            && !filter
                .allowed_extensions
                .contains(entry.extension.as_str())
        {
            return false;
        }

        if !filter.search_text.is_empty() && !text_match::matches(&filter.search_text, &entry.name)
        {
            return false;
        }

        true
    }
}
