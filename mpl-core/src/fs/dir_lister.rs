//! ``src/fs/dir_lister.rs``
//!
//! # `Directory Lister`: Synchronous Filesystem Listing
//!
//! Reads one directory, classifies each child into an [`Entry`] and returns
//! them in the configured order. Listings are small (one directory's
//! children) and are read on the input thread between two frames.

use std::fs::{self, DirEntry, ReadDir};
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::AppError;
use crate::fs::entry::Entry;
use crate::fs::ordering::EntryOrdering;

#[derive(Debug, Clone, Copy)]
pub struct DirLister {
    ordering: EntryOrdering,
}

impl DirLister {
    #[must_use]
    pub const fn new(ordering: EntryOrdering) -> Self {
        Self { ordering }
    }

    /// List `path`, yielding an empty sequence when it cannot be read.
    ///
    /// Permission errors, missing paths and non-directories all end up here;
    /// callers that must tell "empty" from "unreadable" use [`Self::try_list`].
    #[must_use]
    pub fn list(&self, path: &Path) -> Vec<Entry> {
        self.try_list(path).unwrap_or_else(|e| {
            debug!("Listing degraded to empty: {}", e);
            Vec::new()
        })
    }

    /// List `path`, reporting why it could not be read.
    pub fn try_list(&self, path: &Path) -> Result<Vec<Entry>, AppError> {
        let start_time = Instant::now();

        let read_dir: ReadDir = fs::read_dir(path).map_err(|e| AppError::read_dir(path, e))?;

        let mut entries: Vec<Entry> = Vec::new();
        for entry_result in read_dir {
            let entry: DirEntry = match entry_result {
                Ok(e) => e,

                Err(e) => {
                    // Log the error but continue processing other entries
                    debug!("Skipping unreadable child of {:?}: {}", path, e);
                    continue;
                }
            };

            entries.push(Entry::from_path(&entry.path()));
        }

        self.sort_entries(&mut entries);

        let duration: Duration = start_time.elapsed();
        info!(
            marker = "PERF_DIRECTORY_LIST",
            operation_type = "list_dir",
            duration_us = duration.as_micros() as u64,
            entries = entries.len(),
            "Listed {} in {:?}",
            path.display(),
            duration
        );

        Ok(entries)
    }

    fn sort_entries(&self, entries: &mut [Entry]) {
        let ordering = self.ordering;
        entries.sort_by(|a: &Entry, b: &Entry| ordering.compare(&a.name, &b.name));
    }
}
