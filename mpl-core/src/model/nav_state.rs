//! ``src/model/nav_state.rs``
//! ============================================================================
//! # `NavState`: Current Directory, Filters and Listings
//!
//! Owns the current/previous/home paths, the filter configuration, the raw
//! listing and the visible (filtered) list. Whenever the raw listing or a
//! filter changes through this type, the visible list is recomputed before
//! the call returns. The one exception is [`NavState::reset_search_text`],
//! whose caller re-applies explicitly.
//!
//! Path changes do not list anything by themselves; the caller follows them
//! with [`NavState::refresh`]. A directory that cannot be read leaves both
//! listings as they were and puts `current_path` back on the last directory
//! that was read successfully.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::BrowserConfig;
use crate::fs::dir_lister::DirLister;
use crate::fs::entry::Entry;
use crate::fs::path;
use crate::model::filter::{FilterConfig, FilterPipeline};

#[derive(Debug, Clone)]
pub struct NavState {
    current_path: PathBuf,

    previous_path: PathBuf,

    home_path: PathBuf,

    /// Last directory whose listing succeeded.
    listed_path: PathBuf,

    filter: FilterConfig,

    raw_entries: Vec<Entry>,

    visible_entries: Vec<Entry>,

    lister: DirLister,

    pipeline: FilterPipeline,
}

impl NavState {
    /// Start at `home`, an existing directory (see
    /// [`crate::config::Config::resolved_home`]). Nothing is listed until the
    /// first [`Self::refresh`].
    #[must_use]
    pub fn new(home: &Path, config: &BrowserConfig) -> Self {
        let home_path = path::normalize(home);

        Self {
            current_path: home_path.clone(),
            previous_path: home_path.clone(),
            listed_path: home_path.clone(),
            home_path,
            filter: FilterConfig::from_browser(config),
            raw_entries: Vec::new(),
            visible_entries: Vec::new(),
            lister: DirLister::new(config.ordering),
            pipeline: FilterPipeline::new(config),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    #[must_use]
    pub fn previous_path(&self) -> &Path {
        &self.previous_path
    }

    #[must_use]
    pub fn home_path(&self) -> &Path {
        &self.home_path
    }

    #[must_use]
    pub const fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.filter.search_text
    }

    #[must_use]
    pub fn raw_entries(&self) -> &[Entry] {
        &self.raw_entries
    }

    #[must_use]
    pub fn visible_entries(&self) -> &[Entry] {
        &self.visible_entries
    }

    // ------------------------------------------------------------------------
    // Listing
    // ------------------------------------------------------------------------

    /// Re-list the current directory and re-apply the filters.
    ///
    /// Returns `false` when the directory could not be read; the previous
    /// raw listing is kept (and re-filtered) and `current_path` returns to it.
    pub fn refresh(&mut self) -> bool {
        match self.lister.try_list(&self.current_path) {
            Ok(entries) => {
                self.raw_entries = entries;
                self.listed_path = self.current_path.clone();
                self.apply_filters();
                true
            }

            Err(e) => {
                warn!(
                    marker = "NAV_REFRESH_FAILED",
                    operation_type = "refresh",
                    "{}; staying in {}",
                    e,
                    self.listed_path.display()
                );
                self.current_path = self.listed_path.clone();
                // Filters may have changed alongside the failed path change.
                self.apply_filters();
                false
            }
        }
    }

    /// Recompute the visible list from the raw listing.
    pub fn apply_filters(&mut self) {
        self.visible_entries = self.pipeline.apply(&self.raw_entries, &self.filter);
        debug!(
            raw = self.raw_entries.len(),
            visible = self.visible_entries.len(),
            "Filters applied"
        );
    }

    // ------------------------------------------------------------------------
    // Path changes (caller refreshes)
    // ------------------------------------------------------------------------

    /// Step into `name` relative to the current directory; `".."` goes up.
    ///
    /// `name` is the raw file name, which need not be valid UTF-8.
    pub fn change_directory<P: AsRef<Path>>(&mut self, name: P) {
        self.previous_path = self.current_path.clone();
        self.current_path = path::normalize(&self.current_path.join(name));
    }

    /// Step into the directory `entry` names.
    pub fn enter(&mut self, entry: &Entry) {
        match entry.full_path.file_name() {
            Some(name) => self.change_directory(name),
            None => debug!("Entry {} has no file name", entry.full_path.display()),
        }
    }

    /// Step to the parent directory.
    pub fn go_up(&mut self) {
        self.change_directory("..");
    }

    pub fn go_home(&mut self) {
        self.current_path = self.home_path.clone();
        self.previous_path = self.home_path.clone();
    }

    /// Jump to `target` if it is an existing directory; otherwise do nothing.
    ///
    /// Returns whether the jump happened.
    pub fn overwrite_path(&mut self, target: &Path) -> bool {
        if !target.is_dir() {
            debug!("Ignoring jump to non-directory {}", target.display());
            return false;
        }

        self.previous_path = self.current_path.clone();
        self.current_path = path::normalize(target);
        true
    }

    /// Index of the entry called `name` in the visible list.
    ///
    /// If several entries share the name, the last one wins.
    #[must_use]
    pub fn find_index(&self, name: &str) -> Option<usize> {
        self.visible_entries
            .iter()
            .rposition(|entry| entry.name == name)
    }

    // ------------------------------------------------------------------------
    // Filter mutations
    // ------------------------------------------------------------------------

    /// Clear the search text without recomputing the visible list.
    pub fn reset_search_text(&mut self) {
        self.filter.search_text.clear();
    }

    pub fn clear_search(&mut self) {
        self.reset_search_text();
        self.apply_filters();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.search_text.push(c);
        self.apply_filters();
    }

    pub fn pop_search_char(&mut self) {
        if self.filter.search_text.pop().is_some() {
            self.apply_filters();
        }
    }

    pub fn toggle_show_hidden(&mut self) -> bool {
        self.filter.show_hidden = !self.filter.show_hidden;
        self.apply_filters();
        self.filter.show_hidden
    }

    pub fn toggle_show_dirs(&mut self) -> bool {
        self.filter.show_dirs = !self.filter.show_dirs;
        self.apply_filters();
        self.filter.show_dirs
    }

    pub fn set_show_dirs(&mut self, show: bool) {
        if self.filter.show_dirs != show {
            self.filter.show_dirs = show;
            self.apply_filters();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::ordering::EntryOrdering;
    use std::fs;
    use tempfile::TempDir;

    fn names(state: &NavState) -> Vec<&str> {
        state
            .visible_entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect()
    }

    fn config() -> BrowserConfig {
        BrowserConfig {
            ordering: EntryOrdering::Lexicographic,
            ..BrowserConfig::default()
        }
    }

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("A")).unwrap();
        fs::write(tmp.path().join("b.mp4"), b"").unwrap();
        fs::write(tmp.path().join(".hidden.mp4"), b"").unwrap();
        fs::write(tmp.path().join("readme.txt"), b"").unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        tmp
    }

    #[test]
    fn default_filters_then_toggle_hidden() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        assert!(state.refresh());

        assert_eq!(names(&state), vec!["A", "b.mp4"]);

        state.toggle_show_hidden();
        assert_eq!(names(&state), vec![".hidden.mp4", "A", "b.mp4"]);
        assert!(state.raw_entries().iter().any(|e| e.name == ".git"));
    }

    #[test]
    fn change_directory_and_back_up() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        state.refresh();

        state.change_directory("A");
        assert_eq!(state.current_path(), path::normalize(&tmp.path().join("A")));
        assert_eq!(state.previous_path(), path::normalize(tmp.path()));
        assert!(state.refresh());
        assert!(state.visible_entries().is_empty());

        state.go_up();
        state.refresh();
        assert_eq!(state.current_path(), path::normalize(tmp.path()));
        assert_eq!(state.find_index("A"), Some(0));
    }

    #[cfg(unix)]
    #[test]
    fn enter_uses_the_raw_file_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = TempDir::new().unwrap();
        let film = tmp.path().join(OsStr::from_bytes(b"Film\xff"));
        fs::create_dir(&film).unwrap();
        fs::write(film.join("inner.mkv"), b"").unwrap();

        let mut state = NavState::new(tmp.path(), &config());
        state.refresh();
        let entry = state.visible_entries()[0].clone();
        assert_eq!(entry.name, "Film\u{fffd}");

        state.enter(&entry);
        assert!(state.refresh());
        assert_eq!(state.current_path(), path::normalize(&film));
        assert_eq!(names(&state), vec!["inner.mkv"]);
    }

    #[test]
    fn unreadable_directory_keeps_previous_listing() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        state.refresh();
        let before = state.visible_entries().to_vec();

        state.change_directory("does-not-exist");
        assert!(!state.refresh());

        assert_eq!(state.visible_entries(), before.as_slice());
        assert_eq!(state.current_path(), path::normalize(tmp.path()));
    }

    #[test]
    fn overwrite_path_ignores_files_and_missing_paths() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        let start = state.current_path().to_path_buf();

        assert!(!state.overwrite_path(&tmp.path().join("b.mp4")));
        assert!(!state.overwrite_path(&tmp.path().join("nope")));
        assert_eq!(state.current_path(), start);

        assert!(state.overwrite_path(&tmp.path().join("A")));
        assert_eq!(state.current_path(), path::normalize(&tmp.path().join("A")));
    }

    #[test]
    fn go_home_resets_both_paths() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());

        state.change_directory("A");
        state.go_home();

        assert_eq!(state.current_path(), state.home_path());
        assert_eq!(state.previous_path(), state.home_path());
    }

    #[test]
    fn search_text_filters_and_reset_waits_for_reapply() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        state.refresh();

        for c in "mp4".chars() {
            state.push_search_char(c);
        }
        assert_eq!(names(&state), vec!["b.mp4"]);

        state.reset_search_text();
        assert_eq!(state.search_text(), "");
        assert_eq!(names(&state), vec!["b.mp4"]);

        state.apply_filters();
        assert_eq!(names(&state), vec!["A", "b.mp4"]);
    }

    #[test]
    fn pop_search_char_widens_the_list() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        state.refresh();

        state.push_search_char('b');
        state.push_search_char('x');
        assert!(state.visible_entries().is_empty());

        state.pop_search_char();
        assert_eq!(names(&state), vec!["b.mp4"]);
    }

    #[test]
    fn find_index_missing_and_duplicate_names() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        state.refresh();
        assert_eq!(state.find_index("nope"), None);

        let dup = state.visible_entries()[1].clone();
        state.visible_entries.push(dup);
        assert_eq!(state.find_index("b.mp4"), Some(2));
    }

    #[test]
    fn hiding_directories_and_restoring() {
        let tmp = fixture();
        let mut state = NavState::new(tmp.path(), &config());
        state.refresh();

        assert!(!state.toggle_show_dirs());
        assert_eq!(names(&state), vec!["b.mp4"]);

        state.set_show_dirs(true);
        assert_eq!(names(&state), vec!["A", "b.mp4"]);
    }
}
