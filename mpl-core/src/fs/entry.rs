//! `src/fs/entry.rs`
//! ============================================================
//! One classified child of a listed directory.
//!
//! An `Entry` is built once per directory read and never mutated; the
//! listing that produced it owns it until the next refresh replaces the
//! whole sequence.

use std::ffi::OsStr;
use std::fs;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    // Absolute path of the child.
    pub full_path: PathBuf,

    // File name including extension.
    pub name: CompactString,

    // Lower-case extension without the dot, empty when there is none.
    pub extension: CompactString,

    pub is_dir: bool,

    // Dotfile.
    pub is_hidden: bool,
}

impl Entry {
    /// Build an entry from already known parts.
    #[must_use]
    pub fn new(full_path: PathBuf, is_dir: bool) -> Self {
        let name = CompactString::new(
            full_path
                .file_name()
                .map(OsStr::to_string_lossy)
                .unwrap_or_default(),
        );

        let extension = full_path
            .extension()
            .map(|ext: &OsStr| CompactString::new(ext.to_string_lossy().to_lowercase()))
            .unwrap_or_default();

        let is_hidden = name.starts_with('.');

        Self {
            full_path,
            name,
            extension,
            is_dir,
            is_hidden,
        }
    }

    /// Ask the filesystem for the directory flag.
    ///
    /// Symlinks are followed; a dangling link is classified as a file.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let is_dir = fs::metadata(path).is_ok_and(|meta| meta.is_dir());

        Self::new(path.to_path_buf(), is_dir)
    }

    /// Name as shown in the list: directories carry a trailing separator.
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut shown = self.name.to_string();
        if self.is_dir {
            shown.push(MAIN_SEPARATOR);
        }
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extension_is_lowercased_last_suffix() {
        let entry = Entry::new(PathBuf::from("/media/clip.final.MP4"), false);

        assert_eq!(entry.name, "clip.final.MP4");
        assert_eq!(entry.extension, "mp4");
        assert!(!entry.is_hidden);
    }

    #[test]
    fn dotfile_without_suffix_has_no_extension() {
        let entry = Entry::new(PathBuf::from("/home/u/.config"), true);

        assert!(entry.is_hidden);
        assert_eq!(entry.extension, "");
    }

    #[test]
    fn hidden_media_file_keeps_extension() {
        let entry = Entry::new(PathBuf::from("/x/.hidden.mp4"), false);

        assert!(entry.is_hidden);
        assert_eq!(entry.extension, "mp4");
    }

    #[test]
    fn display_name_marks_directories() {
        let dir = Entry::new(PathBuf::from("/x/movies"), true);
        let file = Entry::new(PathBuf::from("/x/a.mkv"), false);

        assert_eq!(dir.display_name(), format!("movies{MAIN_SEPARATOR}"));
        assert_eq!(file.display_name(), "a.mkv");
    }

    #[test]
    fn from_path_reads_directory_flag() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("song.flac"), b"").unwrap();

        assert!(Entry::from_path(&tmp.path().join("sub")).is_dir);
        assert!(!Entry::from_path(&tmp.path().join("song.flac")).is_dir);
        assert!(!Entry::from_path(&tmp.path().join("missing")).is_dir);
    }
}
