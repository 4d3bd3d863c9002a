//! `src/fs/media.rs`
//!
//! Extension groups the player understands and the classification of an
//! entry into one of them.

use std::collections::BTreeSet;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::entry::Entry;

const AUDIO_EXTS: &[&str] = &["aac", "flac", "m4a", "mp3", "ogg", "wav", "wma"];
const VIDEO_EXTS: &[&str] = &["avi", "iso", "mkv", "mov", "mp4", "webm", "wmv"];
const PLAYLIST_EXTS: &[&str] = &["cue", "m3u", "m3u8"];
const SUBTITLE_EXTS: &[&str] = &["ass", "idx", "lrc", "srt", "sub", "vtt"];

/// Disc images need a different player invocation and are never launched.
pub const DISC_IMAGE_EXT: &str = "iso";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Directory,
    Audio,
    Video,
    Playlist,
    Subtitle,
    Other,
}

/// Lower-case extensions per media group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionGroups {
    pub audio: Vec<CompactString>,
    pub video: Vec<CompactString>,
    pub playlist: Vec<CompactString>,
    pub subtitle: Vec<CompactString>,
}

fn owned(exts: &[&str]) -> Vec<CompactString> {
    exts.iter().map(|ext| CompactString::new(ext)).collect()
}

impl Default for ExtensionGroups {
    fn default() -> Self {
        Self {
            audio: owned(AUDIO_EXTS),
            video: owned(VIDEO_EXTS),
            playlist: owned(PLAYLIST_EXTS),
            subtitle: owned(SUBTITLE_EXTS),
        }
    }
}

impl ExtensionGroups {
    /// Union of every group, lowercased, for the extension whitelist.
    #[must_use]
    pub fn whitelist(&self) -> BTreeSet<CompactString> {
        self.audio
            .iter()
            .chain(&self.video)
            .chain(&self.playlist)
            .chain(&self.subtitle)
            .map(|ext| CompactString::new(ext.to_lowercase()))
            .collect()
    }

    #[must_use]
    pub fn kind_of(&self, entry: &Entry) -> MediaKind {
        if entry.is_dir {
            return MediaKind::Directory;
        }

        let ext = entry.extension.as_str();
        let has = |group: &[CompactString]| group.iter().any(|g| g.eq_ignore_ascii_case(ext));

        if has(&self.audio) {
            MediaKind::Audio
        } else if has(&self.video) {
            MediaKind::Video
        } else if has(&self.subtitle) {
            MediaKind::Subtitle
        } else if has(&self.playlist) {
            MediaKind::Playlist
        } else {
            MediaKind::Other
        }
    }
}
