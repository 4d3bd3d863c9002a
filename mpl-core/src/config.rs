//! src/config.rs
//! ============================================================================
//! # Config: Browser Configuration (file + environment)
//!
//! Settings come from three layers, later layers winning:
//! 1. built-in defaults,
//! 2. an optional TOML file at `$XDG_CONFIG_HOME/mpl/config.toml` (or the
//!    platform equivalent from [`directories`](https://docs.rs/directories)),
//! 3. environment variables:
//!
//! | Variable            | Meaning                 | Default                    |
//! |---------------------|-------------------------|----------------------------|
//! | `MPVL_MPV_CMD`      | player command template | `mpv --force-window`       |
//! | `MPVL_HOME`         | home directory          | the user's home directory  |
//! | `MPVL_BOOKMARK_1`   | bookmark on F1          | the user's videos dir      |
//! | `MPVL_BOOKMARK_2`   | bookmark on F2          | the user's music dir       |
//! | `MPVL_BOOKMARK_3`   | bookmark on F3          | the user's downloads dir   |
//! | `MPVL_BOOKMARK_4`   | bookmark on F4          | the user's desktop dir     |
//!
//! The file is only ever read; nothing is written back.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?.with_env(|key| std::env::var(key).ok());
//! ```

use std::collections::BTreeSet;
use std::path::PathBuf;

use compact_str::CompactString;
use directories::{BaseDirs, ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use tokio::fs as TokioFs;
use tracing::{debug, info, warn};

use crate::error::AppError;
use crate::fs::media::ExtensionGroups;
use crate::fs::ordering::{EntryOrdering, SortMode};

pub const ENV_PLAYER_CMD: &str = "MPVL_MPV_CMD";
pub const ENV_HOME: &str = "MPVL_HOME";
pub const ENV_BOOKMARK_PREFIX: &str = "MPVL_BOOKMARK_";

pub const DEFAULT_PLAYER_CMD: &str = "mpv --force-window";
pub const BOOKMARK_SLOTS: usize = 4;

/// Color palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaletteChoice {
    /// Detect the color depth at startup.
    #[default]
    Auto,

    Rich,

    Basic,

    Mono,
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_cmd: String,

    pub home: Option<PathBuf>,

    /// Up to four bookmark directories, F1..F4 in order.
    pub bookmarks: Vec<PathBuf>,

    pub show_hidden: bool,

    pub show_dirs: bool,

    pub extensions: ExtensionGroups,

    /// Names never shown, whatever the filters say.
    pub ignored_names: Vec<CompactString>,

    pub sort: SortMode,

    pub palette: PaletteChoice,

    /// Columns added per horizontal-scroll key press.
    pub scroll_step: usize,

    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_cmd: DEFAULT_PLAYER_CMD.to_string(),
            home: None,
            bookmarks: Vec::new(),
            show_hidden: false,
            show_dirs: true,
            extensions: ExtensionGroups::default(),
            ignored_names: vec![
                CompactString::const_new("lost+found"),
                CompactString::const_new(".git"),
            ],
            sort: SortMode::Natural,
            palette: PaletteChoice::Auto,
            scroll_step: 8,
            log_level: "info".to_string(),
        }
    }
}

/// Immutable browsing rules handed to the lister and the filter pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub ignored_names: BTreeSet<CompactString>,

    /// Lower-case extensions allowed by default; empty means unrestricted.
    pub allowed_extensions: BTreeSet<CompactString>,

    pub groups: ExtensionGroups,

    pub ordering: EntryOrdering,

    pub show_hidden: bool,

    pub show_dirs: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Config::default().browser_config()
    }
}

impl Config {
    /// Loads config from the TOML file if present, or returns defaults.
    pub async fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            info!(
                "No config file found at {}, using default configuration",
                path.display()
            );
            return Ok(Self::default());
        }

        info!("Loading config from {}", path.display());
        let text = TokioFs::read_to_string(&path)
            .await
            .map_err(|source| AppError::ConfigIo {
                path: path.clone(),
                source,
            })?;

        Ok(Self::from_toml_str(&text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(text)?)
    }

    /// Apply environment overrides through `lookup` (usually `std::env::var`).
    #[must_use]
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(cmd) = non_empty(ENV_PLAYER_CMD) {
            self.player_cmd = cmd;
        }

        if let Some(home) = non_empty(ENV_HOME) {
            self.home = Some(PathBuf::from(home));
        }

        for slot in 0..BOOKMARK_SLOTS {
            let key = format!("{ENV_BOOKMARK_PREFIX}{}", slot + 1);
            if let Some(dir) = non_empty(&key) {
                if self.bookmarks.len() <= slot {
                    self.bookmarks.resize(slot + 1, PathBuf::new());
                }
                self.bookmarks[slot] = PathBuf::from(dir);
            }
        }

        self
    }

    /// Home directory: configured value, else the user's home, else `.`.
    #[must_use]
    pub fn home_path(&self) -> PathBuf {
        self.home
            .clone()
            .filter(|home| !home.as_os_str().is_empty())
            .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// [`Self::home_path`] checked against the filesystem.
    ///
    /// A home that is not an existing directory is logged and replaced by the
    /// user's home, then the working directory, then `/`.
    #[must_use]
    pub fn resolved_home(&self) -> PathBuf {
        let home = self.home_path();
        if home.is_dir() {
            return home;
        }

        let fallback = BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .filter(|dir| dir.is_dir())
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"));

        warn!(
            marker = "HOME_NOT_A_DIRECTORY",
            operation_type = "config",
            home = %home.display(),
            fallback = %fallback.display(),
            "Configured home is not a directory"
        );
        fallback
    }

    /// Bookmark targets for F1..F4, with platform defaults for unset slots.
    #[must_use]
    pub fn bookmark_paths(&self) -> [PathBuf; BOOKMARK_SLOTS] {
        let home = self.home_path();
        let user_dirs = UserDirs::new();
        let default_for = |slot: usize| -> PathBuf {
            let dir = user_dirs.as_ref().and_then(|dirs| match slot {
                0 => dirs.video_dir(),
                1 => dirs.audio_dir(),
                2 => dirs.download_dir(),
                _ => dirs.desktop_dir(),
            });
            dir.map_or_else(|| home.clone(), std::path::Path::to_path_buf)
        };

        std::array::from_fn(|slot| {
            self.bookmarks
                .get(slot)
                .filter(|dir| !dir.as_os_str().is_empty())
                .cloned()
                .unwrap_or_else(|| default_for(slot))
        })
    }

    #[must_use]
    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            ignored_names: self.ignored_names.iter().cloned().collect(),
            allowed_extensions: self.extensions.whitelist(),
            groups: self.extensions.clone(),
            ordering: EntryOrdering::select(self.sort),
            show_hidden: self.show_hidden,
            show_dirs: self.show_dirs,
        }
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Directory for log files.
    #[must_use]
    pub fn log_dir() -> PathBuf {
        Self::project_dirs().map_or_else(
            || std::env::temp_dir().join("mpl"),
            |dirs| dirs.data_local_dir().join("logs"),
        )
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "mpl")
    }
}
