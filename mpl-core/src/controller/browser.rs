//! ``src/controller/browser.rs``
//! ============================================================================
//! # Browser: Applies Actions to Navigation and UI State
//!
//! One action is handled completely (state mutated, filters re-applied,
//! cursor fixed up) before the caller draws and reads the next event.
//!
//! Cursor rules:
//! - moving wraps at both ends and does nothing on an empty list,
//! - every directory change and every filter change puts the cursor on `0`,
//! - going to the parent puts it on the directory just left.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{BOOKMARK_SLOTS, Config};
use crate::controller::actions::Action;
use crate::fs::entry::Entry;
use crate::fs::media::{ExtensionGroups, MediaKind, DISC_IMAGE_EXT};
use crate::model::nav_state::NavState;
use crate::model::ui_state::UIState;
use crate::operators::player::{LaunchRequest, PlayerLauncher};
use crate::view::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    Continue,
    Quit,
}

pub struct Browser<L: PlayerLauncher> {
    nav: NavState,
    ui: UIState,
    groups: ExtensionGroups,
    player_cmd: String,
    bookmarks: [PathBuf; BOOKMARK_SLOTS],
    scroll_step: usize,
    launcher: L,
}

impl<L: PlayerLauncher> Browser<L> {
    pub fn new(config: &Config, width: u16, height: u16, launcher: L) -> Self {
        let browser_config = config.browser_config();
        let home = config.resolved_home();

        info!(
            marker = "BROWSER_INIT",
            home = %home.display(),
            player = %config.player_cmd,
            "Browser created"
        );

        Self {
            nav: NavState::new(&home, &browser_config),
            ui: UIState::new(width, height),
            groups: browser_config.groups,
            player_cmd: config.player_cmd.clone(),
            bookmarks: config.bookmark_paths(),
            scroll_step: config.scroll_step,
            launcher,
        }
    }

    /// List the home directory for the first frame.
    pub fn start(&mut self) {
        if !self.nav.refresh() {
            self.ui.set_message("Home directory is not readable");
        }
        self.ui.reset_position();
    }

    #[must_use]
    pub const fn nav(&self) -> &NavState {
        &self.nav
    }

    #[must_use]
    pub const fn ui(&self) -> &UIState {
        &self.ui
    }

    #[must_use]
    pub const fn groups(&self) -> &ExtensionGroups {
        &self.groups
    }

    #[must_use]
    pub const fn launcher(&self) -> &L {
        &self.launcher
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.ui.viewport
    }

    /// Entry under the cursor; `None` when the list is empty or the cursor is
    /// out of range.
    #[must_use]
    pub fn selected(&self) -> Option<&Entry> {
        self.nav.visible_entries().get(self.ui.cursor)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        debug!(marker = "ACTION_DISPATCH", ?action, "Dispatching");

        match action {
            Action::MoveSelectionDown => self.ui.move_down(self.nav.visible_entries().len()),
            Action::MoveSelectionUp => self.ui.move_up(self.nav.visible_entries().len()),
            Action::GoToParent => self.go_to_parent(),
            Action::EnterSelected => self.enter_selected(),

            Action::SearchInput(c) => {
                self.nav.push_search_char(c);
                self.ui.reset_position();
            }
            Action::SearchBackspace => {
                self.nav.pop_search_char();
                self.ui.reset_position();
            }
            Action::ClearSearch => {
                self.nav.clear_search();
                self.ui.reset_position();
            }
            Action::ToggleHidden => {
                let shown = self.nav.toggle_show_hidden();
                debug!(show_hidden = shown, "Hidden entries toggled");
                self.ui.reset_position();
            }
            Action::ToggleDirectories => {
                let shown = self.nav.toggle_show_dirs();
                debug!(show_dirs = shown, "Directories toggled");
                self.ui.reset_position();
            }

            Action::ScrollRight => {
                let widest = Viewport::widest(self.nav.visible_entries());
                self.ui.scroll_right(self.scroll_step, widest);
            }

            Action::GoHome => {
                self.nav.go_home();
                self.relist();
            }
            Action::GoToBookmark(slot) => self.go_to_bookmark(slot),

            Action::ReloadDirectory => {
                self.nav.refresh();
                self.ui.clear_message();
                if self.ui.cursor >= self.nav.visible_entries().len() {
                    self.ui.reset_position();
                }
            }

            Action::Resize(width, height) => self.ui.resize(width, height),

            Action::Quit => {
                info!(marker = "BROWSER_QUIT", "Quit requested");
                return DispatchResult::Quit;
            }
            Action::NoOp => {}
        }

        DispatchResult::Continue
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Clear the search, list the (new) current directory, cursor to top.
    fn relist(&mut self) {
        self.nav.reset_search_text();
        self.nav.refresh();
        self.ui.reset_position();
    }

    fn go_to_parent(&mut self) {
        let left = self
            .nav
            .current_path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        self.nav.go_up();
        self.nav.set_show_dirs(true);
        self.relist();

        let index = left.as_deref().and_then(|name| self.nav.find_index(name));
        self.ui.place_cursor(index);
    }

    fn go_to_bookmark(&mut self, slot: usize) {
        let Some(target) = self.bookmarks.get(slot).cloned() else {
            return;
        };

        if self.nav.overwrite_path(&target) {
            self.relist();
        } else {
            debug!(slot, target = %target.display(), "Bookmark is not a directory");
        }
    }

    fn enter_selected(&mut self) {
        let Some(entry) = self.selected().cloned() else {
            return;
        };

        match self.groups.kind_of(&entry) {
            MediaKind::Directory => {
                self.nav.enter(&entry);
                self.relist();
            }
            MediaKind::Subtitle => self.toggle_subtitle(&entry),
            _ if entry.extension == DISC_IMAGE_EXT => {
                self.ui
                    .set_message(format!("Disc images are not played: {}", entry.name));
            }
            _ => self.launch(&entry),
        }
    }

    // ------------------------------------------------------------------------
    // Playback
    // ------------------------------------------------------------------------

    fn toggle_subtitle(&mut self, entry: &Entry) {
        if self.ui.subtitle.take().is_some() {
            self.ui.set_message("Subtitle cleared");
        } else {
            self.ui.subtitle = Some(entry.full_path.clone());
            self.ui.set_message(format!("Subtitle: {}", entry.name));
        }
    }

    fn launch(&mut self, entry: &Entry) {
        let request = LaunchRequest::new(
            &self.player_cmd,
            &entry.full_path,
            self.ui.subtitle.as_deref(),
        );

        match self.launcher.launch(&request) {
            Ok(()) => {
                self.ui.launched += 1;
                self.ui.set_message(format!("Playing {}", entry.name));
            }
            Err(e) => {
                warn!(
                    marker = "PLAYER_LAUNCH_FAILED",
                    operation_type = "launch",
                    "{}",
                    e
                );
                self.ui.set_message(e.to_string());
            }
        }
    }
}
