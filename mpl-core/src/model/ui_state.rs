//! ``src/model/ui_state.rs``
//!
//! Presentation state owned by the controller: cursor, horizontal offset,
//! viewport size, the message line and the selected subtitle.

use std::path::PathBuf;

use crate::view::viewport::Viewport;

/// Rows used by the status, message and search lines.
pub const CHROME_ROWS: u16 = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UIState {
    /// Index into the visible list. Not clamped when the list shrinks.
    pub cursor: usize,

    pub column_offset: usize,

    /// List area; the full terminal minus [`CHROME_ROWS`].
    pub viewport: Viewport,

    pub message: String,

    /// Subtitle passed to the next player launch.
    pub subtitle: Option<PathBuf>,

    /// Players started this session.
    pub launched: usize,
}

impl UIState {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let mut state = Self::default();
        state.resize(width, height);
        state
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(height.saturating_sub(CHROME_ROWS), width);
        self.reset_position();
    }

    pub const fn reset_position(&mut self) {
        self.cursor = 0;
        self.column_offset = 0;
    }

    /// Move down one entry, wrapping to the top. No-op on an empty list.
    pub const fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    /// Move up one entry, wrapping to the bottom. No-op on an empty list.
    pub const fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 || self.cursor > len {
            len - 1
        } else {
            self.cursor - 1
        };
    }

    /// Put the cursor on `index` if there is one, otherwise on the top.
    pub fn place_cursor(&mut self, index: Option<usize>) {
        self.cursor = index.unwrap_or(0);
    }

    /// Scroll right by `step` columns, back to `0` once nothing is hidden
    /// past the right edge.
    pub fn scroll_right(&mut self, step: usize, widest: usize) {
        let overflow = widest.saturating_sub(self.viewport.width as usize);
        self.column_offset = if self.column_offset >= overflow {
            0
        } else {
            (self.column_offset + step.max(1)).min(overflow)
        };
    }

    pub fn set_message<S: Into<String>>(&mut self, message: S) {
        self.message = message.into();
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
    }
}
