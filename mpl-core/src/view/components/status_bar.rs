//! src/view/components/status_bar.rs
//!
//! Top line: the current path followed by state tags, trimmed from the left
//! so the end of the line always stays visible.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::model::{nav_state::NavState, ui_state::UIState};
use crate::util::window;
use crate::view::theme::StyleSet;

pub struct StatusBar;

impl StatusBar {
    /// Path plus `[EMPTY]`, `[SUB]`, `[mpv:N]`, `(NO DIR.)`, `(HIDDEN)` as they
    /// apply, joined by two spaces.
    #[must_use]
    pub fn text(nav: &NavState, ui: &UIState) -> String {
        let mut parts = vec![nav.current_path().display().to_string()];

        if nav.visible_entries().is_empty() {
            parts.push("[EMPTY]".to_string());
        }
        if ui.subtitle.is_some() {
            parts.push("[SUB]".to_string());
        }
        if ui.launched > 0 {
            parts.push(format!("[mpv:{}]", ui.launched));
        }
        if !nav.filter().show_dirs {
            parts.push("(NO DIR.)".to_string());
        }
        if nav.filter().show_hidden {
            parts.push("(HIDDEN)".to_string());
        }

        parts.join("  ")
    }

    pub fn render(frame: &mut Frame<'_>, area: Rect, styles: &StyleSet, nav: &NavState, ui: &UIState) {
        let status = Self::text(nav, ui);
        let text = window::tail(&status, area.width as usize);

        Paragraph::new(text)
            .style(styles.status)
            .render(area, frame.buffer_mut());
    }
}
