//! ``src/view/components/prompt_bar.rs``
//! ============================================================================
//! # `PromptBar`: Message and Search Lines
//!
//! The two bottom rows: the last message from the browser, then the search
//! text behind a `:` prompt. Long search text shows its tail, where typing
//! happens.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

use crate::model::{nav_state::NavState, ui_state::UIState};
use crate::util::window;
use crate::view::theme::StyleSet;

pub const SEARCH_PROMPT: char = ':';

pub struct PromptBar;

impl PromptBar {
    pub fn render_message(frame: &mut Frame<'_>, area: Rect, styles: &StyleSet, ui: &UIState) {
        let text = window::fixed_width(&ui.message, area.width as usize, 0);

        Paragraph::new(text)
            .style(styles.message)
            .render(area, frame.buffer_mut());
    }

    pub fn render_search(frame: &mut Frame<'_>, area: Rect, styles: &StyleSet, nav: &NavState) {
        let prompt = format!("{SEARCH_PROMPT}{}", nav.search_text());
        let text = window::tail(&prompt, area.width as usize);

        Paragraph::new(text)
            .style(styles.search)
            .render(area, frame.buffer_mut());
    }
}
