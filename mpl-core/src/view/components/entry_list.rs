//! src/view/components/entry_list.rs
//!
//! Draws a [`ViewportLayout`] line by line. Every line is already windowed
//! and padded to the viewport width, so this only picks styles.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

use crate::fs::media::ExtensionGroups;
use crate::view::theme::StyleSet;
use crate::view::viewport::ViewportLayout;

pub struct EntryList;

impl EntryList {
    pub fn render(
        frame: &mut Frame<'_>,
        area: Rect,
        styles: &StyleSet,
        groups: &ExtensionGroups,
        layout: &ViewportLayout<'_>,
    ) {
        let cursor_row = layout.current.as_ref().map(|line| line.row);

        for line in layout.lines() {
            if line.row >= area.height {
                break;
            }

            let base = styles.entry(groups.kind_of(line.entry));
            let style = if Some(line.row) == cursor_row {
                StyleSet::cursor(base)
            } else {
                base
            };

            let row = Rect::new(area.x, area.y + line.row, area.width, 1);
            Paragraph::new(line.text.as_str())
                .style(style)
                .render(row, frame.buffer_mut());
        }
    }
}
