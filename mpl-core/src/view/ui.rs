//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Draws the whole screen from the browser state:
//!
//! ```text
//! row 0        status line
//! rows 1..H-2  entry list (cursor-centered viewport)
//! row H-2      message line
//! row H-1      search line
//! ```

use ratatui::prelude::*;
use tracing::{instrument, trace};

use crate::controller::browser::Browser;
use crate::model::ui_state::CHROME_ROWS;
use crate::operators::player::PlayerLauncher;
use crate::view::components::{EntryList, PromptBar, StatusBar};
use crate::view::theme::StyleSet;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub status: Rect,
    pub list: Rect,
    pub message: Rect,
    pub search: Rect,
}

impl ScreenLayout {
    /// Split `area`; on screens shorter than the chrome the list is empty and
    /// the lines that do not fit get a zero-height rect.
    #[must_use]
    pub fn split(area: Rect) -> Self {
        let row = |y: u16| Rect::new(area.x, area.y + y, area.width, 1);
        let none = Rect::new(area.x, area.y, area.width, 0);

        if area.height < CHROME_ROWS {
            return Self {
                status: if area.height > 0 { row(0) } else { none },
                list: none,
                message: none,
                search: if area.height > 1 { row(area.height - 1) } else { none },
            };
        }

        Self {
            status: row(0),
            list: Rect::new(area.x, area.y + 1, area.width, area.height - CHROME_ROWS),
            message: row(area.height - 2),
            search: row(area.height - 1),
        }
    }
}

pub struct UIRenderer {
    styles: StyleSet,
}

impl UIRenderer {
    #[must_use]
    pub const fn new(styles: StyleSet) -> Self {
        Self { styles }
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render<L: PlayerLauncher>(&self, frame: &mut Frame<'_>, browser: &Browser<L>) {
        let screen = ScreenLayout::split(frame.area());
        let (nav, ui) = (browser.nav(), browser.ui());

        let layout = ui
            .viewport
            .layout(nav.visible_entries(), ui.cursor, ui.column_offset);
        trace!(
            above = layout.above.len(),
            below = layout.below.len(),
            has_current = layout.current.is_some(),
            "Viewport laid out"
        );

        StatusBar::render(frame, screen.status, &self.styles, nav, ui);
        EntryList::render(frame, screen.list, &self.styles, browser.groups(), &layout);
        PromptBar::render_message(frame, screen.message, &self.styles, ui);
        PromptBar::render_search(frame, screen.search, &self.styles, nav);
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new(StyleSet::default())
    }
}
