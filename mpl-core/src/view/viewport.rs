//! src/view/viewport.rs
//! ============================================================================
//! # Viewport: Cursor-Centered Window over the Visible List
//!
//! The cursor line sits on a fixed row, `height / 2`. Entries before the
//! cursor are placed upward from it and entries after it downward, each
//! stopping at the list boundary or the viewport edge. Every produced line is
//! exactly `width` characters wide after applying the horizontal offset.
//!
//! The layout never clamps the cursor: an index outside the list simply
//! yields no current line and no neighbours. Wrapping and clamping are the
//! caller's business.

use crate::fs::entry::Entry;
use crate::util::window;

/// One entry placed on a viewport row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub entry: &'a Entry,

    /// Row inside the viewport, `0` at the top.
    pub row: u16,

    /// Windowed and padded display text.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewportLayout<'a> {
    /// Entries above the cursor, nearest first.
    pub above: Vec<PlacedLine<'a>>,

    pub current: Option<PlacedLine<'a>>,

    /// Entries below the cursor, nearest first.
    pub below: Vec<PlacedLine<'a>>,
}

impl<'a> ViewportLayout<'a> {
    /// All placed lines, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &PlacedLine<'a>> {
        self.above
            .iter()
            .rev()
            .chain(self.current.iter())
            .chain(self.below.iter())
    }
}

/// Size of the list area in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub height: u16,
    pub width: u16,
}

impl Viewport {
    #[must_use]
    pub const fn new(height: u16, width: u16) -> Self {
        Self { height, width }
    }

    #[must_use]
    pub const fn cursor_row(&self) -> u16 {
        self.height / 2
    }

    /// Fixed-width display text of `entry`.
    #[must_use]
    pub fn line_text(&self, entry: &Entry, column_offset: usize) -> String {
        window::fixed_width(&entry.display_name(), self.width as usize, column_offset)
    }

    #[must_use]
    pub fn layout<'a>(
        &self,
        visible_entries: &'a [Entry],
        cursor_index: usize,
        column_offset: usize,
    ) -> ViewportLayout<'a> {
        let mut layout = ViewportLayout::default();

        if self.height == 0 || cursor_index >= visible_entries.len() {
            return layout;
        }

        let cursor_row = self.cursor_row();
        let place = |entry: &'a Entry, row: u16| PlacedLine {
            entry,
            row,
            text: self.line_text(entry, column_offset),
        };

        layout.current = Some(place(&visible_entries[cursor_index], cursor_row));

        layout.above = visible_entries[..cursor_index]
            .iter()
            .rev()
            .zip((0..cursor_row).rev())
            .map(|(entry, row)| place(entry, row))
            .collect();

        layout.below = visible_entries[cursor_index + 1..]
            .iter()
            .zip(cursor_row + 1..self.height)
            .map(|(entry, row)| place(entry, row))
            .collect();

        layout
    }

    /// Widest display name among `entries`, in terminal columns.
    #[must_use]
    pub fn widest(entries: &[Entry]) -> usize {
        entries
            .iter()
            .map(|entry| window::display_width(&entry.display_name()))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry::new(PathBuf::from(format!("/m/item{i:02}.mp4")), false))
            .collect()
    }

    fn rows(lines: &[PlacedLine<'_>]) -> Vec<u16> {
        lines.iter().map(|line| line.row).collect()
    }

    #[test]
    fn cursor_row_is_half_height() {
        assert_eq!(Viewport::new(5, 10).cursor_row(), 2);
        assert_eq!(Viewport::new(6, 10).cursor_row(), 3);
        assert_eq!(Viewport::new(1, 10).cursor_row(), 0);
    }

    #[test]
    fn cursor_at_start_fills_below_only() {
        let list = entries(10);
        let layout = Viewport::new(5, 20).layout(&list, 0, 0);

        assert!(layout.above.is_empty());
        assert_eq!(layout.current.as_ref().unwrap().row, 2);
        assert_eq!(layout.current.as_ref().unwrap().entry.name, "item00.mp4");
        assert_eq!(rows(&layout.below), vec![3, 4]);
        assert_eq!(layout.below[1].entry.name, "item02.mp4");
    }

    #[test]
    fn cursor_in_middle_fills_both_sides() {
        let list = entries(10);
        let layout = Viewport::new(5, 20).layout(&list, 5, 0);

        assert_eq!(rows(&layout.above), vec![1, 0]);
        assert_eq!(layout.above[0].entry.name, "item04.mp4");
        assert_eq!(layout.above[1].entry.name, "item03.mp4");
        assert_eq!(rows(&layout.below), vec![3, 4]);
    }

    #[test]
    fn cursor_at_end_fills_above_only() {
        let list = entries(10);
        let layout = Viewport::new(5, 20).layout(&list, 9, 0);

        assert_eq!(rows(&layout.above), vec![1, 0]);
        assert!(layout.below.is_empty());
    }

    #[test]
    fn lines_iterate_top_to_bottom() {
        let list = entries(10);
        let layout = Viewport::new(5, 20).layout(&list, 5, 0);
        let ordered: Vec<u16> = layout.lines().map(|line| line.row).collect();

        assert_eq!(ordered, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_list_has_no_lines() {
        let layout = Viewport::new(5, 20).layout(&[], 0, 0);

        assert!(layout.current.is_none());
        assert_eq!(layout.lines().count(), 0);
    }

    #[test]
    fn out_of_range_cursor_is_no_selection() {
        let list = entries(3);
        let layout = Viewport::new(5, 20).layout(&list, 3, 0);

        assert!(layout.current.is_none());
        assert!(layout.above.is_empty());
        assert!(layout.below.is_empty());
    }

    #[test]
    fn lines_are_fixed_width() {
        let list = vec![
            Entry::new(PathBuf::from("/m/a"), true),
            Entry::new(PathBuf::from("/m/a-very-long-file-name.mkv"), false),
        ];
        let layout = Viewport::new(4, 8).layout(&list, 0, 0);

        assert_eq!(layout.current.as_ref().unwrap().text, "a/      ");
        assert_eq!(layout.below[0].text, "a-very-l");
    }

    #[test]
    fn column_offset_applies_to_every_line() {
        let list = vec![
            Entry::new(PathBuf::from("/m/abcdefghij"), false),
            Entry::new(PathBuf::from("/m/xy"), false),
        ];
        let layout = Viewport::new(4, 4).layout(&list, 0, 3);

        assert_eq!(layout.current.as_ref().unwrap().text, "defg");
        assert_eq!(layout.below[0].text, "xy  ");

        let pinned = Viewport::new(4, 4).layout(&list, 0, 50);
        assert_eq!(pinned.current.as_ref().unwrap().text, "ghij");
    }

    #[test]
    fn widest_counts_directory_separator() {
        let list = vec![
            Entry::new(PathBuf::from("/m/abc"), true),
            Entry::new(PathBuf::from("/m/ab"), false),
        ];

        assert_eq!(Viewport::widest(&list), 4);
        assert_eq!(Viewport::widest(&[]), 0);
    }

    #[test]
    fn wide_names_fit_the_row() {
        let list = vec![
            Entry::new(PathBuf::from("/m/映画"), true),
            Entry::new(PathBuf::from("/m/長い映画の名前.mkv"), false),
        ];
        let layout = Viewport::new(4, 6).layout(&list, 0, 0);

        assert_eq!(Viewport::widest(&list), 18);
        assert_eq!(layout.current.as_ref().unwrap().text, "映画/ ");
        assert_eq!(layout.below[0].text, "長い映");
    }
}
