//! Fixed-width windows over display strings.
//!
//! Widths are terminal columns as reported by `unicode-width`, so a CJK
//! glyph counts as two. Every line handed to the terminal is exactly `width`
//! columns and drawing never has to deal with overflow.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Window `text` starting at column `offset` and pad it to `width` columns.
///
/// The window never starts past `display_width - width`, so scrolling further
/// than the text allows pins the end of the text to the right edge. A wide
/// glyph cut by either edge is replaced by spaces.
#[must_use]
pub fn fixed_width(text: &str, width: usize, offset: usize) -> String {
    let start = offset.min(display_width(text).saturating_sub(width));
    let end = start + width;

    let mut line = String::with_capacity(width);
    let mut used = 0;
    let mut col = 0;

    for c in text.chars() {
        let next = col + char_width(c);

        if col < start {
            if next > start {
                let cut = (next - start).min(width);
                line.extend(std::iter::repeat_n(' ', cut));
                used += cut;
            }
        } else if next <= end {
            line.push(c);
            used += next - col;
        } else {
            break;
        }

        col = next;
    }

    line.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    line
}

/// The last `width` columns of `text`, unpadded.
#[must_use]
pub fn tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();

    for (index, c) in text.char_indices().rev() {
        used += char_width(c);
        if used > width {
            break;
        }
        start = index;
    }

    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_padded() {
        assert_eq!(fixed_width("abc", 6, 0), "abc   ");
    }

    #[test]
    fn long_text_is_windowed_from_offset() {
        assert_eq!(fixed_width("abcdefgh", 3, 2), "cde");
    }

    #[test]
    fn offset_is_clamped_to_last_window() {
        assert_eq!(fixed_width("abcdefgh", 3, 100), "fgh");
    }

    #[test]
    fn offset_is_ignored_when_text_fits() {
        assert_eq!(fixed_width("ab", 4, 3), "ab  ");
    }

    #[test]
    fn counts_columns_not_bytes() {
        assert_eq!(fixed_width("žluťoučký", 4, 1), "luťo");
        assert_eq!(fixed_width("ž", 3, 0).chars().count(), 3);
    }

    #[test]
    fn wide_glyphs_take_two_columns() {
        assert_eq!(display_width("映画.mkv"), 8);
        assert_eq!(fixed_width("映画.mkv", 4, 0), "映画");
        assert_eq!(fixed_width("映画.mkv", 10, 0), "映画.mkv  ");
        assert_eq!(display_width(&fixed_width("映画.mkv", 6, 0)), 6);
    }

    #[test]
    fn wide_glyph_cut_by_an_edge_becomes_blank() {
        assert_eq!(fixed_width("a映画", 2, 0), "a ");
        assert_eq!(fixed_width("映画.mkv", 5, 1), " 画.m");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail("/very/long/path", 5), "/path");
        assert_eq!(tail("abc", 10), "abc");
        assert_eq!(tail("/映画", 4), "映画");
        assert_eq!(tail("/映画", 3), "画");
    }
}
