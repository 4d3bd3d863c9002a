//! src/view/theme.rs
//! ============================================================================
//! # Style Sets
//!
//! The terminal's color support is detected once at startup and turned into a
//! [`StyleSet`]; the renderer only ever asks the set for a style and never
//! branches on terminal capabilities itself.
//!
//! | Kind      | Rich (≥16 colors) | Basic (8 colors) | Mono      |
//! |-----------|-------------------|------------------|-----------|
//! | Directory | light blue        | blue             | bold      |
//! | Audio     | light yellow      | yellow           | plain     |
//! | Video     | light green       | green            | plain     |
//! | Subtitle  | light magenta     | magenta          | italic    |

use ratatui::style::{Color, Modifier, Style};
use tracing::{debug, instrument};

use crate::config::PaletteChoice;
use crate::fs::media::MediaKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Rich,
    Basic,
    Mono,
}

impl Palette {
    /// Honor an explicit choice, query the terminal for `auto`.
    #[instrument(level = "debug")]
    pub fn resolve(choice: PaletteChoice) -> Self {
        let palette = match choice {
            PaletteChoice::Auto => Self::from_color_count(crossterm::style::available_color_count()),
            PaletteChoice::Rich => Self::Rich,
            PaletteChoice::Basic => Self::Basic,
            PaletteChoice::Mono => Self::Mono,
        };
        debug!("Using {:?} palette", palette);
        palette
    }

    #[must_use]
    pub const fn from_color_count(colors: u16) -> Self {
        match colors {
            16.. => Self::Rich,
            8..=15 => Self::Basic,
            _ => Self::Mono,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    pub default: Style,
    pub directory: Style,
    pub audio: Style,
    pub video: Style,
    pub playlist: Style,
    pub subtitle: Style,
    pub status: Style,
    pub message: Style,
    pub search: Style,
}

impl StyleSet {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        let fg = |color: Color| Style::default().fg(color);

        match palette {
            Palette::Rich => Self {
                directory: fg(Color::LightBlue),
                audio: fg(Color::LightYellow),
                video: fg(Color::LightGreen),
                subtitle: fg(Color::LightMagenta),
                status: Style::default().add_modifier(Modifier::BOLD),
                message: fg(Color::LightCyan),
                ..Self::plain()
            },

            Palette::Basic => Self {
                directory: fg(Color::Blue),
                audio: fg(Color::Yellow),
                video: fg(Color::Green),
                subtitle: fg(Color::Magenta),
                status: Style::default().add_modifier(Modifier::BOLD),
                message: fg(Color::Cyan),
                ..Self::plain()
            },

            Palette::Mono => Self {
                directory: Style::default().add_modifier(Modifier::BOLD),
                subtitle: Style::default().add_modifier(Modifier::ITALIC),
                status: Style::default().add_modifier(Modifier::BOLD),
                ..Self::plain()
            },
        }
    }

    fn plain() -> Self {
        Self {
            default: Style::default(),
            directory: Style::default(),
            audio: Style::default(),
            video: Style::default(),
            playlist: Style::default(),
            subtitle: Style::default(),
            status: Style::default(),
            message: Style::default(),
            search: Style::default(),
        }
    }

    #[must_use]
    pub const fn entry(&self, kind: MediaKind) -> Style {
        match kind {
            MediaKind::Directory => self.directory,
            MediaKind::Audio => self.audio,
            MediaKind::Video => self.video,
            MediaKind::Playlist => self.playlist,
            MediaKind::Subtitle => self.subtitle,
            MediaKind::Other => self.default,
        }
    }

    /// The highlighted (cursor) variant of `base`.
    #[must_use]
    pub fn cursor(base: Style) -> Style {
        base.add_modifier(Modifier::REVERSED)
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::new(Palette::Mono)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_count_selects_palette() {
        assert_eq!(Palette::from_color_count(256), Palette::Rich);
        assert_eq!(Palette::from_color_count(16), Palette::Rich);
        assert_eq!(Palette::from_color_count(8), Palette::Basic);
        assert_eq!(Palette::from_color_count(2), Palette::Mono);
    }

    #[test]
    fn explicit_choice_skips_detection() {
        assert_eq!(Palette::resolve(PaletteChoice::Mono), Palette::Mono);
        assert_eq!(Palette::resolve(PaletteChoice::Basic), Palette::Basic);
    }

    #[test]
    fn mono_uses_no_colors() {
        let styles = StyleSet::new(Palette::Mono);

        for kind in [
            MediaKind::Directory,
            MediaKind::Audio,
            MediaKind::Video,
            MediaKind::Subtitle,
        ] {
            assert_eq!(styles.entry(kind).fg, None);
        }
        assert!(styles.directory.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn rich_uses_bright_colors() {
        let styles = StyleSet::new(Palette::Rich);

        assert_eq!(styles.entry(MediaKind::Directory).fg, Some(Color::LightBlue));
        assert_eq!(styles.entry(MediaKind::Other), Style::default());
        assert!(
            StyleSet::cursor(styles.video)
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }
}
