//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Everything the Browser Responds To
//!
//! Raw terminal events are mapped to an `Action` by the key handler; the
//! browser then applies it to the navigation and UI state.

/// Represents a high-level action that the application can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor down, wrapping to the top.
    MoveSelectionDown,

    /// Move the cursor up, wrapping to the bottom.
    MoveSelectionUp,

    /// Go to the parent directory.
    GoToParent,

    /// Enter the selected directory, toggle a subtitle or play a file.
    EnterSelected,

    /// Remove the last search character.
    SearchBackspace,

    /// Append a character to the search text.
    SearchInput(char),

    ClearSearch,

    ToggleHidden,

    ToggleDirectories,

    /// Scroll every line right by the configured step.
    ScrollRight,

    GoHome,

    /// Jump to bookmark slot `0..4`.
    GoToBookmark(usize),

    /// Re-list the current directory.
    ReloadDirectory,

    /// Terminal resized to (width, height).
    Resize(u16, u16),

    Quit,

    /// Event consumed, nothing to do.
    NoOp,
}
