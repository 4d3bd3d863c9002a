// mpl-core/src/controller/handlers/key_handler.rs
// Terminal event to action mapping

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use super::*;
use crate::config::BOOKMARK_SLOTS;
use crate::controller::actions::Action;

pub struct KeyHandler {
    bindings: HashMap<KeyEvent, Action>,
}

impl Default for KeyHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyHandler {
    pub fn new() -> Self {
        let mut bindings = HashMap::with_capacity(24);

        // Arrow keys
        bindings.insert(arrow_key(KeyCode::Up), Action::MoveSelectionUp);
        bindings.insert(arrow_key(KeyCode::Down), Action::MoveSelectionDown);
        bindings.insert(arrow_key(KeyCode::Left), Action::GoToParent);
        bindings.insert(arrow_key(KeyCode::Right), Action::EnterSelected);
        bindings.insert(enter_key(), Action::EnterSelected);

        // Search text editing
        bindings.insert(backspace_key(), Action::SearchBackspace);
        bindings.insert(delete_key(), Action::ClearSearch);

        // Bookmarks on F1..F4
        for slot in 0..BOOKMARK_SLOTS {
            bindings.insert(function_key(slot as u8 + 1), Action::GoToBookmark(slot));
        }

        bindings.insert(function_key(5), Action::ReloadDirectory);
        bindings.insert(function_key(6), Action::ToggleDirectories);
        bindings.insert(function_key(7), Action::ToggleHidden);
        bindings.insert(function_key(8), Action::GoHome);
        bindings.insert(function_key(9), Action::ScrollRight);

        // Quit
        bindings.insert(function_key(12), Action::Quit);
        bindings.insert(escape_key(), Action::Quit);
        bindings.insert(ctrl('c'), Action::Quit);

        Self { bindings }
    }

    /// Map a terminal event; anything unbound becomes [`Action::NoOp`].
    pub fn map_event(&self, event: &Event) -> Action {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                self.map_key(*key_event)
            }
            Event::Resize(width, height) => Action::Resize(*width, *height),
            _ => Action::NoOp,
        }
    }

    pub fn map_key(&self, key_event: KeyEvent) -> Action {
        trace!(
            marker = "KEY_HANDLER_KEY_EVENT",
            operation_type = "input_handling",
            "KeyHandler: key {:?}",
            key_event
        );

        // Bindings are stored without kind/state, so compare on code + modifiers.
        let lookup = KeyEvent::new(key_event.code, key_event.modifiers);
        if let Some(action) = self.bindings.get(&lookup) {
            return *action;
        }

        match key_event.code {
            KeyCode::Char(c)
                if key_event.modifiers.difference(KeyModifiers::SHIFT).is_empty()
                    && is_search_char(c) =>
            {
                Action::SearchInput(c)
            }
            _ => Action::NoOp,
        }
    }
}
