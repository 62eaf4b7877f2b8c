//! Event handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key action that can be performed in normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,

    // Item operations
    /// Flip the packed flag on the selected item.
    TogglePacked,
    /// Delete the selected item.
    Delete,
    /// Open the add form.
    AddItem,

    // Sorting
    /// Cycle through the sort orders.
    CycleSort,
    /// Jump straight to alphabetical order.
    SortAlphabetical,
    /// Jump straight to quantity order.
    SortQuantity,
    /// Back to insertion order.
    SortInsertion,

    // UI toggles
    ToggleDetails,
    ToggleHelp,
    ToggleTheme,

    // Application
    Cancel,
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Item operations
            (KeyCode::Char(' '), KeyModifiers::NONE) => KeyAction::TogglePacked,
            (KeyCode::Enter, _) => KeyAction::TogglePacked,
            (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::Delete,
            (KeyCode::Delete, _) => KeyAction::Delete,
            (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::AddItem,

            // Sorting
            (KeyCode::Char('s'), KeyModifiers::NONE) => KeyAction::CycleSort,
            (KeyCode::Char('1'), KeyModifiers::NONE) => KeyAction::SortAlphabetical,
            (KeyCode::Char('2'), KeyModifiers::NONE) => KeyAction::SortQuantity,
            (KeyCode::Char('0'), KeyModifiers::NONE) => KeyAction::SortInsertion,

            // UI toggles
            (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::ToggleDetails,
            (KeyCode::Char('?'), KeyModifiers::NONE) => KeyAction::ToggleHelp,
            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }
}

/// A section of key bindings for the help display.
pub struct HelpSection {
    pub title: &'static str,
    pub bindings: Vec<KeyBinding>,
}

/// Key binding for display in help.
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Get all key bindings organized by section for help display.
pub fn get_help_sections() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "Navigation",
            bindings: vec![
                KeyBinding { keys: "j/k ↑/↓", description: "Move up/down" },
                KeyBinding { keys: "g/G", description: "Jump to top/bottom" },
            ],
        },
        HelpSection {
            title: "Items",
            bindings: vec![
                KeyBinding { keys: "Space/Enter", description: "Toggle packed" },
                KeyBinding { keys: "d/Del", description: "Delete item" },
                KeyBinding { keys: "a", description: "Add item" },
            ],
        },
        HelpSection {
            title: "Sorting",
            bindings: vec![
                KeyBinding { keys: "s", description: "Cycle sort order" },
                KeyBinding { keys: "1", description: "Sort alphabetically" },
                KeyBinding { keys: "2", description: "Sort by quantity" },
                KeyBinding { keys: "0", description: "Insertion order" },
            ],
        },
        HelpSection {
            title: "Display",
            bindings: vec![
                KeyBinding { keys: "i", description: "Toggle details panel" },
                KeyBinding { keys: "t", description: "Toggle dark/light theme" },
                KeyBinding { keys: "?", description: "Show this help" },
                KeyBinding { keys: "q", description: "Quit" },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_item_operation_keys() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            KeyAction::TogglePacked
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('d'), KeyModifiers::NONE)),
            KeyAction::Delete
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
            KeyAction::AddItem
        );
    }

    #[test]
    fn test_sort_keys() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('s'), KeyModifiers::NONE)),
            KeyAction::CycleSort
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('1'), KeyModifiers::NONE)),
            KeyAction::SortAlphabetical
        );
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('2'), KeyModifiers::NONE)),
            KeyAction::SortQuantity
        );
    }

    #[test]
    fn test_unbound_key_is_none() {
        assert_eq!(
            KeyAction::from_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE)),
            KeyAction::None
        );
    }
}
