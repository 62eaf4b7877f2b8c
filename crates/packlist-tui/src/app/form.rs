//! Add-form input state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use packlist_core::ItemDraft;

/// Smallest quantity the selector offers.
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity the selector offers.
pub const MAX_QUANTITY: u32 = 3;

/// Which form field currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Description,
    Quantity,
}

/// State for the add-item form.
///
/// Holds a description text buffer with cursor editing and an
/// enumerated 1-3 quantity selector.
#[derive(Debug, Clone)]
pub struct AddForm {
    /// The description input buffer.
    buffer: String,
    /// Cursor position within the buffer.
    cursor: usize,
    /// Selected quantity.
    quantity: u32,
    /// Focused field.
    focus: FormFocus,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            quantity: MIN_QUANTITY,
            focus: FormFocus::default(),
        }
    }
}

impl AddForm {
    /// Create a new empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current description buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Get the cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the selected quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the focused field.
    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormResult {
        match (key.code, key.modifiers) {
            // Submit. A blank description silently suppresses the
            // submission: the form stays open and nothing is added.
            (KeyCode::Enter, _) => match ItemDraft::new(&self.buffer, self.quantity) {
                Ok(draft) => FormResult::Submit(draft),
                Err(_) => FormResult::Continue,
            },

            // Cancel
            (KeyCode::Esc, _) => FormResult::Cancel,

            // Switch focused field
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                self.focus = match self.focus {
                    FormFocus::Description => FormFocus::Quantity,
                    FormFocus::Quantity => FormFocus::Description,
                };
                FormResult::Continue
            }

            _ => match self.focus {
                FormFocus::Description => self.handle_description_key(key),
                FormFocus::Quantity => self.handle_quantity_key(key),
            },
        }
    }

    fn handle_description_key(&mut self, key: KeyEvent) -> FormResult {
        // The cursor is a byte index and must always sit on a char
        // boundary, so movement steps by the width of the adjacent char.
        match (key.code, key.modifiers) {
            // Backspace - delete character before cursor
            (KeyCode::Backspace, _) => {
                if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                    self.buffer.remove(self.cursor);
                }
            }

            // Delete - delete character at cursor
            (KeyCode::Delete, _) => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
            }

            (KeyCode::Left, _) => {
                if let Some(c) = self.buffer[..self.cursor].chars().next_back() {
                    self.cursor -= c.len_utf8();
                }
            }

            (KeyCode::Right, _) => {
                if let Some(c) = self.buffer[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }

            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
            }

            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.buffer.len();
            }

            // Ctrl-U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.buffer.clear();
                self.cursor = 0;
            }

            // Ctrl-K - delete from cursor to end
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
                self.buffer.truncate(self.cursor);
            }

            // Ctrl-W - delete word before cursor
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                if self.cursor > 0 {
                    let before = &self.buffer[..self.cursor];
                    let word_start = before
                        .rfind(|c: char| c.is_whitespace())
                        .map(|i| i + 1)
                        .unwrap_or(0);
                    self.buffer.replace_range(word_start..self.cursor, "");
                    self.cursor = word_start;
                }
            }

            // Regular character input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.buffer.insert(self.cursor, c);
                self.cursor += c.len_utf8();
            }

            _ => {}
        }
        FormResult::Continue
    }

    fn handle_quantity_key(&mut self, key: KeyEvent) -> FormResult {
        match key.code {
            // Cycle through the enumerated quantities, wrapping
            KeyCode::Up | KeyCode::Char('k') => {
                self.quantity = if self.quantity >= MAX_QUANTITY {
                    MIN_QUANTITY
                } else {
                    self.quantity + 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.quantity = if self.quantity <= MIN_QUANTITY {
                    MAX_QUANTITY
                } else {
                    self.quantity - 1
                };
            }
            // Direct selection
            KeyCode::Char(c @ '1'..='3') => {
                self.quantity = c.to_digit(10).unwrap_or(MIN_QUANTITY);
            }
            _ => {}
        }
        FormResult::Continue
    }
}

/// Result of handling a form key.
#[derive(Debug, Clone)]
pub enum FormResult {
    /// Continue accepting input.
    Continue,
    /// User cancelled the form.
    Cancel,
    /// User submitted a valid draft.
    Submit(ItemDraft),
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

    fn type_text(form: &mut AddForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_typing_and_cursor() {
        let mut form = AddForm::new();
        type_text(&mut form, "Socks");

        assert_eq!(form.buffer(), "Socks");
        assert_eq!(form.cursor(), 5);

        form.handle_key(key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(form.buffer(), "Sock");
    }

    #[test]
    fn test_typing_multibyte_characters() {
        let mut form = AddForm::new();
        type_text(&mut form, "éclair");

        assert_eq!(form.buffer(), "éclair");
        assert_eq!(form.cursor(), "éclair".len());

        // Backspace and arrow movement step by whole characters
        form.handle_key(key(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(form.buffer(), "éclai");

        form.handle_key(key(KeyCode::Home, KeyModifiers::NONE));
        form.handle_key(key(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(form.cursor(), 'é'.len_utf8());

        form.handle_key(key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(form.buffer(), "éxclai");

        form.handle_key(key(KeyCode::Left, KeyModifiers::NONE));
        form.handle_key(key(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(form.cursor(), 0);
        form.handle_key(key(KeyCode::Delete, KeyModifiers::NONE));
        assert_eq!(form.buffer(), "xclai");
    }

    #[test]
    fn test_quantity_cycles_and_wraps() {
        let mut form = AddForm::new();
        form.handle_key(key(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(form.focus(), FormFocus::Quantity);

        form.handle_key(key(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(form.quantity(), 2);
        form.handle_key(key(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(form.quantity(), 3);
        form.handle_key(key(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(form.quantity(), 1);

        form.handle_key(key(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(form.quantity(), 3);
    }

    #[test]
    fn test_digits_edit_description_but_select_quantity() {
        let mut form = AddForm::new();
        type_text(&mut form, "2 hats");
        assert_eq!(form.buffer(), "2 hats");

        form.handle_key(key(KeyCode::Tab, KeyModifiers::NONE));
        form.handle_key(key(KeyCode::Char('3'), KeyModifiers::NONE));
        assert_eq!(form.quantity(), 3);
        assert_eq!(form.buffer(), "2 hats");
    }

    #[test]
    fn test_submit_builds_trimmed_draft() {
        let mut form = AddForm::new();
        type_text(&mut form, "  Socks ");
        form.handle_key(key(KeyCode::Tab, KeyModifiers::NONE));
        form.handle_key(key(KeyCode::Up, KeyModifiers::NONE));

        let result = form.handle_key(key(KeyCode::Enter, KeyModifiers::NONE));
        match result {
            FormResult::Submit(draft) => {
                assert_eq!(draft.description(), "Socks");
                assert_eq!(draft.quantity(), 2);
            }
            other => panic!("expected submit, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_submit_is_suppressed() {
        let mut form = AddForm::new();
        type_text(&mut form, "   ");

        let result = form.handle_key(key(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(result, FormResult::Continue));
        // The form keeps its contents so the user can fix the input.
        assert_eq!(form.buffer(), "   ");
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = AddForm::new();
        let result = form.handle_key(key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(matches!(result, FormResult::Cancel));
    }

    #[test]
    fn test_ctrl_w_deletes_word() {
        let mut form = AddForm::new();
        type_text(&mut form, "wool socks");

        form.handle_key(key(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(form.buffer(), "wool ");
        assert_eq!(form.cursor(), 5);
    }
}
