use crate::event::{Key, Modifiers};

/// Outcome of feeding a key into a [`TextInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Text content changed.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was consumed without changing the text (cursor movement).
    Handled,
    /// Key was not for this input; caller should handle it.
    Ignored,
}

/// Single-line text input state: content plus a character-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> InputResult {
        match key {
            Key::Char(c) if c != '\0' && (modifiers.none() || modifiers.shift) => {
                self.insert_char(c);
                InputResult::Changed
            }
            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    InputResult::Changed
                } else {
                    InputResult::Handled
                }
            }
            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    InputResult::Changed
                } else {
                    InputResult::Handled
                }
            }
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                InputResult::Handled
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                InputResult::Handled
            }
            Key::Home => {
                self.cursor = 0;
                InputResult::Handled
            }
            Key::End => {
                self.cursor = self.text.chars().count();
                InputResult::Handled
            }
            Key::Char('u') if modifiers.ctrl => {
                if self.text.is_empty() {
                    InputResult::Handled
                } else {
                    self.clear();
                    InputResult::Changed
                }
            }
            Key::Enter => InputResult::Submitted,
            _ => InputResult::Ignored,
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
