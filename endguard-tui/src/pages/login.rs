//! Sign-in chrome shown before the console.

use tabula::buffer::Buffer;
use tabula::event::{Key, Modifiers};
use tabula::input::{InputResult, TextInput};
use tabula::layout::Rect;
use tabula::style::TextStyle;
use tabula::theme::Palette;

pub enum LoginOutcome {
    Submit { email: String, password: String },
    Consumed,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Email,
    Password,
}

pub struct LoginPage {
    email: TextInput,
    password: TextInput,
    focus: Field,
    error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self {
            email: TextInput::with_text("admin@example.com"),
            password: TextInput::new(),
            focus: Field::Email,
            error: None,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> LoginOutcome {
        match key {
            Key::Tab | Key::Down | Key::BackTab | Key::Up => {
                self.focus = match self.focus {
                    Field::Email => Field::Password,
                    Field::Password => Field::Email,
                };
                LoginOutcome::Consumed
            }
            Key::Enter => LoginOutcome::Submit {
                email: self.email.text().trim().to_string(),
                password: self.password.text().to_string(),
            },
            _ => {
                let input = match self.focus {
                    Field::Email => &mut self.email,
                    Field::Password => &mut self.password,
                };
                match input.handle_key(key, modifiers) {
                    InputResult::Ignored => LoginOutcome::Ignored,
                    _ => {
                        self.error = None;
                        LoginOutcome::Consumed
                    }
                }
            }
        }
    }

    pub fn draw(&self, buf: &mut Buffer, area: Rect, palette: &Palette) {
        const BOX_W: u16 = 46;
        const BOX_H: u16 = 13;
        if area.width < BOX_W || area.height < BOX_H {
            return;
        }

        let x = area.x + (area.width - BOX_W) / 2;
        let mut y = area.y + (area.height - BOX_H) / 2;
        for row in y..y + BOX_H {
            buf.fill_row(x, row, BOX_W, palette.surface);
        }
        let inner = x + 2;

        y += 1;
        buf.put_str(inner, y, "endguard", palette.primary, palette.surface, TextStyle::bold());
        y += 1;
        buf.put_str(
            inner,
            y,
            "Sign in to your account",
            palette.muted,
            palette.surface,
            TextStyle::new(),
        );
        y += 2;

        self.draw_field(buf, inner, y, "Email", self.email.text(), Field::Email, palette);
        y += 2;
        let masked = "•".repeat(self.password.text().chars().count());
        self.draw_field(buf, inner, y, "Password", &masked, Field::Password, palette);
        y += 2;

        if let Some(error) = &self.error {
            buf.put_str(inner, y, error, palette.error, palette.surface, TextStyle::new());
        }
        y += 2;

        buf.put_str(
            inner,
            y,
            "enter: sign in   tab: switch   esc: quit",
            palette.muted,
            palette.surface,
            TextStyle::new(),
        );
        y += 1;
        buf.put_str(
            inner,
            y,
            "Demo: admin@example.com with any password",
            palette.info,
            palette.surface,
            TextStyle::new(),
        );
    }

    fn draw_field(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        value: &str,
        field: Field,
        palette: &Palette,
    ) {
        let focused = self.focus == field;
        let (label_fg, value_fg) = if focused {
            (palette.primary, palette.text)
        } else {
            (palette.muted, palette.muted)
        };
        buf.put_str(x, y, label, label_fg, palette.surface, TextStyle::bold());
        let shown = if focused {
            format!("{value}▏")
        } else {
            value.to_string()
        };
        buf.put_str(x + 10, y, &shown, value_fg, palette.surface, TextStyle::new());
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits_both_fields() {
        let mut login = LoginPage::new();
        login.handle_key(Key::Tab, Modifiers::default());
        for c in "hunter2".chars() {
            login.handle_key(Key::Char(c), Modifiers::default());
        }

        match login.handle_key(Key::Enter, Modifiers::default()) {
            LoginOutcome::Submit { email, password } => {
                assert_eq!(email, "admin@example.com");
                assert_eq!(password, "hunter2");
            }
            _ => panic!("enter should submit"),
        }
    }

    #[test]
    fn typing_clears_a_previous_error() {
        let mut login = LoginPage::new();
        login.set_error("invalid email or password");
        login.handle_key(Key::Backspace, Modifiers::default());
        assert!(login.error.is_none());
    }
}
