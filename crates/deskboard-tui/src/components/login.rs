//! Sign-in form shown while the session gate reports signed-out

use crate::theme::Palette;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Email,
    Password,
}

/// Email + password inputs with an inline error line
#[derive(Debug)]
pub struct LoginForm {
    email: String,
    password: String,
    focus: Focus,
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: Focus::Email,
            error: None,
        }
    }

    /// Returns the credentials when Enter is pressed on a filled form
    pub fn handle_key(&mut self, key: KeyCode) -> Option<(String, String)> {
        match key {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    Focus::Email => Focus::Password,
                    Focus::Password => Focus::Email,
                };
                None
            }
            KeyCode::Char(c) => {
                self.error = None;
                match self.focus {
                    Focus::Email => self.email.push(c),
                    Focus::Password => self.password.push(c),
                }
                None
            }
            KeyCode::Backspace => {
                match self.focus {
                    Focus::Email => self.email.pop(),
                    Focus::Password => self.password.pop(),
                };
                None
            }
            KeyCode::Enter => Some((self.email.clone(), self.password.clone())),
            _ => None,
        }
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let width = 48.min(area.width);
        let height = 11;
        let form_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, form_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(Span::styled(
                " Sign in ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let masked: String = "•".repeat(self.password.chars().count());
        let mut lines = vec![
            Line::from(""),
            field_line("Email", &self.email, self.focus == Focus::Email, palette),
            Line::from(""),
            field_line(
                "Password",
                &masked,
                self.focus == Focus::Password,
                palette,
            ),
            Line::from(""),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(palette.error),
            )));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Tab switches fields, Enter signs in",
            Style::default().fg(palette.muted),
        )));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool, palette: &Palette) -> Line<'a> {
    let label_style = if focused {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted)
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(format!("{value}{cursor}"), Style::default().fg(palette.fg)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_fills_the_focused_field() {
        let mut form = LoginForm::new();
        for c in "a@b.co".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        form.handle_key(KeyCode::Tab);
        for c in "secret1".chars() {
            form.handle_key(KeyCode::Char(c));
        }
        let submitted = form.handle_key(KeyCode::Enter);
        assert_eq!(submitted, Some(("a@b.co".to_string(), "secret1".to_string())));
    }

    #[test]
    fn backspace_edits_the_focused_field() {
        let mut form = LoginForm::new();
        form.handle_key(KeyCode::Char('x'));
        form.handle_key(KeyCode::Backspace);
        let submitted = form.handle_key(KeyCode::Enter);
        assert_eq!(submitted, Some((String::new(), String::new())));
    }
}
