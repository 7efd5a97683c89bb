//! Confirmation overlay for destructive deletes and logout

use crate::theme::Palette;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    Confirmed,
    Declined,
    Cancelled,
}

/// Modal yes/no prompt. Enter defaults to No so a double-tap cannot
/// delete anything by accident.
#[derive(Debug, Clone, Default)]
pub struct ConfirmDialog {
    visible: bool,
    title: String,
    message: String,
}

impl ConfirmDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.title = title.into();
        self.message = message.into();
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Handle key input, returns Some(result) once a choice is made
    pub fn handle_key(&mut self, key: KeyCode) -> Option<ConfirmResult> {
        if !self.visible {
            return None;
        }

        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.visible = false;
                Some(ConfirmResult::Confirmed)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Enter => {
                self.visible = false;
                Some(ConfirmResult::Declined)
            }
            KeyCode::Esc => {
                self.visible = false;
                Some(ConfirmResult::Cancelled)
            }
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.visible {
            return;
        }

        let dialog_width = ((area.width as f32 * 0.5) as u16).max(40).min(area.width);
        let dialog_height = 9;
        let dialog_area = Rect {
            x: area.x + area.width.saturating_sub(dialog_width) / 2,
            y: area.y + area.height.saturating_sub(dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.warning))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(2)])
            .split(inner);

        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(palette.fg),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let buttons = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    "[Y] ",
                    Style::default()
                        .fg(palette.success)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Yes", Style::default().fg(palette.fg)),
                Span::raw("   "),
                Span::styled(
                    "[N] ",
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("No", Style::default().fg(palette.error)),
                Span::raw("   "),
                Span::styled(
                    "[Esc] ",
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("Cancel", Style::default().fg(palette.muted)),
            ]),
            Line::from(Span::styled(
                "(Enter = No)",
                Style::default().fg(palette.muted),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(buttons, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_then_confirm() {
        let mut dialog = ConfirmDialog::new();
        dialog.request("Delete project", "Delete \"Website Redesign\"?");
        assert!(dialog.is_visible());
        assert_eq!(
            dialog.handle_key(KeyCode::Char('y')),
            Some(ConfirmResult::Confirmed)
        );
        assert!(!dialog.is_visible());
    }

    #[test]
    fn enter_defaults_to_no() {
        let mut dialog = ConfirmDialog::new();
        dialog.request("Delete", "Sure?");
        assert_eq!(
            dialog.handle_key(KeyCode::Enter),
            Some(ConfirmResult::Declined)
        );
    }

    #[test]
    fn hidden_dialog_ignores_keys() {
        let mut dialog = ConfirmDialog::new();
        assert_eq!(dialog.handle_key(KeyCode::Char('y')), None);
    }
}
