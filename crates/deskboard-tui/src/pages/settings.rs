//! Settings page: color-scheme toggle and the mock password-change form

use crate::components::toast::{Toast, ToastManager};
use crate::theme::Palette;
use crossterm::event::KeyCode;
use deskboard_core::{validate, Preferences, UserProfile};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::path::Path;

const PASSWORD_FIELDS: [&str; 3] = ["Current password", "New password", "Confirm new password"];

#[derive(Debug, Default)]
pub struct SettingsPage {
    editing: bool,
    focus: usize,
    values: [String; 3],
}

impl SettingsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// While the password form is open, keys must not reach global shortcuts
    pub fn input_active(&self) -> bool {
        self.editing
    }

    pub fn handle_key(
        &mut self,
        key: KeyCode,
        preferences: &mut Preferences,
        state_dir: &Path,
        toasts: &mut ToastManager,
    ) {
        if self.editing {
            self.handle_form_key(key, toasts);
            return;
        }

        match key {
            KeyCode::Char('t') => {
                preferences.color_scheme = preferences.color_scheme.toggled();
                match preferences.save(state_dir) {
                    Ok(()) => toasts.push(Toast::success(format!(
                        "Switched to the {:?} scheme",
                        preferences.color_scheme
                    ))),
                    // keep the in-memory toggle even when the disk write fails
                    Err(err) => toasts.push(Toast::warning(format!(
                        "Scheme changed but not saved: {err}"
                    ))),
                }
            }
            KeyCode::Char('p') => {
                self.editing = true;
                self.focus = 0;
                self.values = Default::default();
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode, toasts: &mut ToastManager) {
        match key {
            KeyCode::Esc => self.editing = false,
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % 3,
            KeyCode::BackTab | KeyCode::Up => self.focus = (self.focus + 2) % 3,
            KeyCode::Char(c) => self.values[self.focus].push(c),
            KeyCode::Backspace => {
                self.values[self.focus].pop();
            }
            KeyCode::Enter => {
                match validate::password_change(&self.values[0], &self.values[1], &self.values[2])
                {
                    Ok(()) => {
                        toasts.push(Toast::success("Password updated"));
                        self.editing = false;
                        self.values = Default::default();
                    }
                    Err(err) => toasts.push(Toast::error(err.to_string())),
                }
            }
            _ => {}
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        preferences: &Preferences,
        user: Option<&UserProfile>,
        palette: &Palette,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(7),
            ])
            .split(area);

        self.render_account(frame, chunks[0], user, palette);
        self.render_appearance(frame, chunks[1], preferences, palette);
        self.render_password(frame, chunks[2], palette);
    }

    fn render_account(
        &self,
        frame: &mut Frame,
        area: Rect,
        user: Option<&UserProfile>,
        palette: &Palette,
    ) {
        let lines = match user {
            Some(user) => vec![
                Line::from(vec![
                    Span::styled("Name:  ", Style::default().fg(palette.muted)),
                    Span::styled(user.name.clone(), Style::default().fg(palette.fg)),
                ]),
                Line::from(vec![
                    Span::styled("Email: ", Style::default().fg(palette.muted)),
                    Span::styled(user.email.clone(), Style::default().fg(palette.fg)),
                ]),
                Line::from(vec![
                    Span::styled("Role:  ", Style::default().fg(palette.muted)),
                    Span::styled(user.role.clone(), Style::default().fg(palette.fg)),
                ]),
            ],
            None => vec![Line::from(Span::styled(
                "Not signed in",
                Style::default().fg(palette.muted),
            ))],
        };
        let widget =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Account "));
        frame.render_widget(widget, area);
    }

    fn render_appearance(
        &self,
        frame: &mut Frame,
        area: Rect,
        preferences: &Preferences,
        palette: &Palette,
    ) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Color scheme: ", Style::default().fg(palette.muted)),
                Span::styled(
                    format!("{:?}", preferences.color_scheme),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "[t] toggle",
                Style::default().fg(palette.muted),
            )),
        ];
        let widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Appearance "));
        frame.render_widget(widget, area);
    }

    fn render_password(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let mut lines = Vec::new();
        if self.editing {
            for (idx, label) in PASSWORD_FIELDS.iter().enumerate() {
                let focused = idx == self.focus;
                let label_style = if focused {
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.muted)
                };
                let masked = "•".repeat(self.values[idx].chars().count());
                let cursor = if focused { "_" } else { "" };
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), label_style),
                    Span::styled(format!("{masked}{cursor}"), Style::default().fg(palette.fg)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Enter submits, Esc cancels, Tab moves",
                Style::default().fg(palette.muted),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "[p] change password",
                Style::default().fg(palette.muted),
            )));
        }
        let widget =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Security "));
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskboard_core::ColorScheme;

    #[test]
    fn t_toggles_and_persists_the_scheme() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = SettingsPage::new();
        let mut prefs = Preferences::default();
        let mut toasts = ToastManager::new();

        page.handle_key(KeyCode::Char('t'), &mut prefs, dir.path(), &mut toasts);
        assert_eq!(prefs.color_scheme, ColorScheme::Light);
        assert_eq!(Preferences::load(dir.path()).color_scheme, ColorScheme::Light);
    }

    #[test]
    fn password_form_validates_before_closing() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = SettingsPage::new();
        let mut prefs = Preferences::default();
        let mut toasts = ToastManager::new();

        page.handle_key(KeyCode::Char('p'), &mut prefs, dir.path(), &mut toasts);
        assert!(page.input_active());

        // empty submit stays in the form
        page.handle_key(KeyCode::Enter, &mut prefs, dir.path(), &mut toasts);
        assert!(page.input_active());

        for c in "old".chars() {
            page.handle_key(KeyCode::Char(c), &mut prefs, dir.path(), &mut toasts);
        }
        page.handle_key(KeyCode::Tab, &mut prefs, dir.path(), &mut toasts);
        for c in "new123".chars() {
            page.handle_key(KeyCode::Char(c), &mut prefs, dir.path(), &mut toasts);
        }
        page.handle_key(KeyCode::Tab, &mut prefs, dir.path(), &mut toasts);
        for c in "new123".chars() {
            page.handle_key(KeyCode::Char(c), &mut prefs, dir.path(), &mut toasts);
        }
        page.handle_key(KeyCode::Enter, &mut prefs, dir.path(), &mut toasts);
        assert!(!page.input_active());
    }

    #[test]
    fn esc_abandons_the_password_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut page = SettingsPage::new();
        let mut prefs = Preferences::default();
        let mut toasts = ToastManager::new();

        page.handle_key(KeyCode::Char('p'), &mut prefs, dir.path(), &mut toasts);
        page.handle_key(KeyCode::Esc, &mut prefs, dir.path(), &mut toasts);
        assert!(!page.input_active());
    }
}
