//! Calendar page: day picker, today's agenda and upcoming events
//!
//! The event collection itself is the same container every list page uses;
//! this page adds a selected day and date-indexed views over it.

use crate::components::toast::{Toast, ToastManager};
use crate::pages::list_page::{render_form, ListPage};
use crate::theme::Palette;
use crossterm::event::KeyCode;
use deskboard_core::calendar;
use deskboard_core::models::event::{self, CalendarEvent, EventPage};
use deskboard_core::page::PageContainer;
use deskboard_core::RecordId;
use chrono::{Days, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug)]
pub struct CalendarPage {
    pub selected_date: NaiveDate,
    selected: usize,
    /// Dialog key handling is shared with the plain list pages
    inner: ListPage<EventPage>,
}

impl Default for CalendarPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarPage {
    pub fn new() -> Self {
        Self {
            selected_date: chrono::Local::now().date_naive(),
            selected: 0,
            inner: ListPage::new(),
        }
    }

    fn day_event_ids(&self, container: &PageContainer<EventPage>) -> Vec<RecordId> {
        calendar::events_for_date(container.records(), self.selected_date)
            .iter()
            .map(|e| e.id)
            .collect()
    }

    fn clamp_selection(&mut self, container: &PageContainer<EventPage>) {
        let count = self.day_event_ids(container).len();
        self.selected = if count == 0 {
            0
        } else {
            self.selected.min(count - 1)
        };
    }

    pub fn handle_key(
        &mut self,
        key: KeyCode,
        container: &mut PageContainer<EventPage>,
        toasts: &mut ToastManager,
    ) {
        if container.dialog.is_open() {
            self.inner.handle_key(key, container, toasts);
            return;
        }

        match key {
            KeyCode::Left => {
                self.selected_date = self
                    .selected_date
                    .checked_sub_days(Days::new(1))
                    .unwrap_or(self.selected_date);
                self.selected = 0;
            }
            KeyCode::Right => {
                self.selected_date = self
                    .selected_date
                    .checked_add_days(Days::new(1))
                    .unwrap_or(self.selected_date);
                self.selected = 0;
            }
            KeyCode::Char('t') => {
                self.selected_date = chrono::Local::now().date_naive();
                self.selected = 0;
            }
            KeyCode::Char('n') => {
                container.open_create_with(event::draft_for_date(self.selected_date));
            }
            KeyCode::Char('e') => {
                if let Some(&id) = self.day_event_ids(container).get(self.selected) {
                    if let Err(err) = container.open_edit(id) {
                        toasts.push(Toast::error(err.to_string()));
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(&id) = self.day_event_ids(container).get(self.selected) {
                    match container.delete(id) {
                        Ok(()) => {
                            toasts.push(Toast::success("Event deleted"));
                            self.clamp_selection(container);
                        }
                        Err(err) => toasts.push(Toast::error(err.to_string())),
                    }
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.day_event_ids(container).len();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        container: &PageContainer<EventPage>,
        palette: &Palette,
    ) {
        self.clamp_selection(container);
        let today = chrono::Local::now().date_naive();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(4),
                Constraint::Length(8),
            ])
            .split(area);

        let day_label = if self.selected_date == today {
            format!("{} (today)", self.selected_date.format("%A, %-d %B %Y"))
        } else {
            self.selected_date.format("%A, %-d %B %Y").to_string()
        };
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                day_label,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "←/→ change day, t today, n new event, e edit, d delete",
                Style::default().fg(palette.muted),
            )),
        ]);
        frame.render_widget(header, chunks[0]);

        self.render_day_list(frame, chunks[1], container, palette);
        render_upcoming(frame, chunks[2], container.records(), today, palette);

        if container.dialog.is_open() {
            render_form(frame, area, container, self.inner.form_cursor(), palette);
        }
    }

    fn render_day_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        container: &PageContainer<EventPage>,
        palette: &Palette,
    ) {
        let events = calendar::events_for_date(container.records(), self.selected_date);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Events ({}) ", events.len()));

        if events.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No events on this day",
                Style::default().fg(palette.muted),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let lines: Vec<Line> = events
            .iter()
            .enumerate()
            .map(|(idx, e)| event_line(e, idx == self.selected, palette))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn event_line<'a>(event: &'a CalendarEvent, selected: bool, palette: &Palette) -> Line<'a> {
    let style = if selected {
        Style::default()
            .bg(palette.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.fg)
    };
    let marker = if selected { "▸ " } else { "  " };
    Line::from(vec![
        Span::styled(format!("{marker}{} ", event.time), style),
        Span::styled(event.title.as_str(), style),
        Span::styled(
            format!("  [{}] {}", event.kind, event.location),
            Style::default().fg(palette.muted),
        ),
    ])
}

fn render_upcoming(
    frame: &mut Frame,
    area: Rect,
    events: &[CalendarEvent],
    today: NaiveDate,
    palette: &Palette,
) {
    let upcoming = calendar::upcoming(events, today);
    let block = Block::default().borders(Borders::ALL).title(" Upcoming ");

    if upcoming.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Nothing scheduled",
            Style::default().fg(palette.muted),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = upcoming
        .iter()
        .take(5)
        .map(|e| {
            Line::from(vec![
                Span::styled(
                    format!("{} {} ", e.date.format("%Y-%m-%d"), e.time),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(e.title.as_str(), Style::default().fg(palette.fg)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> PageContainer<EventPage> {
        PageContainer::new(event::seed(), event::filters())
    }

    #[test]
    fn arrows_move_the_selected_day() {
        let mut page = CalendarPage::new();
        let mut c = container();
        let mut toasts = ToastManager::new();
        let start = page.selected_date;
        page.handle_key(KeyCode::Right, &mut c, &mut toasts);
        assert_eq!(page.selected_date, start + Days::new(1));
        page.handle_key(KeyCode::Left, &mut c, &mut toasts);
        page.handle_key(KeyCode::Left, &mut c, &mut toasts);
        assert_eq!(page.selected_date, start - Days::new(1));
        page.handle_key(KeyCode::Char('t'), &mut c, &mut toasts);
        assert_eq!(page.selected_date, chrono::Local::now().date_naive());
    }

    #[test]
    fn new_event_draft_is_seeded_with_the_selected_day() {
        let mut page = CalendarPage::new();
        let mut c = container();
        let mut toasts = ToastManager::new();
        page.handle_key(KeyCode::Right, &mut c, &mut toasts);
        page.handle_key(KeyCode::Char('n'), &mut c, &mut toasts);
        let draft = c.dialog.draft().unwrap();
        assert_eq!(
            draft.value("Date (YYYY-MM-DD)"),
            page.selected_date.format("%Y-%m-%d").to_string()
        );
    }

    #[test]
    fn page_state_is_debug_printable() {
        let page = CalendarPage::new();
        let rendered = format!("{page:?}");
        assert!(rendered.contains("CalendarPage"));
    }

    #[test]
    fn delete_removes_the_selected_day_event_without_confirmation() {
        let mut page = CalendarPage::new();
        let mut c = container();
        let mut toasts = ToastManager::new();
        // seed places one event on today
        let before = c.len();
        page.handle_key(KeyCode::Char('d'), &mut c, &mut toasts);
        assert_eq!(c.len(), before - 1);
    }
}
