//! Generic list page driver
//!
//! One implementation of the list + search + filter + dialog interaction,
//! instantiated per domain via `PageSpec`. The container owns all data state;
//! this type owns only view state (selection, focus, form cursor).

use crate::components::search_bar::{highlight_matches, render_search_bar};
use crate::components::toast::{Toast, ToastManager};
use crate::theme::Palette;
use crossterm::event::KeyCode;
use deskboard_core::page::{PageContainer, PageSpec};
use deskboard_core::RecordId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::marker::PhantomData;

/// Things the page cannot do alone and hands up to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    /// Open the detail route for a record
    Open(RecordId),
    /// Ask the app to confirm a destructive delete
    RequestDelete(RecordId),
}

#[derive(Debug)]
pub struct ListPage<S: PageSpec> {
    pub list_state: ListState,
    pub search_focused: bool,
    form_cursor: usize,
    filter_cursor: usize,
    _marker: PhantomData<S>,
}

impl<S: PageSpec> Default for ListPage<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PageSpec> ListPage<S> {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            list_state,
            search_focused: false,
            form_cursor: 0,
            filter_cursor: 0,
            _marker: PhantomData,
        }
    }

    pub fn form_cursor(&self) -> usize {
        self.form_cursor
    }

    fn selected_id(&self, container: &PageContainer<S>) -> Option<RecordId> {
        container.filtered_id(self.list_state.selected()?)
    }

    fn clamp_selection(&mut self, container: &PageContainer<S>) {
        let len = container.filtered().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let idx = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(idx));
        }
    }

    pub fn handle_key(
        &mut self,
        key: KeyCode,
        container: &mut PageContainer<S>,
        toasts: &mut ToastManager,
    ) -> Option<PageAction> {
        if container.dialog.is_open() {
            self.handle_dialog_key(key, container, toasts);
            return None;
        }
        if self.search_focused {
            self.handle_search_key(key, container);
            return None;
        }
        // the collection may have shrunk behind our back, e.g. a delete
        // confirmed at the app level
        self.clamp_selection(container);
        self.handle_list_key(key, container, toasts)
    }

    fn handle_dialog_key(
        &mut self,
        key: KeyCode,
        container: &mut PageContainer<S>,
        toasts: &mut ToastManager,
    ) {
        let field_count = container.dialog.draft().map(|d| d.len()).unwrap_or(0);
        match key {
            KeyCode::Esc => {
                container.cancel_dialog();
                self.form_cursor = 0;
            }
            KeyCode::Up | KeyCode::BackTab => {
                if field_count > 0 {
                    self.form_cursor = (self.form_cursor + field_count - 1) % field_count;
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                if field_count > 0 {
                    self.form_cursor = (self.form_cursor + 1) % field_count;
                }
            }
            KeyCode::Char(c) => {
                if let Some(draft) = container.dialog.draft_mut() {
                    if let Some(field) = draft.fields.get_mut(self.form_cursor) {
                        field.value.push(c);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(draft) = container.dialog.draft_mut() {
                    if let Some(field) = draft.fields.get_mut(self.form_cursor) {
                        field.value.pop();
                    }
                }
            }
            KeyCode::Enter => match container.save() {
                Ok(_) => {
                    toasts.push(Toast::success(format!("{} saved", capitalize(S::ENTITY))));
                    self.form_cursor = 0;
                    self.clamp_selection(container);
                }
                // dialog stays open, draft intact
                Err(err) => toasts.push(Toast::error(err.to_string())),
            },
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyCode, container: &mut PageContainer<S>) {
        match key {
            KeyCode::Esc | KeyCode::Enter => self.search_focused = false,
            KeyCode::Char(c) => {
                container.search_query.push(c);
                self.clamp_selection(container);
            }
            KeyCode::Backspace => {
                container.search_query.pop();
                self.clamp_selection(container);
            }
            _ => {}
        }
    }

    fn handle_list_key(
        &mut self,
        key: KeyCode,
        container: &mut PageContainer<S>,
        toasts: &mut ToastManager,
    ) -> Option<PageAction> {
        match key {
            KeyCode::Char('/') => {
                self.search_focused = true;
                None
            }
            KeyCode::Char('n') => {
                container.open_create();
                self.form_cursor = 0;
                None
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id(container) {
                    if let Err(err) = container.open_edit(id) {
                        toasts.push(Toast::error(err.to_string()));
                    }
                    self.form_cursor = 0;
                }
                None
            }
            KeyCode::Char('d') => {
                let id = self.selected_id(container)?;
                if container.delete_needs_confirm() {
                    return Some(PageAction::RequestDelete(id));
                }
                match container.delete(id) {
                    Ok(()) => {
                        toasts.push(Toast::success(format!(
                            "{} deleted",
                            capitalize(S::ENTITY)
                        )));
                        self.clamp_selection(container);
                    }
                    Err(err) => toasts.push(Toast::error(err.to_string())),
                }
                None
            }
            KeyCode::Char('f') => {
                if let Some(filter) = container.filters.filters.get_mut(self.filter_cursor) {
                    filter.cycle();
                    self.clamp_selection(container);
                }
                None
            }
            KeyCode::Char('F') => {
                let len = container.filters.len();
                if len > 0 {
                    self.filter_cursor = (self.filter_cursor + 1) % len;
                }
                None
            }
            KeyCode::Char('c') => {
                container.clear_view();
                self.clamp_selection(container);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = container.filtered().len();
                if len > 0 {
                    let idx = self.list_state.selected().unwrap_or(0);
                    self.list_state.select(Some((idx + 1).min(len - 1)));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let idx = self.list_state.selected().unwrap_or(0);
                self.list_state.select(Some(idx.saturating_sub(1)));
                None
            }
            KeyCode::Enter => {
                if S::HAS_DETAIL {
                    return Some(PageAction::Open(self.selected_id(container)?));
                }
                None
            }
            _ => None,
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        container: &PageContainer<S>,
        palette: &Palette,
    ) {
        self.clamp_selection(container);
        let has_filters = !container.filters.is_empty();
        let constraints = if has_filters {
            vec![
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
            ]
        } else {
            vec![Constraint::Length(3), Constraint::Min(1)]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let view = container.filtered();
        render_search_bar(
            frame,
            chunks[0],
            &container.search_query,
            self.search_focused,
            view.len(),
            palette,
        );

        let list_area = if has_filters {
            self.render_filter_line(frame, chunks[1], container, palette);
            chunks[2]
        } else {
            chunks[1]
        };

        if view.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                format!("No {}s match the current view", S::ENTITY),
                Style::default().fg(palette.muted),
            )))
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, list_area);
        } else {
            let items: Vec<ListItem> = view
                .iter()
                .map(|record| {
                    let mut title_spans =
                        highlight_matches(&S::title_of(record), &container.search_query);
                    if let Some(badge) = S::badge_of(record) {
                        title_spans.push(Span::styled(
                            format!("  [{badge}]"),
                            Style::default().fg(palette.accent),
                        ));
                    }
                    let subtitle = Span::styled(
                        S::subtitle_of(record),
                        Style::default().fg(palette.muted),
                    );
                    ListItem::new(vec![Line::from(title_spans), Line::from(subtitle)])
                })
                .collect();

            let list = List::new(items)
                .block(Block::default().borders(Borders::ALL))
                .highlight_style(
                    Style::default()
                        .bg(palette.highlight_bg)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▸ ");
            frame.render_stateful_widget(list, list_area, &mut self.list_state);
        }

        if container.dialog.is_open() {
            render_form(frame, area, container, self.form_cursor, palette);
        }
    }

    fn render_filter_line(
        &self,
        frame: &mut Frame,
        area: Rect,
        container: &PageContainer<S>,
        palette: &Palette,
    ) {
        let mut spans = vec![Span::styled(" [f] ", Style::default().fg(palette.muted))];
        for (idx, filter) in container.filters.filters.iter().enumerate() {
            let style = if idx == self.filter_cursor {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.fg)
            };
            spans.push(Span::styled(filter.display(), style));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Centered create/edit form overlay; reused by the calendar page
pub fn render_form<S: PageSpec>(
    frame: &mut Frame,
    area: Rect,
    container: &PageContainer<S>,
    form_cursor: usize,
    palette: &Palette,
) {
    let Some(draft) = container.dialog.draft() else {
        return;
    };

    let title = if container.dialog.editing().is_some() {
        format!(" Edit {} ", S::ENTITY)
    } else {
        format!(" New {} ", S::ENTITY)
    };

    let height = (draft.len() as u16 + 4).min(area.height);
    let width = ((area.width as f32 * 0.6) as u16).max(50).min(area.width);
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
            title,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let mut lines: Vec<Line> = draft
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let focused = idx == form_cursor;
            let label_style = if focused {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            let marker = if field.required { "*" } else { " " };
            let cursor = if focused { "_" } else { "" };
            Line::from(vec![
                Span::styled(format!("{marker}{}: ", field.label), label_style),
                Span::styled(
                    format!("{}{cursor}", field.value),
                    Style::default().fg(palette.fg),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter saves, Esc cancels, Tab moves",
        Style::default().fg(palette.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
