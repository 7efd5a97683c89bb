//! Route dispatch and top-level layout
//!
//! `Ui` owns the per-page view state and renders whichever page the current
//! route selects inside the sidebar + header + status-bar shell.

use crate::app::{App, PageKind};
use crate::components::{sidebar, LoginForm};
use crate::pages::{
    dashboard, project_detail, CalendarPage, ListPage, MasterdataPage, PageAction, SettingsPage,
};
use crate::pages::masterdata::MasterdataPane;
use crate::theme::Palette;
use crossterm::event::KeyCode;
use deskboard_core::models::file::FilePage;
use deskboard_core::models::invoice::InvoicePage;
use deskboard_core::models::project::ProjectPage;
use deskboard_core::models::task::TaskPage;
use deskboard_core::models::team::TeamPage;
use deskboard_core::Route;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct Ui {
    pub login: LoginForm,
    pub projects: ListPage<ProjectPage>,
    pub tasks: ListPage<TaskPage>,
    pub team: ListPage<TeamPage>,
    pub files: ListPage<FilePage>,
    pub invoices: ListPage<InvoicePage>,
    pub calendar: CalendarPage,
    pub masterdata: MasterdataPage,
    pub settings: SettingsPage,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            login: LoginForm::new(),
            projects: ListPage::new(),
            tasks: ListPage::new(),
            team: ListPage::new(),
            files: ListPage::new(),
            invoices: ListPage::new(),
            calendar: CalendarPage::new(),
            masterdata: MasterdataPage::new(),
            settings: SettingsPage::new(),
        }
    }

    /// True while keystrokes belong to a text input or open dialog and must
    /// bypass the global shortcuts
    pub fn input_active(&self, app: &App) -> bool {
        if app.gate.user().is_none() {
            return true;
        }
        match app.nav.current() {
            Route::Projects => app.projects.dialog.is_open() || self.projects.search_focused,
            Route::Tasks => app.tasks.dialog.is_open() || self.tasks.search_focused,
            Route::Team => app.team.dialog.is_open() || self.team.search_focused,
            Route::Files => app.files.dialog.is_open() || self.files.search_focused,
            Route::Invoices => app.invoices.dialog.is_open() || self.invoices.search_focused,
            Route::Calendar => app.events.dialog.is_open(),
            Route::Masterdata => {
                app.departments.dialog.is_open()
                    || app.master_users.dialog.is_open()
                    || self.masterdata.departments.search_focused
                    || self.masterdata.users.search_focused
            }
            Route::Settings => self.settings.input_active(),
            _ => false,
        }
    }

    pub fn handle_route_key(&mut self, key: KeyCode, app: &mut App) {
        let route = app.nav.current().clone();
        let action = match route {
            Route::Projects => self
                .projects
                .handle_key(key, &mut app.projects, &mut app.toasts)
                .map(|a| (PageKind::Projects, a)),
            Route::Tasks => self
                .tasks
                .handle_key(key, &mut app.tasks, &mut app.toasts)
                .map(|a| (PageKind::Tasks, a)),
            Route::Team => self
                .team
                .handle_key(key, &mut app.team, &mut app.toasts)
                .map(|a| (PageKind::Team, a)),
            Route::Files => self
                .files
                .handle_key(key, &mut app.files, &mut app.toasts)
                .map(|a| (PageKind::Files, a)),
            Route::Invoices => self
                .invoices
                .handle_key(key, &mut app.invoices, &mut app.toasts)
                .map(|a| (PageKind::Invoices, a)),
            Route::Calendar => {
                self.calendar
                    .handle_key(key, &mut app.events, &mut app.toasts);
                None
            }
            Route::Masterdata => {
                let kind = match self.masterdata.focus {
                    MasterdataPane::Departments => PageKind::Departments,
                    MasterdataPane::Users => PageKind::MasterUsers,
                };
                self.masterdata
                    .handle_key(key, &mut app.departments, &mut app.master_users, &mut app.toasts)
                    .map(|a| (kind, a))
            }
            Route::Settings => {
                let state_dir = app.state_dir.clone();
                self.settings
                    .handle_key(key, &mut app.preferences, &state_dir, &mut app.toasts);
                None
            }
            Route::Dashboard | Route::ProjectDetail(_) | Route::NotFound(_) => None,
        };

        match action {
            Some((_, PageAction::Open(id))) => app.nav.navigate(Route::ProjectDetail(id)),
            Some((kind, PageAction::RequestDelete(id))) => app.request_delete(kind, id),
            None => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let palette = Palette::new(app.color_scheme());
        let area = frame.area();

        if app.gate.is_loading() {
            self.render_loading(frame, area, app, &palette);
        } else if app.gate.user().is_none() {
            self.login.render(frame, area, &palette);
        } else {
            self.render_shell(frame, area, app, &palette);
        }

        app.toasts.render(frame, area, &palette);
        app.confirm.render(frame, area, &palette);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
        app.spinner.tick();
        let y = area.height / 2;
        let line_area = Rect {
            x: area.x,
            y: area.y + y,
            width: area.width,
            height: 1,
        };
        let line = Line::from(vec![
            app.spinner.render(),
            Span::styled(" Checking session...", Style::default().fg(palette.muted)),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), line_area);
    }

    fn render_shell(&mut self, frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(40)])
            .split(area);

        sidebar::render(
            frame,
            columns[0],
            &app.nav.current_path(),
            app.gate.user(),
            palette,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(columns[1]);

        let header = Paragraph::new(Line::from(Span::styled(
            app.nav.current().title(),
            Style::default()
                .fg(palette.fg)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, rows[0]);

        self.render_content(frame, rows[1], app, palette);
        self.render_status_bar(frame, rows[2], app, palette);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
        match app.nav.current().clone() {
            Route::Dashboard => dashboard::render(
                frame,
                area,
                &app.dashboard_stats(),
                app.gate.user(),
                palette,
            ),
            Route::Projects => self.projects.render(frame, area, &app.projects, palette),
            Route::ProjectDetail(id) => project_detail::render(
                frame,
                area,
                id,
                &app.projects,
                app.tasks.records(),
                palette,
            ),
            Route::Tasks => self.tasks.render(frame, area, &app.tasks, palette),
            Route::Calendar => self.calendar.render(frame, area, &app.events, palette),
            Route::Team => self.team.render(frame, area, &app.team, palette),
            Route::Files => self.files.render(frame, area, &app.files, palette),
            Route::Invoices => self.invoices.render(frame, area, &app.invoices, palette),
            Route::Masterdata => self.masterdata.render(
                frame,
                area,
                &app.departments,
                &app.master_users,
                palette,
            ),
            Route::Settings => self.settings.render(
                frame,
                area,
                &app.preferences,
                app.gate.user(),
                palette,
            ),
            Route::NotFound(path) => {
                let missing = Paragraph::new(vec![
                    Line::from(Span::styled(
                        format!("No page at {path}"),
                        Style::default().fg(palette.error),
                    )),
                    Line::from(Span::styled(
                        "[b] back  [1] dashboard",
                        Style::default().fg(palette.muted),
                    )),
                ])
                .block(Block::default().borders(Borders::ALL));
                frame.render_widget(missing, area);
            }
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
        let hints = match app.nav.current() {
            Route::Dashboard => "1-9 pages · Tab next · q quit",
            Route::Projects => "/ search · n new · e edit · d delete · Enter open · f filter",
            Route::Tasks | Route::Team | Route::Files | Route::Invoices => {
                "/ search · n new · e edit · d delete · f filter · c clear"
            }
            Route::Calendar => "←/→ day · t today · n new · e edit · d delete",
            Route::Masterdata => "←/→ pane · / search · n new · e edit · d delete",
            Route::Settings => "t theme · p password",
            Route::ProjectDetail(_) => "b back · e edit from list",
            Route::NotFound(_) => "b back",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {hints}"),
                Style::default().fg(palette.muted),
            ))),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskboard_core::Preferences;
    use std::path::PathBuf;

    fn signed_in_app() -> App {
        let mut app = App::new(PathBuf::from("/tmp/deskboard-test"), Preferences::default());
        app.gate.resolve(None);
        app.gate.login("jane@example.com", "secret123").unwrap();
        app
    }

    #[test]
    fn enter_on_a_project_row_opens_its_detail_route() {
        let mut ui = Ui::new();
        let mut app = signed_in_app();
        app.nav.navigate(Route::Projects);
        let expected = app.projects.filtered_id(0).unwrap();
        ui.handle_route_key(KeyCode::Enter, &mut app);
        assert_eq!(*app.nav.current(), Route::ProjectDetail(expected));
    }

    #[test]
    fn destructive_delete_routes_through_the_confirm_dialog() {
        let mut ui = Ui::new();
        let mut app = signed_in_app();
        app.nav.navigate(Route::Projects);
        ui.handle_route_key(KeyCode::Char('d'), &mut app);
        assert!(app.confirm.is_visible());
        assert_eq!(app.projects.len(), 4);
    }

    #[test]
    fn selection_stays_usable_after_a_confirmed_delete() {
        use crate::components::confirm_dialog::ConfirmResult;

        let mut ui = Ui::new();
        let mut app = signed_in_app();
        app.nav.navigate(Route::Projects);

        // select the last row and delete it through the confirm flow
        ui.projects.list_state.select(Some(3));
        ui.handle_route_key(KeyCode::Char('d'), &mut app);
        assert!(app.confirm.is_visible());
        app.confirm.handle_key(KeyCode::Char('y'));
        app.apply_confirm(ConfirmResult::Confirmed);
        assert_eq!(app.projects.len(), 3);

        // the next key must act on a real row, not the vanished index
        ui.handle_route_key(KeyCode::Enter, &mut app);
        let expected = app.projects.filtered_id(2).unwrap();
        assert_eq!(*app.nav.current(), Route::ProjectDetail(expected));
        assert_eq!(ui.projects.list_state.selected(), Some(2));
    }

    #[test]
    fn input_active_tracks_dialogs_and_search() {
        let mut ui = Ui::new();
        let mut app = signed_in_app();
        app.nav.navigate(Route::Tasks);
        assert!(!ui.input_active(&app));
        ui.handle_route_key(KeyCode::Char('n'), &mut app);
        assert!(ui.input_active(&app));
        ui.handle_route_key(KeyCode::Esc, &mut app);
        assert!(!ui.input_active(&app));
        ui.handle_route_key(KeyCode::Char('/'), &mut app);
        assert!(ui.input_active(&app));
    }

    #[test]
    fn signed_out_state_always_captures_input() {
        let ui = Ui::new();
        let mut app = App::new(PathBuf::from("/tmp/deskboard-test"), Preferences::default());
        app.gate.resolve(None);
        assert!(ui.input_active(&app));
    }
}
