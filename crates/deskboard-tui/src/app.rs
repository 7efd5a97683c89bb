//! Application state
//!
//! Owns the session gate, navigation, preferences and one container per
//! page. Confirmation flows park the pending action here until the dialog
//! resolves.

use crate::components::confirm_dialog::{ConfirmDialog, ConfirmResult};
use crate::components::spinner::Spinner;
use crate::components::toast::{Toast, ToastManager};
use crate::pages::dashboard::DashboardStats;
use deskboard_core::models::department::{self, DepartmentPage, MasterUserPage};
use deskboard_core::models::event::{self, EventPage};
use deskboard_core::models::file::{self, FilePage};
use deskboard_core::models::invoice::{self, InvoicePage};
use deskboard_core::models::project::{self, ProjectPage};
use deskboard_core::models::task::{self, TaskPage};
use deskboard_core::models::team::{self, TeamPage};
use deskboard_core::page::PageContainer;
use deskboard_core::{calendar, ColorScheme, Nav, Preferences, RecordId, SessionGate};
use std::path::PathBuf;
use tracing::info;

/// Which container a deferred action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Projects,
    Tasks,
    Team,
    Files,
    Invoices,
    Events,
    Departments,
    MasterUsers,
}

/// Action awaiting the confirm dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Logout,
    Delete { page: PageKind, id: RecordId },
}

pub struct App {
    pub gate: SessionGate,
    pub nav: Nav,
    pub preferences: Preferences,
    pub state_dir: PathBuf,
    pub should_quit: bool,

    pub spinner: Spinner,
    pub toasts: ToastManager,
    pub confirm: ConfirmDialog,
    pending: Option<PendingAction>,

    pub projects: PageContainer<ProjectPage>,
    pub tasks: PageContainer<TaskPage>,
    pub team: PageContainer<TeamPage>,
    pub events: PageContainer<EventPage>,
    pub files: PageContainer<FilePage>,
    pub invoices: PageContainer<InvoicePage>,
    pub departments: PageContainer<DepartmentPage>,
    pub master_users: PageContainer<MasterUserPage>,
}

impl App {
    pub fn new(state_dir: PathBuf, preferences: Preferences) -> Self {
        info!(state_dir = %state_dir.display(), "app state initialized");
        Self {
            gate: SessionGate::new(),
            nav: Nav::new(),
            preferences,
            state_dir,
            should_quit: false,
            spinner: Spinner::new(),
            toasts: ToastManager::new(),
            confirm: ConfirmDialog::new(),
            pending: None,
            projects: PageContainer::new(project::seed(), project::filters()),
            tasks: PageContainer::new(task::seed(), task::filters()),
            team: PageContainer::new(team::seed(), team::filters()),
            events: PageContainer::new(event::seed(), event::filters()),
            files: PageContainer::new(file::seed(), file::filters()),
            invoices: PageContainer::new(invoice::seed(), invoice::filters()),
            departments: PageContainer::new(
                department::department_seed(),
                department::department_filters(),
            ),
            master_users: PageContainer::new(department::user_seed(), department::user_filters()),
        }
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.preferences.color_scheme
    }

    /// Global shortcuts, reachable only while no input widget is active
    pub fn handle_global_key(&mut self, c: char) -> bool {
        match c {
            'q' => {
                self.should_quit = true;
                true
            }
            'b' => {
                self.nav.back();
                true
            }
            'l' => {
                self.request_logout();
                true
            }
            digit => self.nav.navigate_shortcut(digit),
        }
    }

    pub fn request_delete(&mut self, page: PageKind, id: RecordId) {
        let (entity, title) = match page {
            PageKind::Projects => (
                self.projects.get(id).map(|p| p.name.clone()),
                "Delete project",
            ),
            PageKind::Team => (
                self.team.get(id).map(|m| m.name.clone()),
                "Remove team member",
            ),
            PageKind::Departments => (
                self.departments.get(id).map(|d| d.name.clone()),
                "Delete department",
            ),
            PageKind::MasterUsers => (
                self.master_users.get(id).map(|u| u.name.clone()),
                "Delete user",
            ),
            // the remaining pages delete immediately and never land here
            _ => (None, "Delete"),
        };
        let name = entity.unwrap_or_else(|| format!("#{id}"));
        self.pending = Some(PendingAction::Delete { page, id });
        self.confirm
            .request(title, format!("Delete \"{name}\"? This cannot be undone."));
    }

    pub fn request_logout(&mut self) {
        self.pending = Some(PendingAction::Logout);
        self.confirm.request("Log out", "End the current session?");
    }

    /// Resolve the pending action once the confirm dialog closes
    pub fn apply_confirm(&mut self, result: ConfirmResult) {
        let Some(action) = self.pending.take() else {
            return;
        };
        if result != ConfirmResult::Confirmed {
            return;
        }
        match action {
            PendingAction::Logout => {
                self.gate.logout();
                self.nav = Nav::new();
                self.toasts.push(Toast::info("Signed out"));
            }
            PendingAction::Delete { page, id } => {
                let outcome = match page {
                    PageKind::Projects => self.projects.delete(id),
                    PageKind::Tasks => self.tasks.delete(id),
                    PageKind::Team => self.team.delete(id),
                    PageKind::Files => self.files.delete(id),
                    PageKind::Invoices => self.invoices.delete(id),
                    PageKind::Events => self.events.delete(id),
                    PageKind::Departments => self.departments.delete(id),
                    PageKind::MasterUsers => self.master_users.delete(id),
                };
                match outcome {
                    Ok(()) => self.toasts.push(Toast::success("Deleted")),
                    Err(err) => self.toasts.push(Toast::error(err.to_string())),
                }
            }
        }
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let today = chrono::Local::now().date_naive();
        let outstanding: Vec<_> = self
            .invoices
            .records()
            .iter()
            .filter(|i| i.status != "Paid")
            .collect();
        DashboardStats {
            active_projects: self
                .projects
                .records()
                .iter()
                .filter(|p| p.status != "Completed")
                .count(),
            total_projects: self.projects.len(),
            open_tasks: self
                .tasks
                .records()
                .iter()
                .filter(|t| t.status != "Done")
                .count(),
            total_tasks: self.tasks.len(),
            team_size: self.team.len(),
            events_today: calendar::events_today(self.events.records(), today).len(),
            outstanding_invoices: outstanding.len(),
            outstanding_total: outstanding.iter().map(|i| i.total()).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskboard_core::Record;

    fn app() -> App {
        App::new(PathBuf::from("/tmp/deskboard-test"), Preferences::default())
    }

    #[test]
    fn confirmed_delete_removes_the_record() {
        let mut a = app();
        let id = a.projects.records()[0].id();
        a.request_delete(PageKind::Projects, id);
        assert!(a.confirm.is_visible());
        assert_eq!(a.projects.len(), 4);

        a.confirm.handle_key(crossterm::event::KeyCode::Char('y'));
        a.apply_confirm(ConfirmResult::Confirmed);
        assert_eq!(a.projects.len(), 3);
    }

    #[test]
    fn declined_delete_leaves_the_record() {
        let mut a = app();
        let id = a.projects.records()[0].id();
        a.request_delete(PageKind::Projects, id);
        a.confirm.handle_key(crossterm::event::KeyCode::Char('n'));
        a.apply_confirm(ConfirmResult::Declined);
        assert_eq!(a.projects.len(), 4);
    }

    #[test]
    fn confirmed_logout_clears_session_and_resets_navigation() {
        let mut a = app();
        a.gate.resolve(None);
        a.gate.login("jane@example.com", "secret123").unwrap();
        a.nav.navigate(deskboard_core::Route::Settings);

        a.request_logout();
        a.apply_confirm(ConfirmResult::Confirmed);
        assert!(a.gate.user().is_none());
        assert_eq!(*a.nav.current(), deskboard_core::Route::Dashboard);
    }

    #[test]
    fn global_digits_jump_sections() {
        let mut a = app();
        assert!(a.handle_global_key('3'));
        assert_eq!(*a.nav.current(), deskboard_core::Route::Tasks);
        assert!(!a.handle_global_key('z'));
    }

    #[test]
    fn dashboard_stats_reflect_the_seeds() {
        let a = app();
        let stats = a.dashboard_stats();
        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.team_size, 5);
        assert!(stats.open_tasks <= stats.total_tasks);
        assert!(stats.outstanding_total > 0.0);
    }
}
