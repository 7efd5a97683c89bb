//! Masterdata page: departments and user accounts side by side
//!
//! Both panes are ordinary list pages; this type only adds the pane focus.

use crate::components::toast::ToastManager;
use crate::pages::list_page::{ListPage, PageAction};
use crate::theme::Palette;
use crossterm::event::KeyCode;
use deskboard_core::models::department::{DepartmentPage, MasterUserPage};
use deskboard_core::page::PageContainer;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterdataPane {
    Departments,
    Users,
}

#[derive(Debug)]
pub struct MasterdataPage {
    pub focus: MasterdataPane,
    pub departments: ListPage<DepartmentPage>,
    pub users: ListPage<MasterUserPage>,
}

impl Default for MasterdataPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterdataPage {
    pub fn new() -> Self {
        Self {
            focus: MasterdataPane::Departments,
            departments: ListPage::new(),
            users: ListPage::new(),
        }
    }

    fn pane_input_active(
        &self,
        departments: &PageContainer<DepartmentPage>,
        users: &PageContainer<MasterUserPage>,
    ) -> bool {
        departments.dialog.is_open()
            || users.dialog.is_open()
            || self.departments.search_focused
            || self.users.search_focused
    }

    pub fn handle_key(
        &mut self,
        key: KeyCode,
        departments: &mut PageContainer<DepartmentPage>,
        users: &mut PageContainer<MasterUserPage>,
        toasts: &mut ToastManager,
    ) -> Option<PageAction> {
        if !self.pane_input_active(departments, users) {
            match key {
                KeyCode::Left => {
                    self.focus = MasterdataPane::Departments;
                    return None;
                }
                KeyCode::Right => {
                    self.focus = MasterdataPane::Users;
                    return None;
                }
                _ => {}
            }
        }
        match self.focus {
            MasterdataPane::Departments => self.departments.handle_key(key, departments, toasts),
            MasterdataPane::Users => self.users.handle_key(key, users, toasts),
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        departments: &PageContainer<DepartmentPage>,
        users: &PageContainer<MasterUserPage>,
        palette: &Palette,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(4)])
            .split(area);

        let tab = |label: &'static str, active: bool| {
            if active {
                Span::styled(
                    label,
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(label, Style::default().fg(palette.muted))
            }
        };
        let header = Paragraph::new(Line::from(vec![
            tab(" Departments ", self.focus == MasterdataPane::Departments),
            Span::raw("│"),
            tab(" Users ", self.focus == MasterdataPane::Users),
            Span::styled("  ←/→ switch pane", Style::default().fg(palette.muted)),
        ]));
        frame.render_widget(header, rows[0]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.departments.render(frame, panes[0], departments, palette);
        self.users.render(frame, panes[1], users, palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskboard_core::models::department;

    #[test]
    fn arrows_switch_panes_and_keys_go_to_the_focused_one() {
        let mut page = MasterdataPage::new();
        let mut departments =
            PageContainer::new(department::department_seed(), department::department_filters());
        let mut users = PageContainer::new(department::user_seed(), department::user_filters());
        let mut toasts = ToastManager::new();

        page.handle_key(KeyCode::Right, &mut departments, &mut users, &mut toasts);
        assert_eq!(page.focus, MasterdataPane::Users);
        page.handle_key(KeyCode::Char('n'), &mut departments, &mut users, &mut toasts);
        assert!(users.dialog.is_open());
        assert!(!departments.dialog.is_open());
    }

    #[test]
    fn page_state_is_debug_printable() {
        let page = MasterdataPage::new();
        let rendered = format!("{page:?}");
        assert!(rendered.contains("Departments"));
    }

    #[test]
    fn pane_switch_is_suppressed_while_a_dialog_is_open() {
        let mut page = MasterdataPage::new();
        let mut departments =
            PageContainer::new(department::department_seed(), department::department_filters());
        let mut users = PageContainer::new(department::user_seed(), department::user_filters());
        let mut toasts = ToastManager::new();

        page.handle_key(KeyCode::Char('n'), &mut departments, &mut users, &mut toasts);
        assert!(departments.dialog.is_open());
        page.handle_key(KeyCode::Right, &mut departments, &mut users, &mut toasts);
        assert_eq!(page.focus, MasterdataPane::Departments);
    }
}
