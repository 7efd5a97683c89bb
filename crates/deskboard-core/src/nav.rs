//! Navigation - route table, path parsing and active-link matching
//!
//! Paths mirror the browser-style routes of the client: "/" is the dashboard,
//! "/projects/42" is a project detail, anything unmatched is NotFound. Active
//! links use exact segment matching, so "/projects/42" keeps "/projects"
//! highlighted while "/projects-archive" does not.

use crate::collection::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Projects,
    ProjectDetail(RecordId),
    Tasks,
    Calendar,
    Team,
    Files,
    Invoices,
    Masterdata,
    Settings,
    NotFound(String),
}

impl Route {
    /// Map a URL-style path onto a route. Unmatched paths become `NotFound`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        match trimmed {
            "/" => Route::Dashboard,
            "/projects" => Route::Projects,
            "/tasks" => Route::Tasks,
            "/calendar" => Route::Calendar,
            "/team" => Route::Team,
            "/files" => Route::Files,
            "/invoices" => Route::Invoices,
            "/masterdata" => Route::Masterdata,
            "/settings" => Route::Settings,
            other => {
                if let Some(rest) = other.strip_prefix("/projects/") {
                    if let Ok(raw) = rest.parse::<u64>() {
                        return Route::ProjectDetail(RecordId(raw));
                    }
                }
                Route::NotFound(path.to_string())
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::ProjectDetail(id) => format!("/projects/{id}"),
            Route::Tasks => "/tasks".to_string(),
            Route::Calendar => "/calendar".to_string(),
            Route::Team => "/team".to_string(),
            Route::Files => "/files".to_string(),
            Route::Invoices => "/invoices".to_string(),
            Route::Masterdata => "/masterdata".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Projects => "Projects",
            Route::ProjectDetail(_) => "Project Detail",
            Route::Tasks => "Tasks",
            Route::Calendar => "Calendar",
            Route::Team => "Team",
            Route::Files => "Files",
            Route::Invoices => "Invoices",
            Route::Masterdata => "Masterdata",
            Route::Settings => "Settings",
            Route::NotFound(_) => "Not Found",
        }
    }
}

/// Sidebar entry
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub shortcut: char,
}

/// Main navigation, in sidebar order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { title: "Dashboard", path: "/", shortcut: '1' },
    NavItem { title: "Projects", path: "/projects", shortcut: '2' },
    NavItem { title: "Tasks", path: "/tasks", shortcut: '3' },
    NavItem { title: "Calendar", path: "/calendar", shortcut: '4' },
    NavItem { title: "Team", path: "/team", shortcut: '5' },
    NavItem { title: "Files", path: "/files", shortcut: '6' },
    NavItem { title: "Invoices", path: "/invoices", shortcut: '7' },
    NavItem { title: "Masterdata", path: "/masterdata", shortcut: '8' },
];

/// Bottom-of-sidebar entries
pub const BOTTOM_ITEMS: &[NavItem] = &[NavItem {
    title: "Settings",
    path: "/settings",
    shortcut: '9',
}];

/// Exact-segment active matching: equal, or prefix followed by '/'
/// (root is exact-only).
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    if link_path == "/" {
        return current_path == "/";
    }
    current_path == link_path
        || current_path
            .strip_prefix(link_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Current route plus a history stack; the browser-history analogue.
#[derive(Debug)]
pub struct Nav {
    current: Route,
    history: Vec<Route>,
}

impl Default for Nav {
    fn default() -> Self {
        Self::new()
    }
}

impl Nav {
    pub fn new() -> Self {
        Self {
            current: Route::Dashboard,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn current_path(&self) -> String {
        self.current.path()
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }

    /// Pop back to the previous route; no-op at the start of history.
    pub fn back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    fn section_index(&self) -> usize {
        let path = match &self.current {
            Route::ProjectDetail(_) => "/projects".to_string(),
            other => other.path(),
        };
        NAV_ITEMS
            .iter()
            .chain(BOTTOM_ITEMS)
            .position(|item| item.path == path)
            .unwrap_or(0)
    }

    pub fn next_section(&mut self) {
        let total = NAV_ITEMS.len() + BOTTOM_ITEMS.len();
        let idx = (self.section_index() + 1) % total;
        self.navigate_section(idx);
    }

    pub fn prev_section(&mut self) {
        let total = NAV_ITEMS.len() + BOTTOM_ITEMS.len();
        let idx = (self.section_index() + total - 1) % total;
        self.navigate_section(idx);
    }

    fn navigate_section(&mut self, idx: usize) {
        let item = NAV_ITEMS
            .iter()
            .chain(BOTTOM_ITEMS)
            .nth(idx)
            .unwrap_or(&NAV_ITEMS[0]);
        self.navigate(Route::parse(item.path));
    }

    /// Jump by sidebar shortcut digit
    pub fn navigate_shortcut(&mut self, shortcut: char) -> bool {
        let item = NAV_ITEMS
            .iter()
            .chain(BOTTOM_ITEMS)
            .find(|item| item.shortcut == shortcut);
        match item {
            Some(item) => {
                self.navigate(Route::parse(item.path));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_maps_known_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/projects"), Route::Projects);
        assert_eq!(Route::parse("/projects/"), Route::Projects);
        assert_eq!(
            Route::parse("/projects/42"),
            Route::ProjectDetail(RecordId(42))
        );
        assert_eq!(Route::parse("/settings"), Route::Settings);
    }

    #[test]
    fn parse_falls_through_to_not_found() {
        assert!(matches!(Route::parse("/nowhere"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/projects/abc"), Route::NotFound(_)));
    }

    #[test]
    fn path_round_trips_for_concrete_routes() {
        for path in ["/", "/projects", "/projects/7", "/tasks", "/settings"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }

    #[test]
    fn detail_path_keeps_parent_link_active() {
        assert!(is_active("/projects/7", "/projects"));
        assert!(is_active("/projects", "/projects"));
    }

    #[test]
    fn sibling_prefix_does_not_activate() {
        // exact-segment matching: "/projects-archive" is a sibling, not a child
        assert!(!is_active("/projects-archive", "/projects"));
        assert!(!is_active("/teams", "/team"));
    }

    #[test]
    fn root_link_is_exact_only() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/projects", "/"));
    }

    #[test]
    fn navigate_and_back_walk_history() {
        let mut nav = Nav::new();
        nav.navigate(Route::Projects);
        nav.navigate(Route::ProjectDetail(RecordId(3)));
        assert_eq!(nav.current_path(), "/projects/3");
        nav.back();
        assert_eq!(*nav.current(), Route::Projects);
        nav.back();
        assert_eq!(*nav.current(), Route::Dashboard);
        nav.back(); // start of history, no-op
        assert_eq!(*nav.current(), Route::Dashboard);
    }

    #[test]
    fn navigating_to_the_current_route_does_not_grow_history() {
        let mut nav = Nav::new();
        nav.navigate(Route::Projects);
        nav.navigate(Route::Projects);
        nav.back();
        assert_eq!(*nav.current(), Route::Dashboard);
    }

    #[test]
    fn sections_cycle_through_sidebar_order() {
        let mut nav = Nav::new();
        nav.next_section();
        assert_eq!(*nav.current(), Route::Projects);
        nav.prev_section();
        assert_eq!(*nav.current(), Route::Dashboard);
        nav.prev_section();
        assert_eq!(*nav.current(), Route::Settings);
    }

    #[test]
    fn shortcut_digits_jump_directly() {
        let mut nav = Nav::new();
        assert!(nav.navigate_shortcut('5'));
        assert_eq!(*nav.current(), Route::Team);
        assert!(!nav.navigate_shortcut('x'));
    }
}
