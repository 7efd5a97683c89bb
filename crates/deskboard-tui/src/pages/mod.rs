pub mod calendar;
pub mod dashboard;
pub mod list_page;
pub mod masterdata;
pub mod project_detail;
pub mod settings;

pub use calendar::CalendarPage;
pub use list_page::{ListPage, PageAction};
pub use masterdata::MasterdataPage;
pub use settings::SettingsPage;
