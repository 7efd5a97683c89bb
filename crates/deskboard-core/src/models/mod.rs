//! Domain records and their page descriptions
//!
//! Every collection is seeded from literal in-source mock arrays; nothing is
//! fetched or persisted.

pub mod department;
pub mod event;
pub mod file;
pub mod invoice;
pub mod project;
pub mod task;
pub mod team;

pub use department::{Department, DepartmentPage, MasterUser, MasterUserPage};
pub use event::{CalendarEvent, EventPage};
pub use file::{FileEntry, FilePage};
pub use invoice::{Invoice, InvoicePage};
pub use project::{Project, ProjectPage};
pub use task::{Task, TaskPage};
pub use team::{TeamMember, TeamPage};
