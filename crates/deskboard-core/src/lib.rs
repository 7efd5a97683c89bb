//! deskboard-core - Core library for deskboard
//!
//! Provides the session gate, navigation, generic collections, domain models
//! and preferences for the deskboard terminal client.

pub mod calendar;
pub mod collection;
pub mod dialog;
pub mod error;
pub mod invoice;
pub mod models;
pub mod nav;
pub mod page;
pub mod preferences;
pub mod session;
pub mod validate;

pub use collection::{Collection, DestructivePolicy, Filter, FilterSet, Record, RecordId, Selection};
pub use dialog::DialogState;
pub use error::CoreError;
pub use nav::{Nav, NavItem, Route};
pub use page::{DraftForm, FormField, PageContainer, PageSpec};
pub use preferences::{ColorScheme, Preferences};
pub use session::{SessionGate, SessionState, UserProfile};
