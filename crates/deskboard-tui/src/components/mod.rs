pub mod confirm_dialog;
pub mod login;
pub mod search_bar;
pub mod sidebar;
pub mod spinner;
pub mod toast;

pub use confirm_dialog::{ConfirmDialog, ConfirmResult};
pub use login::LoginForm;
pub use search_bar::highlight_matches;
pub use spinner::Spinner;
pub use toast::{Toast, ToastKind, ToastManager};
