//! Create/edit dialog state machine
//!
//! Exactly two states: closed, or open with an in-progress draft. Closing
//! without saving discards the draft. There is no "saving" state because
//! commits are synchronous in-memory replaces.

use crate::collection::RecordId;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<D> {
    Closed,
    Open {
        draft: D,
        /// `Some` when the dialog was opened for editing an existing record
        editing: Option<RecordId>,
    },
}

impl<D> Default for DialogState<D> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<D> DialogState<D> {
    pub fn open_create(&mut self, draft: D) {
        *self = Self::Open {
            draft,
            editing: None,
        };
    }

    /// Open for editing, with the draft seeded from the target record
    pub fn open_edit(&mut self, id: RecordId, draft: D) {
        *self = Self::Open {
            draft,
            editing: Some(id),
        };
    }

    /// Discard the draft
    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn editing(&self) -> Option<RecordId> {
        match self {
            Self::Open { editing, .. } => *editing,
            Self::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Self::Open { draft, .. } => Some(draft),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_discards_the_draft() {
        let mut dialog: DialogState<String> = DialogState::Closed;
        dialog.open_create("half-typed".to_string());
        assert!(dialog.is_open());
        dialog.cancel();
        assert_eq!(dialog, DialogState::Closed);
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn edit_carries_the_target_id() {
        let mut dialog: DialogState<String> = DialogState::Closed;
        dialog.open_edit(RecordId(7), "seeded".to_string());
        assert_eq!(dialog.editing(), Some(RecordId(7)));
        assert_eq!(dialog.draft().map(String::as_str), Some("seeded"));
    }

    #[test]
    fn create_has_no_editing_id() {
        let mut dialog: DialogState<String> = DialogState::Closed;
        dialog.open_create(String::new());
        assert_eq!(dialog.editing(), None);
    }
}
