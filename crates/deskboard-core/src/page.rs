//! Page container - the one list + filter + dialog pattern shared by every
//! domain page
//!
//! Each domain describes itself through `PageSpec` (forms, validation, list
//! rows); `PageContainer` then owns the collection, search query, filter
//! selectors and dialog state and implements create/update/delete uniformly.

use crate::collection::{Collection, DestructivePolicy, FilterSet, Record, RecordId};
use crate::dialog::DialogState;
use crate::error::CoreError;
use tracing::warn;

/// One text field of a create/edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

/// In-progress, uncommitted form data for a dialog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftForm {
    pub fields: Vec<FormField>,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            label,
            value: value.into(),
            required: false,
        });
        self
    }

    pub fn with_required(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.fields.push(FormField {
            label,
            value: value.into(),
            required: true,
        });
        self
    }

    /// Value of the field with the given label; empty if absent
    pub fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// What a domain page must describe about itself
pub trait PageSpec {
    type R: Record;

    /// Singular entity name for messages ("project", "task", ...)
    const ENTITY: &'static str;
    const DELETE_POLICY: DestructivePolicy;
    /// Whether Enter on a list row opens a detail route
    const HAS_DETAIL: bool = false;

    fn empty_form() -> DraftForm;
    fn edit_form(record: &Self::R) -> DraftForm;
    /// Validate the draft and build a record (id assigned by the collection)
    fn commit(form: &DraftForm) -> Result<Self::R, CoreError>;

    /// Primary list line
    fn title_of(record: &Self::R) -> String;
    /// Secondary, muted list line
    fn subtitle_of(record: &Self::R) -> String;
    /// Optional status badge
    fn badge_of(_record: &Self::R) -> Option<String> {
        None
    }
}

/// One page's collection plus its exclusively owned UI state
#[derive(Debug)]
pub struct PageContainer<S: PageSpec> {
    collection: Collection<S::R>,
    pub search_query: String,
    pub filters: FilterSet,
    pub dialog: DialogState<DraftForm>,
}

impl<S: PageSpec> PageContainer<S> {
    pub fn new(seed: Vec<S::R>, filters: FilterSet) -> Self {
        Self {
            collection: Collection::seed(seed),
            search_query: String::new(),
            filters,
            dialog: DialogState::Closed,
        }
    }

    pub fn records(&self) -> &[S::R] {
        self.collection.records()
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&S::R> {
        self.collection.get(id)
    }

    /// The derived, filtered view - pure, recomputed per call
    pub fn filtered(&self) -> Vec<&S::R> {
        self.collection.filtered(&self.search_query, &self.filters)
    }

    /// Id of the nth record in the current filtered view
    pub fn filtered_id(&self, index: usize) -> Option<RecordId> {
        self.filtered().get(index).map(|r| r.id())
    }

    pub fn open_create(&mut self) {
        self.dialog.open_create(S::empty_form());
    }

    /// Open the create dialog with a pre-seeded draft (e.g. calendar date)
    pub fn open_create_with(&mut self, draft: DraftForm) {
        self.dialog.open_create(draft);
    }

    pub fn open_edit(&mut self, id: RecordId) -> Result<(), CoreError> {
        let record = self.collection.get(id).ok_or(CoreError::NotFound {
            entity: S::ENTITY,
            id,
        })?;
        let draft = S::edit_form(record);
        self.dialog.open_edit(id, draft);
        Ok(())
    }

    pub fn cancel_dialog(&mut self) {
        self.dialog.cancel();
    }

    /// Validate and commit the open dialog. On validation failure the dialog
    /// stays open with the draft intact and the error is returned for the
    /// caller to surface.
    pub fn save(&mut self) -> Result<RecordId, CoreError> {
        let Some(draft) = self.dialog.draft() else {
            warn!(entity = S::ENTITY, "save with no open dialog");
            return Err(CoreError::validation("No open dialog"));
        };
        let record = S::commit(draft)?;
        let id = match self.dialog.editing() {
            Some(id) => {
                self.collection.update(S::ENTITY, id, record)?;
                id
            }
            None => self.collection.create(record),
        };
        self.dialog.cancel();
        Ok(id)
    }

    pub fn delete(&mut self, id: RecordId) -> Result<(), CoreError> {
        self.collection.remove(S::ENTITY, id).map(|_| ())
    }

    /// True when deletes from this page must be confirmed first
    pub fn delete_needs_confirm(&self) -> bool {
        S::DELETE_POLICY == DestructivePolicy::ConfirmRequired
    }

    /// Clear search and reset every filter to All
    pub fn clear_view(&mut self) {
        self.search_query.clear();
        self.filters.reset();
    }
}
