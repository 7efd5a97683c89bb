//! Generic in-memory collections backing every page
//!
//! A `Collection` owns one page's records and hands out ids from a monotonic
//! counter, so rapid sequential creates can never collide. Filtering is pure
//! and recomputed on every call; nothing is cached.

use crate::error::CoreError;
use std::fmt;
use tracing::debug;

/// Locally unique record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A domain record stored in a collection
pub trait Record {
    fn id(&self) -> RecordId;
    fn set_id(&mut self, id: RecordId);
    /// Fields the search box matches against (case-insensitive substring)
    fn search_text(&self) -> Vec<&str>;
    /// Named field lookup for filter selectors
    fn field(&self, key: &str) -> Option<String>;
}

/// Whether deleting from a collection needs an explicit confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructivePolicy {
    ConfirmRequired,
    Immediate,
}

/// One filter selector: `All` or a concrete value from `options`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Value(String),
}

#[derive(Debug, Clone)]
pub struct Filter {
    pub key: &'static str,
    pub options: Vec<String>,
    pub selection: Selection,
}

impl Filter {
    pub fn new(key: &'static str, options: Vec<String>) -> Self {
        Self {
            key,
            options,
            selection: Selection::All,
        }
    }

    /// Advance the selection: All -> options[0] -> ... -> All
    pub fn cycle(&mut self) {
        self.selection = match &self.selection {
            Selection::All => match self.options.first() {
                Some(first) => Selection::Value(first.clone()),
                None => Selection::All,
            },
            Selection::Value(current) => {
                let idx = self.options.iter().position(|o| o == current);
                match idx.and_then(|i| self.options.get(i + 1)) {
                    Some(next) => Selection::Value(next.clone()),
                    None => Selection::All,
                }
            }
        };
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match &self.selection {
            Selection::All => true,
            Selection::Value(v) => record.field(self.key).as_deref() == Some(v.as_str()),
        }
    }

    pub fn display(&self) -> String {
        match &self.selection {
            Selection::All => format!("{}: all", self.key),
            Selection::Value(v) => format!("{}: {}", self.key, v),
        }
    }
}

/// The set of filter selectors a page exposes
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    pub filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }

    pub fn reset(&mut self) {
        for f in &mut self.filters {
            f.selection = Selection::All;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

/// Ordered, exclusively owned record store with monotonic id assignment
#[derive(Debug, Clone)]
pub struct Collection<R: Record> {
    records: Vec<R>,
    next_id: u64,
}

impl<R: Record> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with initial mock data, assigning ids 1..=n
    pub fn seed(records: Vec<R>) -> Self {
        let mut collection = Self::new();
        for record in records {
            collection.create(record);
        }
        collection
    }

    /// Append a record at the back and assign it the next id
    pub fn create(&mut self, mut record: R) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        record.set_id(id);
        self.records.push(record);
        debug!(%id, total = self.records.len(), "record created");
        id
    }

    /// Replace the record with the given id in place, preserving position
    pub fn update(&mut self, entity: &'static str, id: RecordId, mut record: R) -> Result<(), CoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(CoreError::NotFound { entity, id })?;
        record.set_id(id);
        self.records[pos] = record;
        debug!(%id, "record updated");
        Ok(())
    }

    /// Remove exactly the record with the given id; the rest keep their order
    pub fn remove(&mut self, entity: &'static str, id: RecordId) -> Result<R, CoreError> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(CoreError::NotFound { entity, id })?;
        let removed = self.records.remove(pos);
        debug!(%id, total = self.records.len(), "record removed");
        Ok(removed)
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derived view: search query AND every active filter, order preserved
    pub fn filtered(&self, query: &str, filters: &FilterSet) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| matches_query(*r, query) && filters.matches(*r))
            .collect()
    }
}

fn matches_query<R: Record>(record: &R, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_text()
        .iter()
        .any(|text| text.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: RecordId,
        title: String,
        status: String,
    }

    impl Note {
        fn new(title: &str, status: &str) -> Self {
            Self {
                id: RecordId(0),
                title: title.into(),
                status: status.into(),
            }
        }
    }

    impl Record for Note {
        fn id(&self) -> RecordId {
            self.id
        }
        fn set_id(&mut self, id: RecordId) {
            self.id = id;
        }
        fn search_text(&self) -> Vec<&str> {
            vec![&self.title]
        }
        fn field(&self, key: &str) -> Option<String> {
            (key == "status").then(|| self.status.clone())
        }
    }

    fn sample() -> Collection<Note> {
        Collection::seed(vec![
            Note::new("Website Redesign", "active"),
            Note::new("Mobile App", "planning"),
            Note::new("Marketing Campaign", "active"),
        ])
    }

    #[test]
    fn empty_query_and_all_filters_return_everything_in_order() {
        let c = sample();
        let view = c.filtered("", &FilterSet::empty());
        assert_eq!(view.len(), 3);
        assert_eq!(view[0].title, "Website Redesign");
        assert_eq!(view[2].title, "Marketing Campaign");
    }

    #[test]
    fn query_matches_are_case_insensitive_substrings() {
        let c = sample();
        let view = c.filtered("APP", &FilterSet::empty());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].title, "Mobile App");
        assert!(c.filtered("nonexistent", &FilterSet::empty()).is_empty());
    }

    #[test]
    fn every_filtered_record_contains_the_query() {
        let c = sample();
        for record in c.filtered("ma", &FilterSet::empty()) {
            assert!(record.title.to_lowercase().contains("ma"));
        }
    }

    #[test]
    fn filter_selection_constrains_by_exact_field_match() {
        let c = sample();
        let mut filters = FilterSet::new(vec![Filter::new(
            "status",
            vec!["active".into(), "planning".into()],
        )]);
        filters.filters[0].selection = Selection::Value("active".into());
        let view = c.filtered("", &filters);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.status == "active"));
    }

    #[test]
    fn filter_cycle_walks_options_then_back_to_all() {
        let mut filter = Filter::new("status", vec!["a".into(), "b".into()]);
        assert_eq!(filter.selection, Selection::All);
        filter.cycle();
        assert_eq!(filter.selection, Selection::Value("a".into()));
        filter.cycle();
        assert_eq!(filter.selection, Selection::Value("b".into()));
        filter.cycle();
        assert_eq!(filter.selection, Selection::All);
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut c = sample();
        let removed_id = c.records()[2].id();
        c.remove("note", removed_id).unwrap();
        let new_id = c.create(Note::new("Fresh", "active"));
        assert!(new_id > removed_id);
        let another = c.create(Note::new("Fresher", "active"));
        assert!(another > new_id);
    }

    #[test]
    fn remove_deletes_exactly_one_and_keeps_order() {
        let mut c = sample();
        let id = c.records()[1].id();
        c.remove("note", id).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.records()[0].title, "Website Redesign");
        assert_eq!(c.records()[1].title, "Marketing Campaign");
    }

    #[test]
    fn update_replaces_in_place() {
        let mut c = sample();
        let id = c.records()[0].id();
        c.update("note", id, Note::new("Renamed", "done")).unwrap();
        assert_eq!(c.records()[0].title, "Renamed");
        assert_eq!(c.records()[0].id, id);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let mut c = sample();
        let err = c.update("note", RecordId(999), Note::new("x", "y")).unwrap_err();
        assert_eq!(
            err,
            CoreError::NotFound {
                entity: "note",
                id: RecordId(999)
            }
        );
    }
}
