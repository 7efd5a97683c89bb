//! Integration tests for the shared page-container pattern, driven through
//! the Projects and Masterdata pages.

use deskboard_core::models::department::{self, DepartmentPage};
use deskboard_core::models::project::{self, ProjectPage};
use deskboard_core::page::{DraftForm, PageContainer};
use deskboard_core::Record;

fn projects() -> PageContainer<ProjectPage> {
    PageContainer::new(project::seed(), project::filters())
}

#[test]
fn unfiltered_view_returns_full_collection_in_order() {
    let container = projects();
    let view = container.filtered();
    assert_eq!(view.len(), container.len());
    let names: Vec<_> = view.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Website Redesign",
            "Mobile App Development",
            "Marketing Campaign",
            "Database Migration"
        ]
    );
}

#[test]
fn search_is_case_insensitive_and_exhaustive() {
    let mut container = projects();
    container.search_query = "MIGRATION".to_string();
    let view = container.filtered();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Database Migration");

    // every returned record really contains the query
    container.search_query = "design".to_string();
    for record in container.filtered() {
        let haystack = format!("{} {} {}", record.name, record.description, record.client);
        assert!(haystack.to_lowercase().contains("design"));
    }
}

#[test]
fn create_then_list_contains_exactly_one_extra_record() {
    let mut container = projects();
    let before = container.len();

    container.open_create();
    {
        let draft = container.dialog.draft_mut().unwrap();
        for field in &mut draft.fields {
            if field.label == "Name" {
                field.value = "Launch Party".to_string();
            }
        }
    }
    let id = container.save().unwrap();

    assert_eq!(container.len(), before + 1);
    assert!(!container.dialog.is_open());
    let created = container.get(id).unwrap();
    assert_eq!(created.name, "Launch Party");
    // standardized append-at-back
    assert_eq!(container.records().last().unwrap().name, "Launch Party");
}

#[test]
fn create_with_empty_name_keeps_dialog_open_and_adds_nothing() {
    let mut container = projects();
    let before = container.len();

    container.open_create();
    let err = container.save().unwrap_err();
    assert!(err.to_string().contains("Name is required"));
    assert!(container.dialog.is_open());
    assert_eq!(container.len(), before);
}

#[test]
fn edit_seeds_draft_and_save_replaces_in_place() {
    let mut container = projects();
    let id = container.records()[1].id();

    container.open_edit(id).unwrap();
    assert_eq!(container.dialog.draft().unwrap().value("Name"), "Mobile App Development");
    {
        let draft = container.dialog.draft_mut().unwrap();
        for field in &mut draft.fields {
            if field.label == "Name" {
                field.value = "Mobile App v2".to_string();
            }
        }
    }
    let saved = container.save().unwrap();
    assert_eq!(saved, id);
    assert_eq!(container.records()[1].name, "Mobile App v2");
    assert_eq!(container.len(), 4);
}

#[test]
fn cancel_discards_the_draft_without_committing() {
    let mut container = projects();
    container.open_create();
    container.cancel_dialog();
    assert!(!container.dialog.is_open());
    assert_eq!(container.len(), 4);
}

#[test]
fn delete_removes_exactly_one_record_order_stable() {
    let mut container = projects();
    let id = container.records()[1].id();
    container.delete(id).unwrap();

    let names: Vec<_> = container.records().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Website Redesign", "Marketing Campaign", "Database Migration"]
    );
}

#[test]
fn destructive_pages_flag_confirmation_and_do_not_delete_on_request() {
    let mut container: PageContainer<DepartmentPage> =
        PageContainer::new(department::department_seed(), department::department_filters());
    let id = container.records()[0].id();

    // the confirm flag alone must not mutate anything
    assert!(container.delete_needs_confirm());
    assert_eq!(container.len(), 3);

    // explicit confirm path
    container.delete(id).unwrap();
    assert_eq!(container.len(), 2);
}

#[test]
fn clear_view_resets_search_and_filters() {
    let mut container = projects();
    container.search_query = "x".into();
    container.filters.filters[0].cycle();
    container.clear_view();
    assert!(container.search_query.is_empty());
    assert_eq!(container.filtered().len(), 4);
}

#[test]
fn draft_form_lookup_is_by_label() {
    let form = DraftForm::new().with_required("Name", "A").with("Client", "B");
    assert_eq!(form.value("Name"), "A");
    assert_eq!(form.value("Client"), "B");
    assert_eq!(form.value("Missing"), "");
}
