//! File listing - the one page with non-destructive deletes

use crate::collection::{DestructivePolicy, Filter, FilterSet, Record, RecordId};
use crate::error::CoreError;
use crate::models::project::non_empty_or;
use crate::page::{DraftForm, PageSpec};
use crate::validate;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub id: RecordId,
    pub name: String,
    pub kind: String,
    pub size: String,
    pub project: String,
    pub uploaded_by: String,
    pub modified: NaiveDate,
}

impl Record for FileEntry {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.project, &self.uploaded_by]
    }
    fn field(&self, key: &str) -> Option<String> {
        (key == "kind").then(|| self.kind.clone())
    }
}

#[derive(Debug)]
pub struct FilePage;

impl PageSpec for FilePage {
    type R = FileEntry;
    const ENTITY: &'static str = "file";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::Immediate;

    fn empty_form() -> DraftForm {
        DraftForm::new()
            .with_required("Name", "")
            .with("Kind", "document")
            .with("Size", "0 KB")
            .with("Project", "")
            .with("Uploaded by", "")
    }

    fn edit_form(record: &FileEntry) -> DraftForm {
        DraftForm::new()
            .with_required("Name", record.name.clone())
            .with("Kind", record.kind.clone())
            .with("Size", record.size.clone())
            .with("Project", record.project.clone())
            .with("Uploaded by", record.uploaded_by.clone())
    }

    fn commit(form: &DraftForm) -> Result<FileEntry, CoreError> {
        let name = validate::require("Name", form.value("Name"))?;
        Ok(FileEntry {
            id: RecordId(0),
            name,
            kind: non_empty_or(form.value("Kind"), "document"),
            size: non_empty_or(form.value("Size"), "0 KB"),
            project: form.value("Project").trim().to_string(),
            uploaded_by: form.value("Uploaded by").trim().to_string(),
            modified: chrono::Local::now().date_naive(),
        })
    }

    fn title_of(record: &FileEntry) -> String {
        record.name.clone()
    }

    fn subtitle_of(record: &FileEntry) -> String {
        format!(
            "{} · {} · {} · {}",
            record.size,
            record.project,
            record.uploaded_by,
            record.modified.format("%Y-%m-%d")
        )
    }

    fn badge_of(record: &FileEntry) -> Option<String> {
        Some(record.kind.clone())
    }
}

pub fn filters() -> FilterSet {
    FilterSet::new(vec![Filter::new(
        "kind",
        vec![
            "document".into(),
            "image".into(),
            "spreadsheet".into(),
            "archive".into(),
        ],
    )])
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Mock file listing
pub fn seed() -> Vec<FileEntry> {
    vec![
        FileEntry {
            id: RecordId(0),
            name: "brand-guidelines.pdf".into(),
            kind: "document".into(),
            size: "4.2 MB".into(),
            project: "Website Redesign".into(),
            uploaded_by: "Alice Johnson".into(),
            modified: date(2024, 1, 3),
        },
        FileEntry {
            id: RecordId(0),
            name: "homepage-hero.png".into(),
            kind: "image".into(),
            size: "860 KB".into(),
            project: "Website Redesign".into(),
            uploaded_by: "Alice Johnson".into(),
            modified: date(2024, 1, 5),
        },
        FileEntry {
            id: RecordId(0),
            name: "campaign-budget.xlsx".into(),
            kind: "spreadsheet".into(),
            size: "120 KB".into(),
            project: "Marketing Campaign".into(),
            uploaded_by: "Helen Wu".into(),
            modified: date(2024, 1, 2),
        },
        FileEntry {
            id: RecordId(0),
            name: "schema-dump.tar.gz".into(),
            kind: "archive".into(),
            size: "310 MB".into(),
            project: "Database Migration".into(),
            uploaded_by: "Kelly Osei".into(),
            modified: date(2024, 1, 6),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContainer;

    #[test]
    fn file_deletes_do_not_need_confirmation() {
        let container: PageContainer<FilePage> = PageContainer::new(seed(), filters());
        assert!(!container.delete_needs_confirm());
    }
}
