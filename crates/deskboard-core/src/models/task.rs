//! Tasks

use crate::collection::{DestructivePolicy, Filter, FilterSet, Record, RecordId};
use crate::error::CoreError;
use crate::models::project::non_empty_or;
use crate::page::{DraftForm, PageSpec};
use crate::validate;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub project: String,
    pub assignee: String,
    pub due_date: NaiveDate,
}

impl Record for Task {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.clone()),
            "priority" => Some(self.priority.clone()),
            "project" => Some(self.project.clone()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct TaskPage;

impl PageSpec for TaskPage {
    type R = Task;
    const ENTITY: &'static str = "task";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::Immediate;

    fn empty_form() -> DraftForm {
        DraftForm::new()
            .with_required("Title", "")
            .with("Description", "")
            .with("Status", "To Do")
            .with("Priority", "Medium")
            .with("Project", "")
            .with("Assignee", "")
            .with("Due date (YYYY-MM-DD)", chrono::Local::now().date_naive().format("%Y-%m-%d").to_string())
    }

    fn edit_form(record: &Task) -> DraftForm {
        DraftForm::new()
            .with_required("Title", record.title.clone())
            .with("Description", record.description.clone())
            .with("Status", record.status.clone())
            .with("Priority", record.priority.clone())
            .with("Project", record.project.clone())
            .with("Assignee", record.assignee.clone())
            .with("Due date (YYYY-MM-DD)", record.due_date.format("%Y-%m-%d").to_string())
    }

    fn commit(form: &DraftForm) -> Result<Task, CoreError> {
        let title = validate::require("Title", form.value("Title"))?;
        let due_date = validate::date("Due date", form.value("Due date (YYYY-MM-DD)"))?;
        Ok(Task {
            id: RecordId(0),
            title,
            description: form.value("Description").trim().to_string(),
            status: non_empty_or(form.value("Status"), "To Do"),
            priority: non_empty_or(form.value("Priority"), "Medium"),
            project: form.value("Project").trim().to_string(),
            assignee: form.value("Assignee").trim().to_string(),
            due_date,
        })
    }

    fn title_of(record: &Task) -> String {
        record.title.clone()
    }

    fn subtitle_of(record: &Task) -> String {
        format!(
            "{} · {} · due {}",
            record.project,
            record.assignee,
            record.due_date.format("%Y-%m-%d")
        )
    }

    fn badge_of(record: &Task) -> Option<String> {
        Some(record.status.clone())
    }
}

pub fn filters() -> FilterSet {
    FilterSet::new(vec![
        Filter::new(
            "status",
            vec!["To Do".into(), "In Progress".into(), "Done".into()],
        ),
        Filter::new(
            "priority",
            vec!["Low".into(), "Medium".into(), "High".into(), "Critical".into()],
        ),
        Filter::new(
            "project",
            vec![
                "Website Redesign".into(),
                "Mobile App Development".into(),
                "Marketing Campaign".into(),
                "Database Migration".into(),
            ],
        ),
    ])
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Mock task data
pub fn seed() -> Vec<Task> {
    vec![
        Task {
            id: RecordId(0),
            title: "Design new homepage mockups".into(),
            description: "Create high-fidelity mockups for the redesigned homepage".into(),
            status: "In Progress".into(),
            priority: "High".into(),
            project: "Website Redesign".into(),
            assignee: "Alice".into(),
            due_date: date(2024, 1, 8),
        },
        Task {
            id: RecordId(0),
            title: "Set up CI pipeline".into(),
            description: "Automated build and test pipeline for the mobile app".into(),
            status: "To Do".into(),
            priority: "Medium".into(),
            project: "Mobile App Development".into(),
            assignee: "David".into(),
            due_date: date(2024, 1, 12),
        },
        Task {
            id: RecordId(0),
            title: "Write campaign copy".into(),
            description: "Copy for email and social media variants".into(),
            status: "Done".into(),
            priority: "Medium".into(),
            project: "Marketing Campaign".into(),
            assignee: "Helen".into(),
            due_date: date(2024, 1, 5),
        },
        Task {
            id: RecordId(0),
            title: "Export production schema".into(),
            description: "Dump and verify the legacy schema before migration".into(),
            status: "In Progress".into(),
            priority: "Critical".into(),
            project: "Database Migration".into(),
            assignee: "Kelly".into(),
            due_date: date(2024, 1, 9),
        },
        Task {
            id: RecordId(0),
            title: "Review accessibility audit".into(),
            description: "Address WCAG findings from the external audit".into(),
            status: "To Do".into(),
            priority: "Low".into(),
            project: "Website Redesign".into(),
            assignee: "Charlie".into(),
            due_date: date(2024, 1, 18),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContainer;

    #[test]
    fn project_filter_narrows_tasks() {
        let mut container: PageContainer<TaskPage> = PageContainer::new(seed(), filters());
        container.filters.filters[2].selection =
            crate::collection::Selection::Value("Website Redesign".into());
        let view = container.filtered();
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|t| t.project == "Website Redesign"));
    }

    #[test]
    fn commit_requires_a_title() {
        let form = TaskPage::empty_form();
        assert!(TaskPage::commit(&form).is_err());
    }

    #[test]
    fn search_matches_title_and_description_but_not_assignee() {
        let mut container: PageContainer<TaskPage> = PageContainer::new(seed(), filters());
        container.search_query = "mockups".into();
        assert_eq!(container.filtered().len(), 1);
        container.search_query = "pipeline".into();
        assert_eq!(container.filtered().len(), 1);
        // "Helen" only appears as an assignee
        container.search_query = "Helen".into();
        assert!(container.filtered().is_empty());
    }
}
