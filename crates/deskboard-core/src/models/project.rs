//! Projects - the flagship page, with a detail route

use crate::collection::{DestructivePolicy, Filter, FilterSet, Record, RecordId};
use crate::error::CoreError;
use crate::page::{DraftForm, PageSpec};
use crate::validate;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub progress: u8,
    pub due_date: NaiveDate,
    pub client: String,
    pub budget: String,
    pub team_members: Vec<String>,
}

impl Record for Project {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.client]
    }
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "status" => Some(self.status.clone()),
            "priority" => Some(self.priority.clone()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ProjectPage;

impl PageSpec for ProjectPage {
    type R = Project;
    const ENTITY: &'static str = "project";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::ConfirmRequired;
    const HAS_DETAIL: bool = true;

    fn empty_form() -> DraftForm {
        DraftForm::new()
            .with_required("Name", "")
            .with("Description", "")
            .with("Status", "Planning")
            .with("Priority", "Medium")
            .with("Progress (%)", "0")
            .with("Due date (YYYY-MM-DD)", today_string())
            .with("Client", "Internal")
            .with("Budget", "")
            .with("Team (comma-separated)", "")
    }

    fn edit_form(record: &Project) -> DraftForm {
        DraftForm::new()
            .with_required("Name", record.name.clone())
            .with("Description", record.description.clone())
            .with("Status", record.status.clone())
            .with("Priority", record.priority.clone())
            .with("Progress (%)", record.progress.to_string())
            .with("Due date (YYYY-MM-DD)", record.due_date.format("%Y-%m-%d").to_string())
            .with("Client", record.client.clone())
            .with("Budget", record.budget.clone())
            .with("Team (comma-separated)", record.team_members.join(", "))
    }

    fn commit(form: &DraftForm) -> Result<Project, CoreError> {
        let name = validate::require("Name", form.value("Name"))?;
        let due_date = validate::date("Due date", form.value("Due date (YYYY-MM-DD)"))?;
        let progress = form
            .value("Progress (%)")
            .trim()
            .parse::<u8>()
            .unwrap_or(0)
            .min(100);
        Ok(Project {
            id: RecordId(0),
            name,
            description: form.value("Description").trim().to_string(),
            status: non_empty_or(form.value("Status"), "Planning"),
            priority: non_empty_or(form.value("Priority"), "Medium"),
            progress,
            due_date,
            client: non_empty_or(form.value("Client"), "Internal"),
            budget: form.value("Budget").trim().to_string(),
            team_members: split_names(form.value("Team (comma-separated)")),
        })
    }

    fn title_of(record: &Project) -> String {
        record.name.clone()
    }

    fn subtitle_of(record: &Project) -> String {
        format!(
            "{} · {}% · due {} · {}",
            record.client,
            record.progress,
            record.due_date.format("%Y-%m-%d"),
            record.priority
        )
    }

    fn badge_of(record: &Project) -> Option<String> {
        Some(record.status.clone())
    }
}

fn today_string() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub(crate) fn non_empty_or(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

pub(crate) fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn filters() -> FilterSet {
    FilterSet::new(vec![Filter::new(
        "status",
        vec![
            "Planning".into(),
            "In Progress".into(),
            "Review".into(),
            "Completed".into(),
        ],
    )])
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Mock project data
pub fn seed() -> Vec<Project> {
    vec![
        Project {
            id: RecordId(0),
            name: "Website Redesign".into(),
            description: "Complete overhaul of company website with new branding and improved UX"
                .into(),
            status: "In Progress".into(),
            priority: "High".into(),
            progress: 65,
            due_date: date(2024, 1, 15),
            client: "Internal".into(),
            budget: "$25,000".into(),
            team_members: vec!["Alice".into(), "Bob".into(), "Charlie".into()],
        },
        Project {
            id: RecordId(0),
            name: "Mobile App Development".into(),
            description: "Native iOS and Android app for customer engagement".into(),
            status: "Planning".into(),
            priority: "High".into(),
            progress: 20,
            due_date: date(2024, 2, 28),
            client: "TechCorp".into(),
            budget: "$50,000".into(),
            team_members: vec!["David".into(), "Emma".into(), "Frank".into(), "Grace".into()],
        },
        Project {
            id: RecordId(0),
            name: "Marketing Campaign".into(),
            description: "Q1 digital marketing campaign across multiple channels".into(),
            status: "Review".into(),
            priority: "Medium".into(),
            progress: 80,
            due_date: date(2024, 1, 10),
            client: "Marketing Dept".into(),
            budget: "$15,000".into(),
            team_members: vec!["Helen".into(), "Ivan".into(), "Jack".into()],
        },
        Project {
            id: RecordId(0),
            name: "Database Migration".into(),
            description: "Migrate legacy database to new cloud infrastructure".into(),
            status: "In Progress".into(),
            priority: "Critical".into(),
            progress: 45,
            due_date: date(2024, 1, 20),
            client: "IT Department".into(),
            budget: "$30,000".into(),
            team_members: vec!["Kelly".into(), "Liam".into(), "Maya".into(), "Noah".into()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_requires_a_name() {
        let form = ProjectPage::empty_form();
        let err = ProjectPage::commit(&form).unwrap_err();
        assert!(err.to_string().contains("Name"));
    }

    #[test]
    fn commit_defaults_status_and_clamps_progress() {
        let form = DraftForm::new()
            .with_required("Name", "Thing")
            .with("Status", "")
            .with("Progress (%)", "250")
            .with("Due date (YYYY-MM-DD)", "2024-03-01");
        let project = ProjectPage::commit(&form).unwrap();
        assert_eq!(project.status, "Planning");
        assert_eq!(project.progress, 100);
    }

    #[test]
    fn edit_form_round_trips_fields() {
        let original = &seed()[0];
        let form = ProjectPage::edit_form(original);
        let rebuilt = ProjectPage::commit(&form).unwrap();
        assert_eq!(rebuilt.name, original.name);
        assert_eq!(rebuilt.progress, original.progress);
        assert_eq!(rebuilt.due_date, original.due_date);
        assert_eq!(rebuilt.team_members, original.team_members);
    }
}
