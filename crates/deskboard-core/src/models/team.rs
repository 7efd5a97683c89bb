//! Team members

use crate::collection::{DestructivePolicy, Filter, FilterSet, Record, RecordId};
use crate::error::CoreError;
use crate::models::project::non_empty_or;
use crate::page::{DraftForm, PageSpec};
use crate::validate;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub phone: String,
    pub status: String,
}

impl Record for TeamMember {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.role]
    }
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "department" => Some(self.department.clone()),
            "status" => Some(self.status.clone()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct TeamPage;

impl PageSpec for TeamPage {
    type R = TeamMember;
    const ENTITY: &'static str = "team member";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::ConfirmRequired;

    fn empty_form() -> DraftForm {
        DraftForm::new()
            .with_required("Name", "")
            .with_required("Email", "")
            .with("Role", "")
            .with("Department", "Engineering")
            .with("Phone", "")
    }

    fn edit_form(record: &TeamMember) -> DraftForm {
        DraftForm::new()
            .with_required("Name", record.name.clone())
            .with_required("Email", record.email.clone())
            .with("Role", record.role.clone())
            .with("Department", record.department.clone())
            .with("Phone", record.phone.clone())
    }

    fn commit(form: &DraftForm) -> Result<TeamMember, CoreError> {
        let name = validate::require("Name", form.value("Name"))?;
        let email = validate::email(form.value("Email"))?;
        Ok(TeamMember {
            id: RecordId(0),
            name,
            email,
            role: form.value("Role").trim().to_string(),
            department: non_empty_or(form.value("Department"), "Engineering"),
            phone: form.value("Phone").trim().to_string(),
            status: "Active".into(),
        })
    }

    fn title_of(record: &TeamMember) -> String {
        record.name.clone()
    }

    fn subtitle_of(record: &TeamMember) -> String {
        format!("{} · {} · {}", record.role, record.email, record.department)
    }

    fn badge_of(record: &TeamMember) -> Option<String> {
        Some(record.status.clone())
    }
}

pub fn filters() -> FilterSet {
    FilterSet::new(vec![Filter::new(
        "department",
        vec![
            "Engineering".into(),
            "Design".into(),
            "Marketing".into(),
            "Operations".into(),
        ],
    )])
}

/// Mock team data
pub fn seed() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: RecordId(0),
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            role: "UI Designer".into(),
            department: "Design".into(),
            phone: "+1 555 0101".into(),
            status: "Active".into(),
        },
        TeamMember {
            id: RecordId(0),
            name: "Bob Martinez".into(),
            email: "bob@example.com".into(),
            role: "Frontend Developer".into(),
            department: "Engineering".into(),
            phone: "+1 555 0102".into(),
            status: "Active".into(),
        },
        TeamMember {
            id: RecordId(0),
            name: "Charlie Kim".into(),
            email: "charlie@example.com".into(),
            role: "Backend Developer".into(),
            department: "Engineering".into(),
            phone: "+1 555 0103".into(),
            status: "Active".into(),
        },
        TeamMember {
            id: RecordId(0),
            name: "Diana Patel".into(),
            email: "diana@example.com".into(),
            role: "Marketing Lead".into(),
            department: "Marketing".into(),
            phone: "+1 555 0104".into(),
            status: "On Leave".into(),
        },
        TeamMember {
            id: RecordId(0),
            name: "Eve Thompson".into(),
            email: "eve@example.com".into(),
            role: "Project Manager".into(),
            department: "Operations".into(),
            phone: "+1 555 0105".into(),
            status: "Active".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_rejects_invalid_email() {
        let form = DraftForm::new()
            .with_required("Name", "New Person")
            .with_required("Email", "not-an-email");
        let err = TeamPage::commit(&form).unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn commit_accepts_valid_member() {
        let form = DraftForm::new()
            .with_required("Name", "New Person")
            .with_required("Email", "new@example.com")
            .with("Role", "QA")
            .with("Department", "");
        let member = TeamPage::commit(&form).unwrap();
        assert_eq!(member.department, "Engineering");
        assert_eq!(member.status, "Active");
    }
}
