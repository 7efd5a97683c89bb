//! Masterdata - departments and managed users, both destructive on delete

use crate::collection::{DestructivePolicy, FilterSet, Record, RecordId};
use crate::error::CoreError;
use crate::page::{DraftForm, PageSpec};
use crate::validate;

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
    pub head: String,
    pub member_count: u32,
}

impl Record for Department {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.head]
    }
    fn field(&self, _key: &str) -> Option<String> {
        None
    }
}

#[derive(Debug)]
pub struct DepartmentPage;

impl PageSpec for DepartmentPage {
    type R = Department;
    const ENTITY: &'static str = "department";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::ConfirmRequired;

    fn empty_form() -> DraftForm {
        DraftForm::new()
            .with_required("Name", "")
            .with("Head", "")
            .with("Members", "0")
    }

    fn edit_form(record: &Department) -> DraftForm {
        DraftForm::new()
            .with_required("Name", record.name.clone())
            .with("Head", record.head.clone())
            .with("Members", record.member_count.to_string())
    }

    fn commit(form: &DraftForm) -> Result<Department, CoreError> {
        let name = validate::require("Name", form.value("Name"))?;
        Ok(Department {
            id: RecordId(0),
            name,
            head: form.value("Head").trim().to_string(),
            member_count: form.value("Members").trim().parse().unwrap_or(0),
        })
    }

    fn title_of(record: &Department) -> String {
        record.name.clone()
    }

    fn subtitle_of(record: &Department) -> String {
        format!("head: {} · {} members", record.head, record.member_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasterUser {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

impl Record for MasterUser {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "role" => Some(self.role.clone()),
            "department" => Some(self.department.clone()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct MasterUserPage;

impl PageSpec for MasterUserPage {
    type R = MasterUser;
    const ENTITY: &'static str = "user";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::ConfirmRequired;

    fn empty_form() -> DraftForm {
        DraftForm::new()
            .with_required("Name", "")
            .with_required("Email", "")
            .with("Role", "Member")
            .with("Department", "")
    }

    fn edit_form(record: &MasterUser) -> DraftForm {
        DraftForm::new()
            .with_required("Name", record.name.clone())
            .with_required("Email", record.email.clone())
            .with("Role", record.role.clone())
            .with("Department", record.department.clone())
    }

    fn commit(form: &DraftForm) -> Result<MasterUser, CoreError> {
        let name = validate::require("Name", form.value("Name"))?;
        let email = validate::email(form.value("Email"))?;
        Ok(MasterUser {
            id: RecordId(0),
            name,
            email,
            role: crate::models::project::non_empty_or(form.value("Role"), "Member"),
            department: form.value("Department").trim().to_string(),
        })
    }

    fn title_of(record: &MasterUser) -> String {
        record.name.clone()
    }

    fn subtitle_of(record: &MasterUser) -> String {
        format!("{} · {} · {}", record.email, record.role, record.department)
    }
}

pub fn department_filters() -> FilterSet {
    FilterSet::empty()
}

pub fn user_filters() -> FilterSet {
    FilterSet::new(vec![crate::collection::Filter::new(
        "role",
        vec!["Administrator".into(), "Manager".into(), "Member".into()],
    )])
}

/// Mock departments
pub fn department_seed() -> Vec<Department> {
    vec![
        Department {
            id: RecordId(0),
            name: "Engineering".into(),
            head: "Charlie Kim".into(),
            member_count: 12,
        },
        Department {
            id: RecordId(0),
            name: "Design".into(),
            head: "Alice Johnson".into(),
            member_count: 5,
        },
        Department {
            id: RecordId(0),
            name: "Marketing".into(),
            head: "Diana Patel".into(),
            member_count: 7,
        },
    ]
}

/// Mock managed users
pub fn user_seed() -> Vec<MasterUser> {
    vec![
        MasterUser {
            id: RecordId(0),
            name: "Jane Doe".into(),
            email: "jane.doe@example.com".into(),
            role: "Administrator".into(),
            department: "Operations".into(),
        },
        MasterUser {
            id: RecordId(0),
            name: "Bob Martinez".into(),
            email: "bob@example.com".into(),
            role: "Manager".into(),
            department: "Engineering".into(),
        },
        MasterUser {
            id: RecordId(0),
            name: "Eve Thompson".into(),
            email: "eve@example.com".into(),
            role: "Member".into(),
            department: "Operations".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContainer;

    #[test]
    fn department_deletes_require_confirmation() {
        let container: PageContainer<DepartmentPage> =
            PageContainer::new(department_seed(), department_filters());
        assert!(container.delete_needs_confirm());
    }

    #[test]
    fn user_commit_validates_email() {
        let form = DraftForm::new()
            .with_required("Name", "X")
            .with_required("Email", "bad");
        assert!(MasterUserPage::commit(&form).is_err());
    }
}
