//! Invoices

use crate::collection::{DestructivePolicy, Filter, FilterSet, Record, RecordId};
use crate::error::CoreError;
use crate::invoice::{tax_amount, total};
use crate::models::project::non_empty_or;
use crate::page::{DraftForm, PageSpec};
use crate::validate;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: RecordId,
    pub number: String,
    pub client: String,
    pub amount: f64,
    pub tax_rate: f64,
    pub status: String,
    pub issued: NaiveDate,
}

impl Invoice {
    pub fn tax_amount(&self) -> f64 {
        tax_amount(self.amount, self.tax_rate)
    }

    pub fn total(&self) -> f64 {
        total(self.amount, self.tax_rate)
    }
}

impl Record for Invoice {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.number, &self.client]
    }
    fn field(&self, key: &str) -> Option<String> {
        (key == "status").then(|| self.status.clone())
    }
}

#[derive(Debug)]
pub struct InvoicePage;

impl PageSpec for InvoicePage {
    type R = Invoice;
    const ENTITY: &'static str = "invoice";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::Immediate;

    fn empty_form() -> DraftForm {
        DraftForm::new()
            .with_required("Number", "")
            .with_required("Client", "")
            .with_required("Amount", "")
            .with("Tax rate (%)", "10")
            .with("Status", "Draft")
            .with("Issued (YYYY-MM-DD)", chrono::Local::now().date_naive().format("%Y-%m-%d").to_string())
    }

    fn edit_form(record: &Invoice) -> DraftForm {
        DraftForm::new()
            .with_required("Number", record.number.clone())
            .with_required("Client", record.client.clone())
            .with_required("Amount", format!("{:.2}", record.amount))
            .with("Tax rate (%)", format!("{}", record.tax_rate))
            .with("Status", record.status.clone())
            .with("Issued (YYYY-MM-DD)", record.issued.format("%Y-%m-%d").to_string())
    }

    fn commit(form: &DraftForm) -> Result<Invoice, CoreError> {
        let number = validate::require("Number", form.value("Number"))?;
        let client = validate::require("Client", form.value("Client"))?;
        let amount = validate::number("Amount", form.value("Amount"))?;
        let tax_rate = validate::number("Tax rate", form.value("Tax rate (%)"))?;
        let issued = validate::date("Issued", form.value("Issued (YYYY-MM-DD)"))?;
        Ok(Invoice {
            id: RecordId(0),
            number,
            client,
            amount,
            tax_rate,
            status: non_empty_or(form.value("Status"), "Draft"),
            issued,
        })
    }

    fn title_of(record: &Invoice) -> String {
        format!("{} — {}", record.number, record.client)
    }

    fn subtitle_of(record: &Invoice) -> String {
        format!(
            "${:.2} + {}% tax = ${:.2} · issued {}",
            record.amount,
            record.tax_rate,
            record.total(),
            record.issued.format("%Y-%m-%d")
        )
    }

    fn badge_of(record: &Invoice) -> Option<String> {
        Some(record.status.clone())
    }
}

pub fn filters() -> FilterSet {
    FilterSet::new(vec![Filter::new(
        "status",
        vec!["Draft".into(), "Sent".into(), "Paid".into(), "Overdue".into()],
    )])
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Mock invoices
pub fn seed() -> Vec<Invoice> {
    vec![
        Invoice {
            id: RecordId(0),
            number: "INV-2024-001".into(),
            client: "TechCorp".into(),
            amount: 12_500.0,
            tax_rate: 10.0,
            status: "Sent".into(),
            issued: date(2024, 1, 2),
        },
        Invoice {
            id: RecordId(0),
            number: "INV-2024-002".into(),
            client: "Marketing Dept".into(),
            amount: 3_750.0,
            tax_rate: 10.0,
            status: "Paid".into(),
            issued: date(2024, 1, 4),
        },
        Invoice {
            id: RecordId(0),
            number: "INV-2023-118".into(),
            client: "Acme Ltd".into(),
            amount: 8_200.0,
            tax_rate: 19.0,
            status: "Overdue".into(),
            issued: date(2023, 12, 1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_follow_the_rounding_policy() {
        let invoice = &seed()[0];
        assert_eq!(invoice.tax_amount(), 1_250.0);
        assert_eq!(invoice.total(), 13_750.0);
    }

    #[test]
    fn commit_rejects_malformed_amount() {
        let form = DraftForm::new()
            .with_required("Number", "INV-X")
            .with_required("Client", "Acme")
            .with_required("Amount", "$12,500")
            .with("Tax rate (%)", "10")
            .with("Issued (YYYY-MM-DD)", "2024-01-02");
        let err = InvoicePage::commit(&form).unwrap_err();
        assert!(err.to_string().contains("Amount"));
    }
}
