//! Calendar events - one calendar day each, no recurrence

use crate::collection::{DestructivePolicy, Filter, FilterSet, Record, RecordId};
use crate::error::CoreError;
use crate::models::project::non_empty_or;
use crate::page::{DraftForm, PageSpec};
use crate::validate;
use chrono::{Days, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub kind: String,
    pub location: String,
}

impl Record for CalendarEvent {
    fn id(&self) -> RecordId {
        self.id
    }
    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.location]
    }
    fn field(&self, key: &str) -> Option<String> {
        (key == "kind").then(|| self.kind.clone())
    }
}

#[derive(Debug)]
pub struct EventPage;

impl PageSpec for EventPage {
    type R = CalendarEvent;
    const ENTITY: &'static str = "event";
    const DELETE_POLICY: DestructivePolicy = DestructivePolicy::Immediate;

    fn empty_form() -> DraftForm {
        draft_for_date(chrono::Local::now().date_naive())
    }

    fn edit_form(record: &CalendarEvent) -> DraftForm {
        DraftForm::new()
            .with_required("Title", record.title.clone())
            .with("Date (YYYY-MM-DD)", record.date.format("%Y-%m-%d").to_string())
            .with("Time", record.time.clone())
            .with("Kind", record.kind.clone())
            .with("Location", record.location.clone())
    }

    fn commit(form: &DraftForm) -> Result<CalendarEvent, CoreError> {
        let title = validate::require("Title", form.value("Title"))?;
        let date = validate::date("Date", form.value("Date (YYYY-MM-DD)"))?;
        Ok(CalendarEvent {
            id: RecordId(0),
            title,
            date,
            time: non_empty_or(form.value("Time"), "09:00"),
            kind: non_empty_or(form.value("Kind"), "meeting"),
            location: form.value("Location").trim().to_string(),
        })
    }

    fn title_of(record: &CalendarEvent) -> String {
        record.title.clone()
    }

    fn subtitle_of(record: &CalendarEvent) -> String {
        format!(
            "{} {} · {}",
            record.date.format("%Y-%m-%d"),
            record.time,
            record.location
        )
    }

    fn badge_of(record: &CalendarEvent) -> Option<String> {
        Some(record.kind.clone())
    }
}

/// Create-dialog draft pre-seeded with the selected calendar day
pub fn draft_for_date(date: NaiveDate) -> DraftForm {
    DraftForm::new()
        .with_required("Title", "")
        .with("Date (YYYY-MM-DD)", date.format("%Y-%m-%d").to_string())
        .with("Time", "09:00")
        .with("Kind", "meeting")
        .with("Location", "")
}

pub fn filters() -> FilterSet {
    FilterSet::new(vec![Filter::new(
        "kind",
        vec!["meeting".into(), "deadline".into(), "review".into()],
    )])
}

/// Mock events, anchored on the current day so the Today view has content
pub fn seed() -> Vec<CalendarEvent> {
    let today = chrono::Local::now().date_naive();
    let plus = |days: u64| today.checked_add_days(Days::new(days)).unwrap_or(today);
    vec![
        CalendarEvent {
            id: RecordId(0),
            title: "Team standup".into(),
            date: today,
            time: "09:00".into(),
            kind: "meeting".into(),
            location: "Conference Room A".into(),
        },
        CalendarEvent {
            id: RecordId(0),
            title: "Design review".into(),
            date: plus(1),
            time: "14:00".into(),
            kind: "review".into(),
            location: "Design Lab".into(),
        },
        CalendarEvent {
            id: RecordId(0),
            title: "Homepage mockups due".into(),
            date: plus(3),
            time: "17:00".into(),
            kind: "deadline".into(),
            location: "—".into(),
        },
        CalendarEvent {
            id: RecordId(0),
            title: "Client sync".into(),
            date: plus(5),
            time: "11:00".into(),
            kind: "meeting".into(),
            location: "Video call".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_for_date_prefills_the_day() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let form = draft_for_date(day);
        assert_eq!(form.value("Date (YYYY-MM-DD)"), "2024-06-01");
    }

    #[test]
    fn commit_rejects_bad_date() {
        let form = DraftForm::new()
            .with_required("Title", "Kickoff")
            .with("Date (YYYY-MM-DD)", "June 1st");
        assert!(EventPage::commit(&form).is_err());
    }
}
