//! Date-indexed views over calendar events
//!
//! Events occupy exactly one calendar day: matching is plain `NaiveDate`
//! equality, no timezones, no recurrence, no multi-day spans. "Today" is
//! injected by the caller so tests stay deterministic.

use crate::models::event::CalendarEvent;
use chrono::NaiveDate;

/// Events whose date equals the given calendar day, in collection order
pub fn events_for_date<'a>(events: &'a [CalendarEvent], date: NaiveDate) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|e| e.date == date).collect()
}

/// Events falling on the caller's "today"
pub fn events_today<'a>(events: &'a [CalendarEvent], today: NaiveDate) -> Vec<&'a CalendarEvent> {
    events_for_date(events, today)
}

/// Events strictly after the given day, soonest first
pub fn upcoming<'a>(events: &'a [CalendarEvent], after: NaiveDate) -> Vec<&'a CalendarEvent> {
    let mut upcoming: Vec<&CalendarEvent> = events.iter().filter(|e| e.date > after).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming
}
