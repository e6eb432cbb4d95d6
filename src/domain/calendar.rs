use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled entry on the personal calendar. Distinct from the read-only
/// campus event catalog; catalog entries become `CalendarEvent`s when a
/// student adds them to their schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub kind: CalendarEventKind,
    /// Typed calendar date. Serialized as ISO-8601 and revived as a real
    /// date on load, so "is this event today" comparisons stay exact.
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEventKind {
    Exam,
    Class,
    Holiday,
    Deadline,
    #[serde(rename = "Campus Event")]
    CampusEvent,
}
