use std::sync::Arc;

use chrono::NaiveDate;

use crate::{
    domain::{CalendarEvent, CalendarEventKind},
    error::Result,
    storage::{keys, BlobStore},
    store::PersistedCollection,
};

/// Outcome of an add. Inserting an id that is already present leaves the
/// collection untouched, and the caller can see that it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAdd {
    Added,
    DuplicateId,
}

pub struct CalendarStore {
    collection: PersistedCollection<CalendarEvent>,
}

impl CalendarStore {
    pub async fn load(blobs: Arc<dyn BlobStore>) -> Result<Self> {
        let collection =
            PersistedCollection::load(keys::CALENDAR_EVENTS, blobs, seed()).await?;
        Ok(Self { collection })
    }

    /// Insertion order (appends).
    pub async fn list(&self) -> Vec<CalendarEvent> {
        self.collection.snapshot().await
    }

    /// Appends the event, unless its id is already present.
    pub async fn add(&self, event: CalendarEvent) -> Result<CalendarAdd> {
        self.collection
            .mutate(|items| {
                if items.iter().any(|e| e.id == event.id) {
                    CalendarAdd::DuplicateId
                } else {
                    items.push(event);
                    CalendarAdd::Added
                }
            })
            .await
    }

    /// Membership test by id, e.g. "already on my calendar".
    pub async fn contains(&self, id: &str) -> bool {
        self.collection.any(|e| e.id == id).await
    }

    pub async fn on_date(&self, date: NaiveDate) -> Vec<CalendarEvent> {
        self.collection.filter(|e| e.date == date).await
    }
}

fn seed() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: "1".into(),
            title: "Linear Algebra Exam".into(),
            kind: CalendarEventKind::Exam,
            date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            time: Some("10:00 AM".into()),
            location: Some("Hall A".into()),
        },
        CalendarEvent {
            id: "2".into(),
            title: "Physics Lab Final".into(),
            kind: CalendarEventKind::Exam,
            date: NaiveDate::from_ymd_opt(2024, 5, 18).unwrap(),
            time: Some("02:00 PM".into()),
            location: Some("Lab 3".into()),
        },
        CalendarEvent {
            id: "3".into(),
            title: "Project Submission".into(),
            kind: CalendarEventKind::Deadline,
            date: NaiveDate::from_ymd_opt(2024, 5, 25).unwrap(),
            time: Some("11:59 PM".into()),
            location: None,
        },
    ]
}
