use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{CalendarEvent, CalendarEventKind},
    error::Result,
    store::CalendarAdd,
};

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// Restrict to a single calendar date.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct AddEventRequest {
    /// Stable id carried over when a catalog event is added to the
    /// calendar, so adding it twice is detectable. Omitted for ad-hoc
    /// entries, which get a fresh id.
    pub id: Option<String>,
    pub title: String,
    pub kind: CalendarEventKind,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase", tag = "outcome")]
pub enum AddEventResponse {
    Added { event: CalendarEvent },
    Duplicate,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListEventsQuery>,
) -> Json<Vec<CalendarEvent>> {
    let events = match params.date {
        Some(date) => state.stores.calendar.on_date(date).await,
        None => state.stores.calendar.list().await,
    };
    Json(events)
}

pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<AddEventRequest>,
) -> Result<Json<AddEventResponse>> {
    let event = CalendarEvent {
        id: req.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        title: req.title,
        kind: req.kind,
        date: req.date,
        time: req.time,
        location: req.location,
    };

    let response = match state.stores.calendar.add(event.clone()).await? {
        CalendarAdd::Added => AddEventResponse::Added { event },
        CalendarAdd::DuplicateId => AddEventResponse::Duplicate,
    };

    Ok(Json(response))
}
