use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{Announcement, AnnouncementCategory},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub category: AnnouncementCategory,
    pub date: String,
    pub description: Option<String>,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Announcement>> {
    Json(state.stores.announcements.list().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<(StatusCode, Json<Announcement>)> {
    let announcement = Announcement {
        id: Uuid::new_v4().to_string(),
        title: req.title,
        category: req.category,
        date: req.date,
        description: req.description,
    };

    let created = state.stores.announcements.add(announcement).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.stores.announcements.remove(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Announcement not found".to_string()))
    }
}
