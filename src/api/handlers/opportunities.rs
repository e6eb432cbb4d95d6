use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{Opportunity, OpportunityKind},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct CreateOpportunityRequest {
    pub title: String,
    pub kind: OpportunityKind,
    pub org: String,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: String,
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Opportunity>> {
    Json(state.stores.opportunities.list().await)
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateOpportunityRequest>,
) -> Result<(StatusCode, Json<Opportunity>)> {
    let opportunity = Opportunity {
        id: Uuid::new_v4().to_string(),
        title: req.title,
        kind: req.kind,
        org: req.org,
        date: req.date,
        tags: req.tags,
        link: req.link,
    };

    let created = state.stores.opportunities.add(opportunity).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.stores.opportunities.remove(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Opportunity not found".to_string()))
    }
}
