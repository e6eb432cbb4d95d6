use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::{OutpassKind, OutpassRequest, OutpassStatus, UserRole, UNASSIGNED_STUDENT_ID},
    error::Result,
    store::CreateOutpassRequest,
};

#[derive(Debug, Deserialize)]
pub struct ListOutpassQuery {
    /// Opt-in broadening: also show requests stamped with the unassigned
    /// sentinel (created before the student had a roll number).
    #[serde(default)]
    pub include_unassigned: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateOutpassBody {
    pub kind: OutpassKind,
    pub reason: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

/// A student sees their own requests, matched strictly by roll number;
/// faculty see the full ledger.
pub async fn list(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Query(params): Query<ListOutpassQuery>,
) -> Result<Json<Vec<OutpassRequest>>> {
    let requests = match current.user.role {
        UserRole::Faculty => state.stores.outpasses.list().await,
        UserRole::Student => {
            let student_id = student_id_of(&state, &current).await?;
            state
                .stores
                .outpasses
                .for_student(&student_id, params.include_unassigned)
                .await
        }
    };

    Ok(Json(requests))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(body): Json<CreateOutpassBody>,
) -> Result<(StatusCode, Json<OutpassRequest>)> {
    let student_id = student_id_of(&state, &current).await?;

    let request = state
        .stores
        .outpasses
        .create(CreateOutpassRequest {
            student_name: current.user.name.clone(),
            student_id,
            kind: body.kind,
            reason: body.reason,
            from_date: body.from_date,
            to_date: body.to_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

pub async fn pending(State(state): State<AppState>) -> Json<Vec<OutpassRequest>> {
    Json(state.stores.outpasses.pending().await)
}

pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OutpassRequest>> {
    let request = state
        .stores
        .outpasses
        .update_status(&id, OutpassStatus::Approved)
        .await?;
    Ok(Json(request))
}

pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OutpassRequest>> {
    let request = state
        .stores
        .outpasses
        .update_status(&id, OutpassStatus::Rejected)
        .await?;
    Ok(Json(request))
}

/// The student identity used on outpass paperwork is the roll number from
/// the profile; a profile without one falls back to the unassigned sentinel.
async fn student_id_of(state: &AppState, current: &CurrentUser) -> Result<String> {
    let profile = state.stores.profiles.resolve(&current.user).await?;
    Ok(profile
        .roll_number
        .unwrap_or_else(|| UNASSIGNED_STUDENT_ID.to_string()))
}
