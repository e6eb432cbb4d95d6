use axum::{extract::State, Extension, Json};

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    domain::UserProfile,
    error::Result,
};

pub async fn get(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<UserProfile>> {
    let profile = state.stores.profiles.resolve(&current.user).await?;
    Ok(Json(profile))
}

/// Full replacement of the active role's profile.
pub async fn update(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentUser>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<UserProfile>> {
    let profile = state.stores.profiles.update(&current.user, profile).await?;
    Ok(Json(profile))
}
