use axum::{extract::State, http::StatusCode, Extension, Json};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use serde::Deserialize;

use crate::{
    api::{
        middleware::auth::{CurrentUser, SESSION_COOKIE},
        state::AppState,
    },
    domain::{AuthUser, UserRole},
    error::Result,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: UserRole,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub role: UserRole,
    pub email: String,
    pub name: String,
}

/// Mock login: no credential verification, always succeeds. A missing name
/// gets a role-specific placeholder.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthUser>)> {
    let user = state
        .stores
        .sessions
        .login(req.role, req.email, req.name)
        .await?;

    let jar = jar.add(session_cookie(&user));
    Ok((jar, Json(user)))
}

/// Signup is the same mock flow as login, but the display name is required.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<(CookieJar, (StatusCode, Json<AuthUser>))> {
    let user = state
        .stores
        .sessions
        .login(req.role, req.email, Some(req.name))
        .await?;

    let jar = jar.add(session_cookie(&user));
    Ok((jar, (StatusCode::CREATED, Json(user))))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode)> {
    state.stores.sessions.logout().await?;

    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    Ok((jar, StatusCode::NO_CONTENT))
}

pub async fn me(Extension(current): Extension<CurrentUser>) -> Json<AuthUser> {
    Json(current.user)
}

fn session_cookie(user: &AuthUser) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, user.id.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}
