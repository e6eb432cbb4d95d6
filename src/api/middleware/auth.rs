use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::{
    api::state::AppState,
    domain::{AuthUser, UserRole},
    error::AppError,
};

pub const SESSION_COOKIE: &str = "session";

#[derive(Clone)]
pub struct CurrentUser {
    pub user: AuthUser,
}

/// Gates a route on the presence of the active session. The cookie must
/// carry the current session's id; anything else redirect-equivalents to
/// the login boundary as a 401.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session_cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

    let user = state
        .stores
        .sessions
        .current()
        .await
        .ok_or(AppError::Unauthorized)?;

    if user.id != session_cookie.value() {
        return Err(AppError::Unauthorized);
    }

    request.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(request).await)
}

/// Faculty-only actions: reviewing outpasses, posting announcements and
/// opportunity listings.
pub async fn require_faculty(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, jar, request, next, UserRole::Faculty).await
}

/// Student-only actions: creating outpass requests.
pub async fn require_student(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, jar, request, next, UserRole::Student).await
}

async fn require_role(
    state: AppState,
    jar: CookieJar,
    mut request: Request,
    next: Next,
    role: UserRole,
) -> Result<Response, AppError> {
    let session_cookie = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

    let user = state
        .stores
        .sessions
        .current()
        .await
        .ok_or(AppError::Unauthorized)?;

    if user.id != session_cookie.value() {
        return Err(AppError::Unauthorized);
    }

    if user.role != role {
        return Err(AppError::Forbidden);
    }

    request.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(request).await)
}
