pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{config::Settings, integrations::ChatService, store::StoreContext};
use state::AppState;

pub fn create_app(
    stores: Arc<StoreContext>,
    chat: Arc<ChatService>,
    settings: Arc<Settings>,
) -> Router {
    let app_state = AppState::new(stores, chat, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))
        // Auth routes
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/logout", post(handlers::auth::logout))
        .route(
            "/auth/me",
            get(handlers::auth::me).route_layer(axum::middleware::from_fn_with_state(
                app_state.clone(),
                middleware::auth::require_session,
            )),
        )
        // Portal routes, gated by the active session
        .nest("/api", api_routes(app_state.clone()))
        // Add state to the router
        .with_state(app_state)
        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::profile::get))
        .route("/profile", put(handlers::profile::update))
        .nest("/announcements", announcement_routes(state.clone()))
        .nest("/opportunities", opportunity_routes(state.clone()))
        .route("/calendar", get(handlers::calendar::list))
        .route("/calendar", post(handlers::calendar::add))
        .nest("/outpass", outpass_routes(state.clone()))
        .route("/catalog/campus-events", get(handlers::catalog::campus_events))
        .route("/catalog/menu", get(handlers::catalog::hostel_menu))
        .route("/catalog/timetable", get(handlers::catalog::timetable))
        .route("/chat", post(handlers::chat::send))
        .route("/chat/history", get(handlers::chat::history))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_session,
        ))
}

fn announcement_routes(state: AppState) -> Router<AppState> {
    // Viewing is open to any session; posting and withdrawing is a
    // faculty action.
    Router::new()
        .route("/", get(handlers::announcements::list))
        .merge(
            Router::new()
                .route("/", post(handlers::announcements::create))
                .route("/:id", delete(handlers::announcements::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_faculty,
                )),
        )
}

fn opportunity_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::opportunities::list))
        .merge(
            Router::new()
                .route("/", post(handlers::opportunities::create))
                .route("/:id", delete(handlers::opportunities::delete))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_faculty,
                )),
        )
}

fn outpass_routes(state: AppState) -> Router<AppState> {
    // Students raise requests, faculty resolve them.
    Router::new()
        .route("/", get(handlers::outpass::list))
        .merge(
            Router::new()
                .route("/", post(handlers::outpass::create))
                .route_layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    middleware::auth::require_student,
                )),
        )
        .merge(
            Router::new()
                .route("/pending", get(handlers::outpass::pending))
                .route("/:id/approve", post(handlers::outpass::approve))
                .route("/:id/reject", post(handlers::outpass::reject))
                .route_layer(axum::middleware::from_fn_with_state(
                    state,
                    middleware::auth::require_faculty,
                )),
        )
}
