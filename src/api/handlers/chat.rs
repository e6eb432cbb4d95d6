use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::{Stream, StreamExt};
use serde::Deserialize;

use crate::{
    api::state::AppState,
    domain::ChatMessage,
};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Streams the model's reply as SSE fragments. Remote failures arrive on
/// the same stream as the fixed fallback text; this endpoint never errors.
pub async fn send(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let fragments = state.chat.send_message(&req.message).await;

    let events = fragments.map(|fragment| Ok(Event::default().data(fragment)));

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// The transcript so far. Transient: rebuilt empty on every process start.
pub async fn history(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    Json(state.chat.messages().await)
}
