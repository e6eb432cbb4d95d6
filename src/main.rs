mod api;
mod config;
mod domain;
mod error;
mod integrations;
mod storage;
mod store;

use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::Settings,
    integrations::{ChatBackend, ChatService, GeminiChat, Integration},
    storage::SqliteBlobStore,
    store::StoreContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campusmate=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!(
        "Starting CampusMate server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    // Initialize the durable blob store
    let db_pool = SqlitePoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    let blobs = Arc::new(SqliteBlobStore::new(db_pool));

    // Load every store once; consumers get handles from the context
    let stores = Arc::new(StoreContext::load(blobs).await?);

    // Chat integration is optional; without it the chat endpoint answers
    // with the fixed fallback message
    let chat_backend: Option<Arc<dyn ChatBackend>> =
        match GeminiChat::new(settings.gemini.clone()) {
            Some(gemini) => {
                match gemini.health_check().await {
                    Ok(_) => tracing::info!("Integration {} is healthy", gemini.name()),
                    Err(e) => {
                        tracing::warn!("Integration {} health check failed: {:?}", gemini.name(), e)
                    }
                }
                Some(Arc::new(gemini))
            }
            None => {
                tracing::info!("Gemini chat integration disabled");
                None
            }
        };

    let chat = Arc::new(ChatService::new(chat_backend));

    let app = api::create_app(stores, chat, Arc::new(settings.clone()));

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        settings.server.host, settings.server.port
    ))
    .await?;

    tracing::info!(
        "Server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
