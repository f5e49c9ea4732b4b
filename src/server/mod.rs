pub mod handlers;
mod types;

pub use types::{ChatResponse, ErrorResponse};

use crate::{Result, config::Config, gemini::GeminiClient, relay::ChatRelay};
use axum::{Router, routing::post};
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{services::ServeFile, trace::TraceLayer};
use tracing::info;

/// Builds the full route table: the three static files, the chat
/// endpoint, and the JSON 404 fallback.
pub fn router(state: handlers::AppState, static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route_service("/style.css", ServeFile::new(static_dir.join("style.css")))
        .route_service("/script.js", ServeFile::new(static_dir.join("script.js")))
        .route("/chat", post(handlers::chat))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // Build the upstream client and relay once; requests share them
    // read-only through the state.
    let upstream = GeminiClient::new(config.gemini.clone())?;
    let relay = ChatRelay::new(Box::new(upstream));

    let app_state = handlers::AppState {
        relay: Arc::new(relay),
    };

    let app = router(app_state, Path::new(&config.server.static_dir));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
