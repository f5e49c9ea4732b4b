use super::types::{ChatResponse, ErrorResponse};
use crate::{Error, relay::ChatRelay};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<ChatRelay>,
}

/// POST /chat. Takes the raw bytes rather than a `Json` extractor so that
/// malformed bodies flow through the relay's own validation and produce
/// the documented 400 JSON error instead of an extractor rejection.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, Error> {
    match state.relay.handle(&body).await {
        Ok(response) => {
            info!("Relayed chat request successfully");
            Ok(Json(ChatResponse { response }))
        }
        Err(e) => {
            error!("Failed to relay chat request: {}", e);
            Err(e)
        }
    }
}

/// Every unmatched route gets the same JSON body.
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Endpoint not found".to_string(),
        }),
    )
}
