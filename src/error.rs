use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::gemini::BlockReason;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inbound request rejected before any upstream call is made.
    #[error("{0}")]
    InvalidInput(String),

    /// Upstream returned 200 but the body carries no usable reply text.
    #[error("{reason}")]
    UpstreamFormat { reason: String, raw: Value },

    /// The reply was withheld by the upstream safety filters.
    #[error("Content was blocked due to {0}")]
    ContentBlocked(BlockReason),

    /// Upstream returned 200 with a body that is not valid JSON.
    #[error("Invalid JSON response from API")]
    UpstreamDecode { message: String, excerpt: String },

    /// Upstream rejected the payload with 400.
    #[error("{message}")]
    UpstreamBadRequest {
        message: String,
        excerpt: Option<String>,
    },

    #[error("API key invalid or quota exceeded")]
    UpstreamAuth,

    #[error("Rate limit exceeded. Please try again later")]
    UpstreamRateLimited,

    /// Any upstream status outside the mapped set.
    #[error("API returned status {status}")]
    UpstreamStatus { status: u16, excerpt: String },

    #[error("Request timeout. Please try again")]
    Timeout,

    #[error("Connection error. Please check your internet")]
    ConnectionFailure,

    #[error("Network error")]
    Network(String),

    #[error("Internal server error")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    /// The HTTP status each error kind is surfaced with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::ContentBlocked(_) | Self::UpstreamBadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::UpstreamAuth => StatusCode::FORBIDDEN,
            Self::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::ConnectionFailure | Self::Network(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::UpstreamFormat { .. }
            | Self::UpstreamDecode { .. }
            | Self::UpstreamStatus { .. }
            | Self::Config(_)
            | Self::Internal(_)
            | Self::Io(_)
            | Self::AddrParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Structured diagnostics attached to the JSON error body, when any.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::UpstreamFormat { raw, .. } => Some(json!({ "raw": raw })),
            Self::UpstreamDecode { message, excerpt } => {
                Some(json!({ "message": message, "raw_response": excerpt }))
            }
            Self::UpstreamBadRequest {
                excerpt: Some(excerpt),
                ..
            } => Some(Value::String(excerpt.clone())),
            Self::UpstreamStatus { status, excerpt } => {
                Some(json!({ "status": status, "body": excerpt }))
            }
            Self::Network(message) | Self::Internal(message) => {
                Some(Value::String(message.clone()))
            }
            _ => None,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailure
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({ "error": self.to_string() });
        if let Some(details) = self.details() {
            body["details"] = details;
        }
        (status, Json(body)).into_response()
    }
}
