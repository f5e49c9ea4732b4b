use serde_json::Value;
use tracing::{debug, info};

use crate::gemini::{
    ApiErrorResponse, GenerateContentRequest, GenerateContentResponse, UpstreamClient,
};
use crate::{Error, Result};

/// The relay itself: one inbound chat request becomes one outbound API
/// call, and the outcome becomes a reply or a normalized error.
pub struct ChatRelay {
    upstream: Box<dyn UpstreamClient>,
}

impl ChatRelay {
    pub fn new(upstream: Box<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }

    /// Handles one request end to end: validate the raw body, build the
    /// payload, call the upstream, interpret the status and body.
    pub async fn handle(&self, raw_body: &[u8]) -> Result<String> {
        let message = validate(raw_body)?;
        let payload = GenerateContentRequest::from_message(&message);

        info!(
            "Sending request to Gemini API: {}...",
            excerpt(&message, 100)
        );

        let response = self.upstream.generate_content(&payload).await?;

        info!("Gemini API response status: {}", response.status);
        debug!("Gemini API response body: {}", response.body);

        interpret(response.status.as_u16(), &response.body)
    }
}

/// Extracts the trimmed message from the raw request body, rejecting
/// everything that is not a JSON object with a non-empty string `message`.
fn validate(raw_body: &[u8]) -> Result<String> {
    let data: Value = serde_json::from_slice(raw_body)
        .map_err(|_| Error::invalid_input("Request must be JSON"))?;

    if data.is_null() || data.as_object().is_some_and(|object| object.is_empty()) {
        return Err(Error::invalid_input("No JSON data provided"));
    }

    let message = data
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .ok_or_else(|| Error::invalid_input("No message provided"))?;

    Ok(message.to_string())
}

/// Maps the upstream status and body to a reply or an error kind.
fn interpret(status: u16, body: &str) -> Result<String> {
    match status {
        200 => interpret_ok(body),
        400 => Err(bad_request(body)),
        403 => Err(Error::UpstreamAuth),
        429 => Err(Error::UpstreamRateLimited),
        status => Err(Error::UpstreamStatus {
            status,
            excerpt: excerpt(body, 200).to_string(),
        }),
    }
}

/// A 200 body is inspected exactly once: usable text wins; otherwise a
/// blocking finish reason; otherwise a structural diagnostic.
fn interpret_ok(body: &str) -> Result<String> {
    let data: Value = serde_json::from_str(body).map_err(|e| Error::UpstreamDecode {
        message: e.to_string(),
        excerpt: excerpt(body, 500).to_string(),
    })?;

    let parsed: GenerateContentResponse = match serde_json::from_value(data.clone()) {
        Ok(parsed) => parsed,
        Err(_) => return Err(unexpected_format("Unexpected response format", data)),
    };

    let Some(candidate) = parsed.candidates.first() else {
        return Err(unexpected_format("Unexpected response format", data));
    };

    if let Some(text) = candidate.reply_text() {
        return Ok(text.to_string());
    }

    if let Some(reason) = candidate.block_reason() {
        return Err(Error::ContentBlocked(reason));
    }

    let reason = match candidate.content.as_ref() {
        None => "Invalid content structure",
        Some(content) if content.parts.is_empty() => "No content parts in response",
        Some(_) => "Empty response from AI",
    };
    Err(unexpected_format(reason, data))
}

fn unexpected_format(reason: &str, raw: Value) -> Error {
    Error::UpstreamFormat {
        reason: reason.to_string(),
        raw,
    }
}

/// A 400 body usually carries an error envelope with a message worth
/// relaying; when it does not even parse, the raw excerpt goes out instead.
fn bad_request(body: &str) -> Error {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(parsed) => {
            let message = parsed
                .error
                .and_then(|error| error.message)
                .unwrap_or_else(|| "Bad request".to_string());
            Error::UpstreamBadRequest {
                message: format!("API Error: {message}"),
                excerpt: None,
            }
        }
        Err(_) => Error::UpstreamBadRequest {
            message: "Bad request to API".to_string(),
            excerpt: Some(excerpt(body, 200).to_string()),
        },
    }
}

/// First `limit` characters, cut on a char boundary so multibyte bodies
/// never panic the diagnostics path.
fn excerpt(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
