use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use super::types::GenerateContentRequest;
use crate::{Error, Result, config::GeminiConfig};

/// Raw outcome of one upstream call, before interpretation.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// What the relay needs from the upstream: send one payload, get the raw
/// status and body back. Transport failures surface as errors; HTTP error
/// statuses do not.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn generate_content(&self, payload: &GenerateContentRequest)
    -> Result<UpstreamResponse>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {e}")))?;

        // The credential travels as a query parameter, per the
        // generateContent API. Never log this URL.
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            config.base_url.trim_end_matches('/'),
            config.model,
            config.api_key
        );

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl UpstreamClient for GeminiClient {
    async fn generate_content(
        &self,
        payload: &GenerateContentRequest,
    ) -> Result<UpstreamResponse> {
        debug!("Posting generateContent request");

        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(UpstreamResponse { status, body })
    }
}
