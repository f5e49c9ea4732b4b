use async_trait::async_trait;
use gemini_relay::{
    Error, Result,
    gemini::{GenerateContentRequest, UpstreamClient, UpstreamResponse},
};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

/// Mock upstream client for testing: replays queued responses and records
/// every payload it was asked to send.
pub struct MockUpstreamClient {
    pub responses: Arc<Mutex<Vec<UpstreamResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
}

impl MockUpstreamClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push(UpstreamResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        });
        self
    }
}

#[async_trait]
impl UpstreamClient for MockUpstreamClient {
    async fn generate_content(
        &self,
        payload: &GenerateContentRequest,
    ) -> Result<UpstreamResponse> {
        self.requests.lock().unwrap().push(payload.clone());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockUpstreamClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Upstream client that fails every call with the supplied transport error.
pub struct FailingUpstreamClient {
    make_error: Box<dyn Fn() -> Error + Send + Sync>,
}

impl FailingUpstreamClient {
    pub fn new(make_error: impl Fn() -> Error + Send + Sync + 'static) -> Self {
        Self {
            make_error: Box::new(make_error),
        }
    }
}

#[async_trait]
impl UpstreamClient for FailingUpstreamClient {
    async fn generate_content(&self, _payload: &GenerateContentRequest) -> Result<UpstreamResponse> {
        Err((self.make_error)())
    }
}
