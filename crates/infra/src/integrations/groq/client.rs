//! Chat-completion client for the primary generation backend

use async_trait::async_trait;
use reqwest::Method;
use skylark_core::insight::{GenerationRequest, GenerationResult};
use skylark_core::{GenerationBackend, GenerationError};
use skylark_domain::{GroqConfig, Result};
use tracing::debug;

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use super::BACKEND_NAME;
use crate::http::HttpClient;
use crate::integrations::generation::{status_error, transport_error};

const DEFAULT_TEMPERATURE: f32 = 0.7;

pub struct GroqClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
}

impl GroqClient {
    pub fn new(config: GroqConfig, http_client: HttpClient) -> Self {
        Self { http_client, api_key: config.api_key, model: config.model, api_url: config.api_url }
    }

    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: GroqConfig, timeout: std::time::Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::new(config, http_client))
    }

    /// Create a new client with custom API URL (for testing)
    #[cfg(test)]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    async fn call_api(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: &request.system_prompt },
                ChatMessage { role: "user", content: &request.user_message },
            ],
            temperature: DEFAULT_TEMPERATURE,
        };

        let request_builder = self
            .http_client
            .request(Method::POST, &self.api_url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload);

        let response = self.http_client.send(request_builder).await.map_err(transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received chat completion response");

        if !status.is_success() {
            return Err(status_error(status.as_u16(), response).await);
        }

        let chat_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            GenerationError::InvalidSchema(format!("Failed to parse response: {e}"))
        })?;

        let choice = chat_response.choices.into_iter().next().ok_or_else(|| {
            GenerationError::InvalidSchema("Response contained no choices".to_string())
        })?;

        choice.message.content.ok_or(GenerationError::EmptyReply)
    }
}

#[async_trait]
impl GenerationBackend for GroqClient {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        self.call_api(request).await
    }
}
