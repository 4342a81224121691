//! Instruction-completion client for the secondary generation backend
//!
//! The system prompt is sent as a single `[INST]` block; the reply is the
//! `generated_text` of the first array element.

use async_trait::async_trait;
use reqwest::Method;
use skylark_core::insight::{GenerationRequest, GenerationResult};
use skylark_core::{GenerationBackend, GenerationError};
use skylark_domain::{HuggingFaceConfig, Result};
use tracing::debug;

use super::types::{instruction_prompt, GeneratedText, InstructionParameters, InstructionRequest};
use super::BACKEND_NAME;
use crate::http::HttpClient;
use crate::integrations::generation::{status_error, transport_error};

const MAX_NEW_TOKENS: u32 = 500;

pub struct HuggingFaceClient {
    http_client: HttpClient,
    api_key: String,
    model_url: String,
}

impl HuggingFaceClient {
    pub fn new(config: HuggingFaceConfig, http_client: HttpClient) -> Self {
        Self { http_client, api_key: config.api_key, model_url: config.model_url }
    }

    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: HuggingFaceConfig, timeout: std::time::Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self::new(config, http_client))
    }
}

#[async_trait]
impl GenerationBackend for HuggingFaceClient {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String> {
        let payload = InstructionRequest {
            inputs: instruction_prompt(&request.system_prompt),
            parameters: InstructionParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                return_full_text: false,
            },
        };

        let request_builder = self
            .http_client
            .request(Method::POST, &self.model_url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload);

        let response = self.http_client.send(request_builder).await.map_err(transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Received instruction completion response");

        if !status.is_success() {
            return Err(status_error(status.as_u16(), response).await);
        }

        let generated: Vec<GeneratedText> = response.json().await.map_err(|e| {
            GenerationError::InvalidSchema(format!("Expected an array of generations: {e}"))
        })?;

        generated
            .into_iter()
            .next()
            .and_then(|first| first.generated_text)
            .ok_or(GenerationError::EmptyReply)
    }
}
