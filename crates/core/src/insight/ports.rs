//! Port interfaces for board data and text generation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use skylark_domain::{BoardSnapshot, Result};
use thiserror::Error;

/// Source of raw board data (one fetch = both boards)
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetch column schemas and items for the deals and work-order boards.
    ///
    /// Configuration and upstream failures are returned as errors; they are
    /// fatal for the request that triggered the fetch.
    async fn fetch_boards(&self) -> Result<BoardSnapshot>;
}

/// Prompt pair handed to a generation backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_message: String,
}

/// Failure of a single generation attempt.
///
/// Never escapes the orchestrator; each error becomes a failed stage record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("unexpected response shape: {0}")]
    InvalidSchema(String),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("backend returned an empty reply")]
    EmptyReply,
}

pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// One interchangeable text-generation provider
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Stable name used in logs and generation traces
    fn name(&self) -> &str;

    /// Single best-effort attempt. Implementations must not retry.
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<String>;
}

/// Wall-clock source for the delay rule
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
