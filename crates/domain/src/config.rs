//! Configuration structures
//!
//! Built once at process start (see `skylark_infra::config`) and shared
//! read-only afterwards.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_GENERATION_TIMEOUT_SECS, DEFAULT_GROQ_API_URL, DEFAULT_GROQ_MODEL,
    DEFAULT_HF_MODEL_URL, DEFAULT_MONDAY_API_URL, DEFAULT_MONDAY_TIMEOUT_SECS,
};
use crate::{Result, SkylarkError};

/// Root application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub monday: MondayConfig,
    pub generation: GenerationConfig,
    pub server: ServerConfig,
}

/// Board data source settings.
///
/// The credential and both board identifiers are optional at load time; a
/// fetch attempt without them fails through [`MondayConfig::credentials`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MondayConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub deals_board_id: Option<u64>,
    pub work_orders_board_id: Option<u64>,
    pub timeout_secs: u64,
}

impl Default for MondayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_MONDAY_API_URL.to_string(),
            deals_board_id: None,
            work_orders_board_id: None,
            timeout_secs: DEFAULT_MONDAY_TIMEOUT_SECS,
        }
    }
}

/// Validated data source credentials required for a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MondayCredentials {
    pub api_key: String,
    pub deals_board_id: u64,
    pub work_orders_board_id: u64,
}

impl MondayConfig {
    /// Check that everything a fetch needs is present.
    ///
    /// # Errors
    /// Returns `SkylarkError::Config` naming the missing key(s).
    pub fn credentials(&self) -> Result<MondayCredentials> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                SkylarkError::Config("MONDAY_API_KEY is missing in environment variables".into())
            })?;

        match (self.deals_board_id, self.work_orders_board_id) {
            (Some(deals_board_id), Some(work_orders_board_id)) => Ok(MondayCredentials {
                api_key: api_key.to_string(),
                deals_board_id,
                work_orders_board_id,
            }),
            _ => Err(SkylarkError::Config(
                "Missing DEALS_BOARD_ID or WORK_ORDERS_BOARD_ID in environment variables".into(),
            )),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Generation backend settings. A backend whose section is `None` is never
/// attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub groq: Option<GroqConfig>,
    pub huggingface: Option<HuggingFaceConfig>,
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { groq: None, huggingface: None, timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS }
    }
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Chat-completion backend (primary)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroqConfig {
    pub api_key: String,
    #[serde(default = "default_groq_model")]
    pub model: String,
    #[serde(default = "default_groq_url")]
    pub api_url: String,
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: default_groq_model(), api_url: default_groq_url() }
    }
}

/// Instruction-completion backend (secondary)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuggingFaceConfig {
    pub api_key: String,
    #[serde(default = "default_hf_model_url")]
    pub model_url: String,
}

impl HuggingFaceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model_url: default_hf_model_url() }
    }
}

/// Inbound HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}

fn default_groq_model() -> String {
    DEFAULT_GROQ_MODEL.to_string()
}

fn default_groq_url() -> String {
    DEFAULT_GROQ_API_URL.to_string()
}

fn default_hf_model_url() -> String {
    DEFAULT_HF_MODEL_URL.to_string()
}
