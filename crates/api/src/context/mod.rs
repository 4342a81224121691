//! Application context - dependency injection container

use std::sync::Arc;

use skylark_core::insight::GenerationStage;
use skylark_core::{GenerationOrchestrator, InsightService};
use skylark_domain::{Config, Result};
use skylark_infra::integrations::{groq, huggingface};
use skylark_infra::{GroqClient, HuggingFaceClient, MondayClient};
use tracing::{info, warn};

/// Application context - holds the configured pipeline shared by all handlers
pub struct AppContext {
    pub config: Arc<Config>,
    pub insights: Arc<InsightService>,
    data_source_configured: bool,
}

impl AppContext {
    /// Wire the board client and the generation chain from configuration.
    ///
    /// Missing credentials never fail startup: the board source reports them
    /// per request and unconfigured backends are skipped by the chain.
    ///
    /// # Errors
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let monday = MondayClient::from_config(config.monday.clone())?;
        let data_source_configured = monday.is_configured();
        if !data_source_configured {
            warn!("board data source is not configured; KPI and chat requests will fail");
        }

        let orchestrator = build_orchestrator(&config)?;
        info!(
            backends = ?orchestrator.active_backends(),
            data_source_configured,
            "application context initialized"
        );

        let insights = InsightService::new(Arc::new(monday), orchestrator);
        Ok(Self::from_parts(config, insights, data_source_configured))
    }

    /// Assemble a context around an existing service
    pub fn from_parts(
        config: Config,
        insights: InsightService,
        data_source_configured: bool,
    ) -> Self {
        Self { config: Arc::new(config), insights: Arc::new(insights), data_source_configured }
    }

    pub const fn data_source_configured(&self) -> bool {
        self.data_source_configured
    }

    /// Names of the generation backends with credentials, in fallback order
    pub fn active_backends(&self) -> Vec<String> {
        self.insights.orchestrator().active_backends()
    }
}

fn build_orchestrator(config: &Config) -> Result<GenerationOrchestrator> {
    let timeout = config.generation.timeout();
    let mut orchestrator = GenerationOrchestrator::new(timeout);

    orchestrator = match &config.generation.groq {
        Some(groq_config) => {
            orchestrator.with_backend(Arc::new(GroqClient::from_config(groq_config.clone(), timeout)?))
        }
        None => orchestrator.with_stage(GenerationStage::Unconfigured(groq::BACKEND_NAME.into())),
    };

    orchestrator = match &config.generation.huggingface {
        Some(hf) => orchestrator
            .with_backend(Arc::new(HuggingFaceClient::from_config(hf.clone(), timeout)?)),
        None => orchestrator
            .with_stage(GenerationStage::Unconfigured(huggingface::BACKEND_NAME.into())),
    };

    Ok(orchestrator)
}
