//! Ordered multi-backend generation with an offline fallback.
//!
//! Stages run strictly in sequence and stop at the first usable reply. A
//! stage is isolated: errors, timeouts and empty replies inside a backend
//! are recorded on the trace and never reach the caller. Backend panics are
//! contained only in unwinding builds; under the release profile's
//! `panic = "abort"` a panic still terminates the process. When no stage
//! succeeds the deterministic offline summary is returned, so a reply is
//! always non-empty.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::context::RenderedContext;
use super::ports::{GenerationBackend, GenerationError, GenerationRequest};
use super::prompt::compose_offline_reply;

/// Name recorded for the offline summary.
pub const OFFLINE_SOURCE: &str = "offline";

/// One configured slot in the fallback chain
#[derive(Clone)]
pub enum GenerationStage {
    Ready(Arc<dyn GenerationBackend>),
    /// Backend without credentials; recorded as skipped, never invoked
    Unconfigured(String),
}

impl GenerationStage {
    pub fn name(&self) -> &str {
        match self {
            Self::Ready(backend) => backend.name(),
            Self::Unconfigured(name) => name,
        }
    }
}

impl std::fmt::Debug for GenerationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(backend) => f.debug_tuple("Ready").field(&backend.name()).finish(),
            Self::Unconfigured(name) => f.debug_tuple("Unconfigured").field(name).finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum StageStatus {
    Skipped,
    Failed(String),
    Succeeded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageRecord {
    pub stage: String,
    #[serde(flatten)]
    pub status: StageStatus,
}

/// Where the final reply came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    Backend(String),
    OfflineFallback,
}

impl ReplySource {
    pub fn name(&self) -> &str {
        match self {
            Self::Backend(name) => name,
            Self::OfflineFallback => OFFLINE_SOURCE,
        }
    }
}

/// Reply plus the trace of every stage that ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub reply: String,
    pub source: ReplySource,
    pub stages: Vec<StageRecord>,
}

impl GenerationOutcome {
    pub fn is_offline(&self) -> bool {
        self.source == ReplySource::OfflineFallback
    }
}

#[derive(Debug, Clone)]
pub struct GenerationOrchestrator {
    stages: Vec<GenerationStage>,
    stage_timeout: Duration,
}

impl GenerationOrchestrator {
    pub fn new(stage_timeout: Duration) -> Self {
        Self { stages: Vec::new(), stage_timeout }
    }

    /// Append a backend to the end of the chain.
    #[must_use]
    pub fn with_backend(mut self, backend: Arc<dyn GenerationBackend>) -> Self {
        self.stages.push(GenerationStage::Ready(backend));
        self
    }

    #[must_use]
    pub fn with_stage(mut self, stage: GenerationStage) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stages(&self) -> &[GenerationStage] {
        &self.stages
    }

    /// Names of stages that will actually be invoked.
    pub fn active_backends(&self) -> Vec<String> {
        self.stages
            .iter()
            .filter_map(|stage| match stage {
                GenerationStage::Ready(backend) => Some(backend.name().to_string()),
                GenerationStage::Unconfigured(_) => None,
            })
            .collect()
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
        context: &RenderedContext,
    ) -> GenerationOutcome {
        let mut trace = Vec::with_capacity(self.stages.len() + 1);

        for stage in &self.stages {
            let GenerationStage::Ready(backend) = stage else {
                debug!(backend = stage.name(), "generation stage skipped: not configured");
                trace.push(StageRecord { stage: stage.name().to_string(), status: StageStatus::Skipped });
                continue;
            };

            match self.attempt(backend.as_ref(), request).await {
                Ok(reply) => {
                    info!(backend = backend.name(), "generation stage succeeded");
                    trace.push(StageRecord {
                        stage: backend.name().to_string(),
                        status: StageStatus::Succeeded,
                    });
                    return GenerationOutcome {
                        reply,
                        source: ReplySource::Backend(backend.name().to_string()),
                        stages: trace,
                    };
                }
                Err(reason) => {
                    warn!(backend = backend.name(), error = %reason, "generation stage failed");
                    trace.push(StageRecord {
                        stage: backend.name().to_string(),
                        status: StageStatus::Failed(reason),
                    });
                }
            }
        }

        info!("all generation backends failed, using offline summary");
        trace.push(StageRecord { stage: OFFLINE_SOURCE.to_string(), status: StageStatus::Succeeded });
        GenerationOutcome {
            reply: compose_offline_reply(context),
            source: ReplySource::OfflineFallback,
            stages: trace,
        }
    }

    async fn attempt(
        &self,
        backend: &dyn GenerationBackend,
        request: &GenerationRequest,
    ) -> Result<String, String> {
        let call = AssertUnwindSafe(backend.generate(request)).catch_unwind();

        match tokio::time::timeout(self.stage_timeout, call).await {
            Err(_) => Err(GenerationError::Timeout(self.stage_timeout).to_string()),
            Ok(Err(_panic)) => Err("backend panicked".to_string()),
            Ok(Ok(Err(err))) => Err(err.to_string()),
            Ok(Ok(Ok(reply))) if reply.trim().is_empty() => Err(GenerationError::EmptyReply.to_string()),
            Ok(Ok(Ok(reply))) => Ok(reply),
        }
    }
}
