//! Context rendering, prompt composition and generation fallback.

pub mod context;
pub mod format;
pub mod orchestrator;
pub mod ports;
pub mod prompt;
pub mod service;

pub use context::{ContextBuilder, RenderedContext};
pub use orchestrator::{
    GenerationOrchestrator, GenerationOutcome, GenerationStage, ReplySource, StageRecord,
    StageStatus,
};
pub use ports::{
    BoardSource, Clock, GenerationBackend, GenerationError, GenerationRequest, GenerationResult,
    SystemClock,
};
pub use service::{ChatAnswer, InsightService};
