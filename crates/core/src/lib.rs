//! # Skylark Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Field normalization and keyword-based column resolution
//! - Entity mapping with data-quality auditing
//! - KPI aggregation
//! - Context rendering and the generation fallback chain
//!
//! ## Architecture Principles
//! - Only depends on `skylark-domain`
//! - No HTTP or platform code
//! - External data and text generation via port traits

pub mod insight;
pub mod mapping;
pub mod metrics;

pub use insight::ports::{BoardSource, Clock, GenerationBackend, GenerationError, SystemClock};
pub use insight::{GenerationOrchestrator, InsightService};
pub use mapping::{ColumnResolver, EntityMapper};
pub use metrics::KpiAggregator;
