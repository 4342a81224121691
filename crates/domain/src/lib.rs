//! # Skylark Domain
//!
//! Business domain types for Skylark.
//!
//! This crate contains:
//! - Raw board data and the typed entities built from it (Deal, WorkOrder)
//! - KPI and data-quality report types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Keyword rules and status vocabularies
//!
//! ## Architecture
//! - No dependencies on other Skylark crates
//! - Pure domain models and data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
