//! # Skylark API
//!
//! HTTP application layer - routes, wiring and entry point.
//!
//! This crate contains:
//! - axum routes (`/api/kpi`, `/api/chat`, `/api/health`)
//! - Application context (dependency injection)
//! - Tracing initialisation
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes the insight pipeline over JSON

pub mod context;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use routes::router;
