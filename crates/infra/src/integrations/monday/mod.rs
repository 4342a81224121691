//! Board data source integration (GraphQL)
//!
//! `MondayClient` implements [`skylark_core::BoardSource`]: one POST per
//! fetch requesting both boards' column definitions and up to 500 items
//! each. The raw API key is sent as the `Authorization` header.
//!
//! # Error Handling
//!
//! - Missing key or board ids: `SkylarkError::Config`, no request is sent
//! - Non-success status, GraphQL `errors` array or a missing board:
//!   `SkylarkError::Upstream`
//! - Transport failures and timeouts: `SkylarkError::Network`
//!
//! Nothing is retried.

pub mod client;
mod types;

pub use client::{build_query, MondayClient};
