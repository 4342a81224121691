//! # Skylark Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - HTTP client with bounded timeouts
//! - Board data source GraphQL client
//! - Generation backend clients (chat completion, instruction completion)
//! - Configuration loading from environment and files
//!
//! ## Architecture
//! - Implements traits defined in `skylark-core`
//! - Contains all "impure" code (network and file I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::{GroqClient, HuggingFaceClient, MondayClient};
