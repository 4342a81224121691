//! Secondary generation backend: instruction completion on the Hugging Face router

pub mod client;
mod types;

/// Stage name reported in traces and health output
pub const BACKEND_NAME: &str = "huggingface";

pub use client::HuggingFaceClient;
