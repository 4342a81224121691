//! Primary generation backend: OpenAI-compatible chat completions on Groq
//!
//! Sends the system prompt and the user's question as a message pair
//! (model `llama-3.3-70b-versatile`, temperature 0.7, bearer auth) and
//! reads `choices[0].message.content`. Any other shape is a failure.

pub mod client;
mod types;

/// Stage name reported in traces and health output
pub const BACKEND_NAME: &str = "groq";

pub use client::GroqClient;
