//! External service integrations

pub(crate) mod generation;
pub mod groq;
pub mod huggingface;
pub mod monday;

pub use groq::GroqClient;
pub use huggingface::HuggingFaceClient;
pub use monday::MondayClient;
