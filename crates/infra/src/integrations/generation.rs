//! Error mapping shared by the generation backends

use skylark_core::GenerationError;
use skylark_domain::SkylarkError;

/// Transport failure from [`crate::http::HttpClient::send`].
pub(crate) fn transport_error(err: SkylarkError) -> GenerationError {
    match err {
        SkylarkError::Auth(msg) => GenerationError::Authentication(msg),
        SkylarkError::Network(msg) | SkylarkError::Internal(msg) => GenerationError::Network(msg),
        other => GenerationError::Network(format!("HTTP error: {other}")),
    }
}

/// Non-success HTTP status returned by a backend.
pub(crate) async fn status_error(status: u16, response: reqwest::Response) -> GenerationError {
    let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

    match status {
        401 | 403 => GenerationError::Authentication(format!("Invalid API key ({status})")),
        _ => GenerationError::Api { status, message },
    }
}
