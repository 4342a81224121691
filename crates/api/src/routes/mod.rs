//! HTTP routes

pub mod chat;
pub mod error;
pub mod health;
pub mod kpi;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tracing::{info_span, Instrument};
use uuid::Uuid;

pub use error::ApiError;

use crate::utils::logging::log_request_outcome;
use crate::AppContext;

/// Build the application router over a shared context
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/api/kpi", get(kpi::get_kpis))
        .route("/api/chat", post(chat::post_chat))
        .route("/api/health", get(health::get_health))
        .layer(middleware::from_fn(request_span))
        .with_state(ctx)
}

async fn request_span(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!(
        "request",
        %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        log_request_outcome(response.status(), started.elapsed());
        response
    }
    .instrument(span)
    .await
}
