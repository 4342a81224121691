//! `GET /api/health`

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub data_source_configured: bool,
    pub backends: Vec<String>,
}

/// Report wiring state without touching any upstream service.
pub async fn get_health(State(ctx): State<Arc<AppContext>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        data_source_configured: ctx.data_source_configured(),
        backends: ctx.active_backends(),
    })
}
