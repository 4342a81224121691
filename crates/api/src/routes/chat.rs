//! `POST /api/chat`

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use skylark_core::insight::StageRecord;
use skylark_domain::{DataQualityReport, Focus, KpiSet};
use tracing::{error, info, warn};

use super::error::ApiError;
use crate::AppContext;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    /// `"work_orders"` selects the operations focus; anything else is sales
    #[serde(default)]
    pub active_board: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub reply: String,
    pub source: String,
    pub stages: Vec<StageRecord>,
    pub kpis: KpiSet,
    pub data_quality: DataQualityReport,
}

/// Answer a question from fresh board data.
///
/// A data fetch failure is a 500; generation failures degrade to the offline
/// summary and still return 200.
pub async fn post_chat(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected chat payload");
        ApiError::bad_request(rejection.body_text())
    })?;

    let focus = Focus::from_active_board(request.active_board.as_deref());
    let answer = ctx.insights.answer(&request.message, focus).await.map_err(|err| {
        error!(error = %err, kind = err.label(), "chat request failed");
        ApiError::internal(err.message())
    })?;

    info!(source = answer.source.name(), ?focus, "chat answered");

    Ok(Json(ChatResponse {
        source: answer.source.name().to_string(),
        reply: answer.reply,
        stages: answer.stages,
        kpis: answer.kpis,
        data_quality: answer.data_quality,
    }))
}
