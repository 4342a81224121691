//! `GET /api/kpi`

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use skylark_domain::{DataQualityReport, KpiSet};
use tracing::error;

use super::error::ApiError;
use crate::AppContext;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiResponse {
    pub kpis: KpiSet,
    pub data_quality: DataQualityReport,
}

/// Fetch both boards and return the KPI set with its quality counters.
pub async fn get_kpis(State(ctx): State<Arc<AppContext>>) -> Result<Json<KpiResponse>, ApiError> {
    match ctx.insights.snapshot().await {
        Ok(insights) => {
            Ok(Json(KpiResponse { kpis: insights.kpis, data_quality: insights.data_quality }))
        }
        Err(err) => {
            error!(error = %err, kind = err.label(), "kpi request failed");
            Err(ApiError::internal("Failed to fetch KPIs").with_details(err.message()))
        }
    }
}
