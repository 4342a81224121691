//! Aggregate business metrics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// KPI set computed from one fetch of both boards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSet {
    pub total_pipeline_value: f64,
    pub expected_revenue_weighted: f64,
    pub deals_count: usize,
    pub open_deals_count: usize,
    pub pipeline_by_sector: BTreeMap<String, f64>,
    pub total_work_orders: usize,
    pub completed_work_orders: usize,
    pub delayed_work_orders: usize,
    /// Keyed by the normalized status exactly as written on the board
    pub execution_status_breakdown: BTreeMap<String, usize>,
}
