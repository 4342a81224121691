//! Focus area selection and the per-fetch aggregate returned to callers.

use serde::{Deserialize, Serialize};

use super::{DataQualityReport, Deal, KpiSet, WorkOrder};
use crate::impl_domain_label_conversions;

/// Active business domain that selects which KPIs and entities ground a reply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Operations,
    #[default]
    Sales,
}

impl_domain_label_conversions!(Focus {
    Operations => "operations",
    Sales => "sales",
});

impl Focus {
    /// Board selector sent by the chat client: `"work_orders"` selects
    /// operations, anything else (including nothing) selects sales.
    pub fn from_active_board(active_board: Option<&str>) -> Self {
        match active_board {
            Some("work_orders") => Self::Operations,
            _ => Self::Sales,
        }
    }
}

/// Everything one fetch-and-aggregate pass produces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardInsights {
    pub deals: Vec<Deal>,
    pub work_orders: Vec<WorkOrder>,
    pub kpis: KpiSet,
    pub data_quality: DataQualityReport,
}
