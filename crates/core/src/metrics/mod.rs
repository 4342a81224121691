//! KPI aggregation over mapped entities.

pub mod kpi;

pub use kpi::{is_completed, is_delayed, is_open_deal, KpiAggregator};
