//! Domain types and models

pub mod board;
pub mod entities;
pub mod insight;
pub mod kpi;
pub mod quality;

pub use board::{Board, BoardColumn, BoardItem, BoardSnapshot, ColumnValue};
pub use entities::{Deal, WorkOrder};
pub use insight::{BoardInsights, Focus};
pub use kpi::KpiSet;
pub use quality::DataQualityReport;
