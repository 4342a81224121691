//! Typed business entities built from board items.

use serde::{Deserialize, Serialize};

/// Sales pipeline record
///
/// `deal_value` is never negative and `probability` is always within
/// `0..=100`; both are enforced by the normalizer that builds deals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub name: String,
    pub stage: String,
    pub sector: String,
    pub deal_value: f64,
    pub probability: u8,
    /// Opaque date text, `""` when absent
    pub close_date: String,
    pub owner: String,
}

impl Deal {
    /// Value weighted by close probability.
    pub fn weighted_value(&self) -> f64 {
        self.deal_value * f64::from(self.probability) / 100.0
    }
}

/// Operations (execution) record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub name: String,
    pub status: String,
    pub energy_type: String,
    pub start_date: String,
    pub end_date: String,
}
