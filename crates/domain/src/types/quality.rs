//! Data-quality counters gathered while mapping board items.

use serde::{Deserialize, Serialize};

/// Per-field count of source records lacking a resolvable value.
///
/// Rebuilt from zero on every fetch; counters only grow during one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityReport {
    pub missing_deal_value_count: u32,
    pub missing_sector_count: u32,
    pub missing_close_date_count: u32,
    pub missing_work_order_status_count: u32,
}

impl DataQualityReport {
    pub fn total_issues(&self) -> u32 {
        self.missing_deal_value_count
            + self.missing_sector_count
            + self.missing_close_date_count
            + self.missing_work_order_status_count
    }

    pub fn is_clean(&self) -> bool {
        self.total_issues() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let report = DataQualityReport { missing_deal_value_count: 2, ..Default::default() };
        let json = serde_json::to_value(report).expect("serialize");

        assert_eq!(json["missingDealValueCount"], 2);
        assert_eq!(json["missingWorkOrderStatusCount"], 0);
    }

    #[test]
    fn fresh_report_is_clean() {
        assert!(DataQualityReport::default().is_clean());
    }
}
