//! Reduces deals and work orders into a [`KpiSet`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use skylark_domain::constants::{
    CLOSED_DEAL_STAGES, COMPLETED_WORK_ORDER_STATUSES, DELAY_EXEMPT_STATUSES, DELAY_STATUS_MARKERS,
};
use skylark_domain::{Deal, KpiSet, WorkOrder};

/// Stage is not (case-insensitively) one of the closed stages.
pub fn is_open_deal(deal: &Deal) -> bool {
    !CLOSED_DEAL_STAGES.contains(&deal.stage.to_lowercase().as_str())
}

/// Status is (case-insensitively) one of the completed statuses.
pub fn is_completed(work_order: &WorkOrder) -> bool {
    COMPLETED_WORK_ORDER_STATUSES.contains(&work_order.status.to_lowercase().as_str())
}

/// Delay rule evaluated at `now`.
///
/// A marker word in the status ("delayed", "stuck", "issue") short-circuits
/// to delayed before any date is looked at. Otherwise a non-empty end date
/// strictly before `now` counts, unless the status is done or completed.
pub fn is_delayed(work_order: &WorkOrder, now: DateTime<Utc>) -> bool {
    let status = work_order.status.to_lowercase();
    if DELAY_STATUS_MARKERS.iter().any(|marker| status.contains(marker)) {
        return true;
    }

    if work_order.end_date.is_empty() || DELAY_EXEMPT_STATUSES.contains(&status.as_str()) {
        return false;
    }

    parse_end_date(&work_order.end_date).is_some_and(|end| end < now)
}

/// RFC 3339, `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD` (UTC midnight).
fn parse_end_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Stateless KPI reducer.
#[derive(Debug, Clone, Copy, Default)]
pub struct KpiAggregator;

impl KpiAggregator {
    pub fn aggregate(deals: &[Deal], work_orders: &[WorkOrder], now: DateTime<Utc>) -> KpiSet {
        let mut kpis = KpiSet {
            deals_count: deals.len(),
            total_work_orders: work_orders.len(),
            ..KpiSet::default()
        };

        for deal in deals {
            kpis.total_pipeline_value += deal.deal_value;
            kpis.expected_revenue_weighted += deal.weighted_value();
            if is_open_deal(deal) {
                kpis.open_deals_count += 1;
            }
            *kpis.pipeline_by_sector.entry(deal.sector.clone()).or_insert(0.0) += deal.deal_value;
        }

        for work_order in work_orders {
            if is_completed(work_order) {
                kpis.completed_work_orders += 1;
            }
            if is_delayed(work_order, now) {
                kpis.delayed_work_orders += 1;
            }
            // case-sensitive on purpose: "Done" and "done" are separate buckets
            *kpis.execution_status_breakdown.entry(work_order.status.clone()).or_insert(0) += 1;
        }

        kpis
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).single().expect("valid timestamp")
    }

    fn deal(stage: &str, sector: &str, value: f64, probability: u8) -> Deal {
        Deal {
            id: stage.to_string(),
            name: format!("{stage} deal"),
            stage: stage.to_string(),
            sector: sector.to_string(),
            deal_value: value,
            probability,
            close_date: String::new(),
            owner: String::new(),
        }
    }

    fn work_order(status: &str, end_date: &str) -> WorkOrder {
        WorkOrder {
            id: status.to_string(),
            name: format!("{status} order"),
            status: status.to_string(),
            energy_type: String::new(),
            start_date: String::new(),
            end_date: end_date.to_string(),
        }
    }

    #[test]
    fn closed_stages_are_case_insensitive() {
        for stage in ["won", "LOST", "Done", "closed", "Fulfilled"] {
            assert!(!is_open_deal(&deal(stage, "x", 0.0, 0)), "{stage} should be closed");
        }
        for stage in ["Negotiation", "Proposal", "won-ish", ""] {
            assert!(is_open_deal(&deal(stage, "x", 0.0, 0)), "{stage} should be open");
        }
    }

    #[test]
    fn marker_status_is_delayed_regardless_of_date() {
        assert!(is_delayed(&work_order("Stuck - client issue", ""), now()));
        assert!(is_delayed(&work_order("Delayed", "2099-01-01"), now()));
    }

    #[test]
    fn past_end_date_is_delayed_unless_done_or_completed() {
        assert!(is_delayed(&work_order("In Progress", "2025-01-01"), now()));
        assert!(!is_delayed(&work_order("Completed", "2025-01-01"), now()));
        assert!(!is_delayed(&work_order("done", "2025-01-01"), now()));
        // "finished" counts as completed but is still date-checked
        assert!(is_delayed(&work_order("Finished", "2025-01-01"), now()));
    }

    #[test]
    fn future_empty_or_unparsable_end_dates_are_not_delayed() {
        assert!(!is_delayed(&work_order("In Progress", "2025-12-31"), now()));
        assert!(!is_delayed(&work_order("In Progress", ""), now()));
        assert!(!is_delayed(&work_order("In Progress", "next week"), now()));
    }

    #[test]
    fn end_date_formats() {
        assert!(is_delayed(&work_order("Open", "2025-06-15T11:59:59Z"), now()));
        assert!(!is_delayed(&work_order("Open", "2025-06-15T12:00:00Z"), now()));
        assert!(is_delayed(&work_order("Open", "2025-06-15 11:00:00"), now()));
        assert!(is_delayed(&work_order("Open", "2025-06-15"), now()));
    }

    #[test]
    fn aggregates_pipeline_totals() {
        let deals = vec![
            deal("Won", "Energy", 100_000.0, 100),
            deal("Negotiation", "Energy", 50_000.0, 50),
            deal("Proposal", "Mining", 20_000.0, 20),
        ];

        let kpis = KpiAggregator::aggregate(&deals, &[], now());

        assert!((kpis.total_pipeline_value - 170_000.0).abs() < 1e-6);
        assert!((kpis.expected_revenue_weighted - 129_000.0).abs() < 1e-6);
        assert_eq!(kpis.deals_count, 3);
        assert_eq!(kpis.open_deals_count, 2);
        assert_eq!(kpis.pipeline_by_sector.get("Energy"), Some(&150_000.0));
        assert_eq!(kpis.pipeline_by_sector.get("Mining"), Some(&20_000.0));
    }

    #[test]
    fn aggregates_work_order_counts() {
        let work_orders = vec![
            work_order("Done", "2025-01-01"),
            work_order("done", ""),
            work_order("Stuck", ""),
            work_order("In Progress", "2025-02-01"),
        ];

        let kpis = KpiAggregator::aggregate(&[], &work_orders, now());

        assert_eq!(kpis.total_work_orders, 4);
        assert_eq!(kpis.completed_work_orders, 2);
        assert_eq!(kpis.delayed_work_orders, 2);
    }

    #[test]
    fn status_breakdown_is_case_sensitive() {
        let work_orders = vec![work_order("Done", ""), work_order("done", ""), work_order("Done", "")];

        let kpis = KpiAggregator::aggregate(&[], &work_orders, now());

        assert_eq!(kpis.execution_status_breakdown.get("Done"), Some(&2));
        assert_eq!(kpis.execution_status_breakdown.get("done"), Some(&1));
    }

    #[test]
    fn empty_inputs_produce_zeroed_kpis() {
        assert_eq!(KpiAggregator::aggregate(&[], &[], now()), KpiSet::default());
    }
}
