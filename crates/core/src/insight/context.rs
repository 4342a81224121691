//! Bounded text summary used to ground generated replies.
//!
//! The block is the only factual material a generation backend receives, so
//! it is rendered from the KPI set plus a short list of entries (work orders
//! that are not completed, or deals) in board order, capped at five.

use std::fmt::Write as _;

use skylark_domain::constants::CONTEXT_TOP_ENTRIES;
use skylark_domain::{Deal, Focus, KpiSet, WorkOrder};

use super::format::format_currency;
use crate::metrics::is_completed;

/// Context block rendered for one focus area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedContext {
    pub focus: Focus,
    pub text: String,
}

impl RenderedContext {
    /// Upper-case label used in the system prompt header.
    pub fn label(&self) -> &'static str {
        match self.focus {
            Focus::Operations => "OPERATIONS",
            Focus::Sales => "SALES",
        }
    }

    /// Heading of the offline summary.
    pub fn summary_title(&self) -> &'static str {
        match self.focus {
            Focus::Operations => "Operations Summary",
            Focus::Sales => "Pipeline Summary",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ContextBuilder {
    max_entries: usize,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self { max_entries: CONTEXT_TOP_ENTRIES }
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn render(
        &self,
        focus: Focus,
        kpis: &KpiSet,
        deals: &[Deal],
        work_orders: &[WorkOrder],
    ) -> RenderedContext {
        let text = match focus {
            Focus::Operations => self.render_operations(kpis, work_orders),
            Focus::Sales => self.render_sales(kpis, deals),
        };
        RenderedContext { focus, text }
    }

    fn render_operations(&self, kpis: &KpiSet, work_orders: &[WorkOrder]) -> String {
        let mut out = String::from("FOCUS: Work Orders & Operations\n");
        let _ = writeln!(out, "- Total Projects: {}", kpis.total_work_orders);
        let _ = writeln!(out, "- Completed: {}", kpis.completed_work_orders);
        let _ = writeln!(out, "- Delayed: {}", kpis.delayed_work_orders);
        let _ = writeln!(
            out,
            "- Total Pipeline Value (Ref): {}",
            format_currency(kpis.total_pipeline_value)
        );
        out.push_str("\n- Top Open Work Orders:\n");

        let entries: Vec<String> = work_orders
            .iter()
            .filter(|wo| !is_completed(wo))
            .take(self.max_entries)
            .map(|wo| {
                if wo.energy_type.is_empty() {
                    format!("- {}: {}", wo.name, wo.status)
                } else {
                    format!("- {}: {} ({})", wo.name, wo.status, wo.energy_type)
                }
            })
            .collect();
        push_entries(&mut out, &entries);
        out
    }

    fn render_sales(&self, kpis: &KpiSet, deals: &[Deal]) -> String {
        let mut out = String::from("FOCUS: Sales Pipeline & Deals\n");
        let _ = writeln!(out, "- Total Pipeline: {}", format_currency(kpis.total_pipeline_value));
        let _ =
            writeln!(out, "- Weighted Revenue: {}", format_currency(kpis.expected_revenue_weighted));
        let _ = writeln!(out, "- Open Deals: {}", kpis.open_deals_count);
        let _ = writeln!(out, "- Delayed Projects (Ref): {}", kpis.delayed_work_orders);
        out.push_str("\n- Top Deals:\n");

        let entries: Vec<String> = deals
            .iter()
            .take(self.max_entries)
            .map(|deal| {
                format!(
                    "- {}: ${} ({}, {}%)",
                    deal.name, deal.deal_value, deal.stage, deal.probability
                )
            })
            .collect();
        push_entries(&mut out, &entries);
        out
    }
}

fn push_entries(out: &mut String, entries: &[String]) {
    if entries.is_empty() {
        out.push_str("- (none)");
    } else {
        out.push_str(&entries.join("\n"));
    }
}
