//! Insight service - fetch, normalize, aggregate, answer

use std::sync::Arc;

use skylark_domain::{BoardInsights, DataQualityReport, Focus, KpiSet, Result};
use tracing::{debug, error, instrument};

use super::context::ContextBuilder;
use super::orchestrator::{GenerationOrchestrator, ReplySource, StageRecord};
use super::ports::{BoardSource, Clock, GenerationRequest, SystemClock};
use super::prompt::compose_system_prompt;
use crate::mapping::EntityMapper;
use crate::metrics::KpiAggregator;

/// Reply to a chat question together with the figures it was grounded on
#[derive(Debug, Clone, PartialEq)]
pub struct ChatAnswer {
    pub reply: String,
    pub source: ReplySource,
    pub stages: Vec<StageRecord>,
    pub kpis: KpiSet,
    pub data_quality: DataQualityReport,
}

/// Per-request pipeline over a board source and a generation chain.
///
/// Holds no mutable state; every call fetches and aggregates afresh.
pub struct InsightService {
    source: Arc<dyn BoardSource>,
    mapper: EntityMapper,
    context: ContextBuilder,
    orchestrator: GenerationOrchestrator,
    clock: Arc<dyn Clock>,
}

impl InsightService {
    pub fn new(source: Arc<dyn BoardSource>, orchestrator: GenerationOrchestrator) -> Self {
        Self {
            source,
            mapper: EntityMapper::default(),
            context: ContextBuilder::default(),
            orchestrator,
            clock: Arc::new(SystemClock),
        }
    }

    #[must_use]
    pub fn with_mapper(mut self, mapper: EntityMapper) -> Self {
        self.mapper = mapper;
        self
    }

    #[must_use]
    pub fn with_context_builder(mut self, context: ContextBuilder) -> Self {
        self.context = context;
        self
    }

    /// Replace the wall clock used by the delay rule
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn orchestrator(&self) -> &GenerationOrchestrator {
        &self.orchestrator
    }

    /// Fetch both boards and compute entities, KPIs and quality counters.
    ///
    /// All-or-nothing: any fetch failure is returned as the error.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<BoardInsights> {
        let boards = self.source.fetch_boards().await.map_err(|err| {
            error!(error = %err, kind = err.label(), "failed to fetch board data");
            err
        })?;

        let mapped = self.mapper.map_snapshot(&boards);
        let kpis = KpiAggregator::aggregate(&mapped.deals, &mapped.work_orders, self.clock.now());

        debug!(
            deals = mapped.deals.len(),
            work_orders = mapped.work_orders.len(),
            quality_issues = mapped.quality.total_issues(),
            "board snapshot aggregated"
        );

        Ok(BoardInsights {
            deals: mapped.deals,
            work_orders: mapped.work_orders,
            kpis,
            data_quality: mapped.quality,
        })
    }

    /// Answer a question grounded on a fresh snapshot.
    ///
    /// Fails only when the fetch fails; generation problems degrade to the
    /// offline summary.
    #[instrument(skip(self, message))]
    pub async fn answer(&self, message: &str, focus: Focus) -> Result<ChatAnswer> {
        let insights = self.snapshot().await?;

        let context =
            self.context.render(focus, &insights.kpis, &insights.deals, &insights.work_orders);
        let system_prompt = compose_system_prompt(message, &context, &insights.data_quality);
        debug!(prompt = %system_prompt, "system prompt generated");

        let request = GenerationRequest { system_prompt, user_message: message.to_string() };
        let outcome = self.orchestrator.generate(&request, &context).await;

        Ok(ChatAnswer {
            reply: outcome.reply,
            source: outcome.source,
            stages: outcome.stages,
            kpis: insights.kpis,
            data_quality: insights.data_quality,
        })
    }
}
