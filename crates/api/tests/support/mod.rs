//! In-memory fakes for route tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use skylark_api::utils::logging;
use skylark_api::{router, AppContext};
use skylark_core::insight::{GenerationRequest, GenerationResult, GenerationStage};
use skylark_core::{BoardSource, GenerationBackend, GenerationOrchestrator, InsightService};
use skylark_domain::{
    Board, BoardColumn, BoardItem, BoardSnapshot, ColumnValue, Config, Result as DomainResult,
    SkylarkError,
};

/// `BoardSource` returning a fixed snapshot or error
pub struct StaticBoards(pub Result<BoardSnapshot, SkylarkError>);

#[async_trait]
impl BoardSource for StaticBoards {
    async fn fetch_boards(&self) -> DomainResult<BoardSnapshot> {
        self.0.clone()
    }
}

/// Backend with a canned result
pub struct CannedBackend {
    pub name: &'static str,
    pub reply: GenerationResult<String>,
}

#[async_trait]
impl GenerationBackend for CannedBackend {
    fn name(&self) -> &str {
        self.name
    }

    async fn generate(&self, _request: &GenerationRequest) -> GenerationResult<String> {
        self.reply.clone()
    }
}

fn board(columns: &[(&str, &str)], items: &[(&str, &[(&str, &str)])]) -> Board {
    Board {
        columns: columns
            .iter()
            .map(|(id, title)| BoardColumn { id: (*id).to_string(), title: (*title).to_string() })
            .collect(),
        items: items
            .iter()
            .enumerate()
            .map(|(idx, (name, values))| BoardItem {
                id: idx.to_string(),
                name: (*name).to_string(),
                column_values: values
                    .iter()
                    .map(|(id, text)| ColumnValue {
                        id: (*id).to_string(),
                        text: Some((*text).to_string()),
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Two deals (one won, one missing a value) and two work orders
pub fn sample_snapshot() -> BoardSnapshot {
    BoardSnapshot {
        deals: board(
            &[("numbers", "Deal Value"), ("status", "Deal Stage"), ("sector", "Sector")],
            &[
                ("Solar Park", &[("numbers", "$100,000"), ("status", "Won"), ("sector", "Energy")]),
                ("Mine Survey", &[("numbers", ""), ("status", "Negotiation")]),
            ],
        ),
        work_orders: board(
            &[("exec", "Execution Status"), ("end", "Probable End Date")],
            &[
                ("Drone Mapping", &[("exec", "Completed"), ("end", "2999-01-01")]),
                ("Rail Survey", &[("exec", "In Progress"), ("end", "2999-01-01")]),
            ],
        ),
    }
}

/// Router over a fake board source and the given backends.
pub fn app(source: StaticBoards, backends: Vec<Arc<dyn GenerationBackend>>) -> Router {
    logging::init_test();

    let mut orchestrator = GenerationOrchestrator::new(Duration::from_secs(5));
    for backend in backends {
        orchestrator = orchestrator.with_backend(backend);
    }
    if orchestrator.stages().is_empty() {
        orchestrator = orchestrator.with_stage(GenerationStage::Unconfigured("groq".into()));
    }

    let insights = InsightService::new(Arc::new(source), orchestrator);
    router(Arc::new(AppContext::from_parts(Config::default(), insights, true)))
}
