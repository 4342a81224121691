//! Raw board builders and an in-memory `BoardSource`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use skylark_core::BoardSource;
use skylark_domain::{
    Board, BoardColumn, BoardItem, BoardSnapshot, ColumnValue, Result as DomainResult, SkylarkError,
};

/// Fluent builder for one board
#[derive(Debug, Default, Clone)]
pub struct BoardBuilder {
    board: Board,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(mut self, id: &str, title: &str) -> Self {
        self.board.columns.push(BoardColumn { id: id.to_string(), title: title.to_string() });
        self
    }

    pub fn item(mut self, id: &str, name: &str, values: &[(&str, &str)]) -> Self {
        self.board.items.push(BoardItem {
            id: id.to_string(),
            name: name.to_string(),
            column_values: values
                .iter()
                .map(|(column, text)| ColumnValue {
                    id: (*column).to_string(),
                    text: Some((*text).to_string()),
                })
                .collect(),
        });
        self
    }

    pub fn build(self) -> Board {
        self.board
    }
}

/// Deals board with the usual column titles
pub fn deals_board() -> BoardBuilder {
    BoardBuilder::new()
        .column("numbers", "Deal Value")
        .column("status", "Deal Stage")
        .column("text_sector", "Sector/Service")
        .column("prob", "Closure Probability")
        .column("date", "Tentative Close Date")
        .column("person", "Owner code")
}

/// Work orders board with the usual column titles
pub fn work_orders_board() -> BoardBuilder {
    BoardBuilder::new()
        .column("exec", "Execution Status")
        .column("nature", "Nature of Work")
        .column("start", "Probable Start Date")
        .column("end", "Probable End Date")
}

/// In-memory `BoardSource` returning a fixed snapshot or error
#[derive(Clone)]
pub struct MockBoardSource {
    response: Result<BoardSnapshot, SkylarkError>,
    calls: Arc<AtomicUsize>,
}

impl MockBoardSource {
    pub fn new(snapshot: BoardSnapshot) -> Self {
        Self { response: Ok(snapshot), calls: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn failing(error: SkylarkError) -> Self {
        Self { response: Err(error), calls: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BoardSource for MockBoardSource {
    async fn fetch_boards(&self) -> DomainResult<BoardSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
