//! Wire types for the board data source GraphQL API

use serde::{Deserialize, Serialize};
use skylark_domain::{Board, BoardColumn, BoardItem};

#[derive(Debug, Serialize)]
pub(crate) struct GraphQLRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQLError {
    pub message: String,
}

/// `data` payload of the two-board query; each alias is a list of boards
#[derive(Debug, Deserialize)]
pub(crate) struct BoardsData {
    #[serde(default)]
    pub deals: Option<Vec<RawBoard>>,
    #[serde(default)]
    pub work_orders: Option<Vec<RawBoard>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBoard {
    #[serde(default)]
    pub columns: Vec<BoardColumn>,
    #[serde(default)]
    pub items_page: ItemsPage,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemsPage {
    #[serde(default)]
    pub items: Vec<BoardItem>,
}

impl From<RawBoard> for Board {
    fn from(raw: RawBoard) -> Self {
        Self { columns: raw.columns, items: raw.items_page.items }
    }
}
