//! Raw board data as delivered by the external data source.
//!
//! Column titles are user-defined and every value is serialized text, so
//! nothing here is typed beyond identifiers and strings.

use serde::{Deserialize, Serialize};

/// Column definition of a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub id: String,
    pub title: String,
}

/// Text value of one column for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnValue {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// A single record (row) on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub column_values: Vec<ColumnValue>,
}

impl BoardItem {
    /// Text stored under `column_id`, if the item carries that column.
    pub fn text_of(&self, column_id: &str) -> Option<&str> {
        self.column_values
            .iter()
            .find(|value| value.id == column_id)
            .and_then(|value| value.text.as_deref())
    }
}

/// Column schema plus items of one board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub columns: Vec<BoardColumn>,
    #[serde(default)]
    pub items: Vec<BoardItem>,
}

/// Both boards fetched in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub deals: Board,
    pub work_orders: Board,
}
