//! Keyword-based column resolution over user-defined board schemas.
//!
//! Board columns are renamed and reordered by users at will, so semantic
//! fields are located by keyword rules instead of fixed identifiers. A rule
//! picks the first column (in board order) whose lower-cased title contains
//! any of its keywords. At most one column is chosen per field.

use skylark_domain::constants::{
    DEAL_CLOSE_DATE_KEYWORDS, DEAL_OWNER_KEYWORDS, DEAL_PROBABILITY_KEYWORDS,
    DEAL_SECTOR_KEYWORDS, DEAL_STAGE_KEYWORDS, DEAL_VALUE_KEYWORDS, WORK_ORDER_END_KEYWORDS,
    WORK_ORDER_ENERGY_KEYWORDS, WORK_ORDER_START_KEYWORDS, WORK_ORDER_STATUS_KEYWORDS,
};
use skylark_domain::BoardColumn;

/// Semantic fields the mapper looks up on each board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticField {
    DealValue,
    DealStage,
    DealSector,
    DealProbability,
    DealCloseDate,
    DealOwner,
    WorkOrderStatus,
    WorkOrderEnergyType,
    WorkOrderStartDate,
    WorkOrderEndDate,
}

/// Lower-cased column title → column id, in board order.
///
/// Mirrors an insertion-ordered map: a repeated title keeps its first
/// position but takes the id of the last column carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    entries: Vec<(String, String)>,
}

impl ColumnMap {
    pub fn from_columns(columns: &[BoardColumn]) -> Self {
        let mut map = Self::default();
        for column in columns {
            map.insert(&column.title, &column.id);
        }
        map
    }

    pub fn insert(&mut self, title: &str, id: &str) {
        let title = title.to_lowercase();
        match self.entries.iter_mut().find(|(existing, _)| *existing == title) {
            Some(entry) => entry.1 = id.to_string(),
            None => self.entries.push((title, id.to_string())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(title, id)| (title.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordered keyword fragments for one semantic field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub field: SemanticField,
    keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(field: SemanticField, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect();
        Self { field, keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Id of the first column whose title contains any keyword.
    pub fn find<'a>(&self, columns: &'a ColumnMap) -> Option<&'a str> {
        columns
            .iter()
            .find(|(title, _)| self.keywords.iter().any(|keyword| title.contains(keyword.as_str())))
            .map(|(_, id)| id)
    }
}

/// Strategy object holding one keyword rule per semantic field.
///
/// [`ColumnResolver::standard`] carries the rules for the sales and
/// operations boards; [`ColumnResolver::with_rule`] swaps a rule out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResolver {
    rules: Vec<KeywordRule>,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl ColumnResolver {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn standard() -> Self {
        let table: [(SemanticField, &[&str]); 10] = [
            (SemanticField::DealValue, DEAL_VALUE_KEYWORDS),
            (SemanticField::DealStage, DEAL_STAGE_KEYWORDS),
            (SemanticField::DealSector, DEAL_SECTOR_KEYWORDS),
            (SemanticField::DealProbability, DEAL_PROBABILITY_KEYWORDS),
            (SemanticField::DealCloseDate, DEAL_CLOSE_DATE_KEYWORDS),
            (SemanticField::DealOwner, DEAL_OWNER_KEYWORDS),
            (SemanticField::WorkOrderStatus, WORK_ORDER_STATUS_KEYWORDS),
            (SemanticField::WorkOrderEnergyType, WORK_ORDER_ENERGY_KEYWORDS),
            (SemanticField::WorkOrderStartDate, WORK_ORDER_START_KEYWORDS),
            (SemanticField::WorkOrderEndDate, WORK_ORDER_END_KEYWORDS),
        ];

        table.into_iter().fold(Self::empty(), |resolver, (field, keywords)| {
            resolver.with_rule(KeywordRule::new(field, keywords.iter().copied()))
        })
    }

    /// Add a rule, replacing any existing rule for the same field.
    #[must_use]
    pub fn with_rule(mut self, rule: KeywordRule) -> Self {
        match self.rules.iter_mut().find(|existing| existing.field == rule.field) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    pub fn rule(&self, field: SemanticField) -> Option<&KeywordRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Column id for `field`, or `None` when no rule exists or no title
    /// matches.
    pub fn resolve<'a>(&self, columns: &'a ColumnMap, field: SemanticField) -> Option<&'a str> {
        self.rule(field).and_then(|rule| rule.find(columns))
    }
}
