//! Builds typed entities from raw board items.
//!
//! Columns are resolved once per board. Every item yields exactly one entity
//! in source order; missing fields degrade to defaults and are tallied in the
//! [`DataQualityReport`].

use skylark_domain::constants::{DEFAULT_SECTOR, DEFAULT_WORK_ORDER_STATUS};
use skylark_domain::{Board, BoardItem, BoardSnapshot, DataQualityReport, Deal, WorkOrder};

use super::column_resolver::{ColumnMap, ColumnResolver, SemanticField};
use super::normalize::{normalize_date, normalize_text, parse_amount, parse_probability, text_or};

/// Entities and quality counters produced from one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedBoards {
    pub deals: Vec<Deal>,
    pub work_orders: Vec<WorkOrder>,
    pub quality: DataQualityReport,
}

/// Column ids resolved for one board. `None` means no column matched.
struct ResolvedColumns<'a> {
    map: &'a ColumnMap,
    resolver: &'a ColumnResolver,
}

impl<'a> ResolvedColumns<'a> {
    fn lookup(&self, field: SemanticField) -> Option<&'a str> {
        self.resolver.resolve(self.map, field)
    }
}

fn read<'i>(item: &'i BoardItem, column: Option<&str>) -> Option<&'i str> {
    column.and_then(|id| item.text_of(id))
}

#[derive(Debug, Clone, Default)]
pub struct EntityMapper {
    resolver: ColumnResolver,
}

impl EntityMapper {
    pub fn new(resolver: ColumnResolver) -> Self {
        Self { resolver }
    }

    /// Map both boards with a fresh quality report.
    pub fn map_snapshot(&self, snapshot: &BoardSnapshot) -> MappedBoards {
        let mut quality = DataQualityReport::default();
        let deals = self.map_deals(&snapshot.deals, &mut quality);
        let work_orders = self.map_work_orders(&snapshot.work_orders, &mut quality);
        MappedBoards { deals, work_orders, quality }
    }

    pub fn map_deals(&self, board: &Board, quality: &mut DataQualityReport) -> Vec<Deal> {
        let map = ColumnMap::from_columns(&board.columns);
        let columns = ResolvedColumns { map: &map, resolver: &self.resolver };

        let value_col = columns.lookup(SemanticField::DealValue);
        let stage_col = columns.lookup(SemanticField::DealStage);
        let sector_col = columns.lookup(SemanticField::DealSector);
        let probability_col = columns.lookup(SemanticField::DealProbability);
        let close_col = columns.lookup(SemanticField::DealCloseDate);
        let owner_col = columns.lookup(SemanticField::DealOwner);

        board
            .items
            .iter()
            .map(|item| {
                let deal_value = parse_amount(read(item, value_col));
                let raw_sector = normalize_text(read(item, sector_col));
                let close_date = normalize_date(read(item, close_col));

                if deal_value == 0.0 {
                    quality.missing_deal_value_count += 1;
                }
                if raw_sector.is_empty() {
                    quality.missing_sector_count += 1;
                }
                if close_date.trim().is_empty() {
                    quality.missing_close_date_count += 1;
                }

                Deal {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    stage: normalize_text(read(item, stage_col)),
                    sector: if raw_sector.is_empty() { DEFAULT_SECTOR.to_string() } else { raw_sector },
                    deal_value,
                    probability: parse_probability(read(item, probability_col)),
                    close_date,
                    owner: normalize_text(read(item, owner_col)),
                }
            })
            .collect()
    }

    pub fn map_work_orders(&self, board: &Board, quality: &mut DataQualityReport) -> Vec<WorkOrder> {
        let map = ColumnMap::from_columns(&board.columns);
        let columns = ResolvedColumns { map: &map, resolver: &self.resolver };

        let status_col = columns.lookup(SemanticField::WorkOrderStatus);
        let energy_col = columns.lookup(SemanticField::WorkOrderEnergyType);
        let start_col = columns.lookup(SemanticField::WorkOrderStartDate);
        let end_col = columns.lookup(SemanticField::WorkOrderEndDate);

        board
            .items
            .iter()
            .map(|item| {
                let raw_status = read(item, status_col);
                if normalize_text(raw_status).is_empty() {
                    quality.missing_work_order_status_count += 1;
                }

                WorkOrder {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    status: text_or(raw_status, DEFAULT_WORK_ORDER_STATUS),
                    energy_type: normalize_text(read(item, energy_col)),
                    start_date: normalize_date(read(item, start_col)),
                    end_date: normalize_date(read(item, end_col)),
                }
            })
            .collect()
    }
}
