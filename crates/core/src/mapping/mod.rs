//! Raw board data → typed entities.

pub mod column_resolver;
pub mod entity_mapper;
pub mod normalize;

pub use column_resolver::{ColumnMap, ColumnResolver, KeywordRule, SemanticField};
pub use entity_mapper::{EntityMapper, MappedBoards};
