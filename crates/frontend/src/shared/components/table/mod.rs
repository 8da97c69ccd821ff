pub mod admin_table;
pub mod header_cell;
pub mod table_search;

pub use admin_table::{AdminTable, BodyState, ColumnDef, RowClass, TableRecord};
pub use header_cell::HeaderCell;
pub use table_search::TableSearch;
