//! Caller-facing data model: column declarations, rows, and table config.

mod column;
mod config;
mod row;

pub use column::{ColumnSpec, Fixed};
pub use config::TableConfig;
pub use row::{CellValue, Row};
