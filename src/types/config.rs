use serde::{Deserialize, Serialize};

use super::{ColumnSpec, Row};
use crate::render::Theme;

fn default_header_height() -> f64 {
    40.0
}

fn default_row_height() -> f64 {
    30.0
}

fn default_height() -> f64 {
    400.0
}

/// Full table configuration supplied at construction.
///
/// Deserialized from the host's config object (camelCase keys on the JS
/// side). Columns and data are treated as read-only; the engine derives all
/// geometry into its own structures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Ordered column declarations.
    pub columns: Vec<ColumnSpec>,
    /// The full dataset. Only the visible window is ever painted.
    #[serde(default)]
    pub data: Vec<Row>,
    /// Header band height in logical pixels.
    #[serde(default = "default_header_height")]
    pub header_height: f64,
    /// Uniform row height in logical pixels.
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    /// Desired body height in logical pixels. The final canvas never
    /// reserves more vertical space than the dataset can fill.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Style overrides layered onto the built-in theme.
    #[serde(default)]
    pub theme: Theme,
}

impl TableConfig {
    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }
}
