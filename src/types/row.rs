use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Rows are open-ended key/value mappings; values are opaque to the engine
/// beyond being displayable as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Display form used by the render pipeline.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => {
                // Integral values display without a trailing ".0".
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{n:.0}")
                } else {
                    n.to_string()
                }
            }
            Self::Bool(b) => b.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A table row: column key → displayable value.
pub type Row = HashMap<String, CellValue>;
