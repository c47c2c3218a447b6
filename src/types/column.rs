use serde::{Deserialize, Serialize};

/// Pinned-edge marker for a column.
///
/// Pinned columns reserve room in the final canvas width so they always have
/// a resting area, even when the container is narrower than the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fixed {
    /// Not pinned (participates in normal flow).
    #[default]
    None,
    /// Pinned to the left edge.
    Left,
    /// Pinned to the right edge.
    Right,
}

/// Declarative column definition supplied by the caller.
///
/// A column either has an explicit `width`, or is flexible: it receives a
/// proportional share of the space left after explicit widths are subtracted,
/// floored at `min_width`. Column intent is never mutated — layout resolves
/// it into a separate immutable geometry table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Field identifier used to look up cell values in each row.
    pub key: String,
    /// Header display text.
    pub label: String,
    /// Explicit width in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Floor for flexible allocation, in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Pinned-edge marker.
    #[serde(default)]
    pub fixed: Fixed,
}

impl ColumnSpec {
    /// A flexible column with a minimum width.
    pub fn flex(key: &str, label: &str, min_width: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            width: None,
            min_width: Some(min_width),
            fixed: Fixed::None,
        }
    }

    /// A column with an explicit pixel width.
    pub fn fixed_width(key: &str, label: &str, width: f64) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            width: Some(width),
            min_width: None,
            fixed: Fixed::None,
        }
    }

    /// Whether the column participates in flexible allocation.
    pub fn is_flexible(&self) -> bool {
        self.width.is_none()
    }
}
