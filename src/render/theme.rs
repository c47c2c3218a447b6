//! Styling configuration.
//!
//! A base region style plus an explicit per-region override layer (the
//! header), merged through an enumerated-field function instead of ambient
//! shared state.

use serde::{Deserialize, Serialize};

use super::Edge;

/// Fully resolved style for one painted region (body or header).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionStyle {
    pub background_color: String,
    pub border_top_color: String,
    pub border_right_color: String,
    pub border_bottom_color: String,
    pub border_left_color: String,
    pub text_color: String,
    pub font: String,
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            border_top_color: "#e8eaec".to_string(),
            border_right_color: "#e8eaec".to_string(),
            border_bottom_color: "#e8eaec".to_string(),
            border_left_color: "#e8eaec".to_string(),
            text_color: "#515a6e".to_string(),
            font: "12px -apple-system, 'Segoe UI', Roboto, sans-serif".to_string(),
        }
    }
}

impl RegionStyle {
    /// Border color for one edge.
    pub fn border_color(&self, edge: Edge) -> &str {
        match edge {
            Edge::Top => &self.border_top_color,
            Edge::Right => &self.border_right_color,
            Edge::Bottom => &self.border_bottom_color,
            Edge::Left => &self.border_left_color,
        }
    }

    /// Layer an override onto this style, producing the merged style.
    pub fn merged(&self, over: &StyleOverride) -> Self {
        let pick = |field: &Option<String>, base: &str| {
            field.clone().unwrap_or_else(|| base.to_string())
        };
        Self {
            background_color: pick(&over.background_color, &self.background_color),
            border_top_color: pick(&over.border_top_color, &self.border_top_color),
            border_right_color: pick(&over.border_right_color, &self.border_right_color),
            border_bottom_color: pick(&over.border_bottom_color, &self.border_bottom_color),
            border_left_color: pick(&over.border_left_color, &self.border_left_color),
            text_color: pick(&over.text_color, &self.text_color),
            font: pick(&over.font, &self.font),
        }
    }
}

/// Partial style: only the recognized fields a region may override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOverride {
    pub background_color: Option<String>,
    pub border_top_color: Option<String>,
    pub border_right_color: Option<String>,
    pub border_bottom_color: Option<String>,
    pub border_left_color: Option<String>,
    pub text_color: Option<String>,
    pub font: Option<String>,
}

/// Table theme: the body's base style plus the header override layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    #[serde(flatten)]
    pub base: RegionStyle,
    pub header: StyleOverride,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: RegionStyle::default(),
            header: StyleOverride {
                background_color: Some("#f8f8f9".to_string()),
                font: Some("bold 12px -apple-system, 'Segoe UI', Roboto, sans-serif".to_string()),
                ..StyleOverride::default()
            },
        }
    }
}

impl Theme {
    /// Style for the body region.
    pub fn body_style(&self) -> &RegionStyle {
        &self.base
    }

    /// Header style: the base with the header override layered on.
    pub fn header_style(&self) -> RegionStyle {
        self.base.merged(&self.header)
    }
}
