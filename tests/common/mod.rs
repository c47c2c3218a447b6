//! Common test utilities: config builders and a recording draw surface.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use canvas_table::render::{DrawSurface, Edge, RegionStyle};
use canvas_table::types::{CellValue, ColumnSpec, Row, TableConfig};

// ============================================================================
// Config Builders
// ============================================================================

/// A dataset of `count` rows with `id` and `name` columns.
pub fn rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let mut row = Row::new();
            row.insert("id".to_string(), CellValue::Number(i as f64));
            row.insert("name".to_string(), CellValue::Text(format!("row {i}")));
            row
        })
        .collect()
}

/// A config with two flexible columns and the given dataset size and
/// vertical dimensions.
pub fn config(row_count: usize, height: f64, header_height: f64, row_height: f64) -> TableConfig {
    TableConfig {
        columns: vec![
            ColumnSpec::flex("id", "ID", 80.0),
            ColumnSpec::flex("name", "Name", 120.0),
        ],
        data: rows(row_count),
        header_height,
        row_height,
        height,
        theme: Default::default(),
    }
}

// ============================================================================
// Recording Surface
// ============================================================================

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Resize {
        width: f64,
        height: f64,
    },
    Clear,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    StrokeEdge {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        edge: Edge,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// A `DrawSurface` that records every primitive call, so tests can assert
/// the exact paint op stream without a browser canvas.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ops recorded since the last `clear()`, exclusive of the clear itself.
    pub fn ops_since_clear(&self) -> &[Op] {
        let last_clear = self
            .ops
            .iter()
            .rposition(|op| matches!(op, Op::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[last_clear..]
    }

    pub fn texts(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Text { .. }))
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Resize { width, height });
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ops.push(Op::FillRect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn stroke_edge(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        edge: Edge,
        style: &RegionStyle,
    ) {
        self.ops.push(Op::StrokeEdge {
            x,
            y,
            width,
            height,
            edge,
            color: style.border_color(edge).to_string(),
        });
    }

    fn draw_cell_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        _style: &RegionStyle,
    ) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            width,
            height,
        });
    }
}
