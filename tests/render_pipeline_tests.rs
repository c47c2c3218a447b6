//! Render pipeline tests over a recording surface.
//!
//! Asserts the paint op stream: full clear before every paint, body before
//! header, sub-row offsets on row borders and text, and degenerate cases.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_precision_loss
)]

mod common;

use canvas_table::render::Edge;
use canvas_table::CanvasTable;
use common::{config, Op, RecordingSurface};

fn reference_table() -> CanvasTable {
    CanvasTable::headless(config(1000, 390.0, 40.0, 30.0), 800.0)
}

#[test]
fn every_paint_starts_with_a_full_clear() {
    let table = reference_table();
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);
    assert_eq!(surface.ops.first(), Some(&Op::Clear));
}

#[test]
fn repaint_with_unchanged_state_is_idempotent() {
    let table = reference_table();
    let mut first = RecordingSurface::new();
    let mut second = RecordingSurface::new();
    table.repaint(&mut first);
    table.repaint(&mut second);
    table.repaint(&mut second);
    // The second surface saw two paints; the ops since its last clear must
    // equal one full paint on the first surface.
    assert_eq!(second.ops_since_clear(), &first.ops[1..]);
}

#[test]
fn header_is_painted_after_the_body() {
    let table = reference_table();
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let header_fill = surface
        .ops
        .iter()
        .position(|op| matches!(op, Op::FillRect { y, .. } if *y == 0.0))
        .unwrap();
    let last_body_text = surface
        .ops
        .iter()
        .rposition(|op| matches!(op, Op::Text { text, .. } if text.starts_with("row ")))
        .unwrap();
    assert!(
        header_fill > last_body_text,
        "header fill at {header_fill} must follow body text at {last_body_text}"
    );
}

#[test]
fn header_draws_each_label_once_at_accumulated_offsets() {
    let table = reference_table();
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let labels: Vec<(&str, f64)> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text { text, x, y, .. } if *y == 0.0 => Some((text.as_str(), *x)),
            _ => None,
        })
        .collect();
    let columns = table.layout().columns();
    assert_eq!(labels.len(), columns.len());
    for ((label, x), col) in labels.iter().zip(columns) {
        assert_eq!(*label, col.label);
        assert_eq!(*x, col.x);
    }
}

#[test]
fn rows_are_offset_by_the_sub_row_remainder() {
    let mut table = reference_table();
    table.scroll_by(0.0, 45.0); // 1.5 rows: offset = 45 % 30 = 15
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let geo = *table.geometry();
    // First visible row's bottom border sits at header + row_height - 15.
    let first_row_border = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::StrokeEdge {
                y,
                height,
                edge: Edge::Bottom,
                ..
            } if *height == geo.row_height => Some(*y),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_row_border, geo.header_height - 15.0);

    // Cell text rides the same offset.
    let first_cell_y = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Text { text, y, .. } if text.starts_with("row ") => Some(*y),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_cell_y, geo.header_height - 15.0);
}

#[test]
fn row_boundary_scroll_paints_with_zero_offset() {
    let mut table = reference_table();
    table.scroll_by(0.0, 90.0); // exactly 3 rows: remainder 0
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let geo = *table.geometry();
    let first_cell_y = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Text { text, y, .. } if text.starts_with("row ") => Some(*y),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_cell_y, geo.header_height);
}

#[test]
fn body_draws_one_separator_per_materialized_row() {
    let table = reference_table();
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let geo = *table.geometry();
    let (start, end) = table.window_range();
    let materialized = (end + 1).min(1000) - start;
    let row_separators = surface
        .ops
        .iter()
        .filter(|op| {
            matches!(op, Op::StrokeEdge { height, edge: Edge::Bottom, .. }
                if *height == geo.row_height)
        })
        .count();
    assert_eq!(row_separators, materialized);
}

#[test]
fn cell_text_comes_from_the_window_slice() {
    let mut table = reference_table();
    table.scroll_by(0.0, 90.0); // exactly 3 rows down
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let first_name = surface
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Text { text, .. } if text.starts_with("row ") => Some(text.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(first_name, "row 3");
}

#[test]
fn column_gridlines_span_full_table_height() {
    let table = reference_table();
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let geo = *table.geometry();
    let gridlines: Vec<&Op> = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::StrokeEdge { edge: Edge::Right, .. }))
        .collect();
    assert_eq!(gridlines.len(), table.layout().columns().len());
    for op in gridlines {
        if let Op::StrokeEdge { height, .. } = op {
            assert_eq!(*height, geo.height);
        }
    }
}

#[test]
fn empty_dataset_still_paints_the_header() {
    let table = CanvasTable::headless(config(0, 390.0, 40.0, 30.0), 800.0);
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    assert_eq!(surface.ops.first(), Some(&Op::Clear));
    assert!(surface
        .ops
        .iter()
        .any(|op| matches!(op, Op::FillRect { .. })));
    let body_text = surface
        .ops
        .iter()
        .any(|op| matches!(op, Op::Text { text, .. } if text.starts_with("row ")));
    assert!(!body_text);
    // Header labels are still there.
    assert_eq!(surface.texts().len(), 2);
}

#[test]
fn missing_row_keys_paint_empty_text() {
    let mut cfg = config(1, 390.0, 40.0, 30.0);
    cfg.data[0].remove("name");
    let table = CanvasTable::headless(cfg, 800.0);
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let empty_cells = surface
        .ops
        .iter()
        .filter(|op| matches!(op, Op::Text { text, y, .. } if text.is_empty() && *y > 0.0))
        .count();
    assert_eq!(empty_cells, 1);
}

#[test]
fn header_background_uses_the_header_override() {
    let table = reference_table();
    let mut surface = RecordingSurface::new();
    table.repaint(&mut surface);

    let fill = surface.ops.iter().find_map(|op| match op {
        Op::FillRect { color, height, .. } => Some((color.clone(), *height)),
        _ => None,
    });
    let (color, height) = fill.unwrap();
    assert_eq!(color, "#f8f8f9");
    assert_eq!(height, table.geometry().header_height);
}
