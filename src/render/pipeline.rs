//! Frame painting.
//!
//! Every size or scroll change repaints the whole surface: full clear, then
//! the body (outer borders, row separators, column gridlines, cell text),
//! then the header band. The header goes last and is fully opaque so fast
//! scrolling never bleeds body pixels through it.

use crate::layout::{CanvasGeometry, ColumnLayout, RowWindow};
use crate::types::Row;

use super::{DrawSurface, Edge, Theme};

/// Everything one repaint needs, borrowed from the owner.
pub struct Frame<'a> {
    pub layout: &'a ColumnLayout,
    pub geometry: &'a CanvasGeometry,
    pub window: &'a RowWindow,
    /// The full dataset; the pipeline only touches the window's slice.
    pub rows: &'a [Row],
    /// Sub-row pixel remainder from [`Viewport::sub_row_offset`], applied to
    /// every row's draw position.
    ///
    /// [`Viewport::sub_row_offset`]: crate::layout::Viewport::sub_row_offset
    pub sub_row_offset: f64,
    pub theme: &'a Theme,
}

impl Frame<'_> {
    /// The materialized slice: window rows plus one overscan row.
    fn visible_rows(&self) -> &[Row] {
        let end = self.window.slice_end(self.rows.len());
        self.rows
            .get(self.window.start_index..end)
            .unwrap_or_default()
    }
}

/// Repaint the frame. Idempotent: unchanged state paints identical output.
pub fn paint(surface: &mut dyn DrawSurface, frame: &Frame) {
    surface.clear();
    paint_body(surface, frame);
    paint_header(surface, frame);
}

fn paint_body(surface: &mut dyn DrawSurface, frame: &Frame) {
    let style = frame.theme.body_style();
    let geo = frame.geometry;
    let row_height = geo.row_height;
    let offset = frame.sub_row_offset;
    let visible = frame.visible_rows();

    // Outer bottom and left borders span the full table.
    surface.stroke_edge(0.0, 0.0, geo.width, geo.height, Edge::Bottom, style);
    surface.stroke_edge(0.0, 0.0, geo.width, geo.height, Edge::Left, style);

    // One bottom separator per visible row, shifted up by the sub-row
    // remainder so rows glide instead of snapping.
    for i in 0..visible.len() {
        let y = geo.header_height + row_height * i as f64 - offset;
        surface.stroke_edge(0.0, y, geo.width, row_height, Edge::Bottom, style);
    }

    // Column gridlines at full table height.
    for col in frame.layout.columns() {
        surface.stroke_edge(col.x, 0.0, col.width, geo.height, Edge::Right, style);
    }

    for (i, row) in visible.iter().enumerate() {
        let y = geo.header_height + row_height * i as f64 - offset;
        for col in frame.layout.columns() {
            let text = row.get(&col.key).map(|v| v.as_text()).unwrap_or_default();
            surface.draw_cell_text(&text, col.x, y, col.width, row_height, style);
        }
    }
}

fn paint_header(surface: &mut dyn DrawSurface, frame: &Frame) {
    let style = frame.theme.header_style();
    let geo = frame.geometry;

    surface.fill_rect(
        0.0,
        0.0,
        geo.width,
        geo.header_height,
        &style.background_color,
    );
    surface.stroke_edge(0.0, 0.0, geo.width, geo.header_height, Edge::Top, &style);
    surface.stroke_edge(0.0, 0.0, geo.width, geo.header_height, Edge::Bottom, &style);

    for col in frame.layout.columns() {
        surface.draw_cell_text(&col.label, col.x, 0.0, col.width, geo.header_height, &style);
    }
}
