//! Canvas dimensions derived from layout and dataset size.

use super::ColumnLayout;

/// Pixel dimensions of the drawing surface plus the fixed band heights.
///
/// `header_height` and `row_height` are fixed for the component's lifetime;
/// `width`/`height` are recomputed when the container width or the dataset
/// changes.
#[derive(Debug, Clone, Copy)]
pub struct CanvasGeometry {
    /// Total canvas width.
    pub width: f64,
    /// Total canvas height (header + body).
    pub height: f64,
    /// Header band height.
    pub header_height: f64,
    /// Uniform row height.
    pub row_height: f64,
}

impl CanvasGeometry {
    /// Compute canvas dimensions.
    ///
    /// The body never reserves more vertical space than the dataset can
    /// fill: `height = min(declared_height, row_count * row_height)
    /// + header_height`.
    pub fn new(
        layout: &ColumnLayout,
        declared_height: f64,
        header_height: f64,
        row_height: f64,
        row_count: usize,
    ) -> Self {
        let content_height = row_count as f64 * row_height;
        let body_height = declared_height.min(content_height);
        Self {
            width: layout.canvas_width(),
            height: body_height + header_height,
            header_height,
            row_height,
        }
    }

    /// Height of the scrollable body band (below the header).
    pub fn body_height(&self) -> f64 {
        self.height - self.header_height
    }

    /// Number of rows that fit (fully or partially) in the body band.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn visible_row_count(&self) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        (self.body_height() / self.row_height).ceil().max(0.0) as usize
    }
}
