//! Scrollbar thumb geometry.
//!
//! The thumb's size encodes the visible fraction of the dataset and its
//! position encodes scroll progress; `max_scroll_y` is derived here rather
//! than stored independently, and is recomputed only on layout changes.

use super::CanvasGeometry;

/// Proportional thumb geometry for the vertical scrollbar.
#[derive(Debug, Clone, Copy)]
pub struct ScrollbarGeometry {
    /// Thumb height in pixels (`ratio * body_height`).
    pub thumb_height: f64,
    /// Upper bound for the scroll offset (`(1 - ratio) * content_height`).
    pub max_scroll_y: f64,
    body_height: f64,
    total_content_height: f64,
}

impl ScrollbarGeometry {
    /// Compute thumb geometry from canvas geometry and dataset size.
    ///
    /// An empty dataset falls back to `body_height` as the content height,
    /// yielding a full-height, non-scrollable thumb instead of a division by
    /// zero. A dataset shorter than the viewport clamps the ratio at 1 for
    /// the same full-height result.
    pub fn compute(geometry: &CanvasGeometry, row_count: usize) -> Self {
        let body_height = geometry.body_height().max(0.0);
        let content_height = row_count as f64 * geometry.row_height;
        let total_content_height = if content_height > 0.0 {
            content_height
        } else {
            body_height
        };
        let ratio = if total_content_height > 0.0 {
            (body_height / total_content_height).min(1.0)
        } else {
            1.0
        };
        Self {
            thumb_height: ratio * body_height,
            max_scroll_y: (1.0 - ratio) * total_content_height,
            body_height,
            total_content_height,
        }
    }

    /// Thumb top position for a scroll offset, keeping thumb position and
    /// content position proportional.
    pub fn thumb_top(&self, scroll_y: f64) -> f64 {
        if self.total_content_height > 0.0 {
            scroll_y / self.total_content_height * self.body_height
        } else {
            0.0
        }
    }
}
