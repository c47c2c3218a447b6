//! Viewport state management and row windowing.

use super::CanvasGeometry;

/// The contiguous row range eligible for drawing.
///
/// `end_index` is the exclusive end of the fully-accounted range; the
/// materialized slice extends one row past it (clamped to the dataset) so
/// the partially visible trailing row is never missing during sub-row
/// scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowWindow {
    pub start_index: usize,
    pub end_index: usize,
}

impl RowWindow {
    /// Exclusive upper bound of the materialized slice (window + one
    /// overscan row, clamped at the dataset end).
    pub fn slice_end(&self, row_count: usize) -> usize {
        (self.end_index + 1).min(row_count)
    }

    /// Number of rows the window materializes.
    pub fn len(&self, row_count: usize) -> usize {
        self.slice_end(row_count).saturating_sub(self.start_index)
    }
}

/// Vertical scroll state, always clamped to `[0, max_scroll_y]`.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    scroll_y: f64,
    max_scroll_y: f64,
}

impl Viewport {
    /// A viewport at offset zero with the given scroll bound.
    pub fn new(max_scroll_y: f64) -> Self {
        Self {
            scroll_y: 0.0,
            max_scroll_y: max_scroll_y.max(0.0),
        }
    }

    /// Current scroll offset.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Upper scroll clamp.
    pub fn max_scroll_y(&self) -> f64 {
        self.max_scroll_y
    }

    /// Replace the scroll bound (layout or dataset changed) and re-clamp the
    /// current offset against it.
    pub fn set_max_scroll_y(&mut self, max_scroll_y: f64) {
        self.max_scroll_y = max_scroll_y.max(0.0);
        self.scroll_y = self.scroll_y.clamp(0.0, self.max_scroll_y);
    }

    /// Set an absolute scroll offset, clamped.
    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.clamp(0.0, self.max_scroll_y);
    }

    /// Apply a scroll delta, clamped. Returns the offset actually applied.
    pub fn scroll_by(&mut self, delta_y: f64) -> f64 {
        let prev = self.scroll_y;
        self.set_scroll_y(prev + delta_y);
        self.scroll_y - prev
    }

    /// Map the current scroll offset to the row range needing paint.
    ///
    /// `start = floor(scroll_y / row_height)`;
    /// `end = min(start + visible_row_count, row_count)`. The number of rows
    /// materialized (window + one overscan row) is bounded by
    /// `visible_row_count + 1` regardless of dataset size.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn window(&self, geometry: &CanvasGeometry, row_count: usize) -> RowWindow {
        let start_index = if geometry.row_height > 0.0 {
            ((self.scroll_y / geometry.row_height).floor() as usize).min(row_count)
        } else {
            0
        };
        let end_index = (start_index + geometry.visible_row_count()).min(row_count);
        RowWindow {
            start_index,
            end_index,
        }
    }

    /// Sub-row pixel remainder (`scroll_y mod row_height`) applied to every
    /// row's draw position so scrolling is pixel-smooth rather than
    /// row-quantized.
    pub fn sub_row_offset(&self, row_height: f64) -> f64 {
        if row_height > 0.0 {
            self.scroll_y % row_height
        } else {
            0.0
        }
    }
}
