//! Column width allocation.
//!
//! Distributes the container width between columns with explicit widths and
//! flexible columns (no width, only a `min_width` floor). Flexible columns
//! share the leftover space proportionally to their floors, and the last
//! column absorbs whatever remains so proportional rounding never leaves a
//! gap at the right edge.

use crate::types::{ColumnSpec, Fixed};

/// Minimum scrollable remainder reserved beside pinned columns, in logical
/// pixels. The canvas never shrinks below the pinned width plus this.
pub const MIN_BODY_WIDTH: f64 = 200.0;

/// A column with fully resolved geometry.
#[derive(Debug, Clone)]
pub struct ResolvedColumn {
    /// Field identifier for row lookups.
    pub key: String,
    /// Header display text.
    pub label: String,
    /// Final width, always `>= 0`.
    pub width: f64,
    /// Accumulated x offset of all prior columns.
    pub x: f64,
    /// Pinned-edge marker carried over from the declaration.
    pub fixed: Fixed,
}

/// Immutable column geometry table.
///
/// Caller-supplied `ColumnSpec`s are never mutated; resolution produces this
/// table instead, and it is recomputed only on container resize or column
/// config replacement.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    columns: Vec<ResolvedColumn>,
    canvas_width: f64,
    content_width: f64,
    fixed_width: f64,
    client_width: f64,
}

impl ColumnLayout {
    /// Resolve declarative column intent against a container width.
    ///
    /// Allocation:
    /// 1. Sum explicit widths (`static_width`) and flexible floors
    ///    (`flex_width`).
    /// 2. `screen_left = client_width - static_width`; a negative value just
    ///    yields zero flexible allocation, it is not an error.
    /// 3. Each flexible column gets
    ///    `max(min_width, min_width / flex_width * screen_left)`; with no
    ///    flexible floors at all the share term is zero and the floor wins.
    /// 4. The last column snaps to the remaining client width when both
    ///    `screen_left` and `flex_width` are non-zero.
    /// 5. Canvas width = `max(min(client_width, Σ widths), fixed_width + 200)`.
    #[allow(clippy::float_cmp)]
    pub fn resolve(client_width: f64, specs: &[ColumnSpec]) -> Self {
        let static_width: f64 = specs.iter().filter_map(|c| c.width).sum();
        let flex_width: f64 = specs
            .iter()
            .filter(|c| c.is_flexible())
            .filter_map(|c| c.min_width)
            .sum();
        let screen_left = client_width - static_width;

        let mut columns = Vec::with_capacity(specs.len());
        let mut running = 0.0;
        let mut fixed_width = 0.0;

        for (i, spec) in specs.iter().enumerate() {
            let mut width = match spec.width {
                Some(w) => w,
                None => {
                    let floor = spec.min_width.unwrap_or(0.0);
                    let share = if flex_width != 0.0 {
                        floor / flex_width * screen_left
                    } else {
                        0.0
                    };
                    floor.max(share)
                }
            };
            // Last-column snap: consume the remaining client width exactly,
            // eliminating rounding gaps. Fires only once and only when there
            // is flexible space to distribute.
            if i + 1 == specs.len() && screen_left != 0.0 && flex_width != 0.0 {
                width = client_width - running;
            }
            let width = width.max(0.0);

            columns.push(ResolvedColumn {
                key: spec.key.clone(),
                label: spec.label.clone(),
                width,
                x: running,
                fixed: spec.fixed,
            });
            running += width;
            if spec.fixed != Fixed::None {
                fixed_width += width;
            }
        }

        let canvas_width = client_width
            .min(running)
            .max(fixed_width + MIN_BODY_WIDTH);

        Self {
            columns,
            canvas_width,
            content_width: running,
            fixed_width,
            client_width,
        }
    }

    /// Resolved columns in declaration order.
    pub fn columns(&self) -> &[ResolvedColumn] {
        &self.columns
    }

    /// Final canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Sum of all resolved column widths.
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Sum of widths of pinned (`fixed: left`/`right`) columns.
    pub fn fixed_width(&self) -> f64 {
        self.fixed_width
    }

    /// Container width the layout was resolved against.
    pub fn client_width(&self) -> f64 {
        self.client_width
    }
}
