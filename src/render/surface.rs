//! Drawing-surface capability trait.
//!
//! The pipeline paints through these primitives only, so the browser canvas
//! and a recording test surface are interchangeable.

use super::RegionStyle;

/// One edge of a bordered rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Primitive drawing operations the render pipeline needs.
///
/// Invalidation is an explicit `clear()` capability: the surface has no
/// back-buffer or diffing, so every repaint starts from a blank surface.
pub trait DrawSurface {
    /// Set the surface's pixel dimensions.
    fn resize(&mut self, width: f64, height: f64);

    /// Invalidate all prior pixel contents.
    fn clear(&mut self);

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    /// Stroke one edge of the rectangle `(x, y, width, height)` using the
    /// style's border color for that edge.
    fn stroke_edge(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        edge: Edge,
        style: &RegionStyle,
    );

    /// Draw cell text inside the rectangle `(x, y, width, height)`,
    /// left-aligned and vertically centered.
    fn draw_cell_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: &RegionStyle,
    );
}
