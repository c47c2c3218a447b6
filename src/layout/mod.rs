//! Geometry computation: column widths, canvas sizing, viewport windowing,
//! and scrollbar math.

mod columns;
mod geometry;
mod scrollbar;
mod viewport;

pub use columns::{ColumnLayout, ResolvedColumn, MIN_BODY_WIDTH};
pub use geometry::CanvasGeometry;
pub use scrollbar::ScrollbarGeometry;
pub use viewport::{RowWindow, Viewport};
