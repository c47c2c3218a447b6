//! canvas-table - virtualized table renderer for the web
//!
//! Renders large tabular datasets onto a single Canvas 2D surface via
//! WebAssembly, painting only the rows scrolled into view:
//! - Fixed and flexible column widths with last-column snap
//! - Viewport windowing bounded by the visible row count, independent of
//!   dataset size
//! - A synchronized proportional scrollbar thumb
//! - Full header + body repaint on every scroll or resize
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { CanvasTable } from 'canvas-table';
//! await init();
//! const table = new CanvasTable(canvas, thumb, config, containerWidth);
//! table.scroll_by(0, 120);
//! ```

pub mod error;
pub mod layout;
pub mod render;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main viewer struct
pub use viewer::CanvasTable;

pub use types::*;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
