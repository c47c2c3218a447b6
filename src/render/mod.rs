//! Painting: the drawing-surface capability trait, the theme register, the
//! frame pipeline, and the Canvas 2D surface backing it in the browser.

pub mod pipeline;
pub mod surface;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use pipeline::{paint, Frame};
pub use surface::{DrawSurface, Edge};
pub use theme::{RegionStyle, StyleOverride, Theme};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
