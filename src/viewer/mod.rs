//! Main `CanvasTable` struct - the entry point for the Canvas 2D table.
//!
//! Construction runs the full first layout and paint: column resolution →
//! canvas sizing → scrollbar thumb geometry → initial row window → frame
//! paint, then registers the wheel listener. Every scroll or resize after
//! that re-windows and repaints synchronously; there are no background
//! tasks, and all state is mutated from a single logical owner.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod events;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlCanvasElement, HtmlElement, WheelEvent};

#[cfg(target_arch = "wasm32")]
use crate::error::TableError;
use crate::layout::{CanvasGeometry, ColumnLayout, RowWindow, ScrollbarGeometry, Viewport};
use crate::render::{paint, DrawSurface, Frame};
use crate::types::{Row, TableConfig};

#[cfg(target_arch = "wasm32")]
use crate::render::CanvasSurface;

use input::{classify_wheel, WheelAction};

/// All derived table state, owned by the viewer.
///
/// Target-independent so layout, windowing, and the paint op stream are
/// testable natively.
pub(crate) struct TableState {
    config: TableConfig,
    layout: ColumnLayout,
    geometry: CanvasGeometry,
    scrollbar: ScrollbarGeometry,
    viewport: Viewport,
    window: RowWindow,
}

impl TableState {
    fn new(config: TableConfig, container_width: f64) -> Self {
        let layout = ColumnLayout::resolve(container_width, &config.columns);
        let geometry = CanvasGeometry::new(
            &layout,
            config.height,
            config.header_height,
            config.row_height,
            config.row_count(),
        );
        let scrollbar = ScrollbarGeometry::compute(&geometry, config.row_count());
        let viewport = Viewport::new(scrollbar.max_scroll_y);
        let window = viewport.window(&geometry, config.row_count());
        Self {
            config,
            layout,
            geometry,
            scrollbar,
            viewport,
            window,
        }
    }

    /// Recompute everything derived from the container width and dataset,
    /// preserving (and re-clamping) the scroll offset.
    fn relayout(&mut self, container_width: f64) {
        self.layout = ColumnLayout::resolve(container_width, &self.config.columns);
        self.geometry = CanvasGeometry::new(
            &self.layout,
            self.config.height,
            self.config.header_height,
            self.config.row_height,
            self.config.row_count(),
        );
        self.scrollbar = ScrollbarGeometry::compute(&self.geometry, self.config.row_count());
        self.viewport.set_max_scroll_y(self.scrollbar.max_scroll_y);
        self.window = self.viewport.window(&self.geometry, self.config.row_count());
    }

    fn replace_data(&mut self, data: Vec<Row>, container_width: f64) {
        self.config.data = data;
        self.relayout(container_width);
    }

    /// Apply a wheel delta. Returns `true` when the offset moved (i.e. the
    /// default host action must be suppressed and a repaint is due).
    fn apply_wheel(&mut self, delta_x: f64, delta_y: f64) -> bool {
        match classify_wheel(
            delta_x,
            delta_y,
            self.viewport.scroll_y(),
            self.viewport.max_scroll_y(),
        ) {
            WheelAction::Ignore => false,
            WheelAction::Scroll { scroll_y } => {
                self.viewport.set_scroll_y(scroll_y);
                self.window = self.viewport.window(&self.geometry, self.config.row_count());
                true
            }
        }
    }

    fn repaint(&self, surface: &mut dyn DrawSurface) {
        let frame = Frame {
            layout: &self.layout,
            geometry: &self.geometry,
            window: &self.window,
            rows: &self.config.data,
            sub_row_offset: self.viewport.sub_row_offset(self.geometry.row_height),
            theme: &self.config.theme,
        };
        paint(surface, &frame);
    }

    fn thumb_top(&self) -> f64 {
        self.scrollbar.thumb_top(self.viewport.scroll_y())
    }
}

/// Shared state reachable from event closures (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) table: TableState,
    pub(crate) surface: CanvasSurface,
    pub(crate) thumb: HtmlElement,
    pub(crate) container_width: f64,
}

#[cfg(target_arch = "wasm32")]
impl SharedState {
    /// Sync the scrollbar thumb element's height to the current geometry.
    pub(crate) fn sync_thumb_size(&self) {
        let style = self.thumb.style();
        let _ = style.set_property("height", &format!("{}px", self.table.scrollbar.thumb_height));
    }

    /// Sync the thumb element's top position to the current scroll offset.
    pub(crate) fn sync_thumb_position(&self) {
        let style = self.thumb.style();
        let _ = style.set_property("top", &format!("{}px", self.table.thumb_top()));
    }

    /// Size the canvas to the current geometry and repaint the frame.
    pub(crate) fn resize_and_repaint(&mut self) {
        self.surface
            .resize(self.table.geometry.width, self.table.geometry.height);
        self.table.repaint(&mut self.surface);
    }
}

/// The virtualized table viewer exported to JavaScript.
#[wasm_bindgen]
pub struct CanvasTable {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Kept alive for the lifetime of the listener.
    wheel_closure: Closure<dyn FnMut(WheelEvent)>,

    #[cfg(not(target_arch = "wasm32"))]
    state: TableState,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl CanvasTable {
    /// Create the viewer, run the first layout, paint the first frame, and
    /// register the wheel listener (`passive: false` so the default action
    /// can be suppressed when the table consumes the scroll).
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        scrollbar_thumb: HtmlElement,
        config: JsValue,
        container_width: f64,
    ) -> Result<CanvasTable, JsValue> {
        console_error_panic_hook::set_once();

        let config: TableConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| TableError::Config(e.to_string()))?;

        let table = TableState::new(config, container_width);
        let surface = CanvasSurface::new(canvas.clone())?;

        let state = Rc::new(RefCell::new(SharedState {
            table,
            surface,
            thumb: scrollbar_thumb,
            container_width,
        }));

        {
            let mut s = state.borrow_mut();
            s.sync_thumb_size();
            s.sync_thumb_position();
            s.resize_and_repaint();
        }

        let wheel_closure = events::attach_wheel(&canvas, &state)?;

        Ok(CanvasTable {
            state,
            wheel_closure,
        })
    }

    /// Programmatic scroll with the same classification and clamping as a
    /// wheel event.
    pub fn scroll_by(&self, delta_x: f64, delta_y: f64) {
        let mut s = self.state.borrow_mut();
        let s = &mut *s;
        if s.table.apply_wheel(delta_x, delta_y) {
            s.table.repaint(&mut s.surface);
            s.sync_thumb_position();
        }
    }

    /// Recompute column layout and canvas geometry for a new container
    /// width, re-clamp the scroll offset, and repaint.
    pub fn resize(&self, container_width: f64) {
        let mut s = self.state.borrow_mut();
        s.container_width = container_width;
        s.table.relayout(container_width);
        s.sync_thumb_size();
        s.sync_thumb_position();
        s.resize_and_repaint();
    }

    /// Replace the dataset, recompute scroll bounds, and repaint.
    pub fn set_data(&self, data: JsValue) -> Result<(), JsValue> {
        let data: Vec<Row> = serde_wasm_bindgen::from_value(data)
            .map_err(|e| TableError::Config(e.to_string()))?;
        let mut s = self.state.borrow_mut();
        let container_width = s.container_width;
        s.table.replace_data(data, container_width);
        s.sync_thumb_size();
        s.sync_thumb_position();
        s.resize_and_repaint();
        Ok(())
    }

    /// Current scroll offset in pixels.
    pub fn scroll_top(&self) -> f64 {
        self.state.borrow().table.viewport.scroll_y()
    }

    /// First row index of the current window.
    #[allow(clippy::cast_possible_truncation)]
    pub fn window_start(&self) -> u32 {
        self.state.borrow().table.window.start_index as u32
    }

    /// Exclusive end row index of the current window.
    #[allow(clippy::cast_possible_truncation)]
    pub fn window_end(&self) -> u32 {
        self.state.borrow().table.window.end_index as u32
    }
}

// ============================================================================
// Native (headless) Implementation
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl CanvasTable {
    /// Construct the viewer without a browser: full layout, scrollbar, and
    /// window computation, painting on demand into any `DrawSurface`.
    pub fn headless(config: TableConfig, container_width: f64) -> Self {
        Self {
            state: TableState::new(config, container_width),
        }
    }

    /// Apply a wheel delta; returns `true` when the offset moved.
    pub fn scroll_by(&mut self, delta_x: f64, delta_y: f64) -> bool {
        self.state.apply_wheel(delta_x, delta_y)
    }

    /// Recompute layout for a new container width.
    pub fn resize(&mut self, container_width: f64) {
        self.state.relayout(container_width);
    }

    /// Replace the dataset, preserving the container width of the last
    /// layout.
    pub fn set_data(&mut self, data: Vec<Row>) {
        let container_width = self.state.layout.client_width();
        self.state.replace_data(data, container_width);
    }

    /// Paint the current frame into the given surface.
    pub fn repaint(&self, surface: &mut dyn DrawSurface) {
        self.state.repaint(surface);
    }

    /// Current scroll offset in pixels.
    pub fn scroll_top(&self) -> f64 {
        self.state.viewport.scroll_y()
    }

    /// Upper scroll clamp.
    pub fn max_scroll(&self) -> f64 {
        self.state.viewport.max_scroll_y()
    }

    /// Current row window as `(start_index, end_index)`.
    pub fn window_range(&self) -> (usize, usize) {
        (self.state.window.start_index, self.state.window.end_index)
    }

    /// Resolved column geometry.
    pub fn layout(&self) -> &ColumnLayout {
        &self.state.layout
    }

    /// Canvas geometry.
    pub fn geometry(&self) -> &CanvasGeometry {
        &self.state.geometry
    }

    /// Scrollbar thumb geometry.
    pub fn scrollbar(&self) -> &ScrollbarGeometry {
        &self.state.scrollbar
    }

    /// Thumb top position for the current scroll offset.
    pub fn thumb_top(&self) -> f64 {
        self.state.thumb_top()
    }
}
