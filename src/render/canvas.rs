//! Canvas 2D drawing surface.
//!
//! Implements the `DrawSurface` trait over the HTML canvas via web-sys.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{Result, TableError};

use super::{DrawSurface, Edge, RegionStyle};

/// Horizontal inset for cell text.
const CELL_PADDING: f64 = 4.0;

/// The browser canvas and its 2d context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Wrap an `HtmlCanvasElement`, acquiring its 2d context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| TableError::Surface("Failed to get 2d context".to_string()))?
            .ok_or_else(|| TableError::Surface("No 2d context available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| {
                TableError::Surface("Failed to cast to CanvasRenderingContext2d".to_string())
            })?;

        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());

        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    /// Crisp pixel position for 1px lines.
    fn crisp(x: f64) -> f64 {
        x.floor() + 0.5
    }

    fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(1.0);
        self.ctx.move_to(Self::crisp(x1), Self::crisp(y1));
        self.ctx.line_to(Self::crisp(x2), Self::crisp(y2));
        self.ctx.stroke();
    }
}

impl DrawSurface for CanvasSurface {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0).round() as u32);
        self.canvas.set_height(height.max(0.0).round() as u32);
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_edge(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        edge: Edge,
        style: &RegionStyle,
    ) {
        let color = style.border_color(edge);
        match edge {
            Edge::Top => self.stroke_line(x, y, x + width, y, color),
            Edge::Bottom => self.stroke_line(x, y + height, x + width, y + height, color),
            Edge::Left => self.stroke_line(x, y, x, y + height, color),
            Edge::Right => self.stroke_line(x + width, y, x + width, y + height, color),
        }
    }

    fn draw_cell_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: &RegionStyle,
    ) {
        if text.is_empty() || width <= 0.0 {
            return;
        }
        self.ctx.set_font(&style.font);
        self.ctx.set_fill_style_str(&style.text_color);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("middle");
        let max_width = (width - 2.0 * CELL_PADDING).max(0.0);
        let _ = self
            .ctx
            .fill_text_with_max_width(text, x + CELL_PADDING, y + height / 2.0, max_width);
    }
}
