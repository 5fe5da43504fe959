use glam::Vec2;
use renderer::{CanvasRect, CellRect, DrawSurface};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::HostError;

/// A `<canvas>` element and its 2d context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, HostError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| HostError::MissingElement(id.to_string()))?;
        let canvas: HtmlCanvasElement = canvas
            .dyn_into()
            .map_err(|_| HostError::NotACanvas(id.to_string()))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or(HostError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::NoContext)?;

        Ok(Self { canvas, ctx })
    }

    /// Set the backing-store size. Clears the canvas.
    pub fn resize(&self, (width, height): (u32, u32)) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Where the element sits on screen, in CSS pixels.
    pub fn bounding_rect(&self) -> CanvasRect {
        let r = self.canvas.get_bounding_client_rect();
        CanvasRect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }

    pub fn backing_size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

impl DrawSurface for CanvasSurface {
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn fill_rect(&mut self, rect: CellRect) {
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}
