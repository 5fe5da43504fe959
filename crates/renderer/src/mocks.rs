//! Recording draw surface for tests.

#![cfg(any(test, feature = "mocks"))]

use crate::layout::CellRect;
use crate::DrawSurface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Stroke { style: String, width: f64 },
    FillRect { rect: CellRect, style: String },
}

/// Remembers every call, plus enough state to answer "what colour is this
/// pixel" for filled rectangles.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    stroke_style: String,
    fill_style: String,
    line_width: f64,
    style_changes: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self { line_width: 1.0, ..Default::default() }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of fill-style switches seen.
    pub fn style_changes(&self) -> usize {
        self.style_changes
    }

    pub fn fills(&self) -> impl Iterator<Item = (&CellRect, &str)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::FillRect { rect, style } => Some((rect, style.as_str())),
            _ => None,
        })
    }

    pub fn strokes(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Stroke { .. })).count()
    }

    pub fn line_segments(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::LineTo(..))).count()
    }

    /// Colour of the last rectangle filled over (x, y), if any.
    pub fn fill_at(&self, x: f64, y: f64) -> Option<&str> {
        self.fills()
            .filter(|(rect, _)| rect.contains(x, y))
            .last()
            .map(|(_, style)| style)
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo(x, y));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.stroke_style = style.to_string();
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke {
            style: self.stroke_style.clone(),
            width: self.line_width,
        });
    }

    fn set_fill_style(&mut self, style: &str) {
        if self.fill_style != style {
            self.style_changes += 1;
        }
        self.fill_style = style.to_string();
    }

    fn fill_rect(&mut self, rect: CellRect) {
        self.calls.push(DrawCall::FillRect {
            rect,
            style: self.fill_style.clone(),
        });
    }
}
