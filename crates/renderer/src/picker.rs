use glam::Vec2;

use crate::layout::CellLayout;

/// On-screen box of the canvas element, in CSS pixels (as from
/// `getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl CanvasRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }
}

/// Resolves pointer positions to grid cells.
pub struct CellPicker {
    layout: CellLayout,
}

impl CellPicker {
    pub fn new(layout: CellLayout) -> Self {
        Self { layout }
    }

    /// Map a client-space pointer position to (row, column).
    ///
    /// `backing` is the canvas' pixel size; the pointer is rescaled from the
    /// displayed size first so CSS scaling does not skew the result. Always
    /// returns an in-grid cell: anything past the far edge lands on the last
    /// row/column, anything before the origin on the first.
    pub fn pixel_to_cell(&self, pointer: Vec2, rect: CanvasRect, backing: Vec2) -> (u32, u32) {
        let scale = Vec2::new(axis_scale(backing.x, rect.size.x), axis_scale(backing.y, rect.size.y));
        let local = (pointer - rect.origin) * scale;
        let cell = (local / self.layout.pitch() as f32).floor();

        let grid = self.layout.grid;
        (clamp_axis(cell.y, grid.height), clamp_axis(cell.x, grid.width))
    }
}

fn axis_scale(backing: f32, displayed: f32) -> f32 {
    if displayed > 0.0 && backing > 0.0 {
        backing / displayed
    } else {
        1.0
    }
}

// NaN and negatives fall through to 0.
fn clamp_axis(v: f32, len: u32) -> u32 {
    if v > 0.0 {
        (v as u32).min(len - 1)
    } else {
        0
    }
}
