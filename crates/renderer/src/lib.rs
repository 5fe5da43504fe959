pub mod layout;
pub mod picker;
pub mod mocks;

pub use layout::{CellLayout, CellRect};
pub use picker::{CanvasRect, CellPicker};

use types::{CellView, SessionParams};

/// The subset of a 2-D canvas context the renderer draws with.
pub trait DrawSurface {
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, style: &str);
    fn fill_rect(&mut self, rect: CellRect);
}

pub struct Renderer {
    layout: CellLayout,
    grid_color: &'static str,
    alive_color: &'static str,
    dead_color: &'static str,
}

impl Renderer {
    pub fn new(layout: CellLayout, params: &SessionParams) -> Self {
        Self {
            layout,
            grid_color: params.grid_color,
            alive_color: params.alive_color,
            dead_color: params.dead_color,
        }
    }

    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// Draw grid lines, then every cell.
    pub fn render_frame<S: DrawSurface>(&self, surface: &mut S, cells: &CellView<'_>) {
        debug_assert_eq!(cells.size(), self.layout.grid, "cell view does not match layout");
        self.draw_grid(surface);
        self.draw_cells(surface, cells);
    }

    /// All grid lines go into one path and are stroked once.
    pub fn draw_grid<S: DrawSurface>(&self, surface: &mut S) {
        if self.layout.border == 0 {
            return;
        }
        let grid = self.layout.grid;
        let (canvas_w, canvas_h) = self.layout.canvas_size();

        surface.begin_path();
        surface.set_stroke_style(self.grid_color);
        surface.set_line_width(self.layout.border as f64);

        // Vertical lines
        for i in 0..=grid.width {
            let x = self.layout.line_offset(i);
            surface.move_to(x, 0.0);
            surface.line_to(x, canvas_h as f64);
        }

        // Horizontal lines
        for j in 0..=grid.height {
            let y = self.layout.line_offset(j);
            surface.move_to(0.0, y);
            surface.line_to(canvas_w as f64, y);
        }

        surface.stroke();
    }

    /// Alive cells first, then dead ones. Each sweep skips the other colour,
    /// so every cell is filled exactly once and only two style switches happen.
    pub fn draw_cells<S: DrawSurface>(&self, surface: &mut S, cells: &CellView<'_>) {
        self.fill_cells(surface, cells, true, self.alive_color);
        self.fill_cells(surface, cells, false, self.dead_color);
    }

    fn fill_cells<S: DrawSurface>(&self, surface: &mut S, cells: &CellView<'_>, alive: bool, color: &str) {
        let grid = self.layout.grid;
        surface.set_fill_style(color);
        for row in 0..grid.height {
            for column in 0..grid.width {
                if cells.is_alive(grid.index(row, column)) == alive {
                    surface.fill_rect(self.layout.cell_pixel_rect(row, column));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocks::{DrawCall, RecordingSurface};
    use types::GridSize;

    fn renderer(width: u32, height: u32) -> Renderer {
        let params = SessionParams::default();
        let layout = CellLayout::new(GridSize::new(width, height), params.cell_size, params.cell_border);
        Renderer::new(layout, &params)
    }

    #[test]
    fn grid_is_one_batched_stroke() {
        let r = renderer(4, 2);
        let mut surface = RecordingSurface::new();
        r.draw_grid(&mut surface);

        assert_eq!(surface.calls()[0], DrawCall::BeginPath);
        assert_eq!(surface.strokes(), 1);
        assert_eq!(surface.line_segments(), (4 + 1) + (2 + 1));
        assert_eq!(
            surface.calls().last(),
            Some(&DrawCall::Stroke { style: "#CCCCCC".into(), width: 2.0 })
        );
    }

    #[test]
    fn grid_lines_span_full_canvas() {
        let r = renderer(4, 2);
        let mut surface = RecordingSurface::new();
        r.draw_grid(&mut surface);
        let (w, h) = r.layout().canvas_size();
        assert!(surface.calls().contains(&DrawCall::LineTo(1.0, h as f64)));
        assert!(surface.calls().contains(&DrawCall::LineTo(w as f64, 1.0)));
    }

    #[test]
    fn paints_alive_and_dead_cells() {
        let r = renderer(4, 2);
        let bytes = [0b0000_0110u8];
        let view = CellView::new(&bytes, GridSize::new(4, 2));
        let mut surface = RecordingSurface::new();
        r.render_frame(&mut surface, &view);

        assert_eq!(surface.fills().count(), 8);
        for row in 0..2 {
            for column in 0..4 {
                let rect = r.layout().cell_pixel_rect(row, column);
                let expected = if row == 0 && (column == 1 || column == 2) { "#000000" } else { "#FFFFFF" };
                assert_eq!(surface.fill_at(rect.x + 1.0, rect.y + 1.0), Some(expected), "cell ({row},{column})");
            }
        }
    }

    #[test]
    fn grouped_sweeps_switch_style_twice() {
        let r = renderer(8, 8);
        let bytes = [0b1010_1010u8; 8];
        let view = CellView::new(&bytes, GridSize::new(8, 8));
        let mut surface = RecordingSurface::new();
        r.draw_cells(&mut surface, &view);
        assert_eq!(surface.style_changes(), 2);
    }

    #[test]
    fn grouped_output_matches_per_cell_sweep() {
        let r = renderer(8, 4);
        let size = GridSize::new(8, 4);
        let bytes = [0b0011_1001u8, 0xFF, 0x00, 0b1000_0001];
        let view = CellView::new(&bytes, size);

        let mut grouped = RecordingSurface::new();
        r.draw_cells(&mut grouped, &view);

        let mut naive = RecordingSurface::new();
        for row in 0..size.height {
            for column in 0..size.width {
                naive.set_fill_style(if view.is_alive_at(row, column) { "#000000" } else { "#FFFFFF" });
                naive.fill_rect(r.layout().cell_pixel_rect(row, column));
            }
        }

        for row in 0..size.height {
            for column in 0..size.width {
                let rect = r.layout().cell_pixel_rect(row, column);
                let (x, y) = (rect.x + 5.0, rect.y + 5.0);
                assert_eq!(grouped.fill_at(x, y), naive.fill_at(x, y));
            }
        }
    }
}
