use types::GridSize;

/// Pixel rectangle on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CellRect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Placement of cells on the canvas: square cells of `cell_size` px with a
/// `border` px gap between neighbours and around the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    pub grid: GridSize,
    pub cell_size: u32,
    pub border: u32,
}

impl CellLayout {
    pub fn new(grid: GridSize, cell_size: u32, border: u32) -> Self {
        Self { grid, cell_size, border }
    }

    /// Distance between the origins of adjacent cells.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.cell_size + self.border
    }

    /// Backing-store size needed to show every cell plus the outer border.
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.pitch() * self.grid.width + self.border,
            self.pitch() * self.grid.height + self.border,
        )
    }

    pub fn cell_pixel_rect(&self, row: u32, column: u32) -> CellRect {
        let pitch = self.pitch() as f64;
        let border = self.border as f64;
        CellRect {
            x: column as f64 * pitch + border,
            y: row as f64 * pitch + border,
            width: self.cell_size as f64,
            height: self.cell_size as f64,
        }
    }

    /// Centre of the i-th border gap along one axis, where grid line i is drawn.
    pub fn line_offset(&self, i: u32) -> f64 {
        i as f64 * self.pitch() as f64 + self.border as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CellLayout {
        CellLayout::new(GridSize::new(64, 32), 10, 2)
    }

    #[test]
    fn first_cell_sits_inside_outer_border() {
        let rect = layout().cell_pixel_rect(0, 0);
        assert_eq!(rect, CellRect { x: 2.0, y: 2.0, width: 10.0, height: 10.0 });
    }

    #[test]
    fn cells_advance_by_pitch() {
        let rect = layout().cell_pixel_rect(3, 5);
        assert_eq!(rect.x, 5.0 * 12.0 + 2.0);
        assert_eq!(rect.y, 3.0 * 12.0 + 2.0);
    }

    #[test]
    fn adjacent_cells_leave_border_gap() {
        let l = layout();
        let a = l.cell_pixel_rect(0, 0);
        let b = l.cell_pixel_rect(0, 1);
        assert_eq!(b.x - (a.x + a.width), 2.0);
    }

    #[test]
    fn canvas_fits_last_cell_and_trailing_border() {
        let l = layout();
        let (w, h) = l.canvas_size();
        assert_eq!((w, h), (12 * 64 + 2, 12 * 32 + 2));
        let last = l.cell_pixel_rect(31, 63);
        assert_eq!(last.x + last.width + 2.0, w as f64);
        assert_eq!(last.y + last.height + 2.0, h as f64);
    }

    #[test]
    fn grid_lines_run_through_border_gaps() {
        let l = layout();
        assert_eq!(l.line_offset(0), 1.0);
        assert_eq!(l.line_offset(1), 13.0);
        let rect = l.cell_pixel_rect(0, 0);
        assert!(!rect.contains(l.line_offset(1), rect.y));
    }
}
