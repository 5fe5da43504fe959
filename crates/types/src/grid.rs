/// Grid dimensions in cells. Both sides are non-zero and fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Bytes needed to hold one bit per cell.
    #[inline]
    pub fn packed_len(&self) -> usize {
        self.cell_count().div_ceil(8)
    }

    #[inline]
    pub fn contains(&self, row: u32, column: u32) -> bool {
        row < self.height && column < self.width
    }

    #[inline]
    pub fn index(&self, row: u32, column: u32) -> usize {
        grid_index(row, column, self.width)
    }
}

/// Convert (row, column) to a linear buffer index.
/// Formula: row * width + column
#[inline]
pub fn grid_index(row: u32, column: u32, width: u32) -> usize {
    row as usize * width as usize + column as usize
}

/// Moore neighbourhood: the 8 cells surrounding a cell, as (row, column) deltas.
#[inline]
pub fn neighbor_offsets() -> [(i32, i32); 8] {
    [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ]
}
