//! Multi-cell shapes inserted by a single edit command, as (row, column)
//! offsets from the clicked cell.

use crate::Universe;

/// Glider heading towards +row, +column.
pub const GLIDER: [(i32, i32); 5] = [(-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)];
pub const GLIDER_CLEAR_RADIUS: i32 = 2;

pub const PULSAR_CLEAR_RADIUS: i32 = 6;

/// Period-3 pulsar centred on the origin (48 cells in a 13x13 box).
pub fn pulsar() -> Vec<(i32, i32)> {
    const NEAR: [i32; 4] = [-6, -1, 1, 6];
    const FAR: [i32; 6] = [-4, -3, -2, 2, 3, 4];

    let mut cells = Vec::with_capacity(48);
    for r in NEAR {
        for c in FAR {
            cells.push((r, c));
        }
    }
    for r in FAR {
        for c in NEAR {
            cells.push((r, c));
        }
    }
    cells
}

impl Universe {
    /// Clear the square of `clear_radius` around (row, column), then set
    /// `offsets`. Wraps at the edges.
    pub(crate) fn stamp(&mut self, row: u32, column: u32, clear_radius: i32, offsets: &[(i32, i32)]) {
        for dr in -clear_radius..=clear_radius {
            for dc in -clear_radius..=clear_radius {
                let idx = self.wrapped_index(row, dr, column, dc);
                self.cells.set(idx, false);
            }
        }
        for &(dr, dc) in offsets {
            let idx = self.wrapped_index(row, dr, column, dc);
            self.cells.insert(idx);
        }
    }
}
