use types::neighbor_offsets;

use crate::Universe;

impl Universe {
    /// One B3/S23 generation. The next state is written into the scratch
    /// buffer and the two are swapped, so the live buffer moves every step.
    pub(crate) fn step(&mut self) {
        let size = self.size;

        for row in 0..size.height {
            for column in 0..size.width {
                let idx = size.index(row, column);
                let alive = self.cells[idx];
                let neighbors = self.live_neighbor_count(row, column);

                let next = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                self.scratch.set(idx, next);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }

    fn live_neighbor_count(&self, row: u32, column: u32) -> u8 {
        neighbor_offsets()
            .iter()
            .filter(|&&(dr, dc)| self.cells[self.wrapped_index(row, dr, column, dc)])
            .count() as u8
    }
}
