pub mod tick;
pub mod patterns;

use fixedbitset::FixedBitSet;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use types::{CellView, EditCommand, EditIntent, GridSize, InitialPattern, UniverseParams};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
}

/// Everything the render controller needs from a simulation.
///
/// Mutations are fire-and-forget. Coordinates outside the grid are the
/// engine's business (the Life engine wraps them).
pub trait SimulationEngine {
    fn size(&self) -> GridSize;

    /// Advance one generation.
    fn advance(&mut self);

    /// Current state. The view borrows the engine and ends at the next mutation.
    fn cells(&self) -> CellView<'_>;

    fn toggle_cell(&mut self, row: u32, column: u32);
    fn insert_glider(&mut self, row: u32, column: u32);
    fn insert_pulsar(&mut self, row: u32, column: u32);
    fn reset(&mut self);

    fn apply(&mut self, command: EditCommand) {
        match command.intent {
            EditIntent::Toggle => self.toggle_cell(command.row, command.column),
            EditIntent::InsertPatternA => self.insert_glider(command.row, command.column),
            EditIntent::InsertPatternB => self.insert_pulsar(command.row, command.column),
        }
    }
}

/// Toroidal B3/S23 universe, one bit per cell.
///
/// Bit `n` of the set is cell `n` in row-major order. The set's blocks are
/// little-endian words on the targets we build for (wasm32, x86_64,
/// aarch64), so their bytes are already the LSB-first packed layout.
pub struct Universe {
    size: GridSize,
    cells: FixedBitSet,
    scratch: FixedBitSet,
    generation: u64,
    rng: SmallRng,
}

impl Universe {
    pub fn new(params: &UniverseParams) -> Result<Self, EngineError> {
        let size = params.size;
        if size.width == 0 || size.height == 0 {
            return Err(EngineError::EmptyGrid { width: size.width, height: size.height });
        }

        let seed = match params.pattern {
            InitialPattern::Random(seed) => seed,
            _ => 0,
        };
        let mut universe = Self {
            size,
            cells: FixedBitSet::with_capacity(size.cell_count()),
            scratch: FixedBitSet::with_capacity(size.cell_count()),
            generation: 0,
            rng: SmallRng::seed_from_u64(seed),
        };

        match params.pattern {
            InitialPattern::Empty => {}
            InitialPattern::Checkered => universe.fill_with(|i| i % 2 == 0 || i % 7 == 0),
            InitialPattern::Glider => universe.insert_glider(size.height / 2, size.width / 2),
            InitialPattern::Random(_) => universe.randomize(),
        }

        log::debug!(
            "universe {}x{} built from {:?}, {} live cells",
            size.width,
            size.height,
            params.pattern,
            universe.population()
        );
        Ok(universe)
    }

    pub fn empty(size: GridSize) -> Result<Self, EngineError> {
        Self::new(&UniverseParams { size, pattern: InitialPattern::Empty })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.count_ones(..)
    }

    pub fn set_cell(&mut self, row: u32, column: u32, alive: bool) {
        let idx = self.wrapped_index(row, 0, column, 0);
        self.cells.set(idx, alive);
    }

    fn fill_with(&mut self, f: impl FnMut(&usize) -> bool) {
        self.cells.clear();
        (0..self.cells.len()).filter(f).for_each(|i| self.cells.insert(i));
    }

    fn randomize(&mut self) {
        self.cells.clear();
        for i in 0..self.cells.len() {
            if self.rng.gen_bool(0.5) {
                self.cells.insert(i);
            }
        }
    }

    /// Linear index of (row + dr, column + dc), wrapping at the grid edges.
    fn wrapped_index(&self, row: u32, dr: i32, column: u32, dc: i32) -> usize {
        let height = self.size.height as i64;
        let width = self.size.width as i64;
        let r = (row as i64 + dr as i64).rem_euclid(height) as u32;
        let c = (column as i64 + dc as i64).rem_euclid(width) as u32;
        self.size.index(r, c)
    }
}

impl SimulationEngine for Universe {
    fn size(&self) -> GridSize {
        self.size
    }

    fn advance(&mut self) {
        self.step();
    }

    fn cells(&self) -> CellView<'_> {
        let bytes: &[u8] = bytemuck::cast_slice(self.cells.as_slice());
        CellView::new(&bytes[..self.size.packed_len()], self.size)
    }

    fn toggle_cell(&mut self, row: u32, column: u32) {
        let idx = self.wrapped_index(row, 0, column, 0);
        self.cells.toggle(idx);
    }

    fn insert_glider(&mut self, row: u32, column: u32) {
        self.stamp(row, column, patterns::GLIDER_CLEAR_RADIUS, &patterns::GLIDER);
    }

    fn insert_pulsar(&mut self, row: u32, column: u32) {
        self.stamp(row, column, patterns::PULSAR_CLEAR_RADIUS, &patterns::pulsar());
    }

    fn reset(&mut self) {
        self.randomize();
        self.generation = 0;
        log::info!("universe reset, {} live cells", self.population());
    }
}
