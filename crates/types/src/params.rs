use crate::grid::GridSize;

/// Number of frame-rate samples kept for the rolling statistics.
pub const FRAME_WINDOW: usize = 100;

/// Upper bound on generations advanced per displayed frame.
pub const MAX_TICKS_PER_FRAME: u32 = 10_000;

/// Whether a new session starts animating or waits for the first play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialState {
    Running,
    Paused,
}

/// Render and animation settings for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams {
    pub cell_size: u32,   // px
    pub cell_border: u32, // px
    pub grid_color: &'static str,
    pub dead_color: &'static str,
    pub alive_color: &'static str,
    pub initial_state: InitialState,
    pub ticks_per_frame: u32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            cell_size: 10,
            cell_border: 2,
            grid_color: "#CCCCCC",
            dead_color: "#FFFFFF",
            alive_color: "#000000",
            initial_state: InitialState::Running,
            ticks_per_frame: 1,
        }
    }
}

/// Starting contents of a freshly built universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialPattern {
    Empty,
    /// Cells where `i % 2 == 0 || i % 7 == 0`.
    Checkered,
    /// A single glider in the middle of the grid.
    Glider,
    /// Roughly half the cells alive, from the given seed.
    Random(u64),
}

impl InitialPattern {
    /// Look up a pattern by its lowercase name. `seed` is used only by
    /// `"random"`.
    pub fn from_name(name: &str, seed: u64) -> Option<Self> {
        match name {
            "empty" => Some(Self::Empty),
            "checkered" => Some(Self::Checkered),
            "glider" => Some(Self::Glider),
            "random" => Some(Self::Random(seed)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniverseParams {
    pub size: GridSize,
    pub pattern: InitialPattern,
}

impl Default for UniverseParams {
    fn default() -> Self {
        Self {
            size: GridSize::new(64, 64),
            pattern: InitialPattern::Random(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_starts_running_at_one_tick() {
        let p = SessionParams::default();
        assert_eq!(p.initial_state, InitialState::Running);
        assert_eq!(p.ticks_per_frame, 1);
        assert!(p.cell_size > 0);
    }

    #[test]
    fn patterns_by_name() {
        assert_eq!(InitialPattern::from_name("empty", 9), Some(InitialPattern::Empty));
        assert_eq!(InitialPattern::from_name("checkered", 9), Some(InitialPattern::Checkered));
        assert_eq!(InitialPattern::from_name("glider", 9), Some(InitialPattern::Glider));
        assert_eq!(InitialPattern::from_name("random", 9), Some(InitialPattern::Random(9)));
        assert_eq!(InitialPattern::from_name("Glider", 9), None);
        assert_eq!(InitialPattern::from_name("", 9), None);
    }

    #[test]
    fn default_universe_is_64_square() {
        let p = UniverseParams::default();
        assert_eq!(p.size, GridSize::new(64, 64));
    }
}
