pub mod grid;
pub mod bits;
pub mod commands;
pub mod params;

pub use grid::*;
pub use bits::*;
pub use commands::*;
pub use params::*;
