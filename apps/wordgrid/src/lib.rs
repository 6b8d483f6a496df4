//! Word search grid generation.
//!
//! Hides a list of words in a square letter grid along rows, columns and
//! down-right diagonals (forward or backward), then pads the rest with random
//! uppercase letters. Transport, wiring and printing belong to the caller.
//!
//! ```
//! use rand::SeedableRng;
//! use wordgrid::GridBuilder;
//!
//! let mut builder = GridBuilder::new(rand::rngs::StdRng::seed_from_u64(7));
//! let grid = builder.build(5, &["CAT", "DOG"]).unwrap();
//! assert!(grid.is_complete());
//! assert!(!grid.find_word("CAT").is_empty());
//! ```

pub mod config;
pub mod errors;
pub mod grid;
pub mod telemetry;

pub use config::Config;
pub use errors::GridError;
pub use grid::{BuildReport, Coordinate, Direction, Grid, GridBuilder, GridRequest, Placement};

/// Builds a grid with the thread-local RNG and default limits.
pub fn build_grid<S: AsRef<str>>(grid_size: usize, words: &[S]) -> Result<Grid, GridError> {
    GridBuilder::new(rand::thread_rng()).build(grid_size, words)
}
