//! Grid Builder — randomized word placement followed by a filler pass.
//!
//! # Algorithm
//! 1. Allocate a blank N×N grid and shuffle its N² coordinates once per build.
//! 2. For each word, in input order, walk the shuffled coordinates. At each
//!    coordinate try the six directions in a fresh random order and write the
//!    word at the first pair that fits.
//! 3. A word with no fitting pair is dropped. Placed words are never moved.
//! 4. Pad remaining blank cells with random letters.
//!
//! The builder owns its RNG, so a seeded generator reproduces a grid exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{Config, DEFAULT_MAX_GRID_SIZE};
use crate::errors::GridError;
use crate::grid::direction::Direction;
use crate::grid::filler::fill_blanks;
use crate::grid::fit::{fits, write_word};
use crate::grid::model::{Coordinate, Grid, Placement};

// ────────────────────────────────────────────────────────────────────────────
// Input / output types
// ────────────────────────────────────────────────────────────────────────────

/// Raw build parameters as an adapter receives them, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRequest {
    pub grid_size: i64,
    pub words: Option<Vec<String>>,
}

/// A finished grid plus where each word ended up.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub grid: Grid,
    /// One entry per placed word, in input order.
    pub placements: Vec<Placement>,
    /// Words that fit nowhere, in input order.
    pub dropped: Vec<String>,
}

impl BuildReport {
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

// ────────────────────────────────────────────────────────────────────────────
// GridBuilder
// ────────────────────────────────────────────────────────────────────────────

pub struct GridBuilder<R> {
    rng: R,
    max_grid_size: usize,
}

impl GridBuilder<StdRng> {
    /// Seeds from `config.seed`, or from OS entropy when unset.
    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GridBuilder::new(rng).with_max_grid_size(config.max_grid_size)
    }
}

impl<R: Rng> GridBuilder<R> {
    pub fn new(rng: R) -> Self {
        GridBuilder {
            rng,
            max_grid_size: DEFAULT_MAX_GRID_SIZE,
        }
    }

    pub fn with_max_grid_size(mut self, max_grid_size: usize) -> Self {
        self.max_grid_size = max_grid_size;
        self
    }

    /// Builds a filled grid hiding as many of `words` as fit.
    ///
    /// Words that cannot be placed are silently left out; use
    /// [`GridBuilder::build_report`] to learn which.
    pub fn build<S: AsRef<str>>(&mut self, grid_size: usize, words: &[S]) -> Result<Grid, GridError> {
        self.build_report(grid_size, words).map(BuildReport::into_grid)
    }

    /// Validates a raw request, then builds.
    pub fn build_request(&mut self, request: &GridRequest) -> Result<Grid, GridError> {
        if request.grid_size <= 0 {
            return Err(GridError::invalid(format!(
                "grid size must be positive, got {}",
                request.grid_size
            )));
        }
        let grid_size = usize::try_from(request.grid_size)
            .map_err(|_| GridError::invalid("grid size does not fit in memory"))?;
        let words = request
            .words
            .as_deref()
            .ok_or_else(|| GridError::invalid("word list is required"))?;

        self.build(grid_size, words)
    }

    /// Same search as [`GridBuilder::build`], keeping placement metadata.
    pub fn build_report<S: AsRef<str>>(
        &mut self,
        grid_size: usize,
        words: &[S],
    ) -> Result<BuildReport, GridError> {
        self.check_size(grid_size)?;

        let mut grid = Grid::blank(grid_size);
        let mut candidates: Vec<Coordinate> = grid.coordinates().collect();
        candidates.shuffle(&mut self.rng);

        let mut placements = Vec::new();
        let mut dropped = Vec::new();

        for word in words {
            let word = word.as_ref();
            let letters: Vec<char> = word.chars().collect();

            match self.find_fit(&grid, &letters, &candidates) {
                Some((start, direction)) => {
                    write_word(&mut grid, &letters, start, direction);
                    debug!(
                        word,
                        row = start.row,
                        col = start.col,
                        %direction,
                        "Placed word"
                    );
                    placements.push(Placement {
                        word: word.to_string(),
                        start,
                        direction,
                    });
                }
                None => {
                    debug!(word, grid_size, "No fit found; dropping word");
                    dropped.push(word.to_string());
                }
            }
        }

        let filled = fill_blanks(&mut grid, &mut self.rng);

        info!(
            grid_size,
            placed = placements.len(),
            dropped = dropped.len(),
            filled,
            "Word grid built"
        );

        Ok(BuildReport {
            grid,
            placements,
            dropped,
        })
    }

    /// First `(coordinate, direction)` in search order where the word fits.
    fn find_fit(
        &mut self,
        grid: &Grid,
        letters: &[char],
        candidates: &[Coordinate],
    ) -> Option<(Coordinate, Direction)> {
        for &start in candidates {
            for direction in Direction::shuffled(&mut self.rng) {
                if fits(grid, letters, start, direction) {
                    return Some((start, direction));
                }
            }
        }
        None
    }

    fn check_size(&self, grid_size: usize) -> Result<(), GridError> {
        if grid_size == 0 {
            return Err(GridError::invalid("grid size must be positive, got 0"));
        }
        if grid_size > self.max_grid_size {
            return Err(GridError::invalid(format!(
                "grid size {grid_size} exceeds maximum of {}",
                self.max_grid_size
            )));
        }
        Ok(())
    }
}
