use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the six directions a word can run in.
///
/// Backward variants mirror the forward ones. Anti-diagonals (one axis
/// forward, the other backward) are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Left to right along a row.
    ForwardRow,
    /// Top to bottom along a column.
    ForwardCol,
    /// Down-right diagonal.
    ForwardDiag,
    BackwardRow,
    BackwardCol,
    BackwardDiag,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::ForwardRow,
        Direction::ForwardCol,
        Direction::ForwardDiag,
        Direction::BackwardRow,
        Direction::BackwardCol,
        Direction::BackwardDiag,
    ];

    /// Per-character `(Δrow, Δcol)` increment.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::ForwardRow => (0, 1),
            Direction::ForwardCol => (1, 0),
            Direction::ForwardDiag => (1, 1),
            Direction::BackwardRow => (0, -1),
            Direction::BackwardCol => (-1, 0),
            Direction::BackwardDiag => (-1, -1),
        }
    }

    /// All six directions in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 6] {
        let mut directions = Self::ALL;
        directions.shuffle(rng);
        directions
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::ForwardRow => "forward_row",
            Direction::ForwardCol => "forward_col",
            Direction::ForwardDiag => "forward_diag",
            Direction::BackwardRow => "backward_row",
            Direction::BackwardCol => "backward_col",
            Direction::BackwardDiag => "backward_diag",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
