//! Grid, coordinate and placement types.
//!
//! A cell is `Option<char>`: `None` is the blank sentinel used while words are
//! being placed. A grid returned from the builder has no blank cells left.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::GridError;
use crate::grid::direction::Direction;

/// Glyph used when rendering a blank cell.
pub const BLANK_GLYPH: char = '_';

/// A 0-indexed `(row, col)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// The coordinate `steps` characters away along `direction`.
    /// `None` if either axis would go below zero; the upper bound is the grid's job.
    pub fn advance(self, direction: Direction, steps: usize) -> Option<Coordinate> {
        let (dr, dc) = direction.step();
        Some(Coordinate {
            row: shift(self.row, dr, steps)?,
            col: shift(self.col, dc, steps)?,
        })
    }
}

fn shift(base: usize, delta: isize, steps: usize) -> Option<usize> {
    match delta.signum() {
        0 => Some(base),
        1 => base.checked_add(steps),
        _ => base.checked_sub(steps),
    }
}

/// A word written into a grid, with where it starts and which way it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Coordinate,
    pub direction: Direction,
}

impl Placement {
    /// Coordinates occupied by the word, first character first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.word.chars().count()).filter_map(move |i| self.start.advance(self.direction, i))
    }
}

/// Square N×N letter grid, stored row-major.
///
/// Serializes as `{ "size": N, "rows": ["ABC", ...] }`, one string per row,
/// in the same form [`Grid::from_rows`] parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// An all-blank grid. Callers validate `size` first.
    pub(crate) fn blank(size: usize) -> Self {
        Grid {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Parses a grid from equal-length rows; `_` marks a blank cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::invalid("grid must have at least one row"));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(
                row.as_ref()
                    .chars()
                    .map(|c| if c == BLANK_GLYPH { None } else { Some(c) }),
            );
            if cells.len() - before != size {
                return Err(GridError::invalid(format!(
                    "row {i} has {} cells, expected {size}",
                    cells.len() - before
                )));
            }
        }

        Ok(Grid { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Letter at `coord`. `None` for a blank cell or an out-of-bounds coordinate.
    pub fn get(&self, coord: Coordinate) -> Option<char> {
        if !self.contains(coord) {
            return None;
        }
        self.cells[self.index(coord)]
    }

    pub(crate) fn set(&mut self, coord: Coordinate, letter: char) {
        let idx = self.index(coord);
        self.cells[idx] = Some(letter);
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Option<char>> {
        self.cells.iter_mut()
    }

    fn index(&self, coord: Coordinate) -> usize {
        coord.row * self.size + coord.col
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
    }

    /// True once no cell is blank.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[cfg(test)]
    pub(crate) fn blank_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Reads `len` letters from `start` along `direction`.
    /// `None` if any cell falls outside the grid or is blank.
    pub fn read(&self, start: Coordinate, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                start
                    .advance(direction, i)
                    .and_then(|coord| self.get(coord))
            })
            .collect()
    }

    /// Every start/direction pair along which the grid spells `word`.
    ///
    /// Palindromes and single letters match in several directions from the
    /// same start; each match is listed.
    pub fn find_word(&self, word: &str) -> Vec<Placement> {
        let len = word.chars().count();
        if len == 0 {
            return Vec::new();
        }

        let mut found = Vec::new();
        for start in self.coordinates() {
            for direction in Direction::ALL {
                if self.read(start, direction, len).as_deref() == Some(word) {
                    found.push(Placement {
                        word: word.to_string(),
                        start,
                        direction,
                    });
                }
            }
        }
        found
    }

    /// Rows rendered with single spaces between cells.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|c| c.unwrap_or(BLANK_GLYPH).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Rows as unseparated letter strings, blank cells as `_`.
    pub fn letter_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.unwrap_or(BLANK_GLYPH)).collect())
            .collect()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Grid", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("rows", &self.letter_rows())?;
        state.end()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
