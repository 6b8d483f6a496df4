use crate::grid::direction::Direction;
use crate::grid::model::{Coordinate, Grid};

/// Whether `word` can be written from `start` along `direction`.
///
/// Every cell the word would cover must be inside the grid and either blank
/// or already holding the same character. An empty word never fits.
pub fn fits(grid: &Grid, word: &[char], start: Coordinate, direction: Direction) -> bool {
    let Some(last) = word.len().checked_sub(1) else {
        return false;
    };

    // Steps are monotonic, so both ends in bounds means every cell is.
    if !grid.contains(start) {
        return false;
    }
    match start.advance(direction, last) {
        Some(end) if grid.contains(end) => {}
        _ => return false,
    }

    word.iter().enumerate().all(|(i, &letter)| {
        start
            .advance(direction, i)
            .is_some_and(|cell| grid.get(cell).map_or(true, |existing| existing == letter))
    })
}

/// Writes `word` from `start` along `direction`. Callers check [`fits`] first.
pub(crate) fn write_word(grid: &mut Grid, word: &[char], start: Coordinate, direction: Direction) {
    for (i, &letter) in word.iter().enumerate() {
        if let Some(cell) = start.advance(direction, i) {
            grid.set(cell, letter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_forward_row_needs_room_to_the_right() {
        let grid = Grid::blank(3);
        let word = chars("ABC");
        assert!(fits(&grid, &word, Coordinate::new(0, 0), Direction::ForwardRow));
        assert!(!fits(&grid, &word, Coordinate::new(0, 1), Direction::ForwardRow));
    }

    #[test]
    fn test_backward_row_needs_len_minus_one_to_the_left() {
        let grid = Grid::blank(3);
        let word = chars("ABC");
        assert!(fits(&grid, &word, Coordinate::new(0, 2), Direction::BackwardRow));
        assert!(!fits(&grid, &word, Coordinate::new(0, 1), Direction::BackwardRow));
    }

    #[test]
    fn test_diagonals_check_both_axes() {
        let grid = Grid::blank(4);
        let word = chars("ABC");
        assert!(fits(&grid, &word, Coordinate::new(1, 1), Direction::ForwardDiag));
        assert!(!fits(&grid, &word, Coordinate::new(1, 2), Direction::ForwardDiag));
        assert!(fits(&grid, &word, Coordinate::new(2, 3), Direction::BackwardDiag));
        assert!(!fits(&grid, &word, Coordinate::new(1, 3), Direction::BackwardDiag));
    }

    #[test]
    fn test_single_letter_fits_every_direction_on_one_cell() {
        let grid = Grid::blank(1);
        let word = chars("A");
        for direction in Direction::ALL {
            assert!(fits(&grid, &word, Coordinate::new(0, 0), direction));
        }
    }

    #[test]
    fn test_matching_overlap_allowed() {
        let grid = Grid::from_rows(&["_A_", "___", "___"]).unwrap();
        assert!(fits(&grid, &chars("CAT"), Coordinate::new(0, 0), Direction::ForwardRow));
    }

    #[test]
    fn test_conflicting_overlap_rejected() {
        let grid = Grid::from_rows(&["_O_", "___", "___"]).unwrap();
        assert!(!fits(&grid, &chars("CAT"), Coordinate::new(0, 0), Direction::ForwardRow));
        assert!(fits(&grid, &chars("CAT"), Coordinate::new(1, 0), Direction::ForwardRow));
    }

    #[test]
    fn test_empty_word_never_fits() {
        let grid = Grid::blank(2);
        assert!(!fits(&grid, &[], Coordinate::new(0, 0), Direction::ForwardRow));
    }

    #[test]
    fn test_start_outside_grid_rejected() {
        let grid = Grid::blank(2);
        assert!(!fits(&grid, &chars("A"), Coordinate::new(2, 0), Direction::BackwardCol));
    }

    #[test]
    fn test_write_word_backward_col() {
        let mut grid = Grid::blank(3);
        write_word(&mut grid, &chars("DOG"), Coordinate::new(2, 1), Direction::BackwardCol);
        assert_eq!(grid.rows(), vec!["_ G _", "_ O _", "_ D _"]);
    }
}
