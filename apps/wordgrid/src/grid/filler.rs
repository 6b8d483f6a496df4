use rand::Rng;

use crate::grid::model::Grid;

/// Letters used to pad cells no word claimed.
pub const FILLER_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Replaces every blank cell with a uniformly random uppercase letter.
/// Returns the number of cells filled.
pub fn fill_blanks<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let mut filled = 0;
    for cell in grid.cells_mut().filter(|c| c.is_none()) {
        let idx = rng.gen_range(0..FILLER_ALPHABET.len());
        *cell = Some(char::from(FILLER_ALPHABET[idx]));
        filled += 1;
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::model::Coordinate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fills_every_blank_with_uppercase() {
        let mut grid = Grid::blank(6);
        let filled = fill_blanks(&mut grid, &mut StdRng::seed_from_u64(1));
        assert_eq!(filled, 36);
        assert!(grid.is_complete());
        for coord in grid.coordinates() {
            assert!(grid.get(coord).is_some_and(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_placed_letters_untouched() {
        let mut grid = Grid::from_rows(&["c__", "_a_", "__t"]).unwrap();
        let filled = fill_blanks(&mut grid, &mut StdRng::seed_from_u64(2));
        assert_eq!(filled, 6);
        assert_eq!(grid.get(Coordinate::new(0, 0)), Some('c'));
        assert_eq!(grid.get(Coordinate::new(1, 1)), Some('a'));
        assert_eq!(grid.get(Coordinate::new(2, 2)), Some('t'));
    }

    #[test]
    fn test_complete_grid_is_noop() {
        let mut grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        let before = grid.clone();
        assert_eq!(fill_blanks(&mut grid, &mut StdRng::seed_from_u64(3)), 0);
        assert_eq!(grid, before);
    }
}
