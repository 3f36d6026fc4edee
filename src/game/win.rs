//! Win detection
//!
//! Pure function over a grid snapshot. Recomputed in full after every
//! toggle rather than tracked incrementally - O(N^2) on a 4x4 board.

use super::grid::Grid;

/// True if any full row, full column, or either diagonal is completely
/// selected. Short-circuits on the first complete line.
pub fn has_won(grid: &Grid) -> bool {
    let n = grid.size();

    // Rows and columns
    for i in 0..n {
        if (0..n).all(|col| grid.cell(i, col).selected) {
            return true;
        }
        if (0..n).all(|row| grid.cell(row, i).selected) {
            return true;
        }
    }

    // Main diagonal, then anti-diagonal
    if (0..n).all(|idx| grid.cell(idx, idx).selected) {
        return true;
    }
    (0..n).all(|idx| grid.cell(idx, n - 1 - idx).selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::Cell;

    /// Build a grid from a selection mask, one word per cell.
    fn grid_from_mask(mask: &[&[bool]]) -> Grid {
        let rows = mask
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &selected)| Cell {
                        word: format!("w{r}{c}"),
                        selected,
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows)
    }

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_empty_board_no_win() {
        let grid = grid_from_mask(&[&[F; 4], &[F; 4], &[F; 4], &[F; 4]]);
        assert!(!has_won(&grid));
    }

    #[test]
    fn test_full_row_wins() {
        let grid = grid_from_mask(&[&[F; 4], &[F; 4], &[T; 4], &[F; 4]]);
        assert!(has_won(&grid));
    }

    #[test]
    fn test_full_column_wins() {
        let grid = grid_from_mask(&[
            &[F, T, F, F],
            &[F, T, F, F],
            &[F, T, F, F],
            &[F, T, F, F],
        ]);
        assert!(has_won(&grid));
    }

    #[test]
    fn test_main_diagonal_wins() {
        let grid = grid_from_mask(&[
            &[T, F, F, F],
            &[F, T, F, F],
            &[F, F, T, F],
            &[F, F, F, T],
        ]);
        assert!(has_won(&grid));
    }

    #[test]
    fn test_anti_diagonal_wins() {
        let grid = grid_from_mask(&[
            &[F, F, F, T],
            &[F, F, T, F],
            &[F, T, F, F],
            &[T, F, F, F],
        ]);
        assert!(has_won(&grid));
    }

    #[test]
    fn test_near_miss_is_not_a_win() {
        // Three of four in a row, a column, and a diagonal - none complete
        let grid = grid_from_mask(&[
            &[T, T, T, F],
            &[T, F, F, F],
            &[T, F, T, F],
            &[F, F, F, T],
        ]);
        assert!(!has_won(&grid));
    }

    #[test]
    fn test_scattered_selection_no_win() {
        let grid = grid_from_mask(&[
            &[T, F, T, F],
            &[F, T, F, F],
            &[T, F, F, T],
            &[F, T, T, F],
        ]);
        assert!(!has_won(&grid));
    }

    #[test]
    fn test_two_by_two_row() {
        // Concrete scenario: 2x2 board, top row selected
        let grid = grid_from_mask(&[&[T, T], &[F, F]]);
        assert!(has_won(&grid));
    }
}
