//! A generic 3×3 grid and the shared line-completion check.

use std::ops::{Index, IndexMut};

use crate::{Mark, Slot};

/// A 3×3 grid indexed by [`Slot`].
///
/// The board hierarchy uses this one container at every scale: cell marks
/// within a micro-block, micro-block winners within a macro-block, and
/// macro-block winners across the whole game. The nested variant
/// `TriGrid<TriGrid<T>>` models a 9×9 arrangement addressed by
/// (outer slot, inner slot).
///
/// # Examples
///
/// ```
/// use triactoe_core::{Mark, Slot, TriGrid};
///
/// let mut grid: TriGrid<Option<Mark>> = TriGrid::default();
/// grid[Slot::new(1, 1)] = Some(Mark::O);
/// assert_eq!(grid[Slot::new(1, 1)], Some(Mark::O));
/// assert_eq!(grid[Slot::new(0, 0)], None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TriGrid<T> {
    cells: [[T; 3]; 3],
}

impl<T> TriGrid<T> {
    /// Creates a grid from a row-major array of rows.
    #[must_use]
    pub const fn from_rows(rows: [[T; 3]; 3]) -> Self {
        Self { cells: rows }
    }

    /// Returns the row-major array of rows.
    #[must_use]
    pub const fn rows(&self) -> &[[T; 3]; 3] {
        &self.cells
    }

}

impl<T> Index<Slot> for TriGrid<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &T {
        &self.cells[slot.row() as usize][slot.col() as usize]
    }
}

impl<T> IndexMut<Slot> for TriGrid<T> {
    fn index_mut(&mut self, slot: Slot) -> &mut T {
        &mut self.cells[slot.row() as usize][slot.col() as usize]
    }
}

impl TriGrid<Option<Mark>> {
    /// Returns whether any row, column, or diagonal is entirely `mark`.
    ///
    /// This is the single win-evaluation primitive; applied to a
    /// micro-block's cell marks it decides micro-block wins, to a
    /// macro-block's micro-winner grid it decides macro-block wins, and to
    /// the top-level macro-winner grid it decides the game. The first
    /// completed line finalizes a level; simultaneous lines are not
    /// distinguished.
    ///
    /// # Examples
    ///
    /// ```
    /// use triactoe_core::{Mark, Slot, TriGrid};
    ///
    /// let mut grid = TriGrid::default();
    /// for i in 0..3 {
    ///     grid[Slot::new(i, 2 - i)] = Some(Mark::O);
    /// }
    /// assert!(grid.has_line(Mark::O));
    /// assert!(!grid.has_line(Mark::X));
    /// ```
    #[must_use]
    pub fn has_line(&self, mark: Mark) -> bool {
        let at = |row: u8, col: u8| self.cells[row as usize][col as usize] == Some(mark);

        for i in 0..3 {
            if at(i, 0) && at(i, 1) && at(i, 2) {
                return true;
            }
            if at(0, i) && at(1, i) && at(2, i) {
                return true;
            }
        }
        (at(0, 0) && at(1, 1) && at(2, 2)) || (at(0, 2) && at(1, 1) && at(2, 0))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid_from(slots: &[Slot], mark: Mark) -> TriGrid<Option<Mark>> {
        let mut grid = TriGrid::default();
        for &slot in slots {
            grid[slot] = Some(mark);
        }
        grid
    }

    #[test]
    fn test_empty_grid_has_no_line() {
        let grid: TriGrid<Option<Mark>> = TriGrid::default();
        assert!(!grid.has_line(Mark::X));
        assert!(!grid.has_line(Mark::O));
    }

    #[test]
    fn test_each_row_completes() {
        for row in 0..3 {
            let slots: Vec<_> = (0..3).map(|col| Slot::new(row, col)).collect();
            assert!(grid_from(&slots, Mark::X).has_line(Mark::X));
        }
    }

    #[test]
    fn test_each_column_completes() {
        for col in 0..3 {
            let slots: Vec<_> = (0..3).map(|row| Slot::new(row, col)).collect();
            assert!(grid_from(&slots, Mark::O).has_line(Mark::O));
        }
    }

    #[test]
    fn test_both_diagonals_complete() {
        let main: Vec<_> = (0..3).map(|i| Slot::new(i, i)).collect();
        let anti: Vec<_> = (0..3).map(|i| Slot::new(i, 2 - i)).collect();
        assert!(grid_from(&main, Mark::X).has_line(Mark::X));
        assert!(grid_from(&anti, Mark::X).has_line(Mark::X));
    }

    #[test]
    fn test_line_is_mark_specific() {
        let slots: Vec<_> = (0..3).map(|col| Slot::new(0, col)).collect();
        let grid = grid_from(&slots, Mark::X);
        assert!(!grid.has_line(Mark::O));
    }

    #[test]
    fn test_mixed_line_does_not_complete() {
        let mut grid = grid_from(&[Slot::new(0, 0), Slot::new(0, 1)], Mark::X);
        grid[Slot::new(0, 2)] = Some(Mark::O);
        assert!(!grid.has_line(Mark::X));
        assert!(!grid.has_line(Mark::O));
    }

    proptest! {
        /// Adding marks never destroys an existing line.
        #[test]
        fn test_line_is_monotonic(
            base in prop::collection::vec(0usize..9, 0..9),
            extra in 0usize..9,
        ) {
            let slots: Vec<_> = base.iter().map(|&i| Slot::ALL[i]).collect();
            let grid = grid_from(&slots, Mark::X);
            let mut extended = grid;
            extended[Slot::ALL[extra]] = Some(Mark::X);

            if grid.has_line(Mark::X) {
                prop_assert!(extended.has_line(Mark::X));
            }
        }

        /// A line requires at least three marks.
        #[test]
        fn test_no_line_with_fewer_than_three(
            slots in prop::collection::hash_set(0usize..9, 0..3),
        ) {
            let slots: Vec<_> = slots.iter().map(|&i| Slot::ALL[i]).collect();
            prop_assert!(!grid_from(&slots, Mark::X).has_line(Mark::X));
        }
    }
}
