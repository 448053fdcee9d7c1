//! Global cell coordinates on the 27×27 board.

use std::fmt::{self, Display};

use crate::{MicroCoord, Slot};

/// Number of cell rows and columns on the board.
pub const BOARD_SIZE: u8 = 27;

/// A global cell coordinate on the 27×27 board.
///
/// A position decomposes into the three levels of the block hierarchy: the
/// owning macro-block, the owning micro-block, and the cell's local place
/// within its micro-block. The local views drive the constraint-cascading
/// rules, so they are first-class accessors here.
///
/// # Examples
///
/// ```
/// use triactoe_core::{MicroCoord, Position, Slot};
///
/// let pos = Position::new(13, 22);
/// assert_eq!(pos.macro_block(), Slot::new(1, 2));
/// assert_eq!(pos.micro_block(), MicroCoord::new(4, 7));
/// assert_eq!(pos.micro_in_macro(), Slot::new(1, 1));
/// assert_eq!(pos.cell_in_micro(), Slot::new(1, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0–26.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Creates a new position, returning `None` if either coordinate is out
    /// of the range 0–26.
    ///
    /// Raw-coordinate callers (front ends, snapshot loaders) go through
    /// this; everything past it can treat positions as always in bounds.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the board row (0–26).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the board column (0–26).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the macro-block containing this cell.
    #[must_use]
    pub const fn macro_block(self) -> Slot {
        Slot::new(self.row / 9, self.col / 9)
    }

    /// Returns the micro-block containing this cell.
    #[must_use]
    pub const fn micro_block(self) -> MicroCoord {
        MicroCoord::new(self.row / 3, self.col / 3)
    }

    /// Returns the owning micro-block's local position within its
    /// macro-block.
    #[must_use]
    pub const fn micro_in_macro(self) -> Slot {
        Slot::new((self.row / 3) % 3, (self.col / 3) % 3)
    }

    /// Returns this cell's local position within its micro-block.
    ///
    /// Under the level-1 mirroring rule this slot becomes the opponent's
    /// required micro-block.
    #[must_use]
    pub const fn cell_in_micro(self) -> Slot {
        Slot::new(self.row % 3, self.col % 3)
    }

    /// Returns an iterator over all 729 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Self::new(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert!(Position::try_new(26, 26).is_some());
        assert_eq!(Position::try_new(27, 0), None);
        assert_eq!(Position::try_new(0, 27), None);
    }

    #[test]
    fn test_all_yields_729_positions() {
        assert_eq!(Position::all().count(), 729);
    }

    #[test]
    fn test_decomposition_of_known_position() {
        let pos = Position::new(4, 22);
        assert_eq!(pos.macro_block(), Slot::new(0, 2));
        assert_eq!(pos.micro_block(), MicroCoord::new(1, 7));
        assert_eq!(pos.micro_in_macro(), Slot::new(1, 1));
        assert_eq!(pos.cell_in_micro(), Slot::new(1, 1));
    }

    proptest! {
        /// The decomposition accessors agree with recomposition through
        /// `MicroCoord`.
        #[test]
        fn test_decomposition_recomposes(row in 0u8..27, col in 0u8..27) {
            let pos = Position::new(row, col);
            let micro = pos.micro_block();

            prop_assert_eq!(micro.macro_block(), pos.macro_block());
            prop_assert_eq!(micro.local(), pos.micro_in_macro());
            prop_assert_eq!(micro.cell_at(pos.cell_in_micro()), pos);
        }

        /// Micro-block decomposition is consistent with integer division.
        #[test]
        fn test_micro_block_extent(row in 0u8..27, col in 0u8..27) {
            let pos = Position::new(row, col);
            let micro = pos.micro_block();

            prop_assert!(micro.row() * 3 <= row && row < micro.row() * 3 + 3);
            prop_assert!(micro.col() * 3 <= col && col < micro.col() * 3 + 3);
        }
    }
}
