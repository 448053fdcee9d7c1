//! Global micro-block coordinates.

use std::fmt::{self, Display};

use crate::{Position, Slot};

/// A global micro-block coordinate on the 9×9 block grid.
///
/// Each micro-block covers a 3×3 group of cells. A micro-block coordinate
/// decomposes into the owning macro-block and the local position within it,
/// and recomposes from those parts; both views are used by the
/// constraint-cascading rules.
///
/// # Examples
///
/// ```
/// use triactoe_core::{MicroCoord, Slot};
///
/// let coord = MicroCoord::new(4, 7);
/// assert_eq!(coord.macro_block(), Slot::new(1, 2));
/// assert_eq!(coord.local(), Slot::new(1, 1));
/// assert_eq!(
///     MicroCoord::from_parts(Slot::new(1, 2), Slot::new(1, 1)),
///     coord
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MicroCoord {
    row: u8,
    col: u8,
}

impl MicroCoord {
    /// Creates a new micro-block coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0–8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Composes a micro-block coordinate from its owning macro-block and
    /// the local position within that macro-block.
    #[must_use]
    pub const fn from_parts(macro_block: Slot, local: Slot) -> Self {
        Self {
            row: macro_block.row() * 3 + local.row(),
            col: macro_block.col() * 3 + local.col(),
        }
    }

    /// Returns the block-grid row (0–8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the block-grid column (0–8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the macro-block containing this micro-block.
    #[must_use]
    pub const fn macro_block(self) -> Slot {
        Slot::new(self.row / 3, self.col / 3)
    }

    /// Returns this micro-block's local position within its macro-block.
    #[must_use]
    pub const fn local(self) -> Slot {
        Slot::new(self.row % 3, self.col % 3)
    }

    /// Returns the global position of a cell within this micro-block.
    #[must_use]
    pub const fn cell_at(self, cell: Slot) -> Position {
        Position::new(self.row * 3 + cell.row(), self.col * 3 + cell.col())
    }

    /// Returns an iterator over all 81 micro-block coordinates in row-major
    /// order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self::new(row, col)))
    }
}

impl Display for MicroCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
