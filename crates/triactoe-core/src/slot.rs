//! Coordinates within a 3×3 arrangement.

use std::fmt::{self, Display};

/// A coordinate in a 3×3 arrangement (row and column 0–2).
///
/// The board hierarchy is self-similar, so the same coordinate type serves
/// at every level: a macro-block's place in the outermost 3×3 grid, a
/// micro-block's place within its macro-block, and a cell's place within
/// its micro-block. The constraint-cascading "mirroring rule" maps a `Slot`
/// at one level directly to a `Slot` one level down.
///
/// # Examples
///
/// ```
/// use triactoe_core::Slot;
///
/// let slot = Slot::new(1, 2);
/// assert_eq!(slot.row(), 1);
/// assert_eq!(slot.col(), 2);
///
/// // Iterate over all nine slots in row-major order.
/// assert_eq!(Slot::ALL.len(), 9);
/// assert_eq!(Slot::ALL[0], Slot::new(0, 0));
/// assert_eq!(Slot::ALL[8], Slot::new(2, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    row: u8,
    col: u8,
}

impl Slot {
    /// Array containing all nine slots in row-major order.
    pub const ALL: [Self; 9] = {
        let mut all = [Self { row: 0, col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self {
                row: (i / 3) as u8,
                col: (i % 3) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a new slot.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0–2.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 3 && col < 3);
        Self { row, col }
    }

    /// Creates a new slot, returning `None` if either coordinate is out of
    /// the range 0–2.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row within the arrangement (0–2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column within the arrangement (0–2).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
