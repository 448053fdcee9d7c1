//! Player mark representation.

use std::fmt::{self, Display};

/// A player mark: X or O.
///
/// Cells, micro-block winners, and macro-block winners all hold
/// `Option<Mark>`, where `None` means unmarked or undecided. Keeping the
/// enum closed makes illegal mark values unrepresentable.
///
/// # Examples
///
/// ```
/// use triactoe_core::Mark;
///
/// let mark = Mark::X;
/// assert_eq!(mark.opponent(), Mark::O);
/// assert_eq!(mark.symbol(), "X");
/// assert_eq!(Mark::from_symbol("O"), Some(Mark::O));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The X player (always moves first in a fresh game).
    X,
    /// The O player.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    ///
    /// # Examples
    ///
    /// ```
    /// use triactoe_core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Returns the wire symbol for this mark (`"X"` or `"O"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }

    /// Parses a wire symbol into a mark.
    ///
    /// Returns `None` for anything other than `"X"` or `"O"`; in particular
    /// the empty string (the wire form of an unmarked cell) is not a mark.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "X" => Some(Self::X),
            "O" => Some(Self::O),
            _ => None,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
