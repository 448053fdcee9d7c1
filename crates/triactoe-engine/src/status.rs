//! Game status.

use triactoe_core::Mark;

/// The lifecycle status of a game.
///
/// There is deliberately no draw variant: if the board fills with no
/// completed line at any level, the game stays [`Status::Playing`] with an
/// empty valid-move set. This preserves the reference behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// The game accepts moves (or has stalled with none available).
    #[default]
    Playing,
    /// The given player has won three aligned macro-blocks.
    Won(Mark),
}

impl Status {
    /// Returns whether the game still accepts moves.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns the winning mark, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Self::Playing => None,
            Self::Won(mark) => Some(mark),
        }
    }

    /// Returns the wire symbol for this status
    /// (`"playing"`, `"x_wins"`, or `"o_wins"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won(Mark::X) => "x_wins",
            Self::Won(Mark::O) => "o_wins",
        }
    }

    /// Parses a wire symbol into a status.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "playing" => Some(Self::Playing),
            "x_wins" => Some(Self::Won(Mark::X)),
            "o_wins" => Some(Self::Won(Mark::O)),
            _ => None,
        }
    }
}
