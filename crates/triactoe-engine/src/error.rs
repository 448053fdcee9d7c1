//! Move rejection and snapshot validation errors.

use derive_more::{Display, Error};
use triactoe_core::Slot;

/// Why a move was rejected.
///
/// Rejection never mutates the game; callers may re-prompt and try again.
/// The boolean [`Game::make_move`](crate::Game::make_move) surface collapses
/// these to `false`, while [`Game::try_move_at`](crate::Game::try_move_at)
/// and [`Game::check_move`](crate::Game::check_move) report the reason.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game is already won.
    #[display("the game is over")]
    GameOver,
    /// The coordinates are outside the 27×27 board.
    #[display("coordinates are outside the board")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("the cell is already marked")]
    CellOccupied,
    /// The move is outside the pinned macro-block.
    #[display("the move must be in macro-block {required}")]
    WrongMacroBlock {
        /// The macro-block the current player is pinned to.
        required: Slot,
    },
    /// Free macro choice, but the target macro-block is already won.
    #[display("the target macro-block is already decided")]
    MacroBlockDecided,
    /// The move is outside the pinned micro-block.
    #[display("the move must be in micro-block {required} of its macro-block")]
    WrongMicroBlock {
        /// The required micro-block position within the pinned macro-block.
        required: Slot,
    },
    /// The target micro-block is already won.
    #[display("the target micro-block is already decided")]
    MicroBlockDecided,
}

/// Why a persisted snapshot failed validation on load.
///
/// Loading is all-or-nothing: a snapshot that produces any of these errors
/// leaves the caller's game untouched.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// A grid field does not have the expected dimensions.
    #[display("field `{field}` has wrong dimensions")]
    BadDimensions {
        /// The snapshot field name.
        field: &'static str,
    },
    /// A grid entry is not `""`, `"X"`, or `"O"`.
    #[display("field `{field}` holds invalid mark symbol {symbol:?}")]
    BadMarkSymbol {
        /// The snapshot field name.
        field: &'static str,
        /// The offending entry.
        symbol: String,
    },
    /// The current player is not `"X"` or `"O"`.
    #[display("invalid current player {symbol:?}")]
    BadCurrentPlayer {
        /// The offending value.
        symbol: String,
    },
    /// The status is not `"playing"`, `"x_wins"`, or `"o_wins"`.
    #[display("invalid status {symbol:?}")]
    BadStatus {
        /// The offending value.
        symbol: String,
    },
    /// An active selector coordinate is outside the range 0–2.
    #[display("field `{field}` selector is out of range")]
    SelectorOutOfRange {
        /// The snapshot field name.
        field: &'static str,
    },
    /// A micro selector is present without a macro selector.
    #[display("active micro-block selector requires an active macro-block selector")]
    MicroSelectorWithoutMacro,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display_names_required_block() {
        let err = MoveError::WrongMacroBlock {
            required: Slot::new(1, 2),
        };
        assert_eq!(err.to_string(), "the move must be in macro-block (1, 2)");
    }

    #[test]
    fn test_snapshot_error_display_names_field() {
        let err = SnapshotError::BadDimensions { field: "board" };
        assert_eq!(err.to_string(), "field `board` has wrong dimensions");
    }
}
