//! The triactoe board state machine.
//!
//! This crate owns all engine behavior for three-level recursive
//! tic-tac-toe: move legality, state mutation, win detection at all three
//! scales, and the constraint propagation that sends the opponent to a
//! required region of the board after each move.
//!
//! # Overview
//!
//! - [`game`]: The [`Game`] state machine with the single move entry point,
//!   valid-move enumeration, and reset
//! - [`constraint`]: The [`Constraint`] selector pair pinning the opponent's
//!   next macro-block and micro-block
//! - [`status`]: The [`Status`] of a game (playing or won)
//! - [`error`]: Move rejection and snapshot validation errors
//! - [`snapshot`]: The persisted [`Snapshot`] record and its round-trip
//!   conversions
//!
//! # Rules
//!
//! 1. Placing a mark at local cell position `(r, c)` within a micro-block
//!    sends the opponent to the micro-block at `(r, c)` of the same
//!    macro-block.
//! 2. Winning a micro-block at local position `(r, c)` within its
//!    macro-block sends the opponent to the macro-block at `(r, c)` of the
//!    outermost grid, and within it to the micro-block mirroring the
//!    winning cell.
//! 3. A redirection onto an already-decided target falls back to free
//!    choice at that level.
//! 4. Winning three aligned macro-blocks wins the game.
//!
//! # Examples
//!
//! ```
//! use triactoe_core::{Mark, Slot};
//! use triactoe_engine::Game;
//!
//! let mut game = Game::new();
//! assert!(game.make_move(0, 0));
//!
//! // X played the top-left cell of the top-left micro-block, so O is
//! // pinned to macro-block (0, 0), micro-block (0, 0).
//! assert_eq!(game.active_macro(), Some(Slot::new(0, 0)));
//! assert_eq!(game.active_micro(), Some(Slot::new(0, 0)));
//! assert_eq!(game.current_player(), Mark::O);
//!
//! // A move outside the pinned region is rejected without state change.
//! assert!(!game.make_move(26, 26));
//! assert_eq!(game.current_player(), Mark::O);
//! ```

pub mod constraint;
pub mod error;
pub mod game;
pub mod snapshot;
pub mod status;

pub use self::{
    constraint::Constraint,
    error::{MoveError, SnapshotError},
    game::Game,
    snapshot::Snapshot,
    status::Status,
};
