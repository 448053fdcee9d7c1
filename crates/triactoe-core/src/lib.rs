//! Core data structures for the triactoe rules engine.
//!
//! This crate provides the fundamental, typed building blocks for a
//! three-level recursive tic-tac-toe board. The 27×27 board decomposes into
//! a self-similar hierarchy:
//!
//! - **Cells** are atomic positions, grouped 3×3 into **micro-blocks**.
//! - **Micro-blocks** are the finest winnable unit, grouped 3×3 into
//!   **macro-blocks** (9×9 cells each).
//! - **Macro-blocks** form the outermost 3×3 grid; winning three aligned
//!   macro-blocks wins the game.
//!
//! # Overview
//!
//! - [`mark`]: Type-safe player marks (X and O)
//! - [`slot`]: Coordinates within a 3×3 arrangement, used at every level of
//!   the hierarchy
//! - [`position`]: Global cell coordinates on the 27×27 board
//! - [`micro_coord`]: Global micro-block coordinates on the 9×9 block grid
//! - [`tri_grid`]: A generic 3×3 grid with the line-completion check shared
//!   by all three scales of win detection
//!
//! # Examples
//!
//! ```
//! use triactoe_core::{Mark, Position, Slot, TriGrid};
//!
//! // Decompose a global cell coordinate into the block hierarchy.
//! let pos = Position::new(4, 22);
//! assert_eq!(pos.macro_block(), Slot::new(0, 2));
//! assert_eq!(pos.micro_in_macro(), Slot::new(1, 1));
//! assert_eq!(pos.cell_in_micro(), Slot::new(1, 1));
//!
//! // The same 3×3 line check works for cells, micro winners, and
//! // macro winners.
//! let mut grid = TriGrid::default();
//! for col in 0..3 {
//!     grid[Slot::new(0, col)] = Some(Mark::X);
//! }
//! assert!(grid.has_line(Mark::X));
//! ```

pub mod mark;
pub mod micro_coord;
pub mod position;
pub mod slot;
pub mod tri_grid;

pub use self::{
    mark::Mark, micro_coord::MicroCoord, position::Position, slot::Slot, tri_grid::TriGrid,
};
