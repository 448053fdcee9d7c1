//! The game state machine.

use log::debug;
use triactoe_core::{Mark, MicroCoord, Position, Slot, TriGrid};

use crate::{Constraint, MoveError, Status};

/// A 3×3 grid of optional marks, the unit of win evaluation at every scale.
pub type MarkGrid = TriGrid<Option<Mark>>;

/// The complete state of a three-level recursive tic-tac-toe game.
///
/// A `Game` is an explicitly owned value with no ambient sharing; all
/// mutation flows through the single move entry point ([`Game::play`] and
/// its wrappers) plus [`Game::reset`]. The struct carries the 27×27 cell
/// marks, the two win-tracking grids (9×9 micro-block winners, 3×3
/// macro-block winners), and the cached 3×3 sub-grids those win checks
/// scan.
///
/// Operations are synchronous and run to completion; a `Game` is not safe
/// for concurrent mutation and expects its caller to serialize moves (one
/// owner per game, e.g. behind a mutex or a single-writer task, when
/// embedded in a concurrent host).
///
/// # Examples
///
/// ```
/// use triactoe_core::Mark;
/// use triactoe_engine::Game;
///
/// let mut game = Game::new();
/// assert_eq!(game.current_player(), Mark::X);
/// assert_eq!(game.valid_moves().len(), 729);
///
/// assert!(game.make_move(13, 13));
/// assert_eq!(game.current_player(), Mark::O);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: [[Option<Mark>; 27]; 27],
    pub(crate) micro_grids: [[MarkGrid; 9]; 9],
    pub(crate) micro_winners: [[Option<Mark>; 9]; 9],
    pub(crate) macro_grids: TriGrid<MarkGrid>,
    pub(crate) macro_winners: MarkGrid,
    pub(crate) current_player: Mark,
    pub(crate) constraint: Constraint,
    pub(crate) status: Status,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a fresh game: empty grids, X to move, free choice anywhere.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: [[None; 27]; 27],
            micro_grids: [[MarkGrid::default(); 9]; 9],
            micro_winners: [[None; 9]; 9],
            macro_grids: TriGrid::default(),
            macro_winners: MarkGrid::default(),
            current_player: Mark::X,
            constraint: Constraint::Free,
            status: Status::Playing,
        }
    }

    /// Reinitializes this game to the fresh-game state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns the mark at a cell, if any.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<Mark> {
        self.board[pos.row() as usize][pos.col() as usize]
    }

    /// Returns the full 27×27 board in row-major order.
    #[must_use]
    pub fn board(&self) -> &[[Option<Mark>; 27]; 27] {
        &self.board
    }

    /// Returns the winner of a micro-block, if decided.
    #[must_use]
    pub fn micro_winner(&self, coord: MicroCoord) -> Option<Mark> {
        self.micro_winners[coord.row() as usize][coord.col() as usize]
    }

    /// Returns the full 9×9 grid of micro-block winners.
    #[must_use]
    pub fn micro_winners(&self) -> &[[Option<Mark>; 9]; 9] {
        &self.micro_winners
    }

    /// Returns the winner of a macro-block, if decided.
    #[must_use]
    pub fn macro_winner(&self, block: Slot) -> Option<Mark> {
        self.macro_winners[block]
    }

    /// Returns the 3×3 grid of macro-block winners.
    #[must_use]
    pub fn macro_winners(&self) -> &MarkGrid {
        &self.macro_winners
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the active constraint on the current player's move.
    #[must_use]
    pub fn constraint(&self) -> Constraint {
        self.constraint
    }

    /// Returns the macro-block the current player is pinned to, if any.
    #[must_use]
    pub fn active_macro(&self) -> Option<Slot> {
        self.constraint.active_macro()
    }

    /// Returns the micro-block (within the pinned macro-block) the current
    /// player is pinned to, if any.
    #[must_use]
    pub fn active_micro(&self) -> Option<Slot> {
        self.constraint.active_micro()
    }

    /// Returns the game status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    fn micro_grid(&self, coord: MicroCoord) -> &MarkGrid {
        &self.micro_grids[coord.row() as usize][coord.col() as usize]
    }

    /// Checks whether a move is legal for the current player.
    ///
    /// This is the single authoritative legality predicate: [`Game::play`]
    /// consults it before mutating, and [`Game::valid_moves`] enumerates
    /// exactly the positions it accepts.
    ///
    /// # Errors
    ///
    /// Returns the first failing precondition as a [`MoveError`]; see the
    /// variant documentation for the taxonomy.
    pub fn check_move(&self, pos: Position) -> Result<(), MoveError> {
        if !self.status.is_playing() {
            return Err(MoveError::GameOver);
        }
        if self.cell(pos).is_some() {
            return Err(MoveError::CellOccupied);
        }
        match self.constraint {
            Constraint::Free => {
                if self.macro_winner(pos.macro_block()).is_some() {
                    return Err(MoveError::MacroBlockDecided);
                }
            }
            Constraint::Macro { block, micro } => {
                if pos.macro_block() != block {
                    return Err(MoveError::WrongMacroBlock { required: block });
                }
                // The micro selector only binds while the move's macro-block
                // is undecided.
                if self.macro_winner(block).is_none()
                    && let Some(required) = micro
                    && pos.micro_in_macro() != required
                {
                    return Err(MoveError::WrongMicroBlock { required });
                }
            }
        }
        if self.micro_winner(pos.micro_block()).is_some() {
            return Err(MoveError::MicroBlockDecided);
        }
        Ok(())
    }

    /// Applies a move for the current player.
    ///
    /// On success the cell is marked, wins are evaluated bottom-up
    /// (micro-block, macro-block, game), the opponent's constraint is
    /// computed from the mirroring rules, and the turn passes. On failure
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from [`Game::check_move`] if the move is
    /// illegal.
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.check_move(pos)?;

        let mover = self.current_player;
        let micro = pos.micro_block();
        let cell = pos.cell_in_micro();

        self.board[pos.row() as usize][pos.col() as usize] = Some(mover);
        self.micro_grids[micro.row() as usize][micro.col() as usize][cell] = Some(mover);

        if self.micro_grid(micro).has_line(mover) {
            self.complete_micro_block(mover, micro, cell);
            if !self.status.is_playing() {
                return Ok(());
            }
        } else {
            // Level-1 mirror: the cell's place in its micro-block becomes
            // the opponent's required micro-block in the same macro-block.
            self.constrain_to(pos.macro_block(), cell);
        }

        self.current_player = mover.opponent();
        Ok(())
    }

    /// Records a micro-block win and cascades upward.
    ///
    /// `cell` is the winning move's place within the micro-block; it seeds
    /// the micro-level mirror inside the redirected macro-block.
    fn complete_micro_block(&mut self, mover: Mark, micro: MicroCoord, cell: Slot) {
        debug!("{mover} wins micro-block {micro}");
        let macro_block = micro.macro_block();
        let local = micro.local();
        self.micro_winners[micro.row() as usize][micro.col() as usize] = Some(mover);
        self.macro_grids[macro_block][local] = Some(mover);

        if self.macro_grids[macro_block].has_line(mover) {
            debug!("{mover} wins macro-block {macro_block}");
            self.macro_winners[macro_block] = Some(mover);
            if self.macro_winners.has_line(mover) {
                debug!("{mover} wins the game");
                self.status = Status::Won(mover);
                return;
            }
        }

        // Level-2 mirror: the won micro-block's place in its macro-block
        // becomes the opponent's required macro-block.
        let next_macro = local;
        if self.macro_winner(next_macro).is_some() {
            self.constraint = Constraint::Free;
        } else {
            self.constrain_to(next_macro, cell);
        }
    }

    /// Pins the opponent to `block`, and within it to `micro` unless that
    /// micro-block is already decided.
    fn constrain_to(&mut self, block: Slot, micro: Slot) {
        let target = MicroCoord::from_parts(block, micro);
        self.constraint = Constraint::Macro {
            block,
            micro: (self.micro_winner(target).is_none()).then_some(micro),
        };
    }

    /// Applies a move given raw board coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinates are outside
    /// the 27×27 board, otherwise whatever [`Game::play`] returns.
    pub fn try_move_at(&mut self, row: u8, col: u8) -> Result<(), MoveError> {
        let pos = Position::try_new(row, col).ok_or(MoveError::OutOfBounds)?;
        self.play(pos)
    }

    /// Applies a move given raw board coordinates, reporting success as a
    /// boolean.
    ///
    /// This is the reference-compatible front-end surface: any rejection
    /// (game over, out of bounds, occupied cell, constraint violation,
    /// decided block) returns `false` with no state change.
    #[must_use]
    pub fn make_move(&mut self, row: u8, col: u8) -> bool {
        self.try_move_at(row, col).is_ok()
    }

    /// Returns every position the current player may legally move to, in
    /// row-major order.
    ///
    /// Empty when the game is over, and also when the board has stalled
    /// (full with no completed line — the status deliberately stays
    /// [`Status::Playing`] in that case).
    #[must_use]
    pub fn valid_moves(&self) -> Vec<Position> {
        if !self.status.is_playing() {
            return Vec::new();
        }
        Position::all()
            .filter(|&pos| self.check_move(pos).is_ok())
            .collect()
    }
}
