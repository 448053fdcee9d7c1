//! Persisted game snapshots.
//!
//! A [`Snapshot`] is the structured record an external persistence
//! collaborator reads and writes. Its field names and value encodings match
//! the established save-file layout exactly: marks are `""`/`"X"`/`"O"`
//! strings, status is `"playing"`/`"x_wins"`/`"o_wins"`, and the active
//! selectors are nullable `[row, col]` pairs. Loading is field-for-field
//! assignment with structural validation only; nothing is recomputed, and a
//! snapshot that fails validation is never partially applied.

use serde::{Deserialize, Serialize};
use triactoe_core::{Mark, Slot, TriGrid};

use crate::{Constraint, Game, SnapshotError, game::MarkGrid};

/// The wire-format record of a complete game state.
///
/// Grids are row-major nested vectors of mark symbols. The two
/// `blocks_state_*` fields carry the cached 3×3 sub-grids used for win
/// checks: one per micro-block (cell marks) and one per macro-block
/// (micro-block winners).
///
/// # Examples
///
/// ```
/// use triactoe_engine::Game;
///
/// let mut game = Game::new();
/// assert!(game.make_move(0, 0));
///
/// let snapshot = game.snapshot();
/// assert_eq!(snapshot.board[0][0], "X");
/// assert_eq!(snapshot.active_9x9_block, Some((0, 0)));
///
/// let restored = Game::from_snapshot(&snapshot).unwrap();
/// assert_eq!(restored, game);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 27×27 grid of cell marks.
    pub board: Vec<Vec<String>>,
    /// 9×9 grid of micro-block winners.
    pub blocks_3x3: Vec<Vec<String>>,
    /// 3×3 grid of macro-block winners.
    pub blocks_9x9: Vec<Vec<String>>,
    /// 9×9 grid of per-micro-block 3×3 cell-mark sub-grids.
    pub blocks_state_3x3: Vec<Vec<Vec<Vec<String>>>>,
    /// 3×3 grid of per-macro-block 3×3 micro-winner sub-grids.
    pub blocks_state_9x9: Vec<Vec<Vec<Vec<String>>>>,
    /// The player to move: `"X"` or `"O"`.
    pub current_player: String,
    /// Game status: `"playing"`, `"x_wins"`, or `"o_wins"`.
    pub status: String,
    /// The pinned macro-block, or `None` for free choice.
    pub active_9x9_block: Option<(u8, u8)>,
    /// The pinned micro-block within the pinned macro-block, or `None`.
    pub active_3x3_block: Option<(u8, u8)>,
}

fn symbol(mark: Option<Mark>) -> String {
    mark.map_or_else(String::new, |mark| mark.symbol().to_owned())
}

fn parse_symbol(field: &'static str, symbol: &str) -> Result<Option<Mark>, SnapshotError> {
    if symbol.is_empty() {
        return Ok(None);
    }
    Mark::from_symbol(symbol)
        .map(Some)
        .ok_or_else(|| SnapshotError::BadMarkSymbol {
            field,
            symbol: symbol.to_owned(),
        })
}

fn grid_symbols<const N: usize>(grid: &[[Option<Mark>; N]; N]) -> Vec<Vec<String>> {
    grid.iter()
        .map(|row| row.iter().map(|&mark| symbol(mark)).collect())
        .collect()
}

fn parse_grid<const N: usize>(
    field: &'static str,
    rows: &[Vec<String>],
) -> Result<[[Option<Mark>; N]; N], SnapshotError> {
    let mut grid = [[None; N]; N];
    if rows.len() != N {
        return Err(SnapshotError::BadDimensions { field });
    }
    for (row, source) in grid.iter_mut().zip(rows) {
        if source.len() != N {
            return Err(SnapshotError::BadDimensions { field });
        }
        for (cell, symbol) in row.iter_mut().zip(source) {
            *cell = parse_symbol(field, symbol)?;
        }
    }
    Ok(grid)
}

fn mark_grid_symbols(grid: &MarkGrid) -> Vec<Vec<String>> {
    grid_symbols(grid.rows())
}

fn parse_mark_grid(field: &'static str, rows: &[Vec<String>]) -> Result<MarkGrid, SnapshotError> {
    Ok(TriGrid::from_rows(parse_grid::<3>(field, rows)?))
}

fn parse_selector(
    field: &'static str,
    selector: Option<(u8, u8)>,
) -> Result<Option<Slot>, SnapshotError> {
    selector
        .map(|(row, col)| {
            Slot::try_new(row, col).ok_or(SnapshotError::SelectorOutOfRange { field })
        })
        .transpose()
}

impl Game {
    /// Produces the wire-format snapshot of this game.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: grid_symbols(&self.board),
            blocks_3x3: grid_symbols(&self.micro_winners),
            blocks_9x9: mark_grid_symbols(&self.macro_winners),
            blocks_state_3x3: self
                .micro_grids
                .iter()
                .map(|row| row.iter().map(mark_grid_symbols).collect())
                .collect(),
            blocks_state_9x9: self
                .macro_grids
                .rows()
                .iter()
                .map(|row| row.iter().map(mark_grid_symbols).collect())
                .collect(),
            current_player: self.current_player.symbol().to_owned(),
            status: self.status.symbol().to_owned(),
            active_9x9_block: self
                .constraint
                .active_macro()
                .map(|slot| (slot.row(), slot.col())),
            active_3x3_block: self
                .constraint
                .active_micro()
                .map(|slot| (slot.row(), slot.col())),
        }
    }

    /// Reconstructs a game from a wire-format snapshot.
    ///
    /// Restoration is field-for-field assignment: cached sub-grids are
    /// taken from the snapshot as-is, not recomputed from the board, so
    /// `Game::from_snapshot(&game.snapshot())` round-trips every field
    /// exactly.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] if any grid has wrong dimensions, any
    /// entry is not a valid mark symbol, the player or status strings are
    /// unknown, a selector is out of range, or a micro selector appears
    /// without a macro selector. On error no state is produced at all.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let board = parse_grid::<27>("board", &snapshot.board)?;
        let micro_winners = parse_grid::<9>("blocks_3x3", &snapshot.blocks_3x3)?;
        let macro_winners = parse_mark_grid("blocks_9x9", &snapshot.blocks_9x9)?;

        if snapshot.blocks_state_3x3.len() != 9
            || snapshot.blocks_state_3x3.iter().any(|row| row.len() != 9)
        {
            return Err(SnapshotError::BadDimensions {
                field: "blocks_state_3x3",
            });
        }
        let mut micro_grids = [[MarkGrid::default(); 9]; 9];
        for (row, source) in micro_grids.iter_mut().zip(&snapshot.blocks_state_3x3) {
            for (grid, rows) in row.iter_mut().zip(source) {
                *grid = parse_mark_grid("blocks_state_3x3", rows)?;
            }
        }

        if snapshot.blocks_state_9x9.len() != 3
            || snapshot.blocks_state_9x9.iter().any(|row| row.len() != 3)
        {
            return Err(SnapshotError::BadDimensions {
                field: "blocks_state_9x9",
            });
        }
        let mut macro_grids: TriGrid<MarkGrid> = TriGrid::default();
        for (slot, rows) in Slot::ALL.iter().zip(
            snapshot
                .blocks_state_9x9
                .iter()
                .flat_map(|row| row.iter()),
        ) {
            macro_grids[*slot] = parse_mark_grid("blocks_state_9x9", rows)?;
        }

        let current_player = Mark::from_symbol(&snapshot.current_player).ok_or_else(|| {
            SnapshotError::BadCurrentPlayer {
                symbol: snapshot.current_player.clone(),
            }
        })?;
        let status =
            crate::Status::from_symbol(&snapshot.status).ok_or_else(|| SnapshotError::BadStatus {
                symbol: snapshot.status.clone(),
            })?;

        let active_macro = parse_selector("active_9x9_block", snapshot.active_9x9_block)?;
        let active_micro = parse_selector("active_3x3_block", snapshot.active_3x3_block)?;
        let constraint = Constraint::from_selectors(active_macro, active_micro)
            .ok_or(SnapshotError::MicroSelectorWithoutMacro)?;

        Ok(Self {
            board,
            micro_grids,
            micro_winners,
            macro_grids,
            macro_winners,
            current_player,
            constraint,
            status,
        })
    }

    /// Replaces this game's state with the snapshot's, all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns the [`SnapshotError`] from [`Game::from_snapshot`]; on error
    /// the current state is left untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        *self = Self::from_snapshot(snapshot)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_game() -> Game {
        let mut game = Game::new();
        for (row, col) in [(2, 0), (6, 0), (2, 1), (6, 3), (2, 2), (6, 6)] {
            assert!(game.make_move(row, col));
        }
        game
    }

    #[test]
    fn test_fresh_game_snapshot_shape() {
        let snapshot = Game::new().snapshot();
        assert_eq!(snapshot.board.len(), 27);
        assert!(snapshot.board.iter().all(|row| row.len() == 27));
        assert_eq!(snapshot.blocks_3x3.len(), 9);
        assert_eq!(snapshot.blocks_9x9.len(), 3);
        assert_eq!(snapshot.blocks_state_3x3.len(), 9);
        assert_eq!(snapshot.blocks_state_9x9.len(), 3);
        assert_eq!(snapshot.current_player, "X");
        assert_eq!(snapshot.status, "playing");
        assert_eq!(snapshot.active_9x9_block, None);
        assert_eq!(snapshot.active_3x3_block, None);
        assert!(
            snapshot
                .board
                .iter()
                .all(|row| row.iter().all(String::is_empty))
        );
    }

    #[test]
    fn test_round_trip_after_play() {
        let game = played_game();
        let restored = Game::from_snapshot(&game.snapshot()).unwrap();
        assert_eq!(restored, game);

        // The restored game keeps playing identically.
        let mut a = game;
        let mut b = restored;
        let moves = a.valid_moves();
        assert_eq!(moves, b.valid_moves());
        let pos = moves[0];
        assert_eq!(a.play(pos), b.play(pos));
        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshot_records_micro_win() {
        let snapshot = played_game().snapshot();
        assert_eq!(snapshot.blocks_3x3[0][0], "X");
        assert_eq!(snapshot.blocks_state_9x9[0][0][0][0], "X");
        assert_eq!(snapshot.blocks_state_3x3[0][0][2][2], "X");
        assert_eq!(snapshot.active_9x9_block, Some((0, 0)));
        // Redirect target micro (0, 0) is won, so the micro selector is
        // free.
        assert_eq!(snapshot.active_3x3_block, None);
    }

    #[test]
    fn test_restore_replaces_state() {
        let mut game = Game::new();
        game.restore(&played_game().snapshot()).unwrap();
        assert_eq!(game, played_game());
    }

    #[test]
    fn test_restore_on_error_keeps_state() {
        let mut bad = played_game().snapshot();
        bad.status = "draw".to_owned();

        let mut game = Game::new();
        assert_eq!(
            game.restore(&bad),
            Err(SnapshotError::BadStatus {
                symbol: "draw".to_owned(),
            })
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_bad_dimensions_rejected() {
        let mut snapshot = Game::new().snapshot();
        snapshot.board.pop();
        assert_eq!(
            Game::from_snapshot(&snapshot),
            Err(SnapshotError::BadDimensions { field: "board" })
        );

        let mut snapshot = Game::new().snapshot();
        snapshot.blocks_state_3x3[4].pop();
        assert_eq!(
            Game::from_snapshot(&snapshot),
            Err(SnapshotError::BadDimensions {
                field: "blocks_state_3x3",
            })
        );
    }

    #[test]
    fn test_bad_mark_symbol_rejected() {
        let mut snapshot = Game::new().snapshot();
        snapshot.blocks_3x3[4][4] = "Z".to_owned();
        assert_eq!(
            Game::from_snapshot(&snapshot),
            Err(SnapshotError::BadMarkSymbol {
                field: "blocks_3x3",
                symbol: "Z".to_owned(),
            })
        );
    }

    #[test]
    fn test_bad_player_rejected() {
        let mut snapshot = Game::new().snapshot();
        snapshot.current_player = "Y".to_owned();
        assert!(matches!(
            Game::from_snapshot(&snapshot),
            Err(SnapshotError::BadCurrentPlayer { .. })
        ));
    }

    #[test]
    fn test_selector_out_of_range_rejected() {
        let mut snapshot = Game::new().snapshot();
        snapshot.active_9x9_block = Some((3, 0));
        assert_eq!(
            Game::from_snapshot(&snapshot),
            Err(SnapshotError::SelectorOutOfRange {
                field: "active_9x9_block",
            })
        );
    }

    #[test]
    fn test_micro_selector_without_macro_rejected() {
        let mut snapshot = Game::new().snapshot();
        snapshot.active_3x3_block = Some((1, 1));
        assert_eq!(
            Game::from_snapshot(&snapshot),
            Err(SnapshotError::MicroSelectorWithoutMacro)
        );
    }
}
