//! JSON persistence for triactoe games.
//!
//! This crate is the external persistence collaborator of the engine: it
//! saves and loads complete game states as JSON files in a saves directory,
//! carrying player display names and a save timestamp alongside the
//! engine's [`Snapshot`]. The on-disk layout keeps every snapshot field at
//! the top level of the JSON object, so files written by earlier
//! incarnations of the game load unchanged.
//!
//! Malformed or missing data surfaces as a [`StoreError`]; a load either
//! yields a fully reconstructed [`Game`] or nothing at all.
//!
//! # Examples
//!
//! ```no_run
//! use triactoe_engine::Game;
//! use triactoe_store::{GameStore, SaveMeta};
//!
//! let store = GameStore::new("game_saves");
//! let mut game = Game::new();
//! assert!(game.make_move(0, 0));
//!
//! let meta = SaveMeta::new("Alice", "Bob");
//! let path = store.save(&game, &meta, None)?;
//! let (restored, meta) = store.load(&path)?;
//! assert_eq!(meta.player_x_name, "Alice");
//! # Ok::<(), triactoe_store::StoreError>(())
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};
use derive_more::{Display, Error, From};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use triactoe_engine::{Game, Snapshot, SnapshotError};

/// Default directory name for save files.
pub const DEFAULT_SAVES_DIR: &str = "game_saves";

/// Why a save or load failed.
///
/// Loads are all-or-nothing: any of these errors means no game state was
/// produced or applied.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    /// Reading or writing the save file failed.
    #[display("save file I/O failed: {_0}")]
    Io(std::io::Error),
    /// The file is not well-formed JSON or is missing required fields.
    #[display("save file is malformed: {_0}")]
    Malformed(serde_json::Error),
    /// The JSON parsed, but the snapshot inside it failed validation.
    #[display("save file holds an invalid game state: {_0}")]
    InvalidState(SnapshotError),
}

/// Player display names carried alongside the engine state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMeta {
    /// Display name of the X player.
    pub player_x_name: String,
    /// Display name of the O player.
    pub player_o_name: String,
}

impl SaveMeta {
    /// Creates metadata from the two player names.
    #[must_use]
    pub fn new(player_x_name: impl Into<String>, player_o_name: impl Into<String>) -> Self {
        Self {
            player_x_name: player_x_name.into(),
            player_o_name: player_o_name.into(),
        }
    }
}

/// A save file listed by [`GameStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEntry {
    /// File name within the saves directory.
    pub filename: String,
    /// Full path to the save file.
    pub path: PathBuf,
    /// When the game was saved, as local wall-clock time.
    pub saved_at: NaiveDateTime,
}

/// The complete on-disk record: metadata plus the flattened snapshot.
#[derive(Debug, Serialize, Deserialize)]
struct SaveFile {
    player_x_name: String,
    player_o_name: String,
    // Local wall-clock time without an offset, as established save files
    // store it.
    saved_at: NaiveDateTime,
    #[serde(flatten)]
    snapshot: Snapshot,
}

/// Saves, loads, and lists games in a directory of JSON files.
///
/// File names default to `game_YYYYMMDD_HHMMSS.json` derived from the save
/// time; callers may supply an explicit name instead.
#[derive(Debug, Clone)]
pub struct GameStore {
    saves_dir: PathBuf,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVES_DIR)
    }
}

impl GameStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on the first save.
    #[must_use]
    pub fn new(saves_dir: impl Into<PathBuf>) -> Self {
        Self {
            saves_dir: saves_dir.into(),
        }
    }

    /// Returns the saves directory.
    #[must_use]
    pub fn saves_dir(&self) -> &Path {
        &self.saves_dir
    }

    /// Saves a game, returning the path of the written file.
    ///
    /// `filename` overrides the timestamp-derived default name; it is used
    /// verbatim within the saves directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created or the
    /// file cannot be written.
    pub fn save(
        &self,
        game: &Game,
        meta: &SaveMeta,
        filename: Option<&str>,
    ) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.saves_dir)?;

        let saved_at = Local::now().naive_local();
        let filename = filename.map_or_else(
            || format!("game_{}.json", saved_at.format("%Y%m%d_%H%M%S")),
            ToOwned::to_owned,
        );
        let path = self.saves_dir.join(filename);

        let record = SaveFile {
            player_x_name: meta.player_x_name.clone(),
            player_o_name: meta.player_o_name.clone(),
            saved_at,
            snapshot: game.snapshot(),
        };
        let json = serde_json::to_string_pretty(&record).map_err(StoreError::Malformed)?;
        fs::write(&path, json)?;

        info!("saved game to {}", path.display());
        Ok(path)
    }

    /// Loads a game and its metadata from a save file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read,
    /// [`StoreError::Malformed`] if it is not valid JSON for the save
    /// layout, or [`StoreError::InvalidState`] if the embedded snapshot
    /// fails the engine's validation. No partially loaded state escapes.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Game, SaveMeta), StoreError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let record: SaveFile = serde_json::from_str(&json)?;
        let game = Game::from_snapshot(&record.snapshot)?;

        debug!("loaded game from {}", path.display());
        let meta = SaveMeta {
            player_x_name: record.player_x_name,
            player_o_name: record.player_o_name,
        };
        Ok((game, meta))
    }

    /// Lists all `.json` save files, newest first by save timestamp.
    ///
    /// Files that cannot be read or parsed are skipped rather than failing
    /// the whole listing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the saves directory cannot be read.
    /// A missing directory yields an empty list.
    pub fn list(&self) -> Result<Vec<SaveEntry>, StoreError> {
        let entries = match fs::read_dir(&self.saves_dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut saves = Vec::new();
        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Ok(json) = fs::read_to_string(&path) else {
                continue;
            };
            let Ok(record) = serde_json::from_str::<SaveFile>(&json) else {
                debug!("skipping unreadable save {}", path.display());
                continue;
            };
            let filename = entry.file_name().to_string_lossy().into_owned();
            saves.push(SaveEntry {
                filename,
                path,
                saved_at: record.saved_at,
            });
        }

        saves.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(saves)
    }
}
