mod bootstrap;
mod history;
mod number;

pub use bootstrap::*;
pub use history::*;

use crate::DatabaseError;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load_bootstrap(path: &Path) -> Result<BootstrapEntity, DatabaseError> {
        Self::read_json(path)?.ok_or_else(|| DatabaseError::Io {
            path: path.to_path_buf(),
            source: ErrorKind::NotFound.into(),
        })
    }

    /// `None` when the player has no cached history file
    pub fn load_history(
        players_dir: &Path,
        player_id: u32,
    ) -> Result<Option<PlayerHistoryEntity>, DatabaseError> {
        Self::read_json(&Self::history_path(players_dir, player_id))
    }

    pub fn history_path(players_dir: &Path, player_id: u32) -> PathBuf {
        players_dir.join(format!("{}.json", player_id))
    }

    fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, DatabaseError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(DatabaseError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| DatabaseError::Json {
                path: path.to_path_buf(),
                source,
            })
    }
}
