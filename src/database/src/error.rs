use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Player {player_id} references unknown club code {team_code}")]
    UnknownClub { player_id: u32, team_code: u32 },

    #[error("Expected 2 pinned goalkeepers named {names:?}, found {found}")]
    PinnedGoalkeepers { names: Vec<String>, found: usize },
}
