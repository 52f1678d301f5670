use crate::DatabaseError;
use crate::loaders::{BootstrapEntity, DatabaseLoader, ElementEntity};
use fpl_core::{Player, PlayerSource, PlayerStatistics};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "resources/fpl_database.json";
pub const DEFAULT_PLAYERS_DIR: &str = "resources/players";
pub const DEFAULT_MIN_MINUTES: u32 = 900;
pub const DEFAULT_MIN_SELECTED_PERCENT: f32 = 2.0;
pub const DEFAULT_PINNED_GOALKEEPERS: [&str; 2] = ["Ryan", "Nyland"];

#[derive(Debug, Clone)]
pub struct RepositorySettings {
    pub database_path: PathBuf,
    pub players_dir: PathBuf,
    /// Outfield players below this many minutes last season are left out
    pub min_minutes: u32,
    /// Players selected by this share of managers or fewer are left out
    pub min_selected_percent: f32,
    pub pinned_goalkeepers: Vec<String>,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        RepositorySettings {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            players_dir: PathBuf::from(DEFAULT_PLAYERS_DIR),
            min_minutes: DEFAULT_MIN_MINUTES,
            min_selected_percent: DEFAULT_MIN_SELECTED_PERCENT,
            pinned_goalkeepers: DEFAULT_PINNED_GOALKEEPERS
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

/// Eligible players keyed by id, so iteration follows ascending id
#[derive(Debug)]
pub struct PlayerRepository {
    players_by_id: BTreeMap<u32, Player>,
    pinned_ids: Vec<u32>,
}

impl PlayerRepository {
    pub fn load(settings: &RepositorySettings) -> Result<Self, DatabaseError> {
        let bootstrap = DatabaseLoader::load_bootstrap(&settings.database_path)?;

        Self::from_bootstrap(&bootstrap, settings, |player_id| {
            let history = DatabaseLoader::load_history(&settings.players_dir, player_id)?;
            Ok(history.and_then(|h| h.previous_season().map(PlayerStatistics::from)))
        })
    }

    /// Builds the repository from parsed bootstrap data; `load_statistics` yields the previous
    /// season of a player, or `None` when nothing is known about it
    pub fn from_bootstrap<F>(
        bootstrap: &BootstrapEntity,
        settings: &RepositorySettings,
        mut load_statistics: F,
    ) -> Result<Self, DatabaseError>
    where
        F: FnMut(u32) -> Result<Option<PlayerStatistics>, DatabaseError>,
    {
        let mut players_by_id = BTreeMap::new();

        for element in &bootstrap.elements {
            if element.selected_by_percent <= settings.min_selected_percent {
                continue;
            }

            let club = bootstrap
                .club_name(element.team_code)
                .ok_or(DatabaseError::UnknownClub {
                    player_id: element.id,
                    team_code: element.team_code,
                })?;

            let statistics = match load_statistics(element.id)? {
                Some(statistics) => statistics,
                None => {
                    warn!("Found no stats for {}", element.web_name);
                    PlayerStatistics::default()
                }
            };

            let player = Self::build_player(element, club, statistics);

            if player.statistics.minutes_played >= settings.min_minutes || player.is_goalkeeper() {
                players_by_id.insert(player.id, player);
            } else {
                debug!(
                    "Skipping {}: {} minutes played",
                    player.name, player.statistics.minutes_played
                );
            }
        }

        let pinned_ids: Vec<u32> = players_by_id
            .values()
            .filter(|p| settings.pinned_goalkeepers.contains(&p.name))
            .map(|p| p.id)
            .collect();

        if pinned_ids.len() != 2 {
            return Err(DatabaseError::PinnedGoalkeepers {
                names: settings.pinned_goalkeepers.clone(),
                found: pinned_ids.len(),
            });
        }

        info!(
            "Loaded {} eligible players out of {}",
            players_by_id.len(),
            bootstrap.elements.len()
        );

        Ok(PlayerRepository {
            players_by_id,
            pinned_ids,
        })
    }

    pub fn player_by_id(&self, player_id: u32) -> Option<&Player> {
        self.players_by_id.get(&player_id)
    }

    pub fn len(&self) -> usize {
        self.players_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players_by_id.is_empty()
    }

    fn build_player(element: &ElementEntity, club: &str, statistics: PlayerStatistics) -> Player {
        Player {
            id: element.id,
            name: element.web_name.clone(),
            position: element.element_type,
            cost: element.now_cost,
            club: club.to_string(),
            selected_by_percent: element.selected_by_percent,
            form: element.form,
            statistics,
        }
    }
}

impl PlayerSource for PlayerRepository {
    fn players(&self) -> Vec<&Player> {
        self.players_by_id.values().collect()
    }

    fn pinned_goalkeepers(&self) -> Vec<&Player> {
        self.pinned_ids
            .iter()
            .filter_map(|id| self.players_by_id.get(id))
            .collect()
    }
}
