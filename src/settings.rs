use fpl_core::{
    DEFAULT_BUDGET, DEFAULT_MAX_PLAYERS_PER_CLUB, DEFAULT_TRIALS, GeneratorSettings, SquadRules,
};
use fpl_database::{
    DEFAULT_DATABASE_PATH, DEFAULT_MIN_MINUTES, DEFAULT_MIN_SELECTED_PERCENT, DEFAULT_PLAYERS_DIR,
    RepositorySettings,
};
use log::warn;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Everything the binary reads from the environment
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub repository: RepositorySettings,
    pub generator: GeneratorSettings,
    pub seed: Option<u64>,
}

impl AppSettings {
    pub fn from_env() -> Self {
        let pinned_goalkeepers = env::var("FPL_PINNED_GOALKEEPERS")
            .map(|names| {
                names
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| RepositorySettings::default().pinned_goalkeepers);

        let repository = RepositorySettings {
            database_path: PathBuf::from(
                env::var("FPL_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            ),
            players_dir: PathBuf::from(
                env::var("FPL_PLAYERS_DIR").unwrap_or_else(|_| DEFAULT_PLAYERS_DIR.to_string()),
            ),
            min_minutes: parse_var("FPL_MIN_MINUTES").unwrap_or(DEFAULT_MIN_MINUTES),
            min_selected_percent: parse_var("FPL_MIN_SELECTED_PERCENT")
                .unwrap_or(DEFAULT_MIN_SELECTED_PERCENT),
            pinned_goalkeepers,
        };

        let generator = GeneratorSettings {
            trials: parse_var("FPL_TRIALS").unwrap_or(DEFAULT_TRIALS),
            rules: SquadRules::new(
                parse_var("FPL_BUDGET").unwrap_or(DEFAULT_BUDGET),
                DEFAULT_MAX_PLAYERS_PER_CLUB,
            ),
        };

        AppSettings {
            repository,
            generator,
            seed: parse_var("FPL_SEED"),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;

    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {}={}: not a valid value", name, value);
            None
        }
    }
}
