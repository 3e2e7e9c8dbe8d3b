mod error;
mod generators;
mod loaders;

pub use error::*;
pub use generators::*;
pub use loaders::*;

use log::info;
use std::path::PathBuf;

pub struct DatabaseEntity {
    pub tournament: TournamentEntity,
    pub predictions: PredictionsEntity,
}

/// Where to read data from. `None` falls back to the embedded JSON.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub tournament_path: Option<PathBuf>,
    pub predictions_path: Option<PathBuf>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load(config: &DatabaseConfig) -> Result<DatabaseEntity, DatabaseError> {
        let tournament = match &config.tournament_path {
            Some(path) => TournamentLoader::load_from_path(path)?,
            None => TournamentLoader::load()?,
        };

        let predictions = match &config.predictions_path {
            Some(path) => PredictionLoader::load_from_path(path)?,
            None => PredictionLoader::load()?,
        };

        info!(
            "database loaded: {} ({} groups, {} users)",
            tournament.name,
            tournament.groups.len(),
            predictions.users.len()
        );

        Ok(DatabaseEntity {
            tournament,
            predictions,
        })
    }
}
