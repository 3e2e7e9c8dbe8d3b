use crate::DatabaseError;
use crate::loaders::{ScoreEntity, read_file};
use game_core::OutrightPick;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const STATIC_PREDICTIONS_JSON: &str = include_str!("../data/predictions.json");

#[derive(Debug, Deserialize)]
pub struct PredictionsEntity {
    pub users: Vec<UserPredictionEntity>,
}

#[derive(Debug, Deserialize)]
pub struct UserPredictionEntity {
    pub user: String,
    #[serde(default)]
    pub scores: BTreeMap<String, BTreeMap<usize, ScoreEntity>>,
    #[serde(default)]
    pub outrights: Vec<OutrightPick>,
}

pub struct PredictionLoader;

impl PredictionLoader {
    pub fn load() -> Result<PredictionsEntity, DatabaseError> {
        Self::parse(STATIC_PREDICTIONS_JSON)
    }

    pub fn load_from_path(path: &Path) -> Result<PredictionsEntity, DatabaseError> {
        debug!("loading predictions from {}", path.display());
        Self::parse(&read_file(path)?)
    }

    pub fn parse(json: &str) -> Result<PredictionsEntity, DatabaseError> {
        Ok(serde_json::from_str(json)?)
    }
}
