use crate::DatabaseError;
use crate::loaders::read_file;
use chrono::NaiveDateTime;
use game_core::{Market, TournamentSettings};
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const STATIC_TOURNAMENT_JSON: &str = include_str!("../data/tournament.json");

#[derive(Debug, Deserialize)]
pub struct TournamentEntity {
    pub name: String,
    #[serde(default)]
    pub settings: TournamentSettings,
    pub groups: Vec<GroupEntity>,
    #[serde(default)]
    pub outright_results: Vec<OutrightResultEntity>,
}

#[derive(Debug, Deserialize)]
pub struct GroupEntity {
    pub id: String,
    pub teams: Vec<String>,
    #[serde(default)]
    pub results: BTreeMap<usize, ScoreEntity>,
    #[serde(default)]
    pub kickoffs: BTreeMap<usize, NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoreEntity {
    pub home: u8,
    pub away: u8,
}

#[derive(Debug, Deserialize)]
pub struct OutrightResultEntity {
    pub market: Market,
    pub winner: String,
}

pub struct TournamentLoader;

impl TournamentLoader {
    pub fn load() -> Result<TournamentEntity, DatabaseError> {
        Self::parse(STATIC_TOURNAMENT_JSON)
    }

    pub fn load_from_path(path: &Path) -> Result<TournamentEntity, DatabaseError> {
        debug!("loading tournament from {}", path.display());
        Self::parse(&read_file(path)?)
    }

    pub fn parse(json: &str) -> Result<TournamentEntity, DatabaseError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tournament_loads() {
        let tournament = TournamentLoader::load().unwrap();

        assert_eq!(tournament.name, "World Cup 2026");
        assert_eq!(tournament.groups.len(), 12);
        assert!(tournament.groups.iter().all(|g| g.teams.len() == 4));
        assert!(tournament.groups.iter().all(|g| g.kickoffs.len() == 6));
        assert_eq!(tournament.settings.thirds_to_advance, 8);
        assert_eq!(tournament.settings.lock_minutes_before, 15);
    }

    #[test]
    fn test_minimal_document() {
        let tournament = TournamentLoader::parse(
            r#"{ "name": "Cup", "groups": [ { "id": "A", "teams": ["a", "b", "c", "d"] } ],
                 "outright_results": [ { "market": { "Award": "Golden Boot" }, "winner": "Kane" } ] }"#,
        )
        .unwrap();

        assert_eq!(tournament.settings, TournamentSettings::default());
        assert!(tournament.groups[0].results.is_empty());
        assert_eq!(
            tournament.outright_results[0].market,
            Market::Award("Golden Boot".to_string())
        );
    }

    #[test]
    fn test_malformed_document() {
        let result = TournamentLoader::parse(r#"{ "name": "Cup" }"#);

        assert!(matches!(result, Err(DatabaseError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = TournamentLoader::load_from_path(Path::new("/nonexistent/tournament.json"));

        assert!(matches!(result, Err(DatabaseError::Io { .. })));
    }
}
