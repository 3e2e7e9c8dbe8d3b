use crate::loaders::{GroupEntity, ScoreEntity, UserPredictionEntity};
use crate::{DatabaseEntity, DatabaseError};
use game_core::{FixtureScore, Group, ScoreSheet, Tournament, UserPredictions};
use log::info;
use std::collections::BTreeMap;

pub struct GameData {
    pub tournament: Tournament,
    pub predictions: Vec<UserPredictions>,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> Result<GameData, DatabaseError> {
        let groups = data
            .tournament
            .groups
            .iter()
            .map(Self::generate_group)
            .collect::<Result<Vec<Group>, DatabaseError>>()?;

        let mut tournament = Tournament::new(
            data.tournament.name.clone(),
            data.tournament.settings.clone(),
            groups,
        )?;

        for outright in &data.tournament.outright_results {
            tournament.finalize_outright(outright.market.clone(), outright.winner.clone());
        }

        let predictions = data
            .predictions
            .users
            .iter()
            .map(Self::generate_predictions)
            .collect();

        info!(
            "generated {}: {} groups, {} users",
            tournament.name,
            data.tournament.groups.len(),
            data.predictions.users.len()
        );

        Ok(GameData {
            tournament,
            predictions,
        })
    }

    fn generate_group(group: &GroupEntity) -> Result<Group, DatabaseError> {
        let group = Group::new(group.id.clone(), group.teams.clone())?
            .with_results(Self::score_sheet(&group.results))?
            .with_kickoffs(group.kickoffs.clone())?;

        Ok(group)
    }

    fn generate_predictions(user: &UserPredictionEntity) -> UserPredictions {
        UserPredictions {
            user: user.user.clone(),
            scores: user
                .scores
                .iter()
                .map(|(group, scores)| (group.clone(), Self::score_sheet(scores)))
                .collect(),
            outrights: user.outrights.clone(),
        }
    }

    fn score_sheet(scores: &BTreeMap<usize, ScoreEntity>) -> ScoreSheet {
        scores
            .iter()
            .map(|(index, score)| (*index, FixtureScore::new(score.home, score.away)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::{PredictionLoader, TournamentLoader};
    use game_core::StandingsError;

    fn embedded() -> GameData {
        let data = DatabaseEntity {
            tournament: TournamentLoader::load().unwrap(),
            predictions: PredictionLoader::load().unwrap(),
        };

        DatabaseGenerator::generate(&data).unwrap()
    }

    #[test]
    fn test_embedded_standings() {
        let data = embedded();
        let standings = data.tournament.standings().unwrap();

        let group_a: Vec<(&str, u32)> = standings["A"].iter().map(|r| (r.team.as_str(), r.points)).collect();
        assert_eq!(
            group_a,
            vec![("Mexico", 6), ("Czechia", 4), ("Korea Republic", 1), ("South Africa", 0)]
        );
    }

    #[test]
    fn test_embedded_qualification() {
        let data = embedded();
        let qualification = data.tournament.qualification().unwrap();

        assert_eq!(qualification.groups.len(), 12);
        assert_eq!(qualification.ranked_thirds.len(), 12);
        assert_eq!(qualification.qualified_thirds.len(), 8);
        assert_eq!(qualification.knockout_teams().len(), 32);
    }

    #[test]
    fn test_embedded_leaderboard() {
        let data = embedded();
        let board = data.tournament.leaderboard(&data.predictions);

        let joao = board.entry("joao").unwrap();
        assert_eq!((joao.rank, joao.points, joao.exact_hits), (1, 15, 4));

        let marta = board.entry("marta").unwrap();
        assert_eq!((marta.rank, marta.points, marta.exact_hits), (2, 13, 3));
    }

    #[test]
    fn test_invalid_group_is_reported() {
        let data = DatabaseEntity {
            tournament: TournamentLoader::parse(r#"{ "name": "Cup", "groups": [ { "id": "A", "teams": ["a", "b"] } ] }"#)
                .unwrap(),
            predictions: PredictionLoader::parse(r#"{ "users": [] }"#).unwrap(),
        };

        let result = DatabaseGenerator::generate(&data);

        assert!(matches!(
            result,
            Err(DatabaseError::Invalid(StandingsError::WrongTeamCount { actual: 2, .. }))
        ));
    }

    #[test]
    fn test_out_of_range_lock_is_reported() {
        let data = DatabaseEntity {
            tournament: TournamentLoader::parse(
                r#"{ "name": "Cup", "settings": { "lock_minutes_before": 9223372036854775807 }, "groups": [] }"#,
            )
            .unwrap(),
            predictions: PredictionLoader::parse(r#"{ "users": [] }"#).unwrap(),
        };

        let result = DatabaseGenerator::generate(&data);

        assert!(matches!(
            result,
            Err(DatabaseError::Invalid(StandingsError::LockOutOfRange { value: i64::MAX, .. }))
        ));
    }
}
