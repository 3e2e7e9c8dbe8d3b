use crate::group::{
    FixtureScore, GROUP_FIXTURE_COUNT, GroupFixture, ScoreSheet, StandingsRow, compute_standings_with,
    validate_roster, validate_score_sheet,
};
use crate::prediction::PredictionWindow;
use crate::settings::PointsSystem;
use crate::{StandingsError, StandingsResult};
use chrono::NaiveDateTime;
use log::debug;
use std::collections::BTreeMap;

pub type GroupId = String;

#[derive(Debug, Clone)]
pub struct Group {
    pub id: GroupId,
    teams: Vec<String>,
    results: ScoreSheet,
    kickoffs: BTreeMap<usize, NaiveDateTime>,
}

impl Group {
    pub fn new(id: GroupId, teams: Vec<String>) -> StandingsResult<Self> {
        validate_roster(&teams)?;

        Ok(Group {
            id,
            teams,
            results: ScoreSheet::new(),
            kickoffs: BTreeMap::new(),
        })
    }

    pub fn with_results(mut self, results: ScoreSheet) -> StandingsResult<Self> {
        validate_score_sheet(&results)?;
        self.results = results;
        Ok(self)
    }

    pub fn with_kickoffs(mut self, kickoffs: BTreeMap<usize, NaiveDateTime>) -> StandingsResult<Self> {
        if let Some(index) = kickoffs.keys().find(|index| **index >= GROUP_FIXTURE_COUNT) {
            return Err(StandingsError::FixtureOutOfRange {
                index: *index,
                fixtures: GROUP_FIXTURE_COUNT,
            });
        }
        self.kickoffs = kickoffs;
        Ok(self)
    }

    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn results(&self) -> &ScoreSheet {
        &self.results
    }

    /// Home and away team names of a fixture.
    pub fn fixture_teams(&self, index: usize) -> Option<(&str, &str)> {
        GroupFixture::get(index).map(|f| (self.teams[f.home].as_str(), self.teams[f.away].as_str()))
    }

    pub fn prediction_window(&self, index: usize, lock_minutes_before: i64) -> Option<PredictionWindow> {
        self.kickoffs
            .get(&index)
            .map(|kickoff| PredictionWindow::new(*kickoff, lock_minutes_before))
    }

    pub fn is_finalized(&self, index: usize) -> bool {
        self.results.contains_key(&index)
    }

    /// Records a final result, returning the score it replaced.
    pub fn finalize(&mut self, index: usize, score: FixtureScore) -> StandingsResult<Option<FixtureScore>> {
        if index >= GROUP_FIXTURE_COUNT {
            return Err(StandingsError::FixtureOutOfRange {
                index,
                fixtures: GROUP_FIXTURE_COUNT,
            });
        }

        debug!("group {}: fixture {} finalized as {}", self.id, index, score);

        Ok(self.results.insert(index, score))
    }

    pub fn standings(&self, points: &PointsSystem) -> StandingsResult<Vec<StandingsRow>> {
        compute_standings_with(points, &self.teams, &self.results)
    }

    /// Standings computed from someone's predicted scores instead of results.
    pub fn predicted_standings(&self, points: &PointsSystem, predicted: &ScoreSheet) -> StandingsResult<Vec<StandingsRow>> {
        compute_standings_with(points, &self.teams, predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn group() -> Group {
        Group::new(
            "A".to_string(),
            vec!["Mexico".to_string(), "South Africa".to_string(), "Korea Republic".to_string(), "Czechia".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_short_roster() {
        let result = Group::new("A".to_string(), vec!["Mexico".to_string()]);

        assert!(matches!(result, Err(StandingsError::WrongTeamCount { actual: 1, .. })));
    }

    #[test]
    fn test_fixture_teams() {
        let group = group();

        assert_eq!(group.fixture_teams(0), Some(("Mexico", "South Africa")));
        assert_eq!(group.fixture_teams(5), Some(("South Africa", "Korea Republic")));
        assert_eq!(group.fixture_teams(6), None);
    }

    #[test]
    fn test_finalize_replaces_previous_result() {
        let mut group = group();

        assert_eq!(group.finalize(0, FixtureScore::new(1, 0)).unwrap(), None);
        assert_eq!(
            group.finalize(0, FixtureScore::new(2, 0)).unwrap(),
            Some(FixtureScore::new(1, 0))
        );
        assert!(group.is_finalized(0));
        assert!(group.finalize(9, FixtureScore::new(0, 0)).is_err());
    }

    #[test]
    fn test_standings_use_results() {
        let mut group = group();
        group.finalize(1, FixtureScore::new(0, 2)).unwrap();

        let rows = group.standings(&PointsSystem::default()).unwrap();

        assert_eq!(rows[0].team, "Czechia");
        assert_eq!(rows[0].points, 3);
    }

    #[test]
    fn test_kickoffs_must_be_in_range() {
        let kickoff = NaiveDate::from_ymd_opt(2026, 6, 11).unwrap().and_hms_opt(19, 0, 0).unwrap();
        let mut kickoffs = BTreeMap::new();
        kickoffs.insert(6, kickoff);

        assert!(group().with_kickoffs(kickoffs).is_err());
    }

    #[test]
    fn test_prediction_window_only_for_scheduled_fixtures() {
        let kickoff = NaiveDate::from_ymd_opt(2026, 6, 11).unwrap().and_hms_opt(19, 0, 0).unwrap();
        let mut kickoffs = BTreeMap::new();
        kickoffs.insert(0, kickoff);
        let group = group().with_kickoffs(kickoffs).unwrap();

        assert_eq!(group.prediction_window(0, 15), Some(PredictionWindow::new(kickoff, 15)));
        assert_eq!(group.prediction_window(1, 15), None);
    }
}
