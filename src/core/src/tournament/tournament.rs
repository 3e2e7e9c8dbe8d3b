use crate::bracket::{QualificationResult, compute_qualification_with};
use crate::group::{FixtureScore, Group, GroupId, ScoreSheet, StandingsRow};
use crate::prediction::{Leaderboard, Market, UserPredictions};
use crate::settings::TournamentSettings;
use crate::{StandingsError, StandingsResult};
use chrono::NaiveDateTime;
use log::{debug, info, warn};
use std::collections::BTreeMap;

pub type GroupStandings = BTreeMap<GroupId, Vec<StandingsRow>>;

#[derive(Debug, Clone)]
pub struct Tournament {
    pub name: String,
    pub settings: TournamentSettings,
    groups: BTreeMap<GroupId, Group>,
    outright_results: BTreeMap<Market, String>,
}

impl Tournament {
    pub fn new(name: String, settings: TournamentSettings, groups: Vec<Group>) -> StandingsResult<Self> {
        settings.validate()?;

        let mut by_id = BTreeMap::new();

        for group in groups {
            if by_id.contains_key(&group.id) {
                return Err(StandingsError::DuplicateGroup(group.id));
            }
            by_id.insert(group.id.clone(), group);
        }

        Ok(Tournament {
            name,
            settings,
            groups: by_id,
            outright_results: BTreeMap::new(),
        })
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    pub fn outright_results(&self) -> &BTreeMap<Market, String> {
        &self.outright_results
    }

    /// Finalized scores of every group, keyed by group id.
    pub fn results(&self) -> BTreeMap<GroupId, ScoreSheet> {
        self.groups
            .iter()
            .map(|(id, group)| (id.clone(), group.results().clone()))
            .collect()
    }

    pub fn finalize_result(&mut self, group: &str, fixture: usize, score: FixtureScore) -> StandingsResult<Option<FixtureScore>> {
        self.groups
            .get_mut(group)
            .ok_or_else(|| StandingsError::UnknownGroup(group.to_string()))?
            .finalize(fixture, score)
    }

    pub fn finalize_outright(&mut self, market: Market, winner: String) -> Option<String> {
        info!("{:?} finalized: {}", market, winner);
        self.outright_results.insert(market, winner)
    }

    /// A fixture takes predictions until it has a result and, when its
    /// kick-off is known, until the prediction window closes.
    pub fn accepts_prediction(&self, group: &str, fixture: usize, now: NaiveDateTime) -> StandingsResult<bool> {
        let group = self
            .groups
            .get(group)
            .ok_or_else(|| StandingsError::UnknownGroup(group.to_string()))?;

        if group.fixture_teams(fixture).is_none() {
            return Err(StandingsError::FixtureOutOfRange {
                index: fixture,
                fixtures: crate::group::GROUP_FIXTURE_COUNT,
            });
        }

        if group.is_finalized(fixture) {
            return Ok(false);
        }

        Ok(group
            .prediction_window(fixture, self.settings.lock_minutes_before)
            .is_none_or(|window| window.is_open(now)))
    }

    pub fn standings(&self) -> StandingsResult<GroupStandings> {
        self.groups
            .iter()
            .map(|(id, group)| Ok((id.clone(), group.standings(&self.settings.points)?)))
            .collect()
    }

    pub fn qualification(&self) -> StandingsResult<QualificationResult> {
        let standings = self.standings()?;
        Ok(compute_qualification_with(&standings, self.settings.thirds_to_advance))
    }

    /// Standings built from a user's predicted scores. Groups the user has
    /// not predicted yet come out as empty tables in roster order; predictions
    /// for groups outside the tournament are skipped, as on the leaderboard.
    pub fn predicted_standings(&self, predictions: &UserPredictions) -> StandingsResult<GroupStandings> {
        let empty = ScoreSheet::new();

        for group in predictions.scores.keys() {
            if !self.groups.contains_key(group) {
                warn!("{}: skipping predictions for unknown group {}", predictions.user, group);
            }
        }

        self.groups
            .iter()
            .map(|(id, group)| {
                let predicted = predictions.group_scores(id).unwrap_or(&empty);
                Ok((id.clone(), group.predicted_standings(&self.settings.points, predicted)?))
            })
            .collect()
    }

    pub fn predicted_qualification(&self, predictions: &UserPredictions) -> StandingsResult<QualificationResult> {
        debug!("computing predicted bracket for {}", predictions.user);

        let standings = self.predicted_standings(predictions)?;
        Ok(compute_qualification_with(&standings, self.settings.thirds_to_advance))
    }

    pub fn leaderboard(&self, predictions: &[UserPredictions]) -> Leaderboard {
        Leaderboard::build(
            &self.settings.scoring,
            predictions,
            &self.results(),
            &self.outright_results,
        )
    }
}
