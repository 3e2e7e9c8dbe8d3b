use crate::group::GROUP_FIXTURE_COUNT;
use crate::{StandingsError, StandingsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

/// Sparse fixture index -> score mapping. A missing index is a fixture
/// nobody has played or predicted yet.
pub type ScoreSheet = BTreeMap<usize, FixtureScore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixtureScore {
    pub home_goals: u8,
    pub away_goals: u8,
}

impl FixtureScore {
    pub fn new(home_goals: u8, away_goals: u8) -> Self {
        FixtureScore {
            home_goals,
            away_goals,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => MatchOutcome::HomeWin,
            std::cmp::Ordering::Less => MatchOutcome::AwayWin,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }
}

impl Display for FixtureScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-{}", self.home_goals, self.away_goals)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

pub fn validate_score_sheet(scores: &ScoreSheet) -> StandingsResult<()> {
    match scores.keys().find(|index| **index >= GROUP_FIXTURE_COUNT) {
        Some(index) => Err(StandingsError::FixtureOutOfRange {
            index: *index,
            fixtures: GROUP_FIXTURE_COUNT,
        }),
        None => Ok(()),
    }
}
