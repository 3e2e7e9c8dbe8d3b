use crate::group::{GROUP_FIXTURES, GROUP_SIZE, ScoreSheet, validate_score_sheet};
use crate::settings::PointsSystem;
use crate::{StandingsError, StandingsResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    pub played: u8,
    pub won: u8,
    pub drawn: u8,
    pub lost: u8,
    pub goals_for: u16,
    pub goals_against: u16,
    pub points: u32,
}

impl StandingsRow {
    pub fn new(team: String) -> Self {
        StandingsRow {
            team,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for as i32 - self.goals_against as i32
    }

    /// (points, goal difference, goals for), compared descending when ranking.
    pub fn rank_key(&self) -> (u32, i32, u16) {
        (self.points, self.goal_difference(), self.goals_for)
    }

    /// Ordering that puts the better row first.
    pub fn compare_rank(a: &StandingsRow, b: &StandingsRow) -> Ordering {
        b.rank_key().cmp(&a.rank_key())
    }

    fn record(&mut self, scored: u8, conceded: u8, points: &PointsSystem) {
        self.played += 1;
        self.goals_for += scored as u16;
        self.goals_against += conceded as u16;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.won += 1;
                self.points += points.win as u32;
            }
            Ordering::Equal => {
                self.drawn += 1;
                self.points += points.draw as u32;
            }
            Ordering::Less => {
                self.lost += 1;
                self.points += points.loss as u32;
            }
        }
    }
}

impl Display for StandingsRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:<24} {:>2} {:>2} {:>2} {:>2} {:>3}:{:<3} {:>+4} {:>3}",
            self.team,
            self.played,
            self.won,
            self.drawn,
            self.lost,
            self.goals_for,
            self.goals_against,
            self.goal_difference(),
            self.points
        )
    }
}

pub fn compute_standings(teams: &[String], scores: &ScoreSheet) -> StandingsResult<Vec<StandingsRow>> {
    compute_standings_with(&PointsSystem::default(), teams, scores)
}

/// Builds the ranked table of a four-team group. Fixtures without a score
/// are skipped. Rows are sorted by (points, goal difference, goals for)
/// with a stable sort, so rows tied on all three keep roster order.
pub fn compute_standings_with(
    points: &PointsSystem,
    teams: &[String],
    scores: &ScoreSheet,
) -> StandingsResult<Vec<StandingsRow>> {
    validate_roster(teams)?;
    validate_score_sheet(scores)?;

    let mut rows: Vec<StandingsRow> = teams.iter().cloned().map(StandingsRow::new).collect();

    for (index, score) in scores {
        let fixture = GROUP_FIXTURES[*index];

        rows[fixture.home].record(score.home_goals, score.away_goals, points);
        rows[fixture.away].record(score.away_goals, score.home_goals, points);

        debug!(
            "fixture {}: {} {} {} ({:?})",
            index,
            teams[fixture.home],
            score,
            teams[fixture.away],
            score.outcome()
        );
    }

    rows.sort_by(StandingsRow::compare_rank);

    Ok(rows)
}

pub fn validate_roster(teams: &[String]) -> StandingsResult<()> {
    if teams.len() != GROUP_SIZE {
        return Err(StandingsError::WrongTeamCount {
            expected: GROUP_SIZE,
            actual: teams.len(),
        });
    }

    let mut seen = HashSet::with_capacity(GROUP_SIZE);
    for team in teams {
        if !seen.insert(team.as_str()) {
            return Err(StandingsError::DuplicateTeam(team.clone()));
        }
    }

    Ok(())
}
