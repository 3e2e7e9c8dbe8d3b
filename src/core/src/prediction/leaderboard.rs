use crate::group::{GroupId, ScoreSheet};
use crate::prediction::{Market, PredictionHit, score_match, score_outright};
use crate::settings::ScoringRules;
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutrightPick {
    pub market: Market,
    pub pick: String,
}

/// Everything one user has predicted for a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPredictions {
    pub user: String,
    #[serde(default)]
    pub scores: BTreeMap<GroupId, ScoreSheet>,
    #[serde(default)]
    pub outrights: Vec<OutrightPick>,
}

impl UserPredictions {
    pub fn new(user: String) -> Self {
        UserPredictions {
            user,
            ..Default::default()
        }
    }

    pub fn group_scores(&self, group: &str) -> Option<&ScoreSheet> {
        self.scores.get(group)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user: String,
    pub points: u32,
    pub exact_hits: u32,
    pub outcome_hits: u32,
    pub outright_hits: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Scores every user against finalized results. Users are ordered by
    /// points, then exact hits, then name; users level on points and exact
    /// hits share a rank and the next rank is skipped (1, 1, 3).
    pub fn build(
        rules: &ScoringRules,
        predictions: &[UserPredictions],
        results: &BTreeMap<GroupId, ScoreSheet>,
        outright_results: &BTreeMap<Market, String>,
    ) -> Self {
        let sorted = predictions
            .iter()
            .map(|user| Self::tally(rules, user, results, outright_results))
            .sorted_by(|a, b| {
                b.points
                    .cmp(&a.points)
                    .then(b.exact_hits.cmp(&a.exact_hits))
                    .then(a.user.cmp(&b.user))
            });

        let mut entries = Vec::with_capacity(predictions.len());
        let mut position = 1;

        let chunks = sorted.chunk_by(|entry| (entry.points, entry.exact_hits));
        for (_, chunk) in &chunks {
            let chunk: Vec<LeaderboardEntry> = chunk.collect();
            let size = chunk.len();

            entries.extend(chunk.into_iter().map(|entry| LeaderboardEntry {
                rank: position,
                ..entry
            }));

            position += size;
        }

        Leaderboard { entries }
    }

    pub fn entry(&self, user: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|entry| entry.user == user)
    }

    fn tally(
        rules: &ScoringRules,
        user: &UserPredictions,
        results: &BTreeMap<GroupId, ScoreSheet>,
        outright_results: &BTreeMap<Market, String>,
    ) -> LeaderboardEntry {
        let mut entry = LeaderboardEntry {
            rank: 0,
            user: user.user.clone(),
            points: 0,
            exact_hits: 0,
            outcome_hits: 0,
            outright_hits: 0,
        };

        for (group, predicted_sheet) in &user.scores {
            let Some(actual_sheet) = results.get(group) else {
                warn!("{}: skipping predictions for unknown group {}", user.user, group);
                continue;
            };

            for (index, predicted) in predicted_sheet {
                let Some(actual) = actual_sheet.get(index) else {
                    continue;
                };

                let hit = score_match(predicted, actual);
                match hit {
                    PredictionHit::Exact => entry.exact_hits += 1,
                    PredictionHit::Outcome => entry.outcome_hits += 1,
                    PredictionHit::Miss => {}
                }
                entry.points = entry.points.saturating_add(hit.points(rules));
            }
        }

        for outright in &user.outrights {
            let winner = outright_results.get(&outright.market).map(String::as_str);
            let points = score_outright(rules, &outright.market, &outright.pick, winner);
            if points > 0 {
                entry.outright_hits += 1;
                entry.points = entry.points.saturating_add(points);
            }
        }

        debug!(
            "{}: {} points ({} exact, {} outcome, {} outright)",
            entry.user, entry.points, entry.exact_hits, entry.outcome_hits, entry.outright_hits
        );

        entry
    }
}
