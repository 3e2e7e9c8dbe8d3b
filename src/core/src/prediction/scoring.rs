use crate::group::FixtureScore;
use crate::settings::ScoringRules;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PredictionHit {
    Exact,
    Outcome,
    Miss,
}

impl PredictionHit {
    pub fn points(&self, rules: &ScoringRules) -> u32 {
        match self {
            PredictionHit::Exact => rules.exact_score,
            PredictionHit::Outcome => rules.correct_outcome,
            PredictionHit::Miss => 0,
        }
    }
}

pub fn score_match(predicted: &FixtureScore, actual: &FixtureScore) -> PredictionHit {
    if predicted == actual {
        PredictionHit::Exact
    } else if predicted.outcome() == actual.outcome() {
        PredictionHit::Outcome
    } else {
        PredictionHit::Miss
    }
}

/// Markets decided once per tournament rather than per fixture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Market {
    Champion,
    Award(String),
}

impl Market {
    pub fn points(&self, rules: &ScoringRules) -> u32 {
        match self {
            Market::Champion => rules.champion,
            Market::Award(_) => rules.award,
        }
    }
}

pub fn picks_match(pick: &str, winner: &str) -> bool {
    pick.trim().eq_ignore_ascii_case(winner.trim())
}

pub fn score_outright(rules: &ScoringRules, market: &Market, pick: &str, winner: Option<&str>) -> u32 {
    match winner {
        Some(winner) if picks_match(pick, winner) => market.points(rules),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_score() {
        let hit = score_match(&FixtureScore::new(2, 1), &FixtureScore::new(2, 1));

        assert_eq!(hit, PredictionHit::Exact);
        assert_eq!(hit.points(&ScoringRules::default()), 3);
    }

    #[test]
    fn test_correct_direction() {
        let rules = ScoringRules::default();

        assert_eq!(score_match(&FixtureScore::new(1, 0), &FixtureScore::new(3, 1)), PredictionHit::Outcome);
        assert_eq!(score_match(&FixtureScore::new(0, 0), &FixtureScore::new(2, 2)), PredictionHit::Outcome);
        assert_eq!(PredictionHit::Outcome.points(&rules), 1);
    }

    #[test]
    fn test_miss() {
        let hit = score_match(&FixtureScore::new(1, 0), &FixtureScore::new(1, 1));

        assert_eq!(hit, PredictionHit::Miss);
        assert_eq!(hit.points(&ScoringRules::default()), 0);
    }

    #[test]
    fn test_outright_points_per_market() {
        let rules = ScoringRules::default();
        let golden_boot = Market::Award("Golden Boot".to_string());

        assert_eq!(score_outright(&rules, &Market::Champion, " argentina ", Some("Argentina")), 10);
        assert_eq!(score_outright(&rules, &golden_boot, "Mbappe", Some("Mbappe")), 5);
        assert_eq!(score_outright(&rules, &golden_boot, "Kane", Some("Mbappe")), 0);
        assert_eq!(score_outright(&rules, &Market::Champion, "Brazil", None), 0);
    }
}
