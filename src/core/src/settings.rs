use crate::{StandingsError, StandingsResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THIRDS_TO_ADVANCE: usize = 8;
pub const MAX_LOCK_MINUTES_BEFORE: i64 = 7 * 24 * 60;

/// League points awarded per match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsSystem {
    pub win: u16,
    pub draw: u16,
    pub loss: u16,
}

impl Default for PointsSystem {
    fn default() -> Self {
        PointsSystem {
            win: 3,
            draw: 1,
            loss: 0,
        }
    }
}

/// Points a user earns for a correct guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub exact_score: u32,
    pub correct_outcome: u32,
    pub champion: u32,
    pub award: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            exact_score: 3,
            correct_outcome: 1,
            champion: 10,
            award: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentSettings {
    pub points: PointsSystem,
    pub scoring: ScoringRules,
    pub thirds_to_advance: usize,
    /// Predictions close this many minutes before kick-off.
    pub lock_minutes_before: i64,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        TournamentSettings {
            points: PointsSystem::default(),
            scoring: ScoringRules::default(),
            thirds_to_advance: DEFAULT_THIRDS_TO_ADVANCE,
            lock_minutes_before: 0,
        }
    }
}

impl TournamentSettings {
    pub fn validate(&self) -> StandingsResult<()> {
        if !(0..=MAX_LOCK_MINUTES_BEFORE).contains(&self.lock_minutes_before) {
            return Err(StandingsError::LockOutOfRange {
                value: self.lock_minutes_before,
                max: MAX_LOCK_MINUTES_BEFORE,
            });
        }

        Ok(())
    }
}
