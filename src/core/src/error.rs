use thiserror::Error;

/// Malformed input shape rejected before any standings computation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StandingsError {
    #[error("group must have exactly {expected} teams, got {actual}")]
    WrongTeamCount { expected: usize, actual: usize },

    #[error("fixture index {index} is out of range (group has {fixtures} fixtures)")]
    FixtureOutOfRange { index: usize, fixtures: usize },

    #[error("team {0} appears more than once in the group")]
    DuplicateTeam(String),

    #[error("group {0} not found")]
    UnknownGroup(String),

    #[error("group {0} is defined more than once")]
    DuplicateGroup(String),

    #[error("lock_minutes_before must be between 0 and {max}, got {value}")]
    LockOutOfRange { value: i64, max: i64 },
}

pub type StandingsResult<T> = Result<T, StandingsError>;
