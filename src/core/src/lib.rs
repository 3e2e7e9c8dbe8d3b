pub mod bracket;
pub mod error;
pub mod group;
pub mod prediction;
pub mod settings;
pub mod tournament;

pub use bracket::{
    GroupQualifiers, QualificationResult, QualifiedThird, ThirdPlaceCandidate, compute_qualification,
    compute_qualification_with,
};
pub use error::{StandingsError, StandingsResult};
pub use group::{
    FixtureScore, GROUP_FIXTURES, GROUP_FIXTURE_COUNT, GROUP_SIZE, Group, GroupFixture, GroupId, MatchOutcome,
    ScoreSheet, StandingsRow, compute_standings, compute_standings_with,
};
pub use prediction::{
    Leaderboard, LeaderboardEntry, Market, OutrightPick, PredictionHit, PredictionWindow, UserPredictions,
};
pub use settings::{PointsSystem, ScoringRules, TournamentSettings};
pub use tournament::{GroupStandings, Tournament};
