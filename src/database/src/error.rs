use game_core::StandingsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tournament: {0}")]
    Invalid(#[from] StandingsError),
}
