mod predictions;
mod tournament;

pub use predictions::*;
pub use tournament::*;

use crate::DatabaseError;
use std::path::Path;

pub(crate) fn read_file(path: &Path) -> Result<String, DatabaseError> {
    std::fs::read_to_string(path).map_err(|source| DatabaseError::Io {
        path: path.to_path_buf(),
        source,
    })
}
