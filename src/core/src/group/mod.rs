mod fixtures;
mod group;
mod score;
mod table;

pub use fixtures::*;
pub use group::*;
pub use score::*;
pub use table::*;
