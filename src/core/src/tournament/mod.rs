mod tournament;

pub use tournament::*;
