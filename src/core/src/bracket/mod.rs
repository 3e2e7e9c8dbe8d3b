mod qualification;

pub use qualification::*;
