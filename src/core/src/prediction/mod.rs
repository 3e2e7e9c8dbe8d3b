mod leaderboard;
mod scoring;
mod window;

pub use leaderboard::*;
pub use scoring::*;
pub use window::*;
