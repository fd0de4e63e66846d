//! Tournament logic: round construction and outcome simulation.

mod pairing;
mod play;

pub use pairing::{schedule_next_round, schedule_rounds};
pub use play::play_rounds;
