//! Data structures for the coin toss tournament: players, teams, rounds, scheduler.

mod player;
mod round;
mod scheduler;
mod team;

pub use player::{CallSide, Outcome, Player, PlayerId, PlayerSummary};
pub use round::Round;
pub use scheduler::{Scheduler, SchedulerError};
pub use team::{Team, TeamId, TeamSummary};
