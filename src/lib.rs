//! Coin toss tournament: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{play_rounds, schedule_next_round, schedule_rounds};
pub use models::{
    CallSide, Outcome, Player, PlayerId, PlayerSummary, Round, Scheduler, SchedulerError, Team,
    TeamId, TeamSummary,
};
