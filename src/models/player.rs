//! Player data: identity, per-round call sides and outcomes.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Unique identifier for a player (index into the scheduler's player table).
pub type PlayerId = usize;

/// Side of the coin a player calls for one round.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallSide {
    Heads,
    Tails,
}

impl CallSide {
    /// The side handed to the partner in a pair.
    pub fn opposite(self) -> Self {
        match self {
            CallSide::Heads => CallSide::Tails,
            CallSide::Tails => CallSide::Heads,
        }
    }
}

/// Result of one round for one player.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
    /// The player was left unpaired in this round.
    NotPlayed,
}

/// Report view of a player (for the presentation layer).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub call_sides: Vec<Option<CallSide>>,
    pub results: Vec<Outcome>,
}

impl PlayerSummary {
    pub fn from_player(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            call_sides: p.call_sides.clone(),
            results: p.results.clone(),
        }
    }
}

/// A player in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Sequential label ("player1", "player2", ...), unique within one tournament.
    pub name: String,
    /// Owning team; stamped once at assignment, immutable afterwards.
    pub team: Option<TeamId>,
    /// Opponent faced in the immediately preceding round. One-round memory:
    /// overwritten every round the player is paired, cleared when left unpaired.
    pub previous_opponent: Option<PlayerId>,
    /// True once chosen for a pairing within the current round.
    pub selected: bool,
    /// Call side per scheduled round; `None` for rounds the player sat out.
    pub call_sides: Vec<Option<CallSide>>,
    /// Outcome per played round.
    pub results: Vec<Outcome>,
}

impl Player {
    /// Create a player for the given id. The name is derived from the id, so
    /// labels stay sequential per tournament instead of per process.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("player{}", id + 1),
            team: None,
            previous_opponent: None,
            selected: false,
            call_sides: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Append the outcome of the round currently being played.
    pub fn record_outcome(&mut self, outcome: Outcome) {
        self.results.push(outcome);
    }

    /// Current report view as a separate struct.
    pub fn summary(&self) -> PlayerSummary {
        PlayerSummary::from_player(self)
    }
}
