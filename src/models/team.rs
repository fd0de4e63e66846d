//! Team roster bookkeeping and per-round player selection.

use crate::models::player::{Player, PlayerId, PlayerSummary};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unique identifier for a team (index into the scheduler's team table).
pub type TeamId = usize;

/// Report view of a team: label, size, roster with per-round data.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub label: String,
    pub total_players: usize,
    pub players: Vec<PlayerSummary>,
}

/// A team: owns a roster of players and tracks how many of them are still
/// available for pairing within the current round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Caller-supplied unique label (e.g. a colour name).
    pub label: String,
    /// Player ids in assignment order.
    pub roster: Vec<PlayerId>,
    /// Players ever assigned; fixed after setup.
    pub total_players: usize,
    /// Players not yet selected in the current round. Only changes via the
    /// new-round reset or a selection decrement.
    pub players_left: usize,
}

impl Team {
    pub fn new(id: TeamId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            roster: Vec::new(),
            total_players: 0,
            players_left: 0,
        }
    }

    /// Add a player to the roster and stamp its team reference.
    /// Setup-time only, before any round is scheduled.
    pub fn assign(&mut self, player: &mut Player) {
        player.team = Some(self.id);
        self.roster.push(player.id);
        self.total_players += 1;
        self.players_left = self.total_players;
    }

    /// Reset round state: clear every rostered player's selected flag and make
    /// the whole roster available again. Called once per team at the start of
    /// each round.
    pub fn new_round(&mut self, players: &mut [Player]) {
        for &id in &self.roster {
            players[id].selected = false;
        }
        self.players_left = self.total_players;
    }

    /// Ids of rostered players not yet selected this round, in roster order.
    /// Pure query, no side effect.
    pub fn available_players(&self, players: &[Player]) -> Vec<PlayerId> {
        self.roster
            .iter()
            .copied()
            .filter(|&id| !players[id].selected)
            .collect()
    }

    /// Pick one available player uniformly at random and mark it selected.
    ///
    /// When `opponent` is given, the player whose `previous_opponent` is that
    /// opponent is excluded from the pool. A player faced exactly one opponent
    /// last round, so at most one exclusion can apply. Returns `None` without
    /// mutating anything when the pool comes up empty.
    pub fn select_player<R: Rng>(
        &mut self,
        players: &mut [Player],
        opponent: Option<PlayerId>,
        rng: &mut R,
    ) -> Option<PlayerId> {
        let mut candidates = self.available_players(players);
        if let Some(opp) = opponent {
            candidates.retain(|&id| players[id].previous_opponent != Some(opp));
        }
        let &picked = candidates.choose(rng)?;
        players[picked].selected = true;
        self.players_left -= 1;
        Some(picked)
    }

    /// Can any legal pairing be formed between this team and `other`?
    ///
    /// Both teams must have players left, be distinct, and at least one
    /// cross-team pair of available players must not be a rematch of the
    /// previous round. Possibility check only: no selection, no mutation.
    pub fn pairs_with(&self, other: &Team, players: &[Player]) -> bool {
        if self.id == other.id {
            return false;
        }
        if self.players_left == 0 || other.players_left == 0 {
            return false;
        }
        let candidates = self.available_players(players);
        let opponents = other.available_players(players);
        candidates.iter().any(|&a| {
            opponents
                .iter()
                .any(|&b| players[a].previous_opponent != Some(b))
        })
    }

    /// Report view with per-player names, call sides, and outcomes.
    pub fn summary(&self, players: &[Player]) -> TeamSummary {
        TeamSummary {
            label: self.label.clone(),
            total_players: self.total_players,
            players: self.roster.iter().map(|&id| players[id].summary()).collect(),
        }
    }
}
