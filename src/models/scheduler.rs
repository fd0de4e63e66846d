//! Scheduler: owns the teams, players, round sequence, and random source.

use crate::models::player::{Player, PlayerId};
use crate::models::round::Round;
use crate::models::team::{Team, TeamId, TeamSummary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Errors that can occur when constructing a scheduler.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchedulerError {
    /// Player count must be positive.
    NoPlayers,
    /// The team label list is empty.
    NoTeams,
    /// Duplicate labels would silently merge teams and corrupt the
    /// pairing-possibility check, so they are rejected outright.
    DuplicateTeamLabel(String),
}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulerError::NoPlayers => write!(f, "Player count must be at least 1"),
            SchedulerError::NoTeams => write!(f, "At least one team label is required"),
            SchedulerError::DuplicateTeamLabel(label) => {
                write!(f, "Duplicate team label: {}", label)
            }
        }
    }
}

impl std::error::Error for SchedulerError {}

/// Full tournament state: teams, players, scheduled rounds, and the RNG every
/// random choice is drawn from. One instance per tournament; independent
/// tournaments never share players, teams, or randomness.
#[derive(Clone, Debug)]
pub struct Scheduler {
    /// All players, indexed by `PlayerId`.
    pub players: Vec<Player>,
    /// All teams, indexed by `TeamId`, in caller-supplied label order.
    pub teams: Vec<Team>,
    /// Scheduled rounds, append-only.
    pub(crate) rounds: Vec<Round>,
    /// Rounds whose outcomes have been simulated. Independent of how many
    /// rounds are scheduled; playing trails scheduling.
    pub(crate) played: usize,
    pub(crate) rng: StdRng,
}

impl Scheduler {
    /// Build a tournament with an entropy-seeded random source.
    pub fn new(
        player_count: usize,
        team_labels: &[impl AsRef<str>],
    ) -> Result<Self, SchedulerError> {
        Self::from_rng(player_count, team_labels, StdRng::from_entropy())
    }

    /// Build a tournament with a fixed seed, for reproducible runs.
    pub fn with_seed(
        player_count: usize,
        team_labels: &[impl AsRef<str>],
        seed: u64,
    ) -> Result<Self, SchedulerError> {
        Self::from_rng(player_count, team_labels, StdRng::seed_from_u64(seed))
    }

    fn from_rng(
        player_count: usize,
        team_labels: &[impl AsRef<str>],
        mut rng: StdRng,
    ) -> Result<Self, SchedulerError> {
        if player_count == 0 {
            return Err(SchedulerError::NoPlayers);
        }
        if team_labels.is_empty() {
            return Err(SchedulerError::NoTeams);
        }
        for (i, label) in team_labels.iter().enumerate() {
            if team_labels[..i].iter().any(|l| l.as_ref() == label.as_ref()) {
                return Err(SchedulerError::DuplicateTeamLabel(label.as_ref().to_string()));
            }
        }

        let mut teams: Vec<Team> = team_labels
            .iter()
            .enumerate()
            .map(|(id, label)| Team::new(id, label.as_ref()))
            .collect();

        // Sequential ids double as the per-tournament name counter. Team
        // choice is uniform per player, with no balancing guarantee.
        let mut players: Vec<Player> = (0..player_count).map(Player::new).collect();
        for player in &mut players {
            let t = rng.gen_range(0..teams.len());
            teams[t].assign(player);
        }

        Ok(Self {
            players,
            teams,
            rounds: Vec::new(),
            played: 0,
            rng,
        })
    }

    /// Read-only view of every scheduled round.
    pub fn fixtures(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds scheduled so far.
    pub fn rounds_scheduled(&self) -> usize {
        self.rounds.len()
    }

    /// Number of rounds whose outcomes have been simulated.
    pub fn rounds_played(&self) -> usize {
        self.played
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Look up a team by id.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id)
    }

    /// Report views of every team, in creation order.
    pub fn team_summaries(&self) -> Vec<TeamSummary> {
        self.teams.iter().map(|t| t.summary(&self.players)).collect()
    }
}
