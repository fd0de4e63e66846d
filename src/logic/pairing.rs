//! Round construction: two-phase greedy matching across teams.

use crate::models::{CallSide, Player, PlayerId, Round, Scheduler, Team, TeamId};
use rand::seq::SliceRandom;
use rand::Rng;

/// Schedule `n` further rounds of pairings.
pub fn schedule_rounds(scheduler: &mut Scheduler, n: usize) {
    for _ in 0..n {
        schedule_next_round(scheduler);
    }
}

/// Schedule a single round.
///
/// Two phases run the same loop with different eligibility thresholds. With
/// threshold 1 only teams keeping more than one unselected player take part;
/// always starting from the most populated team keeps team sizes balanced, so
/// every team enters the second phase with at most one leftover. With
/// threshold 0 those single leftovers are drained against each other. Each
/// phase stops when no first team or no legal second team can be found; a
/// round ending with unpaired players is expected, not an error.
pub fn schedule_next_round(scheduler: &mut Scheduler) {
    let Scheduler {
        players,
        teams,
        rounds,
        rng,
        ..
    } = scheduler;

    for team in teams.iter_mut() {
        team.new_round(players);
    }

    let mut pairs: Vec<(PlayerId, PlayerId)> = Vec::new();

    for threshold in (0..=1).rev() {
        loop {
            let eligible = eligible_teams(teams, threshold);

            let Some(first) = most_populated_team(&eligible, teams, rng) else {
                break;
            };
            let Some(second) = second_team(&eligible, first, teams, players, rng) else {
                break;
            };

            // Draw order: the second team's player comes first, unconstrained
            // (its pool is non-empty by eligibility), then the first team's
            // player is drawn excluding that player's previous opponent.
            let Some(p2) = teams[second].select_player(players, None, rng) else {
                break;
            };
            let Some(p1) = teams[first].select_player(players, Some(p2), rng) else {
                // The drawn player's only potential partner here was its
                // previous opponent. Put the draw back and end the phase.
                players[p2].selected = false;
                teams[second].players_left += 1;
                break;
            };

            players[p1].previous_opponent = Some(p2);
            players[p2].previous_opponent = Some(p1);

            // Opposite call sides from a single toss.
            let side = if rng.gen_bool(0.5) {
                CallSide::Heads
            } else {
                CallSide::Tails
            };
            players[p1].call_sides.push(Some(side));
            players[p2].call_sides.push(Some(side.opposite()));

            pairs.push((p1, p2));
        }
    }

    // Whoever could not be matched sits the round out. The rematch constraint
    // does not survive a round of absence, and the call-side sequence still
    // gets its entry so every player stays indexed by round number.
    let mut unpaired: Vec<PlayerId> = Vec::new();
    for team in teams.iter() {
        for id in team.available_players(players) {
            players[id].previous_opponent = None;
            players[id].call_sides.push(None);
            unpaired.push(id);
        }
    }

    rounds.push(Round { pairs, unpaired });
}

/// Teams with more unselected players than `threshold`. Rebuilt fresh on
/// every loop iteration rather than edited in place.
fn eligible_teams(teams: &[Team], threshold: usize) -> Vec<TeamId> {
    teams
        .iter()
        .filter(|t| t.players_left > threshold)
        .map(|t| t.id)
        .collect()
}

/// The eligible team with the most unselected players; ties broken uniformly
/// at random. `None` when no team is eligible.
fn most_populated_team<R: Rng>(
    eligible: &[TeamId],
    teams: &[Team],
    rng: &mut R,
) -> Option<TeamId> {
    let max_left = eligible.iter().map(|&id| teams[id].players_left).max()?;
    let fullest: Vec<TeamId> = eligible
        .iter()
        .copied()
        .filter(|&id| teams[id].players_left == max_left)
        .collect();
    fullest.choose(rng).copied()
}

/// A uniform-random eligible team that can still form a legal pairing with
/// `first`. `None` when every other team is exhausted or fully constrained
/// against it.
fn second_team<R: Rng>(
    eligible: &[TeamId],
    first: TeamId,
    teams: &[Team],
    players: &[Player],
    rng: &mut R,
) -> Option<TeamId> {
    let candidates: Vec<TeamId> = eligible
        .iter()
        .copied()
        .filter(|&id| id != first && teams[first].pairs_with(&teams[id], players))
        .collect();
    candidates.choose(rng).copied()
}
