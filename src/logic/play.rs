//! Outcome simulation: one fair coin toss per scheduled pair.

use crate::models::{CallSide, Outcome, Scheduler};
use rand::Rng;

/// Play the next `n` rounds.
///
/// Each pair is resolved by a single toss: the player whose call side matches
/// wins, the partner loses, and everyone unpaired that round is marked
/// `NotPlayed`. Asking for more rounds than are scheduled just advances the
/// cursor past the missing ones; nothing is recorded for them, and rounds
/// already played are never touched again.
pub fn play_rounds(scheduler: &mut Scheduler, n: usize) {
    let Scheduler {
        players,
        rounds,
        played,
        rng,
        ..
    } = scheduler;

    for _ in 0..n {
        let round_idx = *played;
        if let Some(round) = rounds.get(round_idx) {
            for &(p1, p2) in &round.pairs {
                let toss = if rng.gen_bool(0.5) {
                    CallSide::Heads
                } else {
                    CallSide::Tails
                };
                let first_won = players[p1].call_sides[round_idx] == Some(toss);
                players[p1].record_outcome(if first_won { Outcome::Won } else { Outcome::Lost });
                players[p2].record_outcome(if first_won { Outcome::Lost } else { Outcome::Won });
            }
            for &id in &round.unpaired {
                players[id].record_outcome(Outcome::NotPlayed);
            }
        }
        *played += 1;
    }
}
