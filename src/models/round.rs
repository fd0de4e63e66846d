//! Round fixture: the pairings of one round plus the players left unpaired.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One scheduled batch of pairings. Appended by the scheduler and never
/// mutated afterwards; rounds are indexed in scheduling order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Matched pairs, in the order they were formed. The first member comes
    /// from the round's "first" (most populated) team.
    pub pairs: Vec<(PlayerId, PlayerId)>,
    /// Players for whom no legal partner could be found this round.
    pub unpaired: Vec<PlayerId>,
}
