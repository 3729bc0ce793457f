//! Alternating-mark invariant: plies alternate between X and O.

use super::Invariant;
use crate::descriptor::changed_cell;
use crate::session::GameSession;
use crate::types::Mark;

/// Invariant: The mark added by history entry k is the mark whose turn
/// it was at step k-1: X for odd k, O for even k.
///
/// Turn order is derived from step parity, so a history where the same
/// mark moves twice in a row is corrupt even if every snapshot is
/// individually well-formed.
pub struct AlternatingMarkInvariant;

impl Invariant<GameSession> for AlternatingMarkInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history.windows(2).enumerate().all(|(step, pair)| {
            match changed_cell(&pair[0], &pair[1]) {
                Some((_, mark)) => mark == Mark::for_step(step),
                // Malformed delta; SingleCellDeltaInvariant reports it.
                None => true,
            }
        })
    }

    fn description() -> &'static str {
        "Each ply is made by the mark whose turn it was"
    }
}
