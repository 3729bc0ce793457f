//! Single-cell-delta invariant: one ply fills exactly one square.

use super::Invariant;
use crate::descriptor::changed_cell;
use crate::session::GameSession;

/// Invariant: Consecutive snapshots differ in exactly one square, and
/// that square transitions from empty to occupied.
///
/// A move never erases or overwrites a mark, and never touches more
/// than one square. This is what makes the move-descriptor scan a
/// guaranteed hit.
pub struct SingleCellDeltaInvariant;

impl Invariant<GameSession> for SingleCellDeltaInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .windows(2)
            .all(|pair| changed_cell(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ in exactly one square, empty to occupied"
    }
}
