//! Step-bounds invariant: the current step always indexes a history entry.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: `current_step` is a valid index into the history.
///
/// Since indexes start at 0, this also requires the history to be
/// non-empty. Both `place` and `jump_to` preserve it: `place` points
/// the step at the entry it just appended, and `jump_to` validates the
/// target before truncating.
pub struct StepInBoundsInvariant;

impl Invariant<GameSession> for StepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.current_step < session.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes a history entry"
    }
}
