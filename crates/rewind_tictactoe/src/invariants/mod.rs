//! First-class invariants for the game session.
//!
//! Invariants are logical properties that must hold throughout session
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

use crate::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples, so related invariants
/// compose into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_mark;
pub mod empty_origin;
pub mod single_cell_delta;
pub mod step_in_bounds;

pub use alternating_mark::AlternatingMarkInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use single_cell_delta::SingleCellDeltaInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    EmptyOriginInvariant,
    StepInBoundsInvariant,
    SingleCellDeltaInvariant,
    AlternatingMarkInvariant,
);

/// Asserts that all session invariants hold after a mutation.
///
/// Debug builds only; release builds rely on the operations themselves.
pub(crate) fn assert_invariants(session: &GameSession) {
    #[cfg(debug_assertions)]
    if let Err(violations) = SessionInvariants::check_all(session) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("session invariants violated: {descriptions}");
    }
    #[cfg(not(debug_assertions))]
    let _ = session;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use crate::types::{Mark, Square};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = GameSession::new();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut session = GameSession::new();
        session.place(0).expect("valid move");
        session.place(4).expect("valid move");
        session.jump_to(1).expect("step 1 exists");
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = GameSession::new();
        session.place(0).expect("valid move");

        // Corrupt the latest snapshot: a second square filled by one ply.
        let mut corrupt = session.history[1].clone();
        corrupt.set(Position::Center, Square::Occupied(Mark::O));
        session.history[1] = corrupt;

        let violations = SessionInvariants::check_all(&session).expect_err("corrupt session");
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let session = GameSession::new();

        type TwoInvariants = (EmptyOriginInvariant, StepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_empty_history_reported_by_both_anchor_invariants() {
        let session = GameSession {
            history: Vec::new(),
            current_step: 0,
        };
        let violations = SessionInvariants::check_all(&session).expect_err("empty history");
        assert!(violations.len() >= 2);
    }
}
