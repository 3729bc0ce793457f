//! Empty-origin invariant: history starts from the all-empty board.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Square;

/// Invariant: History entry 0 exists and is the all-empty board.
///
/// Every session begins at game start. The first snapshot never holds
/// a mark, no matter how many moves or jumps follow.
pub struct EmptyOriginInvariant;

impl Invariant<GameSession> for EmptyOriginInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .first()
            .is_some_and(|board| board.squares().iter().all(|s| *s == Square::Empty))
    }

    fn description() -> &'static str {
        "History entry 0 is the all-empty starting board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use crate::types::{Board, Mark};

    #[test]
    fn test_new_session_holds() {
        let session = GameSession::new();
        assert!(EmptyOriginInvariant::holds(&session));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut session = GameSession::new();
        session.place(0).expect("valid move");
        session.place(4).expect("valid move");
        assert!(EmptyOriginInvariant::holds(&session));
    }

    #[test]
    fn test_marked_origin_violates() {
        let mut session = GameSession::new();
        let mut origin = Board::new();
        origin.set(Position::Center, Square::Occupied(Mark::X));
        session.history[0] = origin;

        assert!(!EmptyOriginInvariant::holds(&session));
    }

    #[test]
    fn test_empty_history_violates() {
        let session = GameSession {
            history: Vec::new(),
            current_step: 0,
        };
        assert!(!EmptyOriginInvariant::holds(&session));
    }
}
