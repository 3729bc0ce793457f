//! Tests for session lifecycle, move legality, and win detection.

use rewind_tictactoe::{GameSession, Mark, PlaceError, Position, Status};

#[test]
fn test_session_starts_at_game_start() {
    let session = GameSession::new();

    assert_eq!(session.len(), 1);
    assert_eq!(session.current_step(), 0);
    assert_eq!(session.to_move(), Mark::X);
    assert_eq!(session.status().to_string(), "Next player: X");
}

#[test]
fn test_marks_alternate_by_step_parity() {
    let mut session = GameSession::new();

    assert_eq!(session.to_move(), Mark::X);
    session.place(0).expect("valid move");
    assert_eq!(session.to_move(), Mark::O);
    session.place(4).expect("valid move");
    assert_eq!(session.to_move(), Mark::X);
}

#[test]
fn test_top_row_win_sequence() {
    let mut session = GameSession::new();

    // X takes the top row while O replies in the middle row.
    for index in [0, 4, 1, 5, 2] {
        session.place(index).expect("valid move");
    }

    assert_eq!(session.len(), 6);
    assert_eq!(session.status(), Status::Winner(Mark::X));
    assert_eq!(session.status().to_string(), "Winner: X");
}

#[test]
fn test_place_rejected_once_decided() {
    let mut session = GameSession::new();
    for index in [0, 4, 1, 5, 2] {
        session.place(index).expect("valid move");
    }

    let before = session.clone();
    assert_eq!(session.place(8), Err(PlaceError::GameDecided));
    assert_eq!(session, before);
}

#[test]
fn test_rejected_intents_leave_state_untouched() {
    let mut session = GameSession::new();
    session.place(0).expect("valid move");
    let before = session.clone();

    assert_eq!(session.place(0), Err(PlaceError::SquareOccupied(Position::TopLeft)));
    assert_eq!(session, before);

    assert_eq!(session.place(42), Err(PlaceError::OutOfBounds(42)));
    assert_eq!(session, before);

    session.jump_to(99).expect_err("step 99 does not exist");
    assert_eq!(session, before);
}

#[test]
fn test_full_board_without_winner_still_reports_next_player() {
    let mut session = GameSession::new();

    // X X O / O O X / X O X - all nine squares filled, no line.
    for index in [0, 2, 1, 4, 5, 3, 6, 7, 8] {
        session.place(index).expect("valid move");
    }

    assert_eq!(session.len(), 10);
    assert_eq!(session.status(), Status::NextPlayer(Mark::O));
}

#[test]
fn test_every_further_place_on_full_board_is_rejected() {
    let mut session = GameSession::new();
    for index in [0, 2, 1, 4, 5, 3, 6, 7, 8] {
        session.place(index).expect("valid move");
    }

    for index in 0..9 {
        assert!(matches!(
            session.place(index),
            Err(PlaceError::SquareOccupied(_))
        ));
    }
    assert_eq!(session.len(), 10);
}
