//! Tests for saved-session restore validation.

use rewind_tictactoe::{GameSession, SavedSession, Status};

fn played_session() -> GameSession {
    let mut session = GameSession::new();
    for index in [0, 4, 1, 5] {
        session.place(index).expect("valid move");
    }
    session
}

#[test]
fn test_snapshot_restores_identical_session() {
    let session = played_session();
    let saved = SavedSession::from(&session);

    let restored = GameSession::try_from(saved).expect("valid snapshot");
    assert_eq!(restored, session);
    assert_eq!(restored.status(), session.status());
}

#[test]
fn test_snapshot_survives_json() {
    let session = played_session();
    let json =
        serde_json::to_string(&SavedSession::from(&session)).expect("session is serializable");

    let saved: SavedSession = serde_json::from_str(&json).expect("well-formed json");
    let restored = GameSession::try_from(saved).expect("valid snapshot");
    assert_eq!(restored.current_step(), 4);
    assert_eq!(restored.status(), Status::NextPlayer(restored.to_move()));
}

#[test]
fn test_hand_edited_snapshot_is_rejected() {
    // A history that skips a ply: entry 1 holds two marks.
    let json = r#"{
        "history": [
            {"squares": [
                "Empty", "Empty", "Empty",
                "Empty", "Empty", "Empty",
                "Empty", "Empty", "Empty"
            ]},
            {"squares": [
                {"Occupied": "X"}, {"Occupied": "O"}, "Empty",
                "Empty", "Empty", "Empty",
                "Empty", "Empty", "Empty"
            ]}
        ],
        "current_step": 1
    }"#;

    let saved: SavedSession = serde_json::from_str(json).expect("well-formed json");
    let err = GameSession::try_from(saved).expect_err("two squares filled by one ply");
    assert!(err.to_string().contains("exactly one square"));
}

#[test]
fn test_snapshot_with_dangling_step_is_rejected() {
    let json = r#"{
        "history": [
            {"squares": [
                "Empty", "Empty", "Empty",
                "Empty", "Empty", "Empty",
                "Empty", "Empty", "Empty"
            ]}
        ],
        "current_step": 5
    }"#;

    let saved: SavedSession = serde_json::from_str(json).expect("well-formed json");
    let err = GameSession::try_from(saved).expect_err("step beyond history");
    assert!(err.to_string().contains("indexes a history entry"));
}
