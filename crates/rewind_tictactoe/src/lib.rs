//! Tic-tac-toe game logic with an append-only, time-travelling history.
//!
//! The session records one board snapshot per ply and supports jumping
//! back to any earlier step, discarding the moves after it. The active
//! mark, the winner, and the status text are derived from the history
//! and the current step on demand, never stored where they could
//! disagree.
//!
//! # Architecture
//!
//! - **Rules**: pure win evaluation over a board snapshot
//! - **Session**: history ownership, `place`/`jump_to` intents, derived reads
//! - **Invariants**: first-class, independently testable history guarantees
//! - **Descriptors**: jump-list labels from the single-changed-cell scan
//! - **Snapshot**: serializable saved form with invariant-validated restore
//!
//! Rendering belongs to a view layer. `rewind_tui` in this workspace is
//! one such view; any toolkit can consume the same contract.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, Mark, Status};
//!
//! let mut session = GameSession::new();
//! session.place(0)?; // X
//! session.place(4)?; // O
//! session.place(1)?; // X
//! assert_eq!(session.status(), Status::NextPlayer(Mark::O));
//!
//! // Rewind to before O's reply; the later moves are gone.
//! session.jump_to(1)?;
//! assert_eq!(session.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod descriptor;
pub mod invariants;
mod position;
mod rules;
mod session;
mod snapshot;
mod status;
mod types;

pub use descriptor::MoveDescriptor;
pub use position::Position;
pub use rules::check_winner;
pub use session::{GameSession, PlaceError, StepOutOfRange};
pub use snapshot::{RestoreError, SavedSession};
pub use status::Status;
pub use types::{Board, Mark, Square};
