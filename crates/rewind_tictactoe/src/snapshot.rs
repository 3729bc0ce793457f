//! Serializable session snapshot with validated restore.
//!
//! `GameSession` itself is not serialized directly: restoring from
//! external data must not be able to construct a session that violates
//! the history invariants. `SavedSession` is the wire form, and the
//! `TryFrom` conversion is the only way back in.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::session::GameSession;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Serializable form of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    history: Vec<Board>,
    current_step: usize,
}

impl From<&GameSession> for SavedSession {
    fn from(session: &GameSession) -> Self {
        Self {
            history: session.history().to_vec(),
            current_step: session.current_step(),
        }
    }
}

/// A saved session failed invariant validation on restore.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Saved session is corrupt: {_0}")]
pub struct RestoreError(String);

impl std::error::Error for RestoreError {}

impl TryFrom<SavedSession> for GameSession {
    type Error = RestoreError;

    /// Validates the full invariant set before accepting the data.
    ///
    /// Entries beyond the saved step are discarded, the same way a jump
    /// discards them. Snapshots produced by [`From<&GameSession>`] always
    /// save at the history end, so nothing is lost for those.
    #[instrument(skip(saved), fields(len = saved.history.len(), step = saved.current_step))]
    fn try_from(saved: SavedSession) -> Result<Self, Self::Error> {
        let candidate = GameSession {
            history: saved.history,
            current_step: saved.current_step,
        };

        if let Err(violations) = SessionInvariants::check_all(&candidate) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "rejecting saved session");
            return Err(RestoreError(descriptions));
        }

        let mut session = candidate;
        session.history.truncate(session.current_step + 1);
        Ok(session)
    }
}
