//! The game session: an append-only history of board snapshots with
//! time travel to prior steps.

use crate::descriptor::{MoveDescriptor, changed_cell};
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::status::Status;
use crate::types::{Board, Mark, Square};
use tracing::{debug, instrument};

/// A move intent was rejected. The session is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell index is not in 0-8.
    #[display("Cell index {_0} is out of bounds")]
    OutOfBounds(usize),
    /// A winning line already exists on the active board.
    #[display("Game is already decided")]
    GameDecided,
    /// The target square already holds a mark.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
}

impl std::error::Error for PlaceError {}

/// A jump intent named a step outside the current history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Step {step} is out of range (history length {len})")]
pub struct StepOutOfRange {
    /// The requested step.
    pub step: usize,
    /// History length at the time of the call.
    pub len: usize,
}

impl std::error::Error for StepOutOfRange {}

/// Owns the move history and the current position within it.
///
/// The history always holds at least one entry (the all-empty starting
/// board) and `current_step` always indexes an entry. The active mark,
/// the winner, and the status text are derived from those two fields on
/// demand so they can never disagree with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) history: Vec<Board>,
    pub(crate) current_step: usize,
}

impl GameSession {
    /// Creates a session at game start: one empty snapshot, step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// The active board, `history[current_step]`.
    pub fn board(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// All snapshots from game start to the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The active position within the history.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of history entries. Always at least 1.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// The mark that moves from the active step (even steps X, odd O).
    pub fn to_move(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Derived status of the active board.
    pub fn status(&self) -> Status {
        match rules::check_winner(self.board()) {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// Places the active mark at cell `index` (0-8).
    ///
    /// On success the active snapshot is cloned, the target square filled,
    /// the clone appended, and `current_step` advanced to the new end.
    ///
    /// # Errors
    ///
    /// Rejected, leaving history and step untouched, when the index is
    /// out of bounds, the active board already has a winning line, or the
    /// target square is occupied.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn place(&mut self, index: usize) -> Result<(), PlaceError> {
        let pos = Position::from_index(index).ok_or(PlaceError::OutOfBounds(index))?;
        if rules::check_winner(self.board()).is_some() {
            return Err(PlaceError::GameDecided);
        }
        if !self.board().is_empty(pos) {
            return Err(PlaceError::SquareOccupied(pos));
        }

        let mark = self.to_move();
        let mut next = self.board().clone();
        next.set(pos, Square::Occupied(mark));
        self.history.push(next);
        self.current_step = self.history.len() - 1;

        debug!(%mark, %pos, step = self.current_step, "placed mark");
        assert_invariants(self);
        Ok(())
    }

    /// Jumps to history position `step`, discarding all later entries.
    ///
    /// The truncation is destructive: there is no redo. Idempotent for a
    /// fixed step when no `place` intervenes.
    ///
    /// # Errors
    ///
    /// Rejected, leaving the session untouched, when `step` is not a
    /// valid index into the current history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepOutOfRange> {
        if step >= self.history.len() {
            return Err(StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        self.history.truncate(step + 1);
        self.current_step = step;

        debug!(step, "jumped to step");
        assert_invariants(self);
        Ok(())
    }

    /// Descriptor for one history entry, for jump-list rendering.
    ///
    /// `None` when `step` is out of range. Step 0 is the game-start
    /// label; later steps name the single square that ply filled.
    pub fn move_descriptor(&self, step: usize) -> Option<MoveDescriptor> {
        if step >= self.history.len() {
            return None;
        }
        if step == 0 {
            return Some(MoveDescriptor::GameStart);
        }
        let (position, mark) = changed_cell(&self.history[step - 1], &self.history[step])
            .expect("consecutive snapshots differ in exactly one square");
        Some(MoveDescriptor::Placed {
            step,
            mark,
            position,
        })
    }

    /// Descriptors for every history entry, in order.
    pub fn descriptors(&self) -> impl Iterator<Item = MoveDescriptor> + '_ {
        (0..self.history.len()).filter_map(|step| self.move_descriptor(step))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
