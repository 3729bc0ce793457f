//! Application state and intent handling.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameSession, MoveDescriptor, SavedSession};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Main application state.
///
/// Wraps the game session and translates view-level actions into session
/// intents. Rejected intents surface only as a message in the status bar;
/// the session itself is untouched by them.
pub struct App {
    session: GameSession,
    cursor: usize,
    message: String,
    save_path: PathBuf,
}

impl App {
    /// Creates an application with a fresh session.
    pub fn new(save_path: PathBuf) -> Self {
        Self {
            session: GameSession::new(),
            cursor: 0,
            message: "Press 1-9 to place a mark.".to_string(),
            save_path,
        }
    }

    /// Creates an application from a saved session snapshot.
    pub fn load(path: &Path, save_path: PathBuf) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading session snapshot {}", path.display()))?;
        let saved: SavedSession = serde_json::from_str(&json)
            .with_context(|| format!("parsing session snapshot {}", path.display()))?;
        let session = GameSession::try_from(saved)
            .with_context(|| format!("restoring session snapshot {}", path.display()))?;

        debug!(len = session.len(), "restored session");
        Ok(Self {
            cursor: session.current_step(),
            session,
            message: format!("Resumed from {}.", path.display()),
            save_path,
        })
    }

    /// The game session being viewed.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Selected row in the history jump list.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current status-bar message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Forwards a place intent for cell `index` (0-8).
    pub fn place(&mut self, index: usize) {
        match self.session.place(index) {
            Ok(()) => {
                self.cursor = self.session.current_step();
                self.message = match self.session.move_descriptor(self.session.current_step()) {
                    Some(MoveDescriptor::Placed { mark, position, .. }) => {
                        format!("Placed {mark} at {position}.")
                    }
                    _ => String::new(),
                };
            }
            Err(e) => {
                debug!(index, error = %e, "rejected move");
                self.message = format!("Invalid move: {e}.");
            }
        }
    }

    /// Moves the jump-list cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the jump-list cursor down one row.
    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.session.len() - 1);
    }

    /// Jumps to the step under the cursor, discarding later moves.
    pub fn jump_selected(&mut self) {
        match self.session.jump_to(self.cursor) {
            Ok(()) => {
                self.cursor = self.session.current_step();
                self.message = format!("Rewound to step {}.", self.session.current_step());
            }
            // Unreachable while the cursor is clamped to the list, but a
            // resize race costs nothing to absorb.
            Err(e) => {
                warn!(error = %e, "rejected jump");
                self.message = format!("Invalid jump: {e}.");
            }
        }
    }

    /// Starts a fresh game.
    pub fn restart(&mut self) {
        self.session = GameSession::new();
        self.cursor = 0;
        self.message = "New game.".to_string();
    }

    /// Writes the session snapshot to the configured save path.
    pub fn save(&mut self) {
        match self.write_snapshot() {
            Ok(()) => {
                self.message = format!("Session saved to {}.", self.save_path.display());
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.message = format!("Save failed: {e}.");
            }
        }
    }

    fn write_snapshot(&self) -> Result<()> {
        let saved = SavedSession::from(&self.session);
        let json = serde_json::to_string_pretty(&saved).context("serializing session")?;
        fs::write(&self.save_path, json)
            .with_context(|| format!("writing {}", self.save_path.display()))?;
        Ok(())
    }
}
