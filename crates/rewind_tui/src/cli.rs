//! Command-line interface for rewind_tui.

use clap::Parser;
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - play and time-travel through game history
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Terminal tic-tac-toe with a time-travelling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Resume from a saved session snapshot instead of starting fresh
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Where 's' writes the session snapshot
    #[arg(long, default_value = "rewind_session.json", value_name = "FILE")]
    pub save_path: PathBuf,
}
