//! Terminal UI for rewind_tictactoe.
//!
//! The view collaborator: renders the grid, status, and history jump
//! list, and forwards key presses to the session as intents. All game
//! rules live in the `rewind_tictactoe` crate.

#![warn(missing_docs)]

mod app;
mod cli;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let app = match &cli.load {
        Some(path) => App::load(path, cli.save_path.clone())?,
        None => App::new(cli.save_path.clone()),
    };

    info!("Starting rewind_tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Leave the final position on the scrollback for the player.
    let app = res?;
    println!("{}", app.session().status());
    println!();
    println!("{}", app.session().board());

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(app),
                KeyCode::Char('r') => app.restart(),
                KeyCode::Char('s') => app.save(),
                KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
                KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
                KeyCode::Enter => app.jump_selected(),
                KeyCode::Char(c @ '1'..='9') => {
                    app.place(c as usize - '1' as usize);
                }
                _ => {}
            }
        }
    }
}
