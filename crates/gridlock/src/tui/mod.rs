//! Full-screen terminal UI.

mod app;
mod events;
mod input;
mod name_entry;
mod ui;

use anyhow::Result;
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::setup::{Roster, SetupAbandoned, collect_roster};
use app::{App, Flow};
use name_entry::TuiNameSource;

/// Terminal type driven by the UI.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the players quit.
///
/// Each match begins with the name handshake. Restarting abandons the
/// current match and runs the handshake again.
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Gridlock TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut keys = events::spawn_key_reader();
    let res = run_matches(&mut terminal, &mut keys, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Err(err) if err.is::<SetupAbandoned>() => {
            info!("Players left during setup");
            Ok(())
        }
        Err(err) => {
            error!(error = ?err, "TUI error");
            Err(err)
        }
        Ok(()) => {
            info!("TUI closed");
            Ok(())
        }
    }
}

async fn run_matches(
    terminal: &mut Tui,
    keys: &mut mpsc::UnboundedReceiver<KeyEvent>,
    config: &AppConfig,
) -> Result<()> {
    loop {
        let roster = {
            let mut names = TuiNameSource::new(terminal, keys, config);
            collect_roster(&mut names).await?
        };

        match play_match(terminal, keys, &roster, config).await? {
            Flow::Restart => info!("Restarting with new players"),
            Flow::Quit | Flow::Continue => return Ok(()),
        }
    }
}

#[instrument(skip_all, fields(x = %roster.x().name(), o = %roster.o().name()))]
async fn play_match(
    terminal: &mut Tui,
    keys: &mut mpsc::UnboundedReceiver<KeyEvent>,
    roster: &Roster,
    config: &AppConfig,
) -> Result<Flow> {
    let mut app = App::new(roster.controller()?);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app, config))?;

        let Some(key) = keys.recv().await else {
            return Ok(Flow::Quit);
        };
        match app.handle_key(key.code) {
            Flow::Continue => {}
            flow => return Ok(flow),
        }
    }
}
