//! Gridlock - two-player tic-tac-toe in the terminal.
//!
//! Game logic lives in [`gridlock_core`]; this crate wires it to players.
//!
//! # Architecture
//!
//! - **Setup**: the async name handshake ([`collect_roster`]) run before
//!   every match, X first, then O
//! - **Console**: line-mode play over any async reader/writer ([`Console`])
//! - **TUI**: full-screen play with `ratatui` ([`run_tui`])
//! - **Config**: TOML settings ([`AppConfig`]) and the CLI ([`Cli`])
//!
//! # Example
//!
//! ```no_run
//! use gridlock::Console;
//! use tokio::io::BufReader;
//!
//! # async fn example() -> anyhow::Result<()> {
//! Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
//!     .run()
//!     .await
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod logging;
mod messages;
mod setup;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, MarkerColor};
pub use logging::init_tracing;

// Crate-level exports - Name handshake
pub use setup::{NameSource, Roster, SetupAbandoned, collect_roster};

// Crate-level exports - Presentation layers
pub use console::Console;
pub use tui::run_tui;
