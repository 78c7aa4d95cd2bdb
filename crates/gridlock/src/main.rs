//! Gridlock - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gridlock::{AppConfig, Cli, Command, Console, init_tracing, run_tui};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(&cli.config)?;
    if let Some(filter) = cli.log_filter {
        config = config.with_log_filter(filter);
    }

    init_tracing(config.log_filter(), config.log_file())?;
    info!(config = ?config, "Configuration loaded");

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(&config).await,
        Command::Console { json } => {
            Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .with_json(json)
                .run()
                .await
        }
    }
}
