//! Line-mode presentation over any async reader/writer pair.

use crate::messages::{MATCH_OVER_HINT, describe_move_error};
use crate::setup::{NameSource, Roster, collect_roster};
use anyhow::{Context, Result};
use async_trait::async_trait;
use gridlock_core::{MatchController, Marker, NameError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

const HELP: &str = "Enter 1-9 to play a cell, r to restart with new names, q to quit.";

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Cell(usize),
    Restart,
    Quit,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "q" | "quit" => return Input::Quit,
            "r" | "restart" => return Input::Restart,
            _ => {}
        }
        // Keys are 1-based; zero is not a key.
        match line.parse::<usize>() {
            Ok(key) if key >= 1 => Input::Cell(key - 1),
            _ => Input::Unknown,
        }
    }
}

/// How a match was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Restart,
    Quit,
}

/// Plays matches over a line-oriented text stream.
///
/// Generic over the streams so it can run on stdin/stdout or on in-memory
/// buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    json: bool,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a console reading commands from `input`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            json: false,
        }
    }

    /// Also print a JSON snapshot after every board.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Runs matches until the player quits or input ends.
    ///
    /// Every match starts with the name handshake. A restart drops the
    /// current players and board and runs it again.
    pub async fn run(mut self) -> Result<()> {
        info!(json = self.json, "Console session started");
        loop {
            let roster = collect_roster(&mut self).await?;
            match self.play(&roster).await? {
                Next::Restart => {
                    info!("Restarting with new players");
                    self.write_line("").await?;
                }
                Next::Quit => break,
            }
        }
        info!("Console session ended");
        Ok(())
    }

    async fn play(&mut self, roster: &Roster) -> Result<Next> {
        let mut game = roster.controller()?;
        self.write_line(HELP).await?;
        self.show(&game).await?;

        loop {
            self.write("> ").await?;
            let Some(line) = self.read_line().await? else {
                debug!("Input closed mid-match");
                return Ok(Next::Quit);
            };

            match Input::parse(&line) {
                Input::Quit => return Ok(Next::Quit),
                Input::Restart => return Ok(Next::Restart),
                Input::Cell(_) if game.status().is_terminal() => {
                    self.write_line(MATCH_OVER_HINT).await?;
                }
                Input::Cell(index) => match game.play_turn(index) {
                    Ok(_) => self.show(&game).await?,
                    Err(err) => {
                        warn!(%err, index, "Move rejected");
                        self.write_line(&describe_move_error(&err)).await?;
                    }
                },
                Input::Unknown => self.write_line(HELP).await?,
            }
        }
    }

    /// Prints the board, the status line and, if enabled, the snapshot.
    async fn show(&mut self, game: &MatchController<'_>) -> Result<()> {
        let text = format!("\n{}\n\n{}", game.board(), game.status());
        self.write_line(&text).await?;
        if self.json {
            let json = game.snapshot().to_json()?;
            self.write_line(&json).await?;
        }
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{}\n", text)).await
    }
}

#[async_trait]
impl<R, W> NameSource for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn request_name(
        &mut self,
        marker: Marker,
        rejection: Option<NameError>,
    ) -> Result<String> {
        if let Some(err) = rejection {
            self.write_line(&err.to_string()).await?;
        }
        self.write(&format!("Name for player {}: ", marker)).await?;
        self.read_line()
            .await?
            .context("Input ended before a name was entered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys_are_one_based() {
        assert_eq!(Input::parse("1"), Input::Cell(0));
        assert_eq!(Input::parse(" 9 "), Input::Cell(8));
        assert_eq!(Input::parse("10"), Input::Cell(9));
        assert_eq!(Input::parse("0"), Input::Unknown);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("q"), Input::Quit);
        assert_eq!(Input::parse("Restart"), Input::Restart);
        assert_eq!(Input::parse("m"), Input::Unknown);
        assert_eq!(Input::parse("hello"), Input::Unknown);
    }
}
