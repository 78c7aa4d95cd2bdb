//! Name prompts drawn in the terminal UI.

use super::ui;
use crate::config::AppConfig;
use crate::setup::{NameSource, SetupAbandoned};
use anyhow::{Context, Result};
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridlock_core::{Marker, NameError};
use ratatui::{Terminal, backend::Backend};
use tokio::sync::mpsc;
use tracing::debug;

/// Collects names through a full-screen text field.
pub struct TuiNameSource<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    keys: &'a mut mpsc::UnboundedReceiver<KeyEvent>,
    config: &'a AppConfig,
}

impl<'a, B: Backend> TuiNameSource<'a, B> {
    /// Borrows the terminal and the key channel for the handshake.
    pub fn new(
        terminal: &'a mut Terminal<B>,
        keys: &'a mut mpsc::UnboundedReceiver<KeyEvent>,
        config: &'a AppConfig,
    ) -> Self {
        Self {
            terminal,
            keys,
            config,
        }
    }
}

#[async_trait]
impl<B> NameSource for TuiNameSource<'_, B>
where
    B: Backend + Send,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    async fn request_name(
        &mut self,
        marker: Marker,
        rejection: Option<NameError>,
    ) -> Result<String> {
        let config = self.config;
        let error = rejection.map(|e| e.to_string());
        let mut input = String::new();

        loop {
            self.terminal.draw(|frame| {
                ui::draw_name_entry(frame, marker, &input, error.as_deref(), config)
            })?;

            let key = self.keys.recv().await.context("Terminal input closed")?;
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => return Err(SetupAbandoned.into()),
                KeyCode::Enter => {
                    debug!(%marker, "Name submitted");
                    return Ok(input);
                }
                KeyCode::Esc => return Err(SetupAbandoned.into()),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                    input.push(c)
                }
                _ => {}
            }
        }
    }
}
