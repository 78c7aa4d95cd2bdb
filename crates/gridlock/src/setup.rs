//! Name-entry handshake run before every match.
//!
//! Names are collected strictly in order: player X must finish before player
//! O is asked, and a blank submission re-prompts the same player. There is no
//! timeout; a source that stops producing input ends setup with an error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use derive_more::{Display, Error};
use gridlock_core::{MatchController, MatchError, Marker, NameError, Player};
use tracing::{debug, info, instrument};

/// Supplies raw name submissions, one per request.
#[async_trait]
pub trait NameSource: Send {
    /// Asks for the name of the player holding `marker`.
    ///
    /// `rejection` holds the reason the previous submission for this player
    /// was refused, so the source can show it alongside the re-prompt.
    async fn request_name(&mut self, marker: Marker, rejection: Option<NameError>)
    -> Result<String>;
}

/// Raised by a [`NameSource`] when the user walks away from setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Setup abandoned")]
pub struct SetupAbandoned;

/// The two named players of a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    x: Player,
    o: Player,
}

impl Roster {
    /// Player holding X, who moves first.
    pub fn x(&self) -> &Player {
        &self.x
    }

    /// Player holding O.
    pub fn o(&self) -> &Player {
        &self.o
    }

    /// Starts a match on a fresh board, X to move.
    pub fn controller(&self) -> Result<MatchController<'_>, MatchError> {
        MatchController::new(&self.x, &self.o)
    }
}

/// Collects both names from `source`, X first, then O.
#[instrument(skip_all)]
pub async fn collect_roster<S>(source: &mut S) -> Result<Roster>
where
    S: NameSource + ?Sized,
{
    let x = collect_player(source, Marker::X).await?;
    let o = collect_player(source, Marker::O).await?;
    info!(x = %x.name(), o = %o.name(), "Roster complete");
    Ok(Roster { x, o })
}

#[instrument(skip(source))]
async fn collect_player<S>(source: &mut S, marker: Marker) -> Result<Player>
where
    S: NameSource + ?Sized,
{
    let mut player = Player::new(marker);
    let mut rejection = None;

    loop {
        let submission = source
            .request_name(marker, rejection)
            .await
            .with_context(|| format!("Name entry for player {} did not complete", marker))?;

        match player.assign_name(&submission) {
            Ok(()) => return Ok(player),
            Err(err) => {
                debug!(%err, "Name rejected, asking again");
                rejection = Some(err);
            }
        }
    }
}
