//! Player identity: a marker plus a display name assigned during setup.

use crate::Marker;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Reasons a display name is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// Empty or whitespace-only submission.
    #[display("Name cannot be empty")]
    Blank,
    /// The player was already named.
    #[display("Name has already been assigned")]
    AlreadyAssigned,
}

/// One of the two participants in a match.
///
/// The marker is fixed at construction. The name may be assigned exactly
/// once, while the match is being set up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: Option<String>,
    marker: Marker,
}

impl Player {
    /// Creates an unnamed player.
    pub fn new(marker: Marker) -> Self {
        Self { name: None, marker }
    }

    /// Creates a player and assigns its name in one step.
    ///
    /// # Errors
    ///
    /// [`NameError::Blank`] if `name` is empty after trimming.
    pub fn named(marker: Marker, name: impl AsRef<str>) -> Result<Self, NameError> {
        let mut player = Self::new(marker);
        player.assign_name(name)?;
        Ok(player)
    }

    /// Assigns the display name. Surrounding whitespace is dropped.
    ///
    /// # Errors
    ///
    /// [`NameError::Blank`] for an empty or whitespace-only name,
    /// [`NameError::AlreadyAssigned`] if this player already has one.
    #[instrument(skip(self, name), fields(marker = %self.marker))]
    pub fn assign_name(&mut self, name: impl AsRef<str>) -> Result<(), NameError> {
        if self.name.is_some() {
            warn!("Player already named");
            return Err(NameError::AlreadyAssigned);
        }

        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(NameError::Blank);
        }

        info!(name = %trimmed, "Player named");
        self.name = Some(trimmed.to_string());
        Ok(())
    }

    /// Display name, or `Player X` / `Player O` until one is assigned.
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.marker.default_name())
    }

    /// The player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Checks whether a name has been assigned.
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
