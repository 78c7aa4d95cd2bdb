//! Match status reporting for the presentation layer.

use crate::{Marker, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Where a match stands, with the player it concerns.
///
/// The `Display` form is the status line shown to players verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus<'p> {
    /// Waiting on this player's move.
    InProgress(&'p Player),
    /// This player completed a line.
    Won(&'p Player),
    /// Board full, no line completed.
    Drawn,
}

impl MatchStatus<'_> {
    /// Checks whether the match has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchStatus::InProgress(_))
    }

    /// The payload-free state tag.
    pub fn state(&self) -> MatchState {
        match self {
            MatchStatus::InProgress(_) => MatchState::InProgress,
            MatchStatus::Won(_) => MatchState::Won,
            MatchStatus::Drawn => MatchState::Drawn,
        }
    }
}

impl std::fmt::Display for MatchStatus<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::InProgress(player) => write!(f, "{}'s turn", player.name()),
            MatchStatus::Won(player) => write!(f, "{} wins!", player.name()),
            MatchStatus::Drawn => f.write_str("It's a draw!"),
        }
    }
}

/// State-machine position of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// Moves are being accepted.
    InProgress,
    /// Terminal: a line was completed.
    Won,
    /// Terminal: board full without a line.
    Drawn,
}

/// Owned, serializable picture of a match after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MatchSnapshot {
    /// Cell contents in row-major order.
    cells: [Option<Marker>; 9],
    /// State tag.
    state: MatchState,
    /// The status line.
    status: String,
    /// Marker of the player whose turn it is.
    current: Marker,
    /// Indices of the completed line, when won.
    winning_line: Option<[usize; 3]>,
}

impl MatchSnapshot {
    /// Serializes the snapshot as a single line of JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
