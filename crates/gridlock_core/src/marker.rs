//! The two-symbol marker alphabet.

use serde::{Deserialize, Serialize};

/// A marker placed on the board.
///
/// Iterating with [`strum::IntoEnumIterator`] yields `X` before `O`, which is
/// also the order players are named during setup.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Marker {
    /// Cross, moves first in a fresh match.
    X,
    /// Nought.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Name reported by a player holding this marker before one is assigned.
    pub fn default_name(self) -> &'static str {
        match self {
            Marker::X => "Player X",
            Marker::O => "Player O",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for marker in Marker::iter() {
            assert_ne!(marker.opponent(), marker);
            assert_eq!(marker.opponent().opponent(), marker);
        }
    }

    #[test]
    fn test_iteration_order_is_x_then_o() {
        let order: Vec<_> = Marker::iter().collect();
        assert_eq!(order, vec![Marker::X, Marker::O]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Marker::X.to_string(), "X");
        assert_eq!(Marker::O.to_string(), "O");
    }
}
