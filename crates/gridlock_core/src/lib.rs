//! Gridlock core - the tic-tac-toe match engine.
//!
//! This crate is pure game logic with no I/O: a write-once [`Board`], the two
//! [`Player`] identities, and the [`MatchController`] that alternates turns
//! and decides when a match is won or drawn.
//!
//! # Example
//!
//! ```
//! use gridlock_core::{MatchController, MatchStatus, Marker, Player};
//!
//! let x = Player::named(Marker::X, "Ada").unwrap();
//! let o = Player::named(Marker::O, "Grace").unwrap();
//! let mut game = MatchController::new(&x, &o).unwrap();
//!
//! for index in [0, 3, 1, 4, 2] {
//!     game.play_turn(index).unwrap();
//! }
//! assert_eq!(game.status(), MatchStatus::Won(&x));
//! assert_eq!(game.status().to_string(), "Ada wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod marker;
mod player;
pub mod rules;
mod status;

pub use board::{Board, CELL_COUNT, Cell, PlaceError};
pub use controller::{MatchController, MatchError, MoveError};
pub use marker::Marker;
pub use player::{NameError, Player};
pub use rules::WinningLine;
pub use status::{MatchSnapshot, MatchState, MatchStatus};
