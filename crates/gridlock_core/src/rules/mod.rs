//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). They know nothing about
//! players or turns, so the controller and the presentation layers can both
//! ask the same questions of a board.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WinningLine, completed_line, winning_marker};
