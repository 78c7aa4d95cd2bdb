//! Draw detection logic for tic-tac-toe.

use super::win::completed_line;
use crate::Board;
use tracing::instrument;

/// A board is drawn when it is full and no line is complete.
///
/// Only meaningful after the winner check; a full board can still hold a
/// line completed by the last move.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && completed_line(board).is_none()
}
