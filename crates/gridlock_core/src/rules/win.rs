//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Marker};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that win a match when filled by a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// Board indices covered by this line.
    pub const fn indices(self) -> [usize; 3] {
        match self {
            WinningLine::TopRow => [0, 1, 2],
            WinningLine::MiddleRow => [3, 4, 5],
            WinningLine::BottomRow => [6, 7, 8],
            WinningLine::LeftColumn => [0, 3, 6],
            WinningLine::CenterColumn => [1, 4, 7],
            WinningLine::RightColumn => [2, 5, 8],
            WinningLine::MainDiagonal => [0, 4, 8],
            WinningLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    /// Marker filling all three cells of this line, if any.
    pub fn owner(self, board: &Board) -> Option<Marker> {
        let [a, b, c] = self.indices();
        match board.get(a)? {
            Cell::Occupied(marker)
                if board.get(b) == Some(Cell::Occupied(marker))
                    && board.get(c) == Some(Cell::Occupied(marker)) =>
            {
                Some(marker)
            }
            _ => None,
        }
    }
}

/// Finds the first completed line and the marker that completed it.
///
/// Cells are write-once and a match stops at the first completed line, so at
/// most one marker can own lines on a board reached through play.
#[instrument(skip(board))]
pub fn completed_line(board: &Board) -> Option<(WinningLine, Marker)> {
    WinningLine::iter().find_map(|line| line.owner(board).map(|marker| (line, marker)))
}

/// Returns the marker that owns a completed line, if any.
pub fn winning_marker(board: &Board) -> Option<Marker> {
    completed_line(board).map(|(_, marker)| marker)
}
