//! Turn control and terminal-state evaluation for one match.

use crate::rules::{self, WinningLine};
use crate::{Board, CELL_COUNT, Cell, Marker, MatchSnapshot, MatchStatus, PlaceError, Player};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

/// Errors raised by [`MatchController::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index is outside `0..9`.
    #[display("Cell index {index} is out of range (must be 0-8)")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// The cell already holds a marker.
    #[display("Cell {index} is already occupied")]
    CellOccupied {
        /// The occupied index.
        index: usize,
    },
    /// The match is already won or drawn.
    #[display("The match is already over")]
    MatchOver,
}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::IndexOutOfRange { index } => MoveError::IndexOutOfRange { index },
            PlaceError::CellOccupied { index } => MoveError::CellOccupied { index },
        }
    }
}

/// Errors raised when binding players to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MatchError {
    /// Both players carry the same marker.
    #[display("Both players use marker {marker}")]
    DuplicateMarker {
        /// The shared marker.
        marker: Marker,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    First,
    Second,
}

impl Seat {
    fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Runs one match between two borrowed players over an owned board.
///
/// The controller never owns player identities; they outlive it and are
/// shared with whatever presentation layer collected their names. Once a
/// match is won or drawn, [`play_turn`](Self::play_turn) refuses further
/// moves until [`reset_match`](Self::reset_match).
#[derive(Debug, Clone)]
pub struct MatchController<'p> {
    board: Board,
    first: &'p Player,
    second: &'p Player,
    turn: Seat,
}

impl<'p> MatchController<'p> {
    /// Starts a match on a fresh board with `first` to move.
    ///
    /// # Errors
    ///
    /// [`MatchError::DuplicateMarker`] when both players share a marker.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: &'p Player, second: &'p Player) -> Result<Self, MatchError> {
        if first.marker() == second.marker() {
            warn!(marker = %first.marker(), "Players share a marker");
            return Err(MatchError::DuplicateMarker {
                marker: first.marker(),
            });
        }

        info!("Match started");
        Ok(Self {
            board: Board::new(),
            first,
            second,
            turn: Seat::First,
        })
    }

    /// Places the current player's marker at `index` and passes the turn.
    ///
    /// Returns the status after the move. On error neither the board nor
    /// the turn changes.
    ///
    /// # Errors
    ///
    /// [`MoveError::MatchOver`] once the match is terminal,
    /// [`MoveError::IndexOutOfRange`] / [`MoveError::CellOccupied`] for a
    /// rejected placement.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn play_turn(&mut self, index: usize) -> Result<MatchStatus<'p>, MoveError> {
        if self.status().is_terminal() {
            warn!("Move attempted after match ended");
            return Err(MoveError::MatchOver);
        }

        let marker = self.current_player().marker();
        self.board.place_marker(index, marker)?;
        self.turn = self.turn.other();

        let status = self.status();
        debug!(%status, "Turn played");
        Ok(status)
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &'p Player {
        match self.turn {
            Seat::First => self.first,
            Seat::Second => self.second,
        }
    }

    /// The player who owns a completed line, if any.
    ///
    /// Resolved from the line's marker, so the answer does not depend on
    /// whether the turn has already passed.
    pub fn check_winner(&self) -> Option<&'p Player> {
        rules::winning_marker(&self.board).map(|marker| self.player_with(marker))
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::completed_line(&self.board).map(|(line, _)| line)
    }

    /// True iff every cell is filled and nobody won.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Current status; a win is checked before a draw.
    pub fn status(&self) -> MatchStatus<'p> {
        if let Some(winner) = self.check_winner() {
            MatchStatus::Won(winner)
        } else if self.is_draw() {
            MatchStatus::Drawn
        } else {
            MatchStatus::InProgress(self.current_player())
        }
    }

    /// Clears the board and gives the move back to the first player.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.board.reset();
        self.turn = Seat::First;
        info!(first = %self.first.name(), "Match reset");
    }

    /// Read-only board view.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the nine cells.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        *self.board.cells()
    }

    /// Both players, first seat first.
    pub fn players(&self) -> [&'p Player; 2] {
        [self.first, self.second]
    }

    /// Owned, serializable picture of the match.
    pub fn snapshot(&self) -> MatchSnapshot {
        let status = self.status();
        MatchSnapshot::new(
            self.cells().map(Cell::marker),
            status.state(),
            status.to_string(),
            self.current_player().marker(),
            self.winning_line().map(WinningLine::indices),
        )
    }

    fn player_with(&self, marker: Marker) -> &'p Player {
        if self.first.marker() == marker {
            self.first
        } else {
            self.second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> (Player, Player) {
        (
            Player::named(Marker::X, "Xavier").unwrap(),
            Player::named(Marker::O, "Olive").unwrap(),
        )
    }

    #[test]
    fn test_first_player_moves_first() {
        let (x, o) = players();
        let game = MatchController::new(&x, &o).unwrap();
        assert_eq!(game.current_player(), &x);
        assert_eq!(game.status(), MatchStatus::InProgress(&x));
    }

    #[test]
    fn test_new_match_starts_on_empty_board() {
        let (x, o) = players();
        let game = MatchController::new(&x, &o).unwrap();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.board().empty_cells().len(), CELL_COUNT);
    }

    #[test]
    fn test_duplicate_marker_rejected() {
        let a = Player::named(Marker::X, "A").unwrap();
        let b = Player::named(Marker::X, "B").unwrap();
        assert_eq!(
            MatchController::new(&a, &b).unwrap_err(),
            MatchError::DuplicateMarker { marker: Marker::X }
        );
    }

    #[test]
    fn test_failed_move_keeps_turn() {
        let (x, o) = players();
        let mut game = MatchController::new(&x, &o).unwrap();
        game.play_turn(0).unwrap();
        assert_eq!(game.play_turn(0), Err(MoveError::CellOccupied { index: 0 }));
        assert_eq!(game.play_turn(12), Err(MoveError::IndexOutOfRange { index: 12 }));
        assert_eq!(game.current_player(), &o);
        assert_eq!(game.cells()[0], Cell::Occupied(Marker::X));
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let (x, o) = players();
        let mut game = MatchController::new(&x, &o).unwrap();
        for index in [0, 3, 1, 4, 2] {
            game.play_turn(index).unwrap();
        }
        let before = game.board().clone();
        assert_eq!(game.play_turn(8), Err(MoveError::MatchOver));
        assert_eq!(game.board(), &before);
        assert_eq!(game.winning_line(), Some(WinningLine::TopRow));
    }

    #[test]
    fn test_second_seat_may_hold_x() {
        let (x, o) = players();
        let mut game = MatchController::new(&o, &x).unwrap();
        game.play_turn(4).unwrap();
        assert_eq!(game.cells()[4], Cell::Occupied(Marker::O));
        assert_eq!(game.current_player(), &x);
    }

    #[test]
    fn test_snapshot() {
        let (x, o) = players();
        let mut game = MatchController::new(&x, &o).unwrap();
        game.play_turn(4).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.cells()[4], Some(Marker::X));
        assert_eq!(snapshot.status(), "Olive's turn");
        assert_eq!(*snapshot.current(), Marker::O);
        assert_eq!(*snapshot.winning_line(), None);
    }
}
