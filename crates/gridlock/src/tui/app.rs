//! Board-screen state and key handling.

use super::input::{cell_for_key, move_cursor};
use crate::messages::{MATCH_OVER_HINT, describe_move_error};
use crossterm::event::KeyCode;
use gridlock_core::MatchController;
use tracing::{debug, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep playing this match.
    Continue,
    /// Start over with a new name handshake.
    Restart,
    /// Leave the program.
    Quit,
}

const CENTER: usize = 4;

/// State of the board screen for one match.
pub struct App<'p> {
    game: MatchController<'p>,
    cursor: usize,
    notice: Option<String>,
}

impl<'p> App<'p> {
    /// Creates the screen with the cursor on the center cell.
    pub fn new(game: MatchController<'p>) -> Self {
        Self {
            game,
            cursor: CENTER,
            notice: None,
        }
    }

    /// The match being shown.
    pub fn game(&self) -> &MatchController<'p> {
        &self.game
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Feedback about the last rejected key, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The status line, rendered verbatim.
    pub fn status_line(&self) -> String {
        self.game.status().to_string()
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => return Flow::Restart,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            other => {
                if let Some(index) = cell_for_key(other) {
                    self.cursor = index;
                    self.play(index);
                }
            }
        }
        Flow::Continue
    }

    fn play(&mut self, index: usize) {
        // The board takes no input once the match is decided.
        if self.game.status().is_terminal() {
            self.notice = Some(MATCH_OVER_HINT.to_string());
            return;
        }

        match self.game.play_turn(index) {
            Ok(status) => {
                debug!(index, %status, "Move applied");
                self.notice = None;
            }
            Err(err) => self.notice = Some(describe_move_error(&err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::{Cell, Marker, Player};

    fn players() -> (Player, Player) {
        (
            Player::named(Marker::X, "Ada").unwrap(),
            Player::named(Marker::O, "Grace").unwrap(),
        )
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let (x, o) = players();
        let mut app = App::new(MatchController::new(&x, &o).unwrap());
        assert_eq!(app.handle_key(KeyCode::Up), Flow::Continue);
        assert_eq!(app.handle_key(KeyCode::Enter), Flow::Continue);
        assert_eq!(app.game().cells()[1], Cell::Occupied(Marker::X));
        assert_eq!(app.status_line(), "Grace's turn");
    }

    #[test]
    fn test_digit_moves_cursor_and_plays() {
        let (x, o) = players();
        let mut app = App::new(MatchController::new(&x, &o).unwrap());
        app.handle_key(KeyCode::Char('7'));
        assert_eq!(app.cursor(), 6);
        assert_eq!(app.game().cells()[6], Cell::Occupied(Marker::X));
    }

    #[test]
    fn test_occupied_cell_sets_notice() {
        let (x, o) = players();
        let mut app = App::new(MatchController::new(&x, &o).unwrap());
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.notice(), Some("Cell 5 is already taken"));
        assert_eq!(app.status_line(), "Grace's turn");

        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_input_ignored_after_win() {
        let (x, o) = players();
        let mut app = App::new(MatchController::new(&x, &o).unwrap());
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.status_line(), "Ada wins!");

        let board = app.game().board().clone();
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.game().board(), &board);
        assert_eq!(app.notice(), Some(MATCH_OVER_HINT));

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board(), &board);
        assert_eq!(app.status_line(), "Ada wins!");

        // A new match only starts through a restart, which re-runs setup.
        assert_eq!(app.handle_key(KeyCode::Char('m')), Flow::Continue);
        assert_eq!(app.game().board(), &board);
        assert_eq!(app.handle_key(KeyCode::Char('r')), Flow::Restart);
    }

    #[test]
    fn test_restart_and_quit_keys() {
        let (x, o) = players();
        let mut app = App::new(MatchController::new(&x, &o).unwrap());
        assert_eq!(app.handle_key(KeyCode::Char('r')), Flow::Restart);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
    }
}
