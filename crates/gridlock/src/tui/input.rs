//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor (a board index, 0-8) one cell in the arrow's direction.
///
/// The cursor stops at the board edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    row * 3 + col
}

/// Maps a digit key `1`-`9` to its board index.
pub fn cell_for_key(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(digit as usize - 1),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
        assert_eq!(move_cursor(8, KeyCode::Right), 8);
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(6, KeyCode::Left), 6);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(5, KeyCode::Enter), 5);
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(cell_for_key(KeyCode::Char('1')), Some(0));
        assert_eq!(cell_for_key(KeyCode::Char('9')), Some(8));
        assert_eq!(cell_for_key(KeyCode::Char('0')), None);
        assert_eq!(cell_for_key(KeyCode::Char('x')), None);
    }
}
