//! Player-facing wording shared by the presentation layers.

use gridlock_core::MoveError;

/// Shown when input arrives after the match has ended.
pub const MATCH_OVER_HINT: &str = "Match over. Press r to start a new match or q to quit.";

/// Explains a rejected move in terms of the 1-9 keys players use.
pub fn describe_move_error(err: &MoveError) -> String {
    match err {
        MoveError::CellOccupied { index } => format!("Cell {} is already taken", index + 1),
        MoveError::IndexOutOfRange { .. } => "Choose a cell from 1 to 9".to_string(),
        MoveError::MatchOver => MATCH_OVER_HINT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_reported_one_based() {
        let text = describe_move_error(&MoveError::CellOccupied { index: 0 });
        assert_eq!(text, "Cell 1 is already taken");
    }
}
