//! The 3x3 write-once board.

use crate::Marker;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No marker yet.
    #[default]
    Empty,
    /// Holds a marker. Never overwritten until the board is reset.
    Occupied(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Checks whether the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Reasons a marker cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
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
}

/// 3x3 board stored in row-major order (indices 0-8).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `marker` at `index` if that cell is empty.
    ///
    /// On failure the board is left untouched.
    ///
    /// # Errors
    ///
    /// [`PlaceError::IndexOutOfRange`] for `index >= 9`,
    /// [`PlaceError::CellOccupied`] when the cell already holds a marker.
    #[instrument(skip(self))]
    pub fn place_marker(&mut self, index: usize, marker: Marker) -> Result<(), PlaceError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::IndexOutOfRange { index })?;

        if !cell.is_empty() {
            debug!(index, "Rejected placement on occupied cell");
            return Err(PlaceError::CellOccupied { index });
        }

        *cell = Cell::Occupied(marker);
        Ok(())
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a marker.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with empty cells labelled by their 1-based key.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
