//! The 3x3 board.

use super::error::GameError;
use super::types::{Cell, Coordinate, Mark, SIZE, Token};
use tracing::{debug, instrument};

/// Read-only copy of every mark, indexed `[row][col]`.
pub type Snapshot = [[Mark; SIZE]; SIZE];

/// 3x3 tic-tac-toe board.
///
/// Owns its nine cells for its whole lifetime; resetting clears them in
/// place instead of replacing the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at a validated coordinate.
    pub fn cell(&self, coord: Coordinate) -> Mark {
        self.cells[coord.row()][coord.col()].mark()
    }

    /// Returns the mark at `(row, col)`.
    pub fn get_cell(&self, row: usize, col: usize) -> Result<Mark, GameError> {
        Ok(self.cell(Coordinate::new(row, col)?))
    }

    /// Places `token` at a validated coordinate.
    ///
    /// Returns `false` without touching the board when the cell is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coordinate, token: Token) -> bool {
        let cell = &mut self.cells[coord.row()][coord.col()];
        if !cell.mark().is_empty() {
            debug!(existing = %cell.mark(), "Cell already taken");
            return false;
        }
        cell.add_token(token);
        true
    }

    /// Places `token` at `(row, col)`.
    pub fn place_token(&mut self, row: usize, col: usize, token: Token) -> Result<bool, GameError> {
        Ok(self.place(Coordinate::new(row, col)?, token))
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().flatten().for_each(Cell::clear);
    }

    /// Copies out the current marks.
    pub fn snapshot(&self) -> Snapshot {
        self.cells.map(|row| row.map(|cell| cell.mark()))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.mark().is_empty())
    }

    /// Coordinates that are still free, in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|coord| self.cell(*coord).is_empty())
            .collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their 1-based key so the grid doubles as a legend.
    pub fn render(&self) -> String {
        let mut result = String::new();
        for coord in Coordinate::all() {
            let symbol = match self.cell(coord) {
                Mark::Empty => (coord.index() + 1).to_string(),
                Mark::Occupied(token) => token.to_string(),
            };
            result.push_str(&symbol);
            if coord.col() < SIZE - 1 {
                result.push('|');
            } else if coord.row() < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
