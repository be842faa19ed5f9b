//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::{Coordinate, SIZE};
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => return cursor,
    };
    Coordinate::new(row, col).unwrap_or(cursor)
}

/// Maps keys `1`-`9` to the cell with that number in the on-screen legend.
pub fn digit_to_coordinate(c: char) -> Option<Coordinate> {
    let digit = c.to_digit(10)? as usize;
    if digit == 0 {
        return None;
    }
    Coordinate::from_index(digit - 1).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(at(1, 1), KeyCode::Up), at(0, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Down), at(2, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Left), at(1, 0));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Right), at(1, 2));
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(at(0, 0), KeyCode::Up), at(0, 0));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Left), at(0, 0));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(2, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Right), at(2, 2));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Char('x')), at(1, 1));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digit_to_coordinate('1'), Some(at(0, 0)));
        assert_eq!(digit_to_coordinate('6'), Some(at(1, 2)));
        assert_eq!(digit_to_coordinate('9'), Some(at(2, 2)));
        assert_eq!(digit_to_coordinate('0'), None);
        assert_eq!(digit_to_coordinate('a'), None);
    }
}
