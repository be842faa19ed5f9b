//! Tests for the board and the rules over it.

use tictactoe::{Board, Coordinate, GameError, Mark, Player, Token, check_win, is_draw};

fn players() -> [Player; 2] {
    [Player::new("Ada", Token::X), Player::new("Grace", Token::O)]
}

#[test]
fn test_place_then_get_everywhere() {
    for coord in Coordinate::all() {
        let mut board = Board::new();
        assert_eq!(board.place_token(coord.row(), coord.col(), Token::O), Ok(true));
        assert_eq!(board.get_cell(coord.row(), coord.col()), Ok(Mark::Occupied(Token::O)));
        assert_eq!(board.cell(coord), Mark::Occupied(Token::O));
    }
}

#[test]
fn test_occupied_placement_is_idempotent_failure() {
    let mut board = Board::new();
    board.place_token(2, 1, Token::X).unwrap();
    let before = board.clone();

    for _ in 0..2 {
        assert_eq!(board.place_token(2, 1, Token::O), Ok(false));
        assert_eq!(board, before);
    }
}

#[test]
fn test_invalid_coordinates() {
    let board = Board::new();
    assert_eq!(
        board.get_cell(0, 3),
        Err(GameError::InvalidCoordinate { row: 0, col: 3 })
    );
    assert_eq!(
        Coordinate::new(5, 5).unwrap_err().to_string(),
        "Coordinate (5, 5) is outside the 3x3 board"
    );
}

#[test]
fn test_reset_from_any_state() {
    let mut board = Board::new();
    board.place_token(0, 0, Token::X).unwrap();
    board.place_token(2, 2, Token::O).unwrap();
    board.reset();
    assert_eq!(board.snapshot(), Board::new().snapshot());
    assert_eq!(board.empty_cells().len(), 9);
}

#[test]
fn test_snapshot_is_row_major() {
    let mut board = Board::new();
    board.place_token(0, 2, Token::X).unwrap();
    board.place_token(2, 0, Token::O).unwrap();

    let snapshot = board.snapshot();
    assert_eq!(snapshot[0][2], Mark::Occupied(Token::X));
    assert_eq!(snapshot[2][0], Mark::Occupied(Token::O));
    assert_eq!(snapshot[1][1], Mark::Empty);
}

#[test]
fn test_full_board_without_line() {
    let mut board = Board::new();
    // O X O / O X X / X O X
    let layout = [
        [Token::O, Token::X, Token::O],
        [Token::O, Token::X, Token::X],
        [Token::X, Token::O, Token::X],
    ];
    for (row, tokens) in layout.iter().enumerate() {
        for (col, token) in tokens.iter().enumerate() {
            board.place_token(row, col, *token).unwrap();
        }
    }

    assert_eq!(check_win(&board, &players()), None);
    assert!(board.is_full());
    assert!(is_draw(&board, &players()));
}
