//! Arrangement-string-to-Board parser.
//!
//! An arrangement is 64 characters, rank 0 first and file 0 first within each
//! rank. Uppercase letters are white, lowercase black, `-` is an empty
//! square. `S`/`s` and `L`/`l` seed a rook or king that has already moved.

use crate::chess_errors::ArrangementError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::ARRANGEMENT_LENGTH;
use crate::game_state::chess_types::{Color, Piece, Position};

/// Checks length and king counts without building anything.
pub fn verify_arrangement(arrangement: &str) -> Result<(), ArrangementError> {
    let length = arrangement.chars().count();
    if length != ARRANGEMENT_LENGTH {
        return Err(ArrangementError::MalformedArrangement { length });
    }

    let mut kings = [0usize; 2];
    for ch in arrangement.chars() {
        match ch {
            'K' | 'L' => kings[Color::White.index()] += 1,
            'k' | 'l' => kings[Color::Black.index()] += 1,
            _ => {}
        }
    }

    for color in [Color::White, Color::Black] {
        let count = kings[color.index()];
        if count != 1 {
            return Err(ArrangementError::InvalidKingCount { color, count });
        }
    }

    Ok(())
}

/// Any character outside the piece alphabet leaves its square empty.
pub fn parse_arrangement(arrangement: &str) -> Result<Board, ArrangementError> {
    verify_arrangement(arrangement)?;

    let mut board = Board::empty();
    for (index, ch) in arrangement.chars().enumerate() {
        let Some(position) = Position::from_index(index) else {
            continue;
        };
        board.set(position, Piece::from_char(ch));
    }

    Ok(board)
}
