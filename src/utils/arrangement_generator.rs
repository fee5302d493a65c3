//! Board-to-arrangement-string generator, the inverse of
//! `arrangement_parser::parse_arrangement`.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{ARRANGEMENT_LENGTH, EMPTY_SQUARE_CHAR};
use crate::game_state::chess_types::Position;

pub fn generate_arrangement(board: &Board) -> String {
    (0..ARRANGEMENT_LENGTH)
        .filter_map(Position::from_index)
        .map(|position| {
            board
                .piece_at(position)
                .map_or(EMPTY_SQUARE_CHAR, |piece| piece.to_char())
        })
        .collect()
}
