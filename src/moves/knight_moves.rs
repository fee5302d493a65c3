//! Knight destinations: the eight `{±1,±2}` jumps.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;
use crate::moves::step_moves::{step, KNIGHT_OFFSETS};

#[inline]
pub fn knight_destinations(
    board: &Board,
    origin: Position,
    color: Color,
    include_defending: bool,
) -> SquareSet {
    step(board, origin, color, &KNIGHT_OFFSETS, include_defending)
}
