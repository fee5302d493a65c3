//! Bishop destinations: the four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;
use crate::moves::ray_moves::{slide, DIAGONAL_RAYS};

#[inline]
pub fn bishop_destinations(
    board: &Board,
    origin: Position,
    color: Color,
    include_defending: bool,
) -> SquareSet {
    slide(board, origin, color, &DIAGONAL_RAYS, include_defending)
}
