//! Attack queries over a board.
//!
//! Two different unions are computed here. `controlled_squares` is the
//! defended-square footprint a king must avoid. `all_destinations_by_color`
//! is the plain reachable union, which decides whether a king is in check.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::square_set::SquareSet;
use crate::move_generation::piece_destinations::all_destinations;
use crate::moves::king_moves::king_attack_pattern;

/// Squares covered by every piece of `color`, counting squares held by its
/// own pieces. A king contributes only its adjacency pattern.
pub fn controlled_squares(board: &Board, color: Color) -> SquareSet {
    let mut covered = SquareSet::EMPTY;
    for (position, piece) in board.pieces_of(color) {
        covered |= if piece.kind().is_king() {
            king_attack_pattern(position)
        } else {
            piece.destinations(board, position, true)
        };
    }
    covered
}

/// Union of the ordinary destinations of every piece of `color`.
pub fn all_destinations_by_color(board: &Board, color: Color) -> SquareSet {
    let mut reached = SquareSet::EMPTY;
    for (position, _) in board.pieces_of(color) {
        reached |= all_destinations(board, position, false);
    }
    reached
}

/// `true` when the king of `color` stands on a square some opposing piece
/// could move to. A board without that king is never in check.
pub fn is_king_under_attack(board: &Board, color: Color) -> bool {
    let Some(king_square) = board.king_position(color) else {
        return false;
    };
    all_destinations_by_color(board, color.opposite()).contains(king_square)
}
