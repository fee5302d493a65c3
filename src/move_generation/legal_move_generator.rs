//! Legal move enumeration and game-status evaluation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, Move};
use crate::move_generation::legal_move_apply::{commit_if_safe, relocate};
use crate::move_generation::legal_move_checks::is_king_under_attack;

/// Every reachable-set move of `color` paired with its origin.
pub fn candidate_moves(board: &Board, color: Color) -> impl Iterator<Item = Move> + '_ {
    board.pieces_of(color).flat_map(move |(origin, piece)| {
        piece
            .destinations(board, origin, false)
            .into_iter()
            .map(move |destination| Move::new(origin, destination))
    })
}

/// Moves of `color` that survive the full commit protocol, castling included.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    candidate_moves(board, color)
        .filter(|&mv| commit_if_safe(board, mv, color).is_ok())
        .collect()
}

/// `true` when some candidate move, relocated on the grid, leaves the king of
/// `color` safe.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    candidate_moves(board, color).any(|mv| !is_king_under_attack(&relocate(board, mv), color))
}

/// Status of a position where `side_to_move` is about to play.
pub fn evaluate_status(board: &Board, side_to_move: Color) -> GameStatus {
    if has_legal_move(board, side_to_move) {
        GameStatus::Ongoing
    } else if is_king_under_attack(board, side_to_move) {
        GameStatus::won_by(side_to_move.opposite())
    } else {
        GameStatus::Draw
    }
}
