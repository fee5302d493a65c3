//! Applying moves to boards.
//!
//! Boards are values: every function here takes a board by reference and
//! hands back a new one, so a rejected move never has to be rolled back.

use crate::chess_errors::MoveRejection;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{home_rank, CastlingSide, KING_HOME_FILE};
use crate::game_state::chess_types::{Color, Move, Position};
use crate::move_generation::legal_move_checks::is_king_under_attack;

/// Grid-level relocation: the origin's occupant moves and captures whatever
/// stood on the destination. No castling rook, no flags.
pub fn relocate(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    next.relocate(mv.origin(), mv.destination());
    next
}

/// Full application of a move, including castling side effects and the
/// "has moved" flags of kings and rooks. Legality is not checked.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    let Some(mut moving) = next.take(mv.origin()) else {
        return next;
    };

    if moving.kind().is_king() && !moving.has_moved() {
        if let Some(side) = castling_side(mv, moving.color()) {
            move_castling_rook(&mut next, mv.origin().rank(), side);
        }
    }

    moving.mark_moved();
    next.set(mv.destination(), Some(moving));
    next
}

/// Applies `mv` and keeps the result only if the king of `mover` is not left
/// under attack.
pub fn commit_if_safe(board: &Board, mv: Move, mover: Color) -> Result<Board, MoveRejection> {
    let next = apply_move(board, mv);
    if is_king_under_attack(&next, mover) {
        return Err(MoveRejection::ExposesKing(mv, mover));
    }
    Ok(next)
}

/// The castling wing a king move from its home square lands on, if any.
fn castling_side(mv: Move, color: Color) -> Option<CastlingSide> {
    let origin = mv.origin();
    let destination = mv.destination();
    if origin.rank() != home_rank(color)
        || origin.file() != KING_HOME_FILE
        || destination.rank() != origin.rank()
    {
        return None;
    }
    CastlingSide::from_king_target_file(destination.file())
}

fn move_castling_rook(board: &mut Board, rank: u8, side: CastlingSide) {
    let (Some(from), Some(to)) = (
        Position::from_rank_file(rank as i8, side.rook_file() as i8),
        Position::from_rank_file(rank as i8, side.rook_target_file() as i8),
    ) else {
        return;
    };

    match board.take(from) {
        Some(mut rook) if rook.kind().is_rook() => {
            rook.mark_moved();
            board.set(to, Some(rook));
        }
        other => {
            board.set(from, other);
        }
    }
}
