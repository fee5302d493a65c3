//! Sliding movement shared by rooks, bishops and queens.
//!
//! A ray marches one square at a time from the origin and stops on the first
//! occupied square. That square is kept when it holds an opposing piece, or
//! when `include_defending` asks for covered squares regardless of owner.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;

/// `(d_rank, d_file)` steps along ranks and files.
pub const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// `(d_rank, d_file)` steps along diagonals.
pub const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn slide(
    board: &Board,
    origin: Position,
    color: Color,
    rays: &[(i8, i8)],
    include_defending: bool,
) -> SquareSet {
    let mut reached = SquareSet::EMPTY;
    for &(d_rank, d_file) in rays {
        reached |= trace_ray(board, origin, color, d_rank, d_file, include_defending);
    }
    reached
}

fn trace_ray(
    board: &Board,
    origin: Position,
    color: Color,
    d_rank: i8,
    d_file: i8,
    include_defending: bool,
) -> SquareSet {
    let mut reached = SquareSet::EMPTY;
    let mut current = origin.offset(d_rank, d_file);

    while let Some(target) = current {
        match board.piece_at(target) {
            None => reached.insert(target),
            Some(blocker) => {
                if include_defending || blocker.color() != color {
                    reached.insert(target);
                }
                break;
            }
        }
        current = target.offset(d_rank, d_file);
    }

    reached
}
