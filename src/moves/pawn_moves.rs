//! Pawn destinations.
//!
//! Pushes go one square forward onto an empty square, or two from the
//! starting rank when both squares ahead are empty. Diagonal steps are
//! destinations only onto an opposing piece. There is no en passant and no
//! promotion; a pawn on the far rank simply has nowhere to go.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{pawn_direction, pawn_starting_rank};
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;

/// With `include_defending` set, only the attack footprint is reported: both
/// forward diagonals, empty or not. Pushes never threaten anything.
pub fn pawn_destinations(
    board: &Board,
    origin: Position,
    color: Color,
    include_defending: bool,
) -> SquareSet {
    if include_defending {
        return pawn_attacks(origin, color);
    }

    let mut reached = SquareSet::EMPTY;
    let forward = pawn_direction(color);

    if let Some(one_step) = origin.offset(forward, 0) {
        if board.is_empty(one_step) {
            reached.insert(one_step);

            if origin.rank() == pawn_starting_rank(color) {
                if let Some(two_step) = origin.offset(2 * forward, 0) {
                    if board.is_empty(two_step) {
                        reached.insert(two_step);
                    }
                }
            }
        }
    }

    for target in pawn_attacks(origin, color) {
        if board.is_occupied_by(target, color.opposite()) {
            reached.insert(target);
        }
    }

    reached
}

/// The two forward diagonals that are on the board.
pub fn pawn_attacks(origin: Position, color: Color) -> SquareSet {
    let forward = pawn_direction(color);
    [-1i8, 1i8]
        .into_iter()
        .filter_map(|d_file| origin.offset(forward, d_file))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks, pawn_destinations};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, Position};

    fn sq(rank: i8, file: i8) -> Position {
        Position::from_rank_file(rank, file).expect("test square on board")
    }

    #[test]
    fn white_pawn_on_starting_rank_has_single_and_double_push() {
        let board = Board::empty();
        let reached = pawn_destinations(&board, sq(6, 4), Color::White, false);
        assert_eq!(reached.iter().collect::<Vec<_>>(), vec![sq(4, 4), sq(5, 4)]);
    }

    #[test]
    fn black_pawn_moves_towards_higher_ranks() {
        let board = Board::empty();
        let reached = pawn_destinations(&board, sq(1, 0), Color::Black, false);
        assert!(reached.contains(sq(2, 0)));
        assert!(reached.contains(sq(3, 0)));

        let advanced = pawn_destinations(&board, sq(2, 0), Color::Black, false);
        assert_eq!(advanced.len(), 1);
    }

    #[test]
    fn blocked_pawn_cannot_jump_over_a_piece() {
        let mut board = Board::empty();
        board.set(sq(5, 4), Some(Piece::knight(Color::Black)));
        assert!(pawn_destinations(&board, sq(6, 4), Color::White, false).is_empty());

        let mut far_blocked = Board::empty();
        far_blocked.set(sq(4, 4), Some(Piece::knight(Color::Black)));
        let reached = pawn_destinations(&far_blocked, sq(6, 4), Color::White, false);
        assert_eq!(reached.iter().collect::<Vec<_>>(), vec![sq(5, 4)]);
    }

    #[test]
    fn diagonals_need_an_opposing_piece() {
        let mut board = Board::empty();
        board.set(sq(5, 3), Some(Piece::rook(Color::Black)));
        board.set(sq(5, 5), Some(Piece::rook(Color::White)));

        let reached = pawn_destinations(&board, sq(6, 4), Color::White, false);
        assert!(reached.contains(sq(5, 3)));
        assert!(!reached.contains(sq(5, 5)));
    }

    #[test]
    fn defending_mode_reports_empty_diagonals_but_not_pushes() {
        let board = Board::empty();
        let covered = pawn_destinations(&board, sq(1, 0), Color::Black, true);
        assert_eq!(covered.iter().collect::<Vec<_>>(), vec![sq(2, 1)]);
        assert_eq!(pawn_attacks(sq(4, 4), Color::White).len(), 2);
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let board = Board::empty();
        assert!(pawn_destinations(&board, sq(0, 3), Color::White, false).is_empty());
    }
}
