//! King movement.
//!
//! The king has two distinct operations. [`king_attack_pattern`] is the raw
//! adjacency footprint, used whenever another query needs to know which
//! squares a king threatens. [`king_legal_destinations`] is what the king
//! itself may choose: adjacent squares not controlled by the opponent, plus
//! any eligible castling target. Keeping them apart is what stops two kings
//! from asking each other about their destinations forever.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{home_rank, CastlingSide, KING_HOME_FILE};
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;
use crate::move_generation::legal_move_checks::controlled_squares;
use crate::moves::step_moves::{step, KING_OFFSETS};

/// Every on-board square adjacent to `origin`, whoever occupies it.
#[inline]
pub fn king_attack_pattern(origin: Position) -> SquareSet {
    KING_OFFSETS
        .iter()
        .filter_map(|&(d_rank, d_file)| origin.offset(d_rank, d_file))
        .collect()
}

pub fn king_legal_destinations(board: &Board, origin: Position, color: Color) -> SquareSet {
    let attacked = controlled_squares(board, color.opposite());
    let steps = step(board, origin, color, &KING_OFFSETS, false).difference(attacked);
    steps | castling_destinations(board, origin, color, attacked)
}

/// Castling targets for the king on `origin`, judged against `attacked` as
/// computed on the current board.
pub fn castling_destinations(
    board: &Board,
    origin: Position,
    color: Color,
    attacked: SquareSet,
) -> SquareSet {
    let mut reached = SquareSet::EMPTY;

    let Some(king) = board.piece_at(origin) else {
        return reached;
    };
    if !king.kind().is_king() || king.color() != color || king.has_moved() {
        return reached;
    }
    if origin.rank() != home_rank(color) || origin.file() != KING_HOME_FILE {
        return reached;
    }
    if attacked.contains(origin) {
        return reached;
    }

    for side in CastlingSide::ALL {
        if let Some(target) = castling_target(board, origin, color, side, attacked) {
            reached.insert(target);
        }
    }

    reached
}

fn castling_target(
    board: &Board,
    origin: Position,
    color: Color,
    side: CastlingSide,
    attacked: SquareSet,
) -> Option<Position> {
    let rank = origin.rank() as i8;
    let rook_square = Position::from_rank_file(rank, side.rook_file() as i8)?;
    let rook = board.piece_at(rook_square)?;
    if !rook.kind().is_rook() || rook.color() != color || rook.has_moved() {
        return None;
    }

    let (low, high) = if rook_square.file() < origin.file() {
        (rook_square.file(), origin.file())
    } else {
        (origin.file(), rook_square.file())
    };
    for file in (low + 1)..high {
        let between = Position::from_rank_file(rank, file as i8)?;
        if !board.is_empty(between) {
            return None;
        }
    }

    let target = Position::from_rank_file(rank, side.king_target_file() as i8)?;
    let direction: i8 = if target.file() < origin.file() { -1 } else { 1 };
    let mut file = origin.file() as i8;
    while file != target.file() as i8 {
        file += direction;
        let crossed = Position::from_rank_file(rank, file)?;
        if attacked.contains(crossed) {
            return None;
        }
    }

    Some(target)
}

#[cfg(test)]
mod tests {
    use super::{king_attack_pattern, king_legal_destinations};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};

    fn sq(rank: i8, file: i8) -> Position {
        Position::from_rank_file(rank, file).expect("test square on board")
    }

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set(sq(7, 4), Some(Piece::king(Color::White)));
        board.set(sq(7, 0), Some(Piece::rook(Color::White)));
        board.set(sq(7, 7), Some(Piece::rook(Color::White)));
        board.set(sq(0, 4), Some(Piece::king(Color::Black)));
        board
    }

    #[test]
    fn attack_pattern_ignores_occupancy() {
        assert_eq!(king_attack_pattern(sq(0, 0)).len(), 3);
        assert_eq!(king_attack_pattern(sq(3, 3)).len(), 8);
    }

    #[test]
    fn king_avoids_squares_the_opponent_controls() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Piece::king(Color::White)));
        board.set(sq(0, 3), Some(Piece::rook(Color::Black)));
        board.set(sq(0, 7), Some(Piece::king(Color::Black)));

        let reached = king_legal_destinations(&board, sq(4, 4), Color::White);
        assert!(!reached.contains(sq(3, 3)));
        assert!(!reached.contains(sq(4, 3)));
        assert!(!reached.contains(sq(5, 3)));
        assert!(reached.contains(sq(3, 4)));
        assert_eq!(reached.len(), 5);
    }

    #[test]
    fn king_cannot_capture_a_defended_piece() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Piece::king(Color::White)));
        board.set(sq(3, 4), Some(Piece::knight(Color::Black)));
        board.set(sq(0, 4), Some(Piece::rook(Color::Black)));
        board.set(sq(0, 0), Some(Piece::king(Color::Black)));

        let reached = king_legal_destinations(&board, sq(4, 4), Color::White);
        assert!(!reached.contains(sq(3, 4)));

        board.take(sq(0, 4));
        let reached = king_legal_destinations(&board, sq(4, 4), Color::White);
        assert!(reached.contains(sq(3, 4)));
    }

    #[test]
    fn kings_keep_their_distance() {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Piece::king(Color::White)));
        board.set(sq(2, 4), Some(Piece::king(Color::Black)));

        let white = king_legal_destinations(&board, sq(4, 4), Color::White);
        let black = king_legal_destinations(&board, sq(2, 4), Color::Black);
        for shared in [sq(3, 3), sq(3, 4), sq(3, 5)] {
            assert!(!white.contains(shared));
            assert!(!black.contains(shared));
        }
    }

    #[test]
    fn both_castling_targets_when_path_is_clear() {
        let board = castling_board();
        let reached = king_legal_destinations(&board, sq(7, 4), Color::White);
        assert!(reached.contains(sq(7, 2)));
        assert!(reached.contains(sq(7, 6)));
    }

    #[test]
    fn moved_rook_or_king_disables_castling() {
        let mut board = castling_board();
        board.set(
            sq(7, 7),
            Some(Piece::new(Color::White, PieceKind::Rook { has_moved: true })),
        );
        let reached = king_legal_destinations(&board, sq(7, 4), Color::White);
        assert!(reached.contains(sq(7, 2)));
        assert!(!reached.contains(sq(7, 6)));

        board.set(
            sq(7, 4),
            Some(Piece::new(Color::White, PieceKind::King { has_moved: true })),
        );
        let reached = king_legal_destinations(&board, sq(7, 4), Color::White);
        assert!(!reached.contains(sq(7, 2)));
    }

    #[test]
    fn queenside_needs_the_knight_square_empty_too() {
        let mut board = castling_board();
        board.set(sq(7, 1), Some(Piece::knight(Color::White)));
        let reached = king_legal_destinations(&board, sq(7, 4), Color::White);
        assert!(!reached.contains(sq(7, 2)));
        assert!(reached.contains(sq(7, 6)));
    }

    #[test]
    fn no_castling_through_or_out_of_attack() {
        let mut board = castling_board();
        board.set(sq(2, 5), Some(Piece::rook(Color::Black)));
        let reached = king_legal_destinations(&board, sq(7, 4), Color::White);
        assert!(reached.contains(sq(7, 2)));
        assert!(!reached.contains(sq(7, 6)));

        let mut checked = castling_board();
        checked.set(sq(3, 4), Some(Piece::rook(Color::Black)));
        let reached = king_legal_destinations(&checked, sq(7, 4), Color::White);
        assert!(!reached.contains(sq(7, 2)));
        assert!(!reached.contains(sq(7, 6)));
    }

    #[test]
    fn opposing_rook_in_the_corner_cannot_castle() {
        let mut board = castling_board();
        board.set(sq(7, 0), Some(Piece::rook(Color::Black)));
        let reached = king_legal_destinations(&board, sq(7, 4), Color::White);
        assert!(!reached.contains(sq(7, 2)));
    }

    #[test]
    fn black_castles_on_rank_zero() {
        let mut board = Board::empty();
        board.set(sq(0, 4), Some(Piece::king(Color::Black)));
        board.set(sq(0, 7), Some(Piece::rook(Color::Black)));
        board.set(sq(7, 4), Some(Piece::king(Color::White)));

        let reached = king_legal_destinations(&board, sq(0, 4), Color::Black);
        assert!(reached.contains(sq(0, 6)));
        assert!(!reached.contains(sq(0, 2)));
    }
}
