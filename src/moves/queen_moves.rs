//! Queen destinations: rook rays and bishop rays together.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::rook_moves::rook_destinations;

#[inline]
pub fn queen_destinations(
    board: &Board,
    origin: Position,
    color: Color,
    include_defending: bool,
) -> SquareSet {
    rook_destinations(board, origin, color, include_defending)
        | bishop_destinations(board, origin, color, include_defending)
}

#[cfg(test)]
mod tests {
    use super::queen_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, Position};

    fn sq(rank: i8, file: i8) -> Position {
        Position::from_rank_file(rank, file).expect("test square on board")
    }

    #[test]
    fn queen_from_centre_has_twenty_seven_squares() {
        let board = Board::empty();
        assert_eq!(queen_destinations(&board, sq(4, 3), Color::White, false).len(), 27);
    }

    #[test]
    fn queen_rays_stop_independently() {
        let mut board = Board::empty();
        board.set(sq(2, 3), Some(Piece::rook(Color::Black)));
        board.set(sq(4, 5), Some(Piece::knight(Color::White)));

        let reached = queen_destinations(&board, sq(4, 3), Color::White, false);
        assert!(reached.contains(sq(2, 3)));
        assert!(!reached.contains(sq(1, 3)));
        assert!(reached.contains(sq(4, 4)));
        assert!(!reached.contains(sq(4, 5)));
        assert!(reached.contains(sq(0, 7)));
    }
}
