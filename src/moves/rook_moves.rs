//! Rook destinations: the four orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;
use crate::moves::ray_moves::{slide, ORTHOGONAL_RAYS};

#[inline]
pub fn rook_destinations(
    board: &Board,
    origin: Position,
    color: Color,
    include_defending: bool,
) -> SquareSet {
    slide(board, origin, color, &ORTHOGONAL_RAYS, include_defending)
}

#[cfg(test)]
mod tests {
    use super::rook_destinations;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, Position};

    fn sq(rank: i8, file: i8) -> Position {
        Position::from_rank_file(rank, file).expect("test square on board")
    }

    #[test]
    fn rook_from_corner_on_empty_board_has_fourteen_squares() {
        let board = Board::empty();
        assert_eq!(rook_destinations(&board, sq(7, 0), Color::White, false).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        board.set(sq(4, 0), Some(Piece::bishop(Color::Black)));

        let reached = rook_destinations(&board, sq(7, 0), Color::White, false);
        assert!(reached.contains(sq(4, 0)));
        assert!(!reached.contains(sq(3, 0)));
        assert!(reached.contains(sq(7, 7)));
    }
}
