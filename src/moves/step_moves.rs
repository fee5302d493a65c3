//! Fixed-offset movement shared by knights and kings.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Position};
use crate::game_state::square_set::SquareSet;

/// `(d_rank, d_file)` jumps of a knight.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// `(d_rank, d_file)` steps to the eight adjacent squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Each offset is kept when it lands on the board and, unless
/// `include_defending` is set, does not land on a piece of `color`.
pub fn step(
    board: &Board,
    origin: Position,
    color: Color,
    offsets: &[(i8, i8)],
    include_defending: bool,
) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(d_rank, d_file)| origin.offset(d_rank, d_file))
        .filter(|&target| include_defending || !board.is_occupied_by(target, color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{step, KING_OFFSETS, KNIGHT_OFFSETS};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, Position};

    fn sq(rank: i8, file: i8) -> Position {
        Position::from_rank_file(rank, file).expect("test square on board")
    }

    #[test]
    fn corner_limits_offsets() {
        let board = Board::empty();
        assert_eq!(step(&board, sq(0, 0), Color::Black, &KNIGHT_OFFSETS, false).len(), 2);
        assert_eq!(step(&board, sq(0, 0), Color::Black, &KING_OFFSETS, false).len(), 3);
        assert_eq!(step(&board, sq(4, 4), Color::Black, &KING_OFFSETS, false).len(), 8);
    }

    #[test]
    fn friendly_targets_are_dropped_unless_defending() {
        let mut board = Board::empty();
        board.set(sq(1, 2), Some(Piece::pawn(Color::Black)));
        board.set(sq(2, 1), Some(Piece::pawn(Color::White)));

        let normal = step(&board, sq(0, 0), Color::Black, &KNIGHT_OFFSETS, false);
        assert!(!normal.contains(sq(1, 2)));
        assert!(normal.contains(sq(2, 1)));

        let covered = step(&board, sq(0, 0), Color::Black, &KNIGHT_OFFSETS, true);
        assert!(covered.contains(sq(1, 2)));
    }
}
