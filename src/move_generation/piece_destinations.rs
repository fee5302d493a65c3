//! Single dispatch point from a piece kind to its movement generator.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Position};
use crate::game_state::square_set::SquareSet;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::{king_attack_pattern, king_legal_destinations};
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Destinations of whatever stands on `origin`; empty when the square is.
///
/// `include_defending == false` gives the squares the piece could occupy
/// next. `include_defending == true` gives the squares it covers, which is
/// what a king of the other color must stay off.
pub fn all_destinations(board: &Board, origin: Position, include_defending: bool) -> SquareSet {
    match board.piece_at(origin) {
        Some(piece) => piece.destinations(board, origin, include_defending),
        None => SquareSet::EMPTY,
    }
}

impl Piece {
    /// Destinations of this piece as if it stood on `origin` of `board`.
    pub fn destinations(&self, board: &Board, origin: Position, include_defending: bool) -> SquareSet {
        let color = self.color();
        match self.kind() {
            PieceKind::Pawn => pawn_destinations(board, origin, color, include_defending),
            PieceKind::Knight => knight_destinations(board, origin, color, include_defending),
            PieceKind::Bishop => bishop_destinations(board, origin, color, include_defending),
            PieceKind::Rook { .. } => rook_destinations(board, origin, color, include_defending),
            PieceKind::Queen => queen_destinations(board, origin, color, include_defending),
            PieceKind::King { .. } if include_defending => king_attack_pattern(origin),
            PieceKind::King { .. } => king_legal_destinations(board, origin, color),
        }
    }
}
