//! Crate root module declarations for the rook_rules chess rules engine.
//!
//! The engine owns the authoritative board, generates destinations per piece,
//! validates and commits moves, and decides when a game has ended. Rendering,
//! input handling and any console loop belong to callers.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod square_set;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod ray_moves;
    pub mod rook_moves;
    pub mod step_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod piece_destinations;
}

pub mod utils {
    pub mod arrangement_generator;
    pub mod arrangement_parser;
}

pub use chess_errors::{ArrangementError, MoveRejection};
pub use game_state::board::Board;
pub use game_state::chess_types::{Color, GameStatus, Move, Piece, PieceKind, Position};
pub use game_state::game_state::GameState;
pub use game_state::square_set::SquareSet;
