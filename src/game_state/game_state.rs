//! The authoritative game record.
//!
//! `GameState` owns the board, the move counter whose parity gives the side
//! to move, and the game status. The only mutation is `try_move` (and its
//! boolean twin `perform_move`); everything else is a query that hands back
//! copies, never references into the live grid.

use std::fmt;

use crate::chess_errors::{ArrangementError, MoveRejection};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_ARRANGEMENT;
use crate::game_state::chess_types::{Color, GameStatus, Move, Piece, Position};
use crate::game_state::square_set::SquareSet;
use crate::move_generation::legal_move_apply::commit_if_safe;
use crate::move_generation::legal_move_checks;
use crate::move_generation::legal_move_generator::{evaluate_status, legal_moves};
use crate::move_generation::piece_destinations::all_destinations;
use crate::utils::arrangement_generator::generate_arrangement;
use crate::utils::arrangement_parser::parse_arrangement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    move_count: u32,
    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard arrangement, white to move.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for (index, ch) in STARTING_ARRANGEMENT.chars().enumerate() {
            if let Some(position) = Position::from_index(index) {
                board.set(position, Piece::from_char(ch));
            }
        }
        Self::from_board(board, Color::White)
    }

    /// Builds a game from a 64-character arrangement. The counter starts at
    /// the starting color's index so its parity yields the side to move.
    pub fn from_arrangement(arrangement: &str, starting_color: Color) -> Result<Self, ArrangementError> {
        let board = parse_arrangement(arrangement)?;
        Ok(Self::from_board(board, starting_color))
    }

    fn from_board(board: Board, starting_color: Color) -> Self {
        Self {
            board,
            move_count: starting_color.index() as u32,
            status: GameStatus::Ongoing,
        }
    }

    #[inline]
    pub fn turn(&self) -> Color {
        Color::from_index(self.move_count as usize)
    }

    /// Raw counter; its initial value is the starting color's index.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn game_status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.board.piece_at(position)
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.board.is_empty(position)
    }

    /// Independent copy of the whole grid.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Squares the piece on `origin` could move to before the king-safety
    /// check; `None` when the square is empty.
    pub fn reachable_from(&self, origin: Position) -> Option<SquareSet> {
        if self.board.is_empty(origin) {
            return None;
        }
        Some(all_destinations(&self.board, origin, false))
    }

    pub fn is_king_under_attack(&self, color: Color) -> bool {
        legal_move_checks::is_king_under_attack(&self.board, color)
    }

    pub fn all_destinations_by_color(&self, color: Color) -> SquareSet {
        legal_move_checks::all_destinations_by_color(&self.board, color)
    }

    /// Every move the side to move could make right now. Empty once the game
    /// is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.turn())
    }

    /// Validates and commits `mv`. On any rejection the state is unchanged.
    pub fn try_move(&mut self, mv: Move) -> Result<(), MoveRejection> {
        if self.is_game_over() {
            return Err(MoveRejection::GameOver);
        }

        let origin = mv.origin();
        let piece = self
            .board
            .piece_at(origin)
            .ok_or(MoveRejection::EmptyOrigin(origin))?;

        let turn = self.turn();
        if piece.color() != turn {
            return Err(MoveRejection::WrongTurn {
                origin,
                piece_color: piece.color(),
                turn,
            });
        }

        if !all_destinations(&self.board, origin, false).contains(mv.destination()) {
            return Err(MoveRejection::Unreachable(mv));
        }

        self.board = commit_if_safe(&self.board, mv, turn)?;
        self.move_count += 1;
        self.status = evaluate_status(&self.board, self.turn());
        Ok(())
    }

    /// `try_move` reduced to a success flag.
    pub fn perform_move(&mut self, mv: Move) -> bool {
        self.try_move(mv).is_ok()
    }

    pub fn to_arrangement(&self) -> String {
        generate_arrangement(&self.board)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.to_arrangement(), self.turn(), self.status)
    }
}
