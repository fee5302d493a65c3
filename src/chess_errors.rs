//! Errors and rejection reasons used throughout the rules engine.
//!
//! Construction of a `GameState` is the only place a hard failure can occur:
//! an arrangement string is either the wrong length or does not hold exactly
//! one king per side. Once a game exists it is always structurally valid.
//!
//! Move-time rule violations are not errors in that sense. They are reported
//! as a `MoveRejection`, the board is left untouched, and the caller is
//! expected to try another move.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Move, Position};

/// Why an arrangement string could not become a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrangementError {
    /// The arrangement does not have exactly 64 characters.
    #[error("the length of the arrangement must be 64, got {length}")]
    MalformedArrangement { length: usize },

    /// Zero, or more than one, king marker (`K`/`L` or `k`/`l`) for a side.
    #[error("expected exactly one {color} king, found {count}")]
    InvalidKingCount { color: Color, count: usize },
}

/// Why `GameState::try_move` refused a move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("the game is already over")]
    GameOver,

    #[error("no piece stands on {0}")]
    EmptyOrigin(Position),

    #[error("it is {turn}'s turn, the piece on {origin} is {piece_color}")]
    WrongTurn {
        origin: Position,
        piece_color: Color,
        turn: Color,
    },

    #[error("{0} is not reachable")]
    Unreachable(Move),

    #[error("{0} would leave the {1} king under attack")]
    ExposesKing(Move, Color),
}

#[cfg(test)]
mod tests {
    use super::{ArrangementError, MoveRejection};
    use crate::game_state::chess_types::{Color, Position};

    #[test]
    fn messages_carry_context() {
        let err = ArrangementError::InvalidKingCount {
            color: Color::Black,
            count: 2,
        };
        assert_eq!(err.to_string(), "expected exactly one black king, found 2");

        let origin = Position::from_rank_file(6, 4).expect("on board");
        let rejection = MoveRejection::WrongTurn {
            origin,
            piece_color: Color::White,
            turn: Color::Black,
        };
        assert_eq!(
            rejection.to_string(),
            "it is black's turn, the piece on (6, 4) is white"
        );
    }
}
