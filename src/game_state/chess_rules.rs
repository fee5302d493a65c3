//! Canonical chess-rule constants.
//!
//! Board geometry, the standard starting arrangement, and the fixed squares
//! castling is defined on.

use crate::game_state::chess_types::Color;

pub const BOARD_RANKS: usize = 8;
pub const BOARD_FILES: usize = 8;

/// Number of characters in an arrangement string.
pub const ARRANGEMENT_LENGTH: usize = BOARD_RANKS * BOARD_FILES;

/// Character marking an empty square in an arrangement string.
pub const EMPTY_SQUARE_CHAR: char = '-';

/// Standard starting arrangement, rank 0 first. White pieces are uppercase
/// and start on rank 7.
pub const STARTING_ARRANGEMENT: &str = concat!(
    "rnbqkbnr",
    "pppppppp",
    "--------",
    "--------",
    "--------",
    "--------",
    "PPPPPPPP",
    "RNBQKBNR",
);

pub const WHITE_PAWN_STARTING_RANK: u8 = 6;
pub const BLACK_PAWN_STARTING_RANK: u8 = 1;

pub const KING_HOME_FILE: u8 = 4;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_KING_TARGET_FILE: u8 = 2;
pub const KINGSIDE_KING_TARGET_FILE: u8 = 6;
pub const QUEENSIDE_ROOK_TARGET_FILE: u8 = 3;
pub const KINGSIDE_ROOK_TARGET_FILE: u8 = 5;

#[inline]
pub const fn home_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_starting_rank(color: Color) -> u8 {
    match color {
        Color::White => WHITE_PAWN_STARTING_RANK,
        Color::Black => BLACK_PAWN_STARTING_RANK,
    }
}

/// Rank delta of a single pawn push.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// The two wings a king may castle towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Queenside,
    Kingside,
}

impl CastlingSide {
    pub const ALL: [CastlingSide; 2] = [CastlingSide::Queenside, CastlingSide::Kingside];

    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastlingSide::Queenside => QUEENSIDE_ROOK_FILE,
            CastlingSide::Kingside => KINGSIDE_ROOK_FILE,
        }
    }

    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastlingSide::Queenside => QUEENSIDE_KING_TARGET_FILE,
            CastlingSide::Kingside => KINGSIDE_KING_TARGET_FILE,
        }
    }

    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastlingSide::Queenside => QUEENSIDE_ROOK_TARGET_FILE,
            CastlingSide::Kingside => KINGSIDE_ROOK_TARGET_FILE,
        }
    }

    /// Side whose king target lies on `file`, if any.
    pub const fn from_king_target_file(file: u8) -> Option<Self> {
        match file {
            QUEENSIDE_KING_TARGET_FILE => Some(CastlingSide::Queenside),
            KINGSIDE_KING_TARGET_FILE => Some(CastlingSide::Kingside),
            _ => None,
        }
    }
}
