//! Value types shared by every layer of the rules engine.
//!
//! Colors, piece kinds, board coordinates and moves are all small `Copy`
//! values. None of them carries legality information; legality is always a
//! question asked of a `GameState`.

use std::fmt;

use crate::game_state::chess_rules::{BOARD_FILES, BOARD_RANKS};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Outcome of the game so far, recomputed once per committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    Draw,
    WhiteWon,
    BlackWon,
}

impl GameStatus {
    #[inline]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WhiteWon,
            Color::Black => GameStatus::BlackWon,
        }
    }

    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWon => Some(Color::White),
            GameStatus::BlackWon => Some(Color::Black),
            GameStatus::Ongoing | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Draw => write!(f, "draw"),
            GameStatus::WhiteWon => write!(f, "white won"),
            GameStatus::BlackWon => write!(f, "black won"),
        }
    }
}

/// Piece kind. Rooks and kings remember whether they have moved, which is
/// the only state castling eligibility depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook { has_moved: bool },
    Queen,
    King { has_moved: bool },
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook { .. } => 3,
            PieceKind::Queen => 4,
            PieceKind::King { .. } => 5,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King { .. })
    }

    #[inline]
    pub const fn is_rook(self) -> bool {
        matches!(self, PieceKind::Rook { .. })
    }
}

/// A piece as it sits in a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub const fn pawn(color: Color) -> Self {
        Self::new(color, PieceKind::Pawn)
    }

    pub const fn knight(color: Color) -> Self {
        Self::new(color, PieceKind::Knight)
    }

    pub const fn bishop(color: Color) -> Self {
        Self::new(color, PieceKind::Bishop)
    }

    pub const fn rook(color: Color) -> Self {
        Self::new(color, PieceKind::Rook { has_moved: false })
    }

    pub const fn queen(color: Color) -> Self {
        Self::new(color, PieceKind::Queen)
    }

    pub const fn king(color: Color) -> Self {
        Self::new(color, PieceKind::King { has_moved: false })
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Castling flag for rooks and kings. Every other kind reports `false`.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        match self.kind {
            PieceKind::Rook { has_moved } | PieceKind::King { has_moved } => has_moved,
            _ => false,
        }
    }

    /// Sets the castling flag; a no-op for kinds that do not track it.
    pub fn mark_moved(&mut self) {
        match &mut self.kind {
            PieceKind::Rook { has_moved } | PieceKind::King { has_moved } => *has_moved = true,
            _ => {}
        }
    }

    /// Decodes one arrangement character. `S`/`s` and `L`/`l` are a rook and a
    /// king that have already moved.
    pub fn from_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook { has_moved: false },
            's' => PieceKind::Rook { has_moved: true },
            'q' => PieceKind::Queen,
            'k' => PieceKind::King { has_moved: false },
            'l' => PieceKind::King { has_moved: true },
            _ => return None,
        };

        Some(Self::new(color, kind))
    }

    pub const fn to_char(&self) -> char {
        let lower = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook { has_moved: false } => 'r',
            PieceKind::Rook { has_moved: true } => 's',
            PieceKind::Queen => 'q',
            PieceKind::King { has_moved: false } => 'k',
            PieceKind::King { has_moved: true } => 'l',
        };

        match self.color {
            Color::White => lower.to_ascii_uppercase(),
            Color::Black => lower,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the board. Rank 0 is the first row of an arrangement string
/// (black's back rank in the standard setup), file 0 is its first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// Returns `None` when either coordinate falls outside the board.
    #[inline]
    pub fn from_rank_file(rank: i8, file: i8) -> Option<Self> {
        if (0..BOARD_RANKS as i8).contains(&rank) && (0..BOARD_FILES as i8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Inverse of [`Position::index`].
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_RANKS * BOARD_FILES {
            Some(Self {
                rank: (index / BOARD_FILES) as u8,
                file: (index % BOARD_FILES) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(&self) -> u8 {
        self.file
    }

    /// Rank-major square index in `0..64`.
    #[inline]
    pub const fn index(&self) -> usize {
        self.rank as usize * BOARD_FILES + self.file as usize
    }

    #[inline]
    pub fn offset(&self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::from_rank_file(self.rank as i8 + d_rank, self.file as i8 + d_file)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}

/// An origin/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    origin: Position,
    destination: Position,
}

impl Move {
    #[inline]
    pub const fn new(origin: Position, destination: Position) -> Self {
        Self {
            origin,
            destination,
        }
    }

    #[inline]
    pub const fn origin(&self) -> Position {
        self.origin
    }

    #[inline]
    pub const fn destination(&self) -> Position {
        self.destination
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}
