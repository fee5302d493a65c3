//! The 8×8 grid of optional pieces.
//!
//! `Board` is `Copy`: handing one out, snapshotting one before a trial
//! mutation, or cloning a whole `GameState` always yields an independently
//! owned grid that cannot alias the live one.

use crate::game_state::chess_rules::{BOARD_FILES, BOARD_RANKS};
use crate::game_state::chess_types::{Color, Piece, Position};
use crate::game_state::square_set::SquareSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_FILES]; BOARD_RANKS],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.cells[position.rank() as usize][position.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// `true` when `position` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, position: Position, color: Color) -> bool {
        self.piece_at(position)
            .is_some_and(|piece| piece.color() == color)
    }

    /// Places `piece` on `position`, returning whatever was there before.
    #[inline]
    pub fn set(&mut self, position: Position, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.cells[position.rank() as usize][position.file() as usize],
            piece,
        )
    }

    #[inline]
    pub fn take(&mut self, position: Position) -> Option<Piece> {
        self.set(position, None)
    }

    /// Moves the origin's occupant to `destination`, capturing whatever stood
    /// there. No flags are touched.
    pub fn relocate(&mut self, origin: Position, destination: Position) -> Option<Piece> {
        let moving = self.take(origin);
        self.set(destination, moving)
    }

    /// Every occupied square with its piece, rank-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, cell)| {
                let piece = (*cell)?;
                let position = Position::from_rank_file(rank as i8, file as i8)?;
                Some((position, piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    pub fn occupancy(&self, color: Color) -> SquareSet {
        self.pieces_of(color).map(|(position, _)| position).collect()
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind().is_king())
            .map(|(position, _)| position)
    }
}
