//! Leaf counting over the tree of legal moves.
//!
//! Every edge is played through `GameState::try_move`, so the counts verify
//! the whole commit protocol including status updates, not just the
//! generators.

use crate::game_state::chess_types::{GameStatus, Move};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
    pub stalemates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
        self.stalemates += rhs.stalemates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        let mut child = game_state.clone();
        if child.try_move(mv).is_err() {
            continue;
        }

        if depth == 1 {
            total.merge(classify_leaf(game_state, mv, &child));
        } else {
            total.merge(perft(&child, depth - 1));
        }
    }

    total
}

/// Per-root-move node counts, handy when comparing against another engine.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }

    for mv in game_state.legal_moves() {
        let mut child = game_state.clone();
        if child.try_move(mv).is_ok() {
            out.push((mv, perft(&child, depth - 1).nodes));
        }
    }

    out
}

fn classify_leaf(parent: &GameState, mv: Move, child: &GameState) -> PerftCounts {
    let is_capture = parent.piece_at(mv.destination()).is_some();
    let is_castle = parent
        .piece_at(mv.origin())
        .is_some_and(|piece| piece.kind().is_king())
        && mv.origin().file().abs_diff(mv.destination().file()) == 2;

    PerftCounts {
        nodes: 1,
        captures: usize::from(is_capture),
        castles: usize::from(is_castle),
        checks: usize::from(child.is_king_under_attack(child.turn())),
        checkmates: usize::from(matches!(
            child.game_status(),
            GameStatus::WhiteWon | GameStatus::BlackWon
        )),
        stalemates: usize::from(child.game_status() == GameStatus::Draw),
    }
}
