//! Perft: exhaustive move-path counting used to validate move generation.
//!
//! Each legal move is counted once; a promotion counts as one node regardless
//! of how many promotion kinds the rules allow.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::probe_promotion;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::castling::castle_side;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf counts only; the fast path used by benchmarks.
pub fn perft_nodes<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    let moves = generator.generate_moves(position);
    if depth == 1 {
        return moves.len();
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = position.clone();
            apply_move(&mut next, mv, probe_promotion(position, mv));
            perft_nodes(generator, &next, depth - 1)
        })
        .sum()
}

/// Leaf counts with a breakdown of what the final move of each path did.
pub fn perft<G: MoveGenerator>(generator: &G, position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_moves(position) {
        let promotion = probe_promotion(position, mv);
        let mut next = position.clone();
        apply_move(&mut next, mv, promotion);

        if depth == 1 {
            total.merge(classify_leaf(generator, position, mv, promotion, &next));
        } else {
            total.merge(perft(generator, &next, depth - 1));
        }
    }
    total
}

fn classify_leaf<G: MoveGenerator>(
    generator: &G,
    before: &Position,
    mv: Move,
    promotion: PieceKind,
    after: &Position,
) -> PerftCounts {
    let moved = before.piece_at(mv.from);
    let is_passant = moved.kind == PieceKind::Pawn
        && before.rules.allow_passant
        && mv.to == before.passantable_square;
    let is_capture = !before.piece_at(mv.to).is_empty() || is_passant;
    let gives_check = is_in_check(after);

    PerftCounts {
        nodes: 1,
        captures: usize::from(is_capture),
        en_passant: usize::from(is_passant),
        castles: usize::from(castle_side(before, mv).is_some()),
        promotions: usize::from(promotion != PieceKind::Empty),
        checks: usize::from(gives_check),
        checkmates: usize::from(gives_check && generator.generate_moves(after).is_empty()),
    }
}
