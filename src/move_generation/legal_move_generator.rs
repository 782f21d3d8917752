//! Legality filter.
//!
//! Pseudo-legal moves are played on a clone and rejected if the reply could
//! take a royal piece. Promotion choice and castling safety are checked here
//! too, so a move accepted by `is_legal` can be applied as-is.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::{
    can_capture_royal, is_in_check, position_ignores_checks,
};
use crate::move_generation::move_generator::{all_possible_moves, moves_from, MoveGenerator};
use crate::moves::castling::{castle_side, castle_step};
use crate::moves::geometry::on_promotion_edge;

/// Promotion used when probing legality; any promotable kind gives the same
/// answer.
pub const PROBE_PROMOTION: PieceKind = PieceKind::Queen;

/// Pseudo-legal moves filtered through [`is_legal`].
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        all_legal_moves(position)
    }
}

/// Whether `mv` with `promotion` may be played. Does not check that the move
/// follows piece movement; see [`is_move_possible`].
pub fn is_legal(position: &Position, mv: Move, promotion: PieceKind) -> bool {
    let checks_apply = !position_ignores_checks(position);

    if checks_apply {
        let placeholder = if promotion.is_promotable() {
            promotion
        } else {
            PieceKind::Pawn
        };
        let mut next = position.clone();
        apply_move(&mut next, mv, placeholder);
        if can_capture_royal(&next) {
            return false;
        }
    }

    let piece = position.piece_at(mv.from);
    if piece.kind == PieceKind::Pawn {
        let Some(color) = piece.color else {
            return false;
        };
        let promotes = on_promotion_edge(position, mv.to, color);
        if promotes != promotion.is_promotable() || (!promotes && promotion != PieceKind::Empty) {
            return false;
        }
    } else if promotion != PieceKind::Empty {
        return false;
    }

    // Castling out of check is refused even with check rules suspended; the
    // pass-through step follows whatever rules apply to a plain king move.
    if let (Some(side), Some(color)) = (castle_side(position, mv), piece.color) {
        if is_in_check(position) {
            return false;
        }
        let (d_row, d_col) = castle_step(color, side);
        let transit = Move::new(mv.from, mv.from.offset(d_row, d_col));
        if !is_legal(position, transit, PieceKind::Empty) {
            return false;
        }
    }

    true
}

/// Whether `mv` is among the pseudo-legal moves of the piece on `mv.from`.
pub fn is_move_possible(position: &Position, mv: Move) -> bool {
    moves_from(position, mv.from).contains(&mv)
}

pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    all_possible_moves(position)
        .into_iter()
        .filter(|mv| is_legal(position, *mv, probe_promotion(position, *mv)))
        .collect()
}

pub fn legal_moves_from(position: &Position, square: Square) -> Vec<Move> {
    moves_from(position, square)
        .into_iter()
        .filter(|mv| is_legal(position, *mv, probe_promotion(position, *mv)))
        .collect()
}

/// `PROBE_PROMOTION` for a pawn landing on its promotion edge, `Empty`
/// otherwise.
pub fn probe_promotion(position: &Position, mv: Move) -> PieceKind {
    let piece = position.piece_at(mv.from);
    match piece.color {
        Some(color) if piece.kind == PieceKind::Pawn && on_promotion_edge(position, mv.to, color) => {
            PROBE_PROMOTION
        }
        _ => PieceKind::Empty,
    }
}
