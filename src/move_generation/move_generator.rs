//! Pseudo-legal move generation and the generator trait.
//!
//! Pseudo-legal moves follow piece movement only; whether they expose a royal
//! piece is decided by the legality filter. `count_possible_moves` answers
//! "how many" without the caller keeping the list around.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Anything that can list the moves available in a position.
pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, position: &Position) -> Vec<Move>;
}

/// Every move allowed by piece movement, legal or not.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn generate_moves(&self, position: &Position) -> Vec<Move> {
        all_possible_moves(position)
    }
}

/// Appends the pseudo-legal moves of the piece on `square` to `out`. Pieces
/// not belonging to the side to move produce nothing.
pub fn push_moves_from(position: &Position, square: Square, out: &mut Vec<Move>) {
    let Some(piece) = position.get(square) else {
        return;
    };
    let Some(color) = piece.color else {
        return;
    };
    if color != position.to_move {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_moves(position, square, color, out),
        PieceKind::King => king_moves(position, square, color, out),
        PieceKind::Queen => queen_moves(position, square, color, out),
        PieceKind::Rook => rook_moves(position, square, color, out),
        PieceKind::Knight => knight_moves(position, square, color, out),
        PieceKind::Bishop => bishop_moves(position, square, color, out),
        PieceKind::Empty | PieceKind::Duck => {}
    }
}

pub fn moves_from(position: &Position, square: Square) -> Vec<Move> {
    let mut out = Vec::new();
    push_moves_from(position, square, &mut out);
    out
}

pub fn all_possible_moves(position: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for square in position.squares() {
        push_moves_from(position, square, &mut out);
    }
    out
}

/// Number of pseudo-legal moves, reusing one scratch buffer per square.
pub fn count_possible_moves(position: &Position) -> usize {
    let mut scratch = Vec::with_capacity(32);
    let mut count = 0;
    for square in position.squares() {
        scratch.clear();
        push_moves_from(position, square, &mut scratch);
        count += scratch.len();
    }
    count
}
