//! Queen move generation: rook lines followed by bishop diagonals.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

#[inline]
pub fn queen_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    rook_moves(position, from, color, out);
    bishop_moves(position, from, color, out);
}
