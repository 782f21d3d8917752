//! Rook move generation.

use crate::game_state::chess_types::*;
use crate::moves::geometry::push_sliding_moves;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

#[inline]
pub fn rook_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_sliding_moves(position, from, color, &ROOK_DIRECTIONS, out);
}
