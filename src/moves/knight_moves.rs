//! Knight move generation.
//!
//! Knight geometry is symmetric under the board's rotations, so the same
//! eight offsets serve every color.

use crate::game_state::chess_types::*;
use crate::moves::geometry::push_step_moves;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
];

#[inline]
pub fn knight_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_moves(position, from, color, &KNIGHT_OFFSETS, out);
}
