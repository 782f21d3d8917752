//! King move generation: one step in any direction, plus castling.

use crate::game_state::chess_types::*;
use crate::moves::castling::castle_moves;
use crate::moves::geometry::push_step_moves;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn king_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    push_step_moves(position, from, color, &KING_OFFSETS, out);
    castle_moves(position, from, color, out);
}
