//! Pawn move generation for all four orientations.
//!
//! A pawn's capture squares are its forward square shifted by the forward
//! vector rotated a quarter turn either way, so one routine covers pawns
//! moving up, down, left and right. Promotion is not a separate move here;
//! the promotion edge is checked when the move is validated and applied.

use crate::game_state::chess_types::*;
use crate::moves::geometry::{can_capture, in_bounds, near_home_edge, pawn_direction};

pub fn pawn_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let rules = &position.rules;
    let (d_row, d_col) = pawn_direction(color);

    let advance = from.offset(d_row, d_col);
    if !in_bounds(position, advance) {
        return;
    }

    if position.piece_at(advance).is_empty() {
        out.push(Move::new(from, advance));

        if rules.torpedo_pawns || near_home_edge(position, from, color) {
            let double_advance = advance.offset(d_row, d_col);
            if in_bounds(position, double_advance) && position.piece_at(double_advance).is_empty() {
                out.push(Move::new(from, double_advance));
            }
        }
    }

    // Forward plus/minus the forward vector turned ninety degrees.
    for take in [
        advance.offset(-d_col, -d_row),
        advance.offset(d_col, d_row),
    ] {
        if !in_bounds(position, take) {
            continue;
        }
        let target = position.piece_at(take);
        let is_capture = !target.is_empty() && can_capture(position, color, target);
        let is_passant = rules.allow_passant && take == position.passantable_square;
        if is_capture || is_passant {
            out.push(Move::new(from, take));
        }
    }

    if rules.sideways_pawns {
        for side in [from.offset(d_col, d_row), from.offset(-d_col, -d_row)] {
            if in_bounds(position, side) && position.piece_at(side).is_empty() {
                out.push(Move::new(from, side));
            }
        }
    }
}
