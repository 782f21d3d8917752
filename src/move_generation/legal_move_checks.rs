//! Check detection by attack simulation.
//!
//! A royal piece is "in check" when some pseudo-legal move of the side that
//! would move next lands on it. No attack tables are kept; the move
//! generator itself is the attack oracle, which keeps every board shape and
//! rule toggle consistent between generation and check testing.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::next_color_to_play;
use crate::move_generation::move_generator::push_moves_from;

/// Check rules are suspended when the rules say so, or in free-for-all games
/// with more than two colors seated.
#[inline]
pub fn position_ignores_checks(position: &Position) -> bool {
    position.rules.ignore_checks || position.colors_in_game() > 2
}

fn any_move_lands_on(position: &Position, is_victim: impl Fn(Piece) -> bool) -> bool {
    let mut scratch = Vec::with_capacity(32);
    for square in position.squares() {
        scratch.clear();
        push_moves_from(position, square, &mut scratch);
        if scratch.iter().any(|mv| is_victim(position.piece_at(mv.to))) {
            return true;
        }
    }
    false
}

/// Whether the side to move has a pseudo-legal move onto another color's
/// royal piece.
pub fn can_capture_royal(position: &Position) -> bool {
    let attacker = position.to_move;
    any_move_lands_on(position, |piece| piece.is_royal && !piece.is_color(attacker))
}

/// Whether the side to move has a pseudo-legal move onto a royal piece of
/// `victim`.
pub fn can_capture_royal_of(position: &Position, victim: Color) -> bool {
    any_move_lands_on(position, |piece| piece.is_royal && piece.is_color(victim))
}

/// Whether the side to move's royal piece could be taken if it passed.
pub fn is_in_check(position: &Position) -> bool {
    let victim = position.to_move;
    let mut passed = position.clone();
    passed.to_move = next_color_to_play(position, victim);
    passed.passantable_square = Square::NONE;
    passed.passant_target_square = Square::NONE;
    if passed.to_move == victim {
        return false;
    }
    can_capture_royal_of(&passed, victim)
}
