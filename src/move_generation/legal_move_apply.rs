//! In-place move application.
//!
//! `apply_move` is the only place a position changes. It does not validate
//! the move; callers check `is_legal`/`is_move_possible` first (or, for
//! speculative probes, apply to a clone and inspect the result).

use tracing::{trace, warn};

use crate::game_state::chess_types::*;
use crate::moves::castling::{castle_side, find_king, find_rook, rook_destination, CastleSide};
use crate::moves::geometry::{on_promotion_edge, pawn_direction};

/// The color that plays after `after`: the next one in turn order that is in
/// the game and still has a royal piece. Looks at most one full cycle ahead;
/// if nobody qualifies it falls back to the next seated color, then to
/// `after` itself.
pub fn next_color_to_play(position: &Position, after: Color) -> Color {
    let mut candidate = after;
    for _ in 0..NUM_COLORS {
        candidate = candidate.next();
        if position.is_in_game(candidate) && position.has_royal(candidate) {
            return candidate;
        }
    }

    warn!(after = after.name(), "no seated color has a royal piece left");
    let mut candidate = after;
    for _ in 0..NUM_COLORS {
        candidate = candidate.next();
        if position.is_in_game(candidate) {
            return candidate;
        }
    }
    after
}

/// Squares a pawn move passed over, when it advanced more than one square
/// straight ahead: `(passed_over, landed_on)`.
fn long_pawn_advance(mv: Move, color: Color) -> Option<(Square, Square)> {
    let (d_row, d_col) = pawn_direction(color);
    let (row_dist, col_dist) = (mv.to.row - mv.from.row, mv.to.col - mv.from.col);
    let steps = row_dist * d_row + col_dist * d_col;
    let straight = row_dist == steps * d_row && col_dist == steps * d_col;
    if straight && steps >= 2 {
        Some((mv.to.offset(-d_row, -d_col), mv.to))
    } else {
        None
    }
}

/// The castling rook standing on `square`, as `(owner, side)`, if any.
fn captured_castle_rook(position: &Position, square: Square) -> Option<(Color, CastleSide)> {
    let piece = position.piece_at(square);
    let owner = piece.color?;
    if piece.kind != PieceKind::Rook {
        return None;
    }
    let king = find_king(position, owner);
    CastleSide::BOTH
        .into_iter()
        .find(|side| find_rook(position, king, owner, *side) == square)
        .map(|side| (owner, side))
}

fn relocate(position: &mut Position, from: Square, to: Square) {
    let piece = position.piece_at(from);
    position.set_piece(to, piece);
    position.set_piece(from, Piece::EMPTY);
}

/// Plays `mv` on `position`, promoting a pawn that reaches its promotion edge
/// to `promotion`, then hands the turn to the next color.
pub fn apply_move(position: &mut Position, mv: Move, promotion: PieceKind) {
    let piece = position.piece_at(mv.from);
    let Some(color) = piece.color else {
        trace!(?mv, "no piece to move");
        return;
    };

    // Everything that reads the pre-move board.
    let castle = castle_side(position, mv);
    let castle_rook = castle.map(|side| (side, find_rook(position, mv.from, color, side)));
    let is_passant_capture = piece.kind == PieceKind::Pawn
        && position.rules.allow_passant
        && mv.to == position.passantable_square;
    let passant_victim = position.passant_target_square;
    let tracked_rooks = if piece.kind == PieceKind::Rook {
        let king = find_king(position, color);
        Some((
            find_rook(position, king, color, CastleSide::Lower),
            find_rook(position, king, color, CastleSide::Upper),
        ))
    } else {
        None
    };
    let captured_rook = captured_castle_rook(position, mv.to);

    relocate(position, mv.from, mv.to);
    if let Some((side, rook_from)) = castle_rook {
        if rook_from.is_valid() {
            relocate(position, rook_from, rook_destination(mv.to, color, side));
        }
    }

    if is_passant_capture && passant_victim.is_valid() {
        position.set_piece(passant_victim, Piece::EMPTY);
    }

    position.passantable_square = Square::NONE;
    position.passant_target_square = Square::NONE;
    if piece.kind == PieceKind::Pawn {
        if let Some((passed_over, landed_on)) = long_pawn_advance(mv, color) {
            position.passantable_square = passed_over;
            position.passant_target_square = landed_on;
        }
    }

    let data = position.color_data_mut(color);
    match piece.kind {
        PieceKind::King => data.has_king_moved = true,
        PieceKind::Rook => {
            if let Some((lower, upper)) = tracked_rooks {
                if mv.from == lower {
                    data.has_lower_rook_moved = true;
                }
                if mv.from == upper {
                    data.has_upper_rook_moved = true;
                }
            }
        }
        _ => {}
    }
    if let Some((victim, side)) = captured_rook {
        let data = position.color_data_mut(victim);
        match side {
            CastleSide::Lower => data.has_lower_rook_moved = true,
            CastleSide::Upper => data.has_upper_rook_moved = true,
        }
    }

    if piece.kind == PieceKind::Pawn
        && promotion.is_promotable()
        && on_promotion_edge(position, mv.to, color)
    {
        position.set_piece(mv.to, Piece::new(promotion, color).with_royalty(false));
    }

    position.to_move = next_color_to_play(position, position.to_move);
    trace!(?mv, ?promotion, mover = color.name(), next = position.to_move.name(), "applied move");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::castling::castle_moves;
    use crate::utils::position_loader::load_position;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn double_advance_sets_passant_squares() {
        let mut position = Position::standard();
        apply_move(&mut position, Move::new(sq(1, 4), sq(3, 4)), PieceKind::Empty);
        assert_eq!(position.passantable_square, sq(2, 4));
        assert_eq!(position.passant_target_square, sq(3, 4));

        apply_move(&mut position, Move::new(sq(6, 0), sq(5, 0)), PieceKind::Empty);
        assert_eq!(position.passantable_square, Square::NONE);
        assert_eq!(position.passant_target_square, Square::NONE);
    }

    #[test]
    fn passant_capture_removes_the_passed_pawn() {
        let mut position = load_position("4k3/3p4/8/4P3/8/8/8/4K3 b - -").expect("position should load");
        apply_move(&mut position, Move::new(sq(6, 3), sq(4, 3)), PieceKind::Empty);
        assert_eq!(position.passantable_square, sq(5, 3));
        assert_eq!(position.passant_target_square, sq(4, 3));

        apply_move(&mut position, Move::new(sq(4, 4), sq(5, 3)), PieceKind::Empty);
        assert_eq!(position.piece_at(sq(5, 3)), Piece::new(PieceKind::Pawn, Color::White));
        assert!(position.piece_at(sq(4, 3)).is_empty());
        assert!(position.piece_at(sq(4, 4)).is_empty());
    }

    #[test]
    fn castling_relocates_the_rook_and_sets_rights() {
        let mut position = load_position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").expect("position should load");
        apply_move(&mut position, Move::new(sq(0, 4), sq(0, 6)), PieceKind::Empty);
        assert_eq!(position.piece_at(sq(0, 6)).kind, PieceKind::King);
        assert_eq!(position.piece_at(sq(0, 5)).kind, PieceKind::Rook);
        assert!(position.piece_at(sq(0, 7)).is_empty());
        assert!(position.color_data(Color::White).has_king_moved);

        apply_move(&mut position, Move::new(sq(7, 4), sq(7, 2)), PieceKind::Empty);
        assert_eq!(position.piece_at(sq(7, 2)).kind, PieceKind::King);
        assert_eq!(position.piece_at(sq(7, 3)).kind, PieceKind::Rook);
        assert!(position.piece_at(sq(7, 0)).is_empty());
    }

    #[test]
    fn rook_moves_clear_only_their_own_side() {
        let mut position = load_position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").expect("position should load");
        apply_move(&mut position, Move::new(sq(0, 7), sq(3, 7)), PieceKind::Empty);
        let data = position.color_data(Color::White);
        assert!(data.has_upper_rook_moved);
        assert!(!data.has_lower_rook_moved);
        assert!(!data.has_king_moved);
    }

    #[test]
    fn capturing_a_castling_rook_clears_its_side() {
        let mut position = load_position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -").expect("position should load");
        apply_move(&mut position, Move::new(sq(0, 0), sq(7, 0)), PieceKind::Empty);
        let black = position.color_data(Color::Black);
        assert!(black.has_lower_rook_moved);
        assert!(!black.has_upper_rook_moved);
        assert!(position.color_data(Color::White).has_lower_rook_moved);

        // A rook arriving on the vacated side later does not restore the right.
        apply_move(&mut position, Move::new(sq(7, 7), sq(7, 5)), PieceKind::Empty);
        apply_move(&mut position, Move::new(sq(7, 0), sq(3, 0)), PieceKind::Empty);
        apply_move(&mut position, Move::new(sq(7, 5), sq(7, 1)), PieceKind::Empty);
        let mut castles = Vec::new();
        castle_moves(&position, sq(7, 4), Color::Black, &mut castles);
        assert!(castles.is_empty());
    }

    #[test]
    fn pawn_promotes_on_its_edge() {
        let mut position = load_position("8/P6k/8/8/8/8/8/K7 w - -").expect("position should load");
        apply_move(&mut position, Move::new(sq(6, 0), sq(7, 0)), PieceKind::Knight);
        assert_eq!(position.piece_at(sq(7, 0)), Piece::new(PieceKind::Knight, Color::White));
    }

    #[test]
    fn rotation_skips_colors_without_royals() {
        let mut position = Position::four_player();
        assert_eq!(next_color_to_play(&position, Color::White), Color::Red);

        position.set_piece(sq(7, 13), Piece::EMPTY);
        assert_eq!(next_color_to_play(&position, Color::White), Color::Black);

        position.color_data_mut(Color::Black).is_in_game = false;
        assert_eq!(next_color_to_play(&position, Color::White), Color::Green);
    }

    #[test]
    fn rotation_terminates_when_nobody_qualifies() {
        let mut position = Position::new_empty(Position::standard().rules);
        position.color_data_mut(Color::White).is_in_game = true;
        position.color_data_mut(Color::Black).is_in_game = true;
        assert_eq!(next_color_to_play(&position, Color::White), Color::Black);
        assert_eq!(next_color_to_play(&position, Color::Black), Color::White);
    }
}
