//! Board geometry and capture predicates.
//!
//! "Forward" depends on the color: each color advances away from its own
//! edge, so pawn vectors, home edges and promotion edges are all looked up
//! per color here.

use crate::game_state::chess_types::*;

#[inline]
pub fn in_bounds(position: &Position, square: Square) -> bool {
    square.is_valid()
        && (square.row as usize) < position.height()
        && (square.col as usize) < position.width()
}

#[inline]
pub fn is_valid_square(square: Square) -> bool {
    square.is_valid()
}

/// Whether a piece of `mover` may end its move on a square holding `target`.
#[inline]
pub fn can_capture(position: &Position, mover: Color, target: Piece) -> bool {
    match target.kind {
        PieceKind::Empty => true,
        PieceKind::Duck => false,
        _ => position.rules.capture_own || target.color != Some(mover),
    }
}

/// Unit (row, col) step a pawn of `color` advances by.
#[inline]
pub const fn pawn_direction(color: Color) -> (i8, i8) {
    match color {
        Color::White => (1, 0),
        Color::Black => (-1, 0),
        Color::Green => (0, 1),
        Color::Red => (0, -1),
    }
}

/// The edge opposite a color's own edge.
pub fn on_promotion_edge(position: &Position, square: Square, color: Color) -> bool {
    let last_row = position.height() as i8 - 1;
    let last_col = position.width() as i8 - 1;
    match color {
        Color::White => square.row == last_row,
        Color::Black => square.row == 0,
        Color::Green => square.col == last_col,
        Color::Red => square.col == 0,
    }
}

/// Within two ranks of the color's own edge, where pawns may double-step.
pub fn near_home_edge(position: &Position, square: Square, color: Color) -> bool {
    let height = position.height() as i8;
    let width = position.width() as i8;
    match color {
        Color::White => square.row <= 1,
        Color::Black => square.row >= height - 2,
        Color::Green => square.col <= 1,
        Color::Red => square.col >= width - 2,
    }
}

/// Walks from `from` along (`d_row`, `d_col`) pushing every reachable square,
/// including a capturable blocker.
pub fn push_sliding_moves(
    position: &Position,
    from: Square,
    mover: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut to = from.offset(d_row, d_col);
        while in_bounds(position, to) {
            let hit = position.piece_at(to);
            if !hit.is_empty() {
                if can_capture(position, mover, hit) {
                    out.push(Move::new(from, to));
                }
                break;
            }
            out.push(Move::new(from, to));
            to = to.offset(d_row, d_col);
        }
    }
}

/// Pushes each offset square that is on the board and capturable.
pub fn push_step_moves(
    position: &Position,
    from: Square,
    mover: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let to = from.offset(d_row, d_col);
        if in_bounds(position, to) && can_capture(position, mover, position.piece_at(to)) {
            out.push(Move::new(from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::GameRules;

    #[test]
    fn bounds_follow_configured_dimensions() {
        let position = Position::new_empty(GameRules::with_board(10, 6));
        assert!(in_bounds(&position, Square::new(5, 9)));
        assert!(!in_bounds(&position, Square::new(6, 0)));
        assert!(!in_bounds(&position, Square::new(0, 10)));
        assert!(!in_bounds(&position, Square::NONE));
        assert!(is_valid_square(Square::new(20, 20)));
    }

    #[test]
    fn capture_rules_respect_color_and_capture_own() {
        let mut position = Position::standard();
        let own = Piece::new(PieceKind::Knight, Color::White);
        let enemy = Piece::new(PieceKind::Knight, Color::Black);
        assert!(can_capture(&position, Color::White, Piece::EMPTY));
        assert!(can_capture(&position, Color::White, enemy));
        assert!(!can_capture(&position, Color::White, own));
        assert!(!can_capture(&position, Color::White, Piece::DUCK));

        position.rules.capture_own = true;
        assert!(can_capture(&position, Color::White, own));
        assert!(!can_capture(&position, Color::White, Piece::DUCK));
    }

    #[test]
    fn promotion_edges_are_the_far_side_for_each_color() {
        let position = Position::four_player();
        assert!(on_promotion_edge(&position, Square::new(13, 5), Color::White));
        assert!(on_promotion_edge(&position, Square::new(0, 5), Color::Black));
        assert!(on_promotion_edge(&position, Square::new(5, 13), Color::Green));
        assert!(on_promotion_edge(&position, Square::new(5, 0), Color::Red));
        assert!(!on_promotion_edge(&position, Square::new(5, 0), Color::Green));
    }

    #[test]
    fn home_edge_covers_two_ranks() {
        let position = Position::four_player();
        assert!(near_home_edge(&position, Square::new(1, 5), Color::White));
        assert!(!near_home_edge(&position, Square::new(2, 5), Color::White));
        assert!(near_home_edge(&position, Square::new(5, 12), Color::Red));
        assert!(!near_home_edge(&position, Square::new(5, 11), Color::Red));
        assert!(near_home_edge(&position, Square::new(5, 1), Color::Green));
    }
}
