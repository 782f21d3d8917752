//! Castling geometry.
//!
//! A color castles along the axis parallel to its own edge. "Upper" is the
//! side with higher coordinates along that axis, "lower" the other. The rook
//! taking part is found by scanning outward from the king rather than from
//! fixed squares, so any board width works.

use crate::game_state::chess_types::*;
use crate::moves::geometry::in_bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Lower,
    Upper,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Lower, CastleSide::Upper];
}

/// Minimum king-to-rook distance for a two-square castle to leave room for
/// the rook to jump over.
const MIN_ROOK_DISTANCE: i8 = 3;

/// Unit step from the king toward `side`.
#[inline]
pub const fn castle_step(color: Color, side: CastleSide) -> (i8, i8) {
    let sign = match side {
        CastleSide::Lower => -1,
        CastleSide::Upper => 1,
    };
    if color.castles_along_columns() {
        (0, sign)
    } else {
        (sign, 0)
    }
}

/// First king of `color`, scanning row by row.
pub fn find_king(position: &Position, color: Color) -> Square {
    position
        .squares()
        .find(|sq| {
            let piece = position.piece_at(*sq);
            piece.kind == PieceKind::King && piece.is_color(color)
        })
        .unwrap_or(Square::NONE)
}

/// First own-color rook met scanning outward from `king` toward `side`.
pub fn find_rook(position: &Position, king: Square, color: Color, side: CastleSide) -> Square {
    if !in_bounds(position, king) {
        return Square::NONE;
    }
    let (d_row, d_col) = castle_step(color, side);
    let mut sq = king.offset(d_row, d_col);
    while in_bounds(position, sq) {
        let piece = position.piece_at(sq);
        if piece.kind == PieceKind::Rook && piece.is_color(color) {
            return sq;
        }
        sq = sq.offset(d_row, d_col);
    }
    Square::NONE
}

/// Which side a move castles to, if it is a castle at all: a king moving two
/// or more squares along its color's castling axis.
pub fn castle_side(position: &Position, mv: Move) -> Option<CastleSide> {
    let piece = position.get(mv.from)?;
    if piece.kind != PieceKind::King {
        return None;
    }
    let color = piece.color?;
    let (along, across) = if color.castles_along_columns() {
        (mv.to.col - mv.from.col, mv.to.row - mv.from.row)
    } else {
        (mv.to.row - mv.from.row, mv.to.col - mv.from.col)
    };
    if across != 0 {
        return None;
    }
    match along {
        d if d >= 2 => Some(CastleSide::Upper),
        d if d <= -2 => Some(CastleSide::Lower),
        _ => None,
    }
}

/// Square the rook lands on: beside the king's destination, toward the king's
/// origin.
#[inline]
pub fn rook_destination(king_to: Square, color: Color, side: CastleSide) -> Square {
    let (d_row, d_col) = castle_step(color, side);
    king_to.offset(-d_row, -d_col)
}

fn has_rook_moved(data: &ColorData, side: CastleSide) -> bool {
    match side {
        CastleSide::Lower => data.has_lower_rook_moved,
        CastleSide::Upper => data.has_upper_rook_moved,
    }
}

/// Pseudo-legal castle moves for the king on `from`. Attack safety is left
/// to the legality filter.
pub fn castle_moves(position: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
    let data = position.color_data(color);
    if !position.rules.allow_castle || data.has_king_moved {
        return;
    }

    for side in CastleSide::BOTH {
        if has_rook_moved(data, side) {
            continue;
        }
        let rook = find_rook(position, from, color, side);
        if !rook.is_valid() {
            continue;
        }

        let (d_row, d_col) = castle_step(color, side);
        let distance = (rook.row - from.row).abs() + (rook.col - from.col).abs();
        if distance < MIN_ROOK_DISTANCE {
            continue;
        }

        let path_clear = (1..distance)
            .map(|i| from.offset(d_row * i, d_col * i))
            .all(|sq| position.piece_at(sq).is_empty());
        if path_clear {
            out.push(Move::new(from, from.offset(d_row * 2, d_col * 2)));
        }
    }
}
