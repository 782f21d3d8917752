//! Board descriptions from positions, the inverse of the loader.

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_text;

/// Writes `position` in the format read by `load_position`.
///
/// Only White and Black pieces have letters; Green, Red and Duck squares are
/// written as empty.
pub fn write_position(position: &Position) -> String {
    let side_to_move = match position.to_move {
        Color::Black => "b",
        _ => "w",
    };
    format!(
        "{} {} {} {}",
        write_board_field(position),
        side_to_move,
        write_castling_field(position),
        write_passant_field(position)
    )
}

fn write_board_field(position: &Position) -> String {
    let mut out = String::new();

    for row in (0..position.height() as i8).rev() {
        let mut empty_count = 0usize;

        for col in 0..position.width() as i8 {
            match piece_char(position.piece_at(Square::new(row, col))) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        if row > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_char(piece: Piece) -> Option<char> {
    let letter = piece.kind.letter()?;
    match piece.color {
        Some(Color::White) => Some(letter),
        Some(Color::Black) => Some(letter.to_ascii_lowercase()),
        Some(color) => {
            debug!(color = color.name(), kind = ?piece.kind, "piece has no letter in the board description");
            None
        }
        None => None,
    }
}

fn write_castling_field(position: &Position) -> String {
    let mut out = String::new();
    for (color, upper, lower) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
        let data = position.color_data(color);
        if data.has_king_moved {
            continue;
        }
        if !data.has_upper_rook_moved {
            out.push(upper);
        }
        if !data.has_lower_rook_moved {
            out.push(lower);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

fn write_passant_field(position: &Position) -> String {
    square_to_text(position.passantable_square).unwrap_or_else(|| "-".to_owned())
}
