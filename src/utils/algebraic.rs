//! Square coordinates as text.
//!
//! Files are lowercase letters from `a` (column 0), ranks are 1-based decimal
//! row numbers, so `e4` is row 3, column 4 and `c12` is row 11, column 2.
//! Parsing does not check a square against a particular board's size.

use crate::game_state::chess_rules::MAX_BOARD_SIZE;
use crate::game_state::chess_types::Square;

/// Column index for a file letter.
#[inline]
pub fn file_index(ch: char) -> Option<i8> {
    if !ch.is_ascii_lowercase() {
        return None;
    }
    let col = (ch as u8 - b'a') as usize;
    (col < MAX_BOARD_SIZE).then_some(col as i8)
}

#[inline]
pub fn file_char(col: i8) -> Option<char> {
    if col < 0 || col as usize >= MAX_BOARD_SIZE {
        return None;
    }
    Some(char::from(b'a' + col as u8))
}

/// Row index for 1-based rank digits.
pub fn rank_index(digits: &str) -> Option<i8> {
    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let rank: usize = digits.parse().ok()?;
    (1..=MAX_BOARD_SIZE).contains(&rank).then(|| (rank - 1) as i8)
}

/// Square for text like `e4` or `b10`.
pub fn parse_square(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let col = file_index(chars.next()?)?;
    let row = rank_index(chars.as_str())?;
    Some(Square::new(row, col))
}

pub fn square_to_text(square: Square) -> Option<String> {
    if !square.is_valid() || square.row as usize >= MAX_BOARD_SIZE {
        return None;
    }
    let file = file_char(square.col)?;
    Some(format!("{file}{}", square.row as usize + 1))
}
