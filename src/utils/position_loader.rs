//! Board-description loader.
//!
//! Reads slash-separated rows (highest row first) of piece letters and
//! decimal empty-square runs, followed by optional side-to-move, castling and
//! en-passant fields. Board size comes from the description itself: width
//! from the first row, height from the row count.

use tracing::debug;

use crate::chess_errors::LoaderError;
use crate::game_state::chess_rules::{GameRules, MAX_BOARD_SIZE};
use crate::game_state::chess_types::*;
use crate::moves::geometry::pawn_direction;
use crate::utils::algebraic::parse_square;

pub fn load_position(text: &str) -> Result<Position, LoaderError> {
    let result = parse_description(text);
    if let Err(err) = &result {
        debug!(%err, text, "board description rejected");
    }
    result
}

fn parse_description(text: &str) -> Result<Position, LoaderError> {
    let mut fields = text.split_whitespace();
    let board_part = fields.next().ok_or(LoaderError::EmptyDescription)?;

    let rows = parse_rows(board_part)?;
    let (width, height) = (rows[0].len(), rows.len());
    if width > MAX_BOARD_SIZE || height > MAX_BOARD_SIZE {
        return Err(LoaderError::BoardTooLarge {
            width,
            height,
            max: MAX_BOARD_SIZE,
        });
    }

    let mut position = Position::new_empty(GameRules::with_board(width as u8, height as u8));
    for (i, row) in rows.iter().enumerate() {
        let board_row = (height - 1 - i) as i8;
        for (col, piece) in row.iter().enumerate() {
            position.set_piece(Square::new(board_row, col as i8), *piece);
        }
    }
    position.color_data_mut(Color::White).is_in_game = true;
    position.color_data_mut(Color::Black).is_in_game = true;

    if let Some(side) = fields.next() {
        position.to_move = parse_side_to_move(side)?;
    }
    if let Some(castling) = fields.next() {
        apply_castling_rights(&mut position, castling)?;
    }
    if let Some(passant) = fields.next() {
        apply_passant_square(&mut position, passant)?;
    }
    // Clock fields, if any, are not tracked.

    Ok(position)
}

fn parse_rows(board_part: &str) -> Result<Vec<Vec<Piece>>, LoaderError> {
    let mut rows: Vec<Vec<Piece>> = Vec::new();

    for (idx, row_text) in board_part.split('/').enumerate() {
        let mut row = Vec::new();
        let mut run = 0usize;

        for ch in row_text.chars() {
            if let Some(digit) = ch.to_digit(10) {
                run = run * 10 + digit as usize;
                if run > MAX_BOARD_SIZE {
                    return Err(LoaderError::BoardTooLarge {
                        width: run,
                        height: idx + 1,
                        max: MAX_BOARD_SIZE,
                    });
                }
                continue;
            }
            row.extend(std::iter::repeat(Piece::EMPTY).take(run));
            run = 0;
            row.push(piece_from_char(ch).ok_or(LoaderError::UnrecognizedCharacter(ch))?);
        }
        row.extend(std::iter::repeat(Piece::EMPTY).take(run));

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(LoaderError::RowWidthMismatch {
                    row: idx,
                    expected: first.len(),
                    found: row.len(),
                });
            }
        } else if row.is_empty() {
            return Err(LoaderError::EmptyDescription);
        }
        rows.push(row);
    }

    Ok(rows)
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };
    PieceKind::from_letter(ch).map(|kind| Piece::new(kind, color))
}

fn parse_side_to_move(side: &str) -> Result<Color, LoaderError> {
    match side {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(LoaderError::InvalidSideToMove(side.to_owned())),
    }
}

/// Every rook flag starts set; each letter present clears one.
fn apply_castling_rights(position: &mut Position, castling: &str) -> Result<(), LoaderError> {
    for color in [Color::White, Color::Black] {
        let data = position.color_data_mut(color);
        data.has_upper_rook_moved = true;
        data.has_lower_rook_moved = true;
    }
    if castling == "-" {
        return Ok(());
    }

    for ch in castling.chars() {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let data = position.color_data_mut(color);
        match ch {
            'K' | 'k' => data.has_upper_rook_moved = false,
            'Q' | 'q' => data.has_lower_rook_moved = false,
            _ => return Err(LoaderError::InvalidCastlingRights(ch)),
        }
    }
    Ok(())
}

/// The listed square is the one passed over; the pawn to remove sits one
/// step further along the forward direction of the color that just moved.
fn apply_passant_square(position: &mut Position, passant: &str) -> Result<(), LoaderError> {
    if passant == "-" {
        return Ok(());
    }
    let square = parse_square(passant)
        .filter(|sq| (sq.row as usize) < position.height() && (sq.col as usize) < position.width())
        .ok_or_else(|| LoaderError::InvalidPassantSquare(passant.to_owned()))?;

    let last_mover = match position.to_move {
        Color::White => Color::Black,
        _ => Color::White,
    };
    let (d_row, d_col) = pawn_direction(last_mover);
    position.passantable_square = square;
    position.passant_target_square = square.offset(d_row, d_col);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn starting_description_matches_standard_setup() {
        let loaded = load_position(STARTING_POSITION).expect("start position should load");
        assert_eq!(loaded, Position::standard());
    }

    #[test]
    fn first_row_is_the_highest_row() {
        let position = load_position("k7/8/8/8/8/8/8/7K w - -").expect("position should load");
        let black_king = position.piece_at(sq(7, 0));
        assert_eq!(black_king.kind, PieceKind::King);
        assert_eq!(black_king.color, Some(Color::Black));
        assert!(black_king.is_royal);
        assert_eq!(position.piece_at(sq(0, 7)).color, Some(Color::White));
    }

    #[test]
    fn board_size_follows_the_description() {
        let position = load_position("k9/10/10/9K").expect("position should load");
        assert_eq!((position.width(), position.height()), (10, 4));
        assert_eq!(position.piece_at(sq(0, 9)).kind, PieceKind::King);
        assert_eq!(position.to_move, Color::White);
        assert!(position.is_in_game(Color::White) && position.is_in_game(Color::Black));
        assert!(!position.is_in_game(Color::Green));

        let wide = load_position("12k10/23/K22").expect("23-wide board should load");
        assert_eq!(wide.width(), 23);
        assert_eq!(wide.piece_at(sq(2, 12)).kind, PieceKind::King);
    }

    #[test]
    fn row_width_mismatch_is_reported() {
        let err = load_position("8/7/8/8/8/8/8/8").expect_err("short row should fail");
        assert_eq!(
            err,
            LoaderError::RowWidthMismatch {
                row: 1,
                expected: 8,
                found: 7
            }
        );
    }

    #[test]
    fn unknown_characters_are_reported() {
        assert_eq!(
            load_position("8/8/8/3x4/8/8/8/8"),
            Err(LoaderError::UnrecognizedCharacter('x'))
        );
        assert_eq!(load_position("   "), Err(LoaderError::EmptyDescription));
        assert!(matches!(
            load_position("24/24"),
            Err(LoaderError::BoardTooLarge { .. })
        ));
        assert_eq!(
            load_position("8/8/8/8/8/8/8/8 x"),
            Err(LoaderError::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            load_position("8/8/8/8/8/8/8/8 w KZ"),
            Err(LoaderError::InvalidCastlingRights('Z'))
        );
        assert!(matches!(
            load_position("8/8/8/8/8/8/8/8 w - z9"),
            Err(LoaderError::InvalidPassantSquare(_))
        ));
    }

    #[test]
    fn castling_letters_clear_rook_flags() {
        let position = load_position("r3k2r/8/8/8/8/8/8/R3K2R b Kq -").expect("position should load");
        assert_eq!(position.to_move, Color::Black);
        let white = position.color_data(Color::White);
        assert!(!white.has_upper_rook_moved);
        assert!(white.has_lower_rook_moved);
        let black = position.color_data(Color::Black);
        assert!(black.has_upper_rook_moved);
        assert!(!black.has_lower_rook_moved);

        let untouched = load_position("r3k2r/8/8/8/8/8/8/R3K2R").expect("position should load");
        assert!(!untouched.color_data(Color::White).has_upper_rook_moved);
    }

    #[test]
    fn passant_field_sets_both_squares() {
        let position = load_position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 3").expect("position should load");
        assert_eq!(position.passantable_square, sq(5, 3));
        assert_eq!(position.passant_target_square, sq(4, 3));

        let position = load_position("4k3/8/8/8/4Pp2/8/8/4K3 b - e3").expect("position should load");
        assert_eq!(position.passantable_square, sq(2, 4));
        assert_eq!(position.passant_target_square, sq(3, 4));
    }
}
