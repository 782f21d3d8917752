//! Plain-text board renderer for terminals and test diagnostics.
//!
//! Each square is two characters: the color initial and the piece letter
//! (`wK`, `gP`), ` ·` when empty. Row 0 is printed last so White sits at the
//! bottom.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::file_char;

pub fn render_position(position: &Position) -> String {
    let mut out = String::new();
    let file_labels = file_label_line(position.width());

    out.push_str(&file_labels);
    out.push('\n');

    for row in (0..position.height() as i8).rev() {
        let rank = row as usize + 1;
        out.push_str(&format!("{rank:>2} "));

        for col in 0..position.width() as i8 {
            out.push_str(&square_cell(position.piece_at(Square::new(row, col))));
            out.push(' ');
        }

        out.push_str(&format!("{rank}\n"));
    }

    out.push_str(&file_labels);
    out.push('\n');
    out.push_str(&format!("{} to move", position.to_move.name()));

    out
}

fn file_label_line(width: usize) -> String {
    let mut line = String::from("   ");
    for col in 0..width as i8 {
        line.push(' ');
        line.push(file_char(col).unwrap_or('?'));
        line.push(' ');
    }
    line.trim_end().to_owned()
}

fn square_cell(piece: Piece) -> String {
    match (piece.color, piece.kind.letter()) {
        (Some(color), Some(letter)) => format!("{}{letter}", color_initial(color)),
        _ if piece.kind == PieceKind::Duck => "DD".to_owned(),
        _ => " ·".to_owned(),
    }
}

fn color_initial(color: Color) -> char {
    match color {
        Color::White => 'w',
        Color::Black => 'b',
        Color::Green => 'g',
        Color::Red => 'r',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_standard_start() {
        let rendered = render_position(&Position::standard());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "    a  b  c  d  e  f  g  h");
        assert_eq!(lines[1], " 8 bR bN bB bQ bK bB bN bR 8");
        assert_eq!(lines[4], " 5  ·  ·  ·  ·  ·  ·  ·  · 5");
        assert_eq!(lines[8], " 1 wR wN wB wQ wK wB wN wR 1");
        assert_eq!(lines[10], "White to move");
    }

    #[test]
    fn renders_four_player_colors() {
        let rendered = render_position(&Position::four_player());
        assert!(rendered.contains("gK"));
        assert!(rendered.contains("rK"));
        assert!(rendered.lines().any(|line| line.starts_with("14 ")));
        assert!(rendered.lines().next().is_some_and(|line| line.ends_with('n')));
    }
}
