//! Board position: the grid, side to move, en-passant squares and per-color
//! castling/participation data.
//!
//! `Position` is a plain value. The mutator changes it in place; anything
//! speculative (legality probes, check tests) works on a clone.

use crate::game_state::chess_rules::GameRules;
use crate::game_state::chess_types::*;

/// Per-color participation and castling-rights bits.
///
/// The three `has_*_moved` bits are only ever set, never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorData {
    pub is_in_game: bool,
    pub has_king_moved: bool,
    pub has_upper_rook_moved: bool,
    pub has_lower_rook_moved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub rules: GameRules,
    pub to_move: Color,
    /// Square a pawn may land on this turn to capture en passant.
    pub passantable_square: Square,
    /// Square of the pawn removed by that capture.
    pub passant_target_square: Square,
    pub color_data: [ColorData; NUM_COLORS],
    // Row-major, `rules.board_width * rules.board_height` entries.
    board: Vec<Piece>,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// Empty board sized by `rules`, White to move, nobody in the game yet.
    pub fn new_empty(rules: GameRules) -> Self {
        Self {
            board: vec![Piece::EMPTY; rules.width() * rules.height()],
            rules,
            to_move: Color::White,
            passantable_square: Square::NONE,
            passant_target_square: Square::NONE,
            color_data: [ColorData::default(); NUM_COLORS],
        }
    }

    /// Standard 8x8 two-player setup.
    pub fn standard() -> Self {
        let mut position = Self::new_empty(GameRules::default());

        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            position.set_piece(Square::new(0, col), Piece::new(*kind, Color::White));
            position.set_piece(Square::new(1, col), Piece::new(PieceKind::Pawn, Color::White));
            position.set_piece(Square::new(6, col), Piece::new(PieceKind::Pawn, Color::Black));
            position.set_piece(Square::new(7, col), Piece::new(*kind, Color::Black));
        }

        position.color_data[Color::White.index()].is_in_game = true;
        position.color_data[Color::Black.index()].is_in_game = true;
        position
    }

    /// Four-player setup on a 14x14 board: each color's army occupies the
    /// middle eight squares of its own edge, 3x3 corners left empty.
    pub fn four_player() -> Self {
        const SIZE: i8 = 14;
        const OFFSET: i8 = 3;

        let mut position = Self::new_empty(GameRules::with_board(SIZE as u8, SIZE as u8));

        for (i, kind) in BACK_RANK.iter().enumerate() {
            let lane = OFFSET + i as i8;
            let pawn = PieceKind::Pawn;

            position.set_piece(Square::new(0, lane), Piece::new(*kind, Color::White));
            position.set_piece(Square::new(1, lane), Piece::new(pawn, Color::White));
            position.set_piece(Square::new(SIZE - 1, lane), Piece::new(*kind, Color::Black));
            position.set_piece(Square::new(SIZE - 2, lane), Piece::new(pawn, Color::Black));
            position.set_piece(Square::new(lane, 0), Piece::new(*kind, Color::Green));
            position.set_piece(Square::new(lane, 1), Piece::new(pawn, Color::Green));
            position.set_piece(Square::new(lane, SIZE - 1), Piece::new(*kind, Color::Red));
            position.set_piece(Square::new(lane, SIZE - 2), Piece::new(pawn, Color::Red));
        }

        for data in position.color_data.iter_mut() {
            data.is_in_game = true;
        }
        position
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rules.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rules.height()
    }

    #[inline]
    fn index_of(&self, square: Square) -> Option<usize> {
        if !square.is_valid() {
            return None;
        }
        let (row, col) = (square.row as usize, square.col as usize);
        if row < self.height() && col < self.width() {
            Some(row * self.width() + col)
        } else {
            None
        }
    }

    /// Piece on `square`, or `None` when the square is off the board.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.index_of(square).map(|idx| self.board[idx])
    }

    /// Piece on `square`; off-board squares read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.get(square).unwrap_or(Piece::EMPTY)
    }

    /// Places `piece` on `square`. Returns `false` (and changes nothing) when
    /// the square is off the board.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> bool {
        match self.index_of(square) {
            Some(idx) => {
                self.board[idx] = piece;
                true
            }
            None => false,
        }
    }

    /// Every on-board square, row by row from row 0.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let (width, height) = (self.width() as i8, self.height() as i8);
        (0..height).flat_map(move |row| (0..width).map(move |col| Square::new(row, col)))
    }

    pub fn color_data(&self, color: Color) -> &ColorData {
        &self.color_data[color.index()]
    }

    pub fn color_data_mut(&mut self, color: Color) -> &mut ColorData {
        &mut self.color_data[color.index()]
    }

    #[inline]
    pub fn is_in_game(&self, color: Color) -> bool {
        self.color_data[color.index()].is_in_game
    }

    pub fn colors_in_game(&self) -> usize {
        self.color_data.iter().filter(|data| data.is_in_game).count()
    }

    pub fn royal_squares(&self, color: Color) -> Vec<Square> {
        self.squares()
            .filter(|sq| {
                let piece = self.piece_at(*sq);
                piece.is_royal && piece.is_color(color)
            })
            .collect()
    }

    pub fn has_royal(&self, color: Color) -> bool {
        self.squares().any(|sq| {
            let piece = self.piece_at(sq);
            piece.is_royal && piece.is_color(color)
        })
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_places_kings_and_pawns() {
        let position = Position::standard();
        assert_eq!(
            position.piece_at(Square::new(0, 4)),
            Piece::new(PieceKind::King, Color::White)
        );
        assert_eq!(
            position.piece_at(Square::new(7, 3)),
            Piece::new(PieceKind::Queen, Color::Black)
        );
        assert!(position.piece_at(Square::new(4, 4)).is_empty());
        assert_eq!(position.royal_squares(Color::Black), vec![Square::new(7, 4)]);
        assert_eq!(position.colors_in_game(), 2);
        assert_eq!(position.to_move, Color::White);
    }

    #[test]
    fn off_board_access_is_harmless() {
        let mut position = Position::standard();
        assert_eq!(position.get(Square::NONE), None);
        assert_eq!(position.get(Square::new(8, 0)), None);
        assert!(position.piece_at(Square::new(0, 8)).is_empty());
        assert!(!position.set_piece(Square::new(-1, 2), Piece::new(PieceKind::Rook, Color::White)));
    }

    #[test]
    fn four_player_setup_seats_every_color() {
        let position = Position::four_player();
        assert_eq!(position.colors_in_game(), 4);
        assert_eq!(position.width(), 14);
        assert_eq!(position.royal_squares(Color::Green), vec![Square::new(7, 0)]);
        assert_eq!(position.royal_squares(Color::Red), vec![Square::new(7, 13)]);
        assert!(position.piece_at(Square::new(0, 0)).is_empty());
        assert_eq!(position.squares().count(), 196);
    }
}
