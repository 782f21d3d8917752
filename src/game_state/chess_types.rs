//! Core value types shared by every subsystem.
//!
//! Colors, piece kinds, squares and moves are small `Copy` values. The board
//! itself lives in `Position`; everything here is plain data with accessors.

pub use crate::game_state::game::Game;
pub use crate::game_state::position::{ColorData, Position};

/// Number of colors the engine can seat.
pub const NUM_COLORS: usize = 4;

/// Player color. Each color owns one board edge.
///
/// ```text
///        Black
///   Green     Red
///        White
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Green,
    Red,
}

/// Turn order, one full cycle.
const ROTATION: [Color; NUM_COLORS] = [Color::White, Color::Red, Color::Black, Color::Green];

impl Color {
    pub const ALL: [Color; NUM_COLORS] = [Color::White, Color::Black, Color::Green, Color::Red];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
            Color::Green => 2,
            Color::Red => 3,
        }
    }

    #[inline]
    const fn rotation_slot(self) -> usize {
        match self {
            Color::White => 0,
            Color::Red => 1,
            Color::Black => 2,
            Color::Green => 3,
        }
    }

    /// Next color in the fixed turn order, ignoring who is in the game.
    #[inline]
    pub const fn next(self) -> Self {
        ROTATION[(self.rotation_slot() + 1) % NUM_COLORS]
    }

    /// Previous color in the fixed turn order.
    #[inline]
    pub const fn previous(self) -> Self {
        ROTATION[(self.rotation_slot() + NUM_COLORS - 1) % NUM_COLORS]
    }

    /// White and Black castle along a row (sliding over columns); Green and Red
    /// castle along a column.
    #[inline]
    pub const fn castles_along_columns(self) -> bool {
        matches!(self, Color::White | Color::Black)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Green => "Green",
            Color::Red => "Red",
        }
    }
}

/// Piece kind. `Empty` and `Duck` are colorless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    Pawn,
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    /// Reserved blocker; never captured and never moved by the default rules.
    Duck,
}

impl PieceKind {
    /// Letter used by the board description and move text (uppercase).
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => Some('P'),
            PieceKind::King => Some('K'),
            PieceKind::Queen => Some('Q'),
            PieceKind::Rook => Some('R'),
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Empty | PieceKind::Duck => None,
        }
    }

    /// Inverse of [`PieceKind::letter`], case-insensitive.
    pub fn from_letter(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            _ => None,
        }
    }

    /// Whether a pawn reaching its promotion edge may become this kind.
    #[inline]
    pub const fn is_promotable(self) -> bool {
        !matches!(self, PieceKind::Empty | PieceKind::King | PieceKind::Duck)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Option<Color>,
    pub is_royal: bool,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::Empty,
        color: None,
        is_royal: false,
    };

    pub const DUCK: Piece = Piece {
        kind: PieceKind::Duck,
        color: None,
        is_royal: false,
    };

    /// A colored piece. Kings are royal; use [`Piece::with_royalty`] for other
    /// royal arrangements.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color: Some(color),
            is_royal: matches!(kind, PieceKind::King),
        }
    }

    #[inline]
    pub const fn with_royalty(mut self, is_royal: bool) -> Self {
        self.is_royal = is_royal;
        self
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color == Some(color)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

/// Board coordinate. Row 0 is White's home edge, column 0 is Green's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// "No square". Never used to index the board.
    pub const NONE: Square = Square { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Both coordinates non-negative. A valid square may still lie outside the
    /// current board.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.col >= 0
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// `None` for the sentinel.
    #[inline]
    pub const fn valid(self) -> Option<Self> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const NONE: Move = Move {
        from: Square::NONE,
        to: Square::NONE,
    };

    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }
}

/// A move plus the kind a promoting pawn becomes (`Empty` when not promoting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovePromotion {
    pub mv: Move,
    pub promotion: PieceKind,
}

impl MovePromotion {
    /// Rejection value returned by the notation parser.
    pub const NONE: MovePromotion = MovePromotion {
        mv: Move::NONE,
        promotion: PieceKind::Empty,
    };

    #[inline]
    pub const fn new(mv: Move, promotion: PieceKind) -> Self {
        MovePromotion { mv, promotion }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.mv.is_valid()
    }
}

/// Outcome of [`classify_state`](crate::move_generation::position_state::classify_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionState {
    Normal,
    Checked,
    Stalemated,
    Checkmated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_visits_every_color_once_per_cycle() {
        let mut color = Color::White;
        let mut seen = Vec::new();
        for _ in 0..NUM_COLORS {
            seen.push(color);
            color = color.next();
        }
        assert_eq!(color, Color::White);
        assert_eq!(seen, vec![Color::White, Color::Red, Color::Black, Color::Green]);
        assert_eq!(Color::White.previous(), Color::Green);
        assert_eq!(Color::Black.previous(), Color::Red);
    }

    #[test]
    fn sentinel_square_is_not_valid() {
        assert!(!Square::NONE.is_valid());
        assert!(Square::new(0, 0).is_valid());
        assert!(!Square::new(3, -1).is_valid());
        assert_eq!(Square::NONE.valid(), None);
        assert!(!MovePromotion::NONE.is_valid());
    }

    #[test]
    fn only_kings_are_royal_by_default() {
        assert!(Piece::new(PieceKind::King, Color::Red).is_royal);
        assert!(!Piece::new(PieceKind::Queen, Color::Red).is_royal);
        assert!(Piece::new(PieceKind::Queen, Color::Red).with_royalty(true).is_royal);
        assert_eq!(Piece::EMPTY.color, None);
    }

    #[test]
    fn promotable_kinds_exclude_king_and_colorless_kinds() {
        assert!(PieceKind::Queen.is_promotable());
        assert!(PieceKind::Pawn.is_promotable());
        assert!(!PieceKind::King.is_promotable());
        assert!(!PieceKind::Empty.is_promotable());
        assert!(!PieceKind::Duck.is_promotable());
        assert_eq!(PieceKind::from_letter('n'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_letter('x'), None);
    }
}
