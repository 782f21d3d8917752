//! Rule toggles and rule-related constants.
//!
//! `GameRules` is the engine's configuration: board dimensions plus the
//! variant switches. It deserializes from JSON with every field optional, so
//! a rules file only needs to name what differs from standard chess.

use serde::{Deserialize, Serialize};

use crate::chess_errors::RulesError;

/// Largest supported board width or height.
pub const MAX_BOARD_SIZE: usize = 23;

/// Moves kept in a game's history before the oldest are overwritten.
pub const STORE_MAX_MOVES: usize = 128;

/// Standard two-player starting position in board-description form.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub board_width: u8,
    pub board_height: u8,

    /// Check is never tested; royals are simply captured.
    pub ignore_checks: bool,
    /// Pieces may capture pieces of their own color.
    pub capture_own: bool,
    /// Win by capturing every piece. Recorded only; the core never consults it.
    pub capture_all: bool,
    pub allow_castle: bool,
    pub allow_passant: bool,
    /// Pawns may also step one square sideways onto an empty square.
    pub sideways_pawns: bool,
    /// Pawns may advance two squares from anywhere.
    pub torpedo_pawns: bool,
    /// Declared but not wired into generation.
    pub kangaroo_pawns: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            board_width: 8,
            board_height: 8,
            ignore_checks: false,
            capture_own: false,
            capture_all: false,
            allow_castle: true,
            allow_passant: true,
            sideways_pawns: false,
            torpedo_pawns: false,
            kangaroo_pawns: false,
        }
    }
}

impl GameRules {
    /// Default rules on a board of the given size.
    pub fn with_board(width: u8, height: u8) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        let rules: GameRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        let fits = |n: u8| n >= 1 && usize::from(n) <= MAX_BOARD_SIZE;
        if fits(self.board_width) && fits(self.board_height) {
            Ok(())
        } else {
            Err(RulesError::BoardDimensions {
                width: self.board_width,
                height: self.board_height,
                max: MAX_BOARD_SIZE,
            })
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        usize::from(self.board_width)
    }

    #[inline]
    pub fn height(&self) -> usize {
        usize::from(self.board_height)
    }
}
