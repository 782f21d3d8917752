//! Errors used throughout the rules engine.
//!
//! Each input surface gets its own small enum so front ends can give a
//! specific diagnostic: `LoaderError` for board descriptions, `NotationError`
//! for move text and `RulesError` for rule configuration. `ChessError` wraps
//! all of them for callers that only want one type to propagate with `?`.

use thiserror::Error;

use crate::game_state::chess_types::Move;

/// Board-description loader failures.
///
/// Structural row-width problems and unrecognized characters are separate
/// variants; a front end is expected to report them differently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoaderError {
    #[error("board description is empty")]
    EmptyDescription,

    #[error("row {row} is {found} squares wide, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognized character '{0}' in board description")]
    UnrecognizedCharacter(char),

    #[error("board of {width}x{height} exceeds the supported maximum of {max}")]
    BoardTooLarge { width: usize, height: usize, max: usize },

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastlingRights(char),

    #[error("invalid en-passant field: {0}")]
    InvalidPassantSquare(String),
}

/// Reasons move text failed to produce a move.
///
/// `parse_move_text` folds all of these into the sentinel move; the typed
/// reason is available through `try_parse_move_text`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("move text must be 2 to 9 characters, got {0}")]
    BadLength(usize),

    #[error("invalid promotion piece in '{0}'")]
    InvalidPromotion(String),

    #[error("invalid destination square in '{0}'")]
    InvalidDestination(String),

    #[error("cannot read source hint '{0}'")]
    InvalidSourceHint(String),

    #[error("no legal move matches '{0}'")]
    NoMatch(String),

    #[error("'{0}' matches more than one legal move")]
    Ambiguous(String),

    #[error("'{0}' is missing a promotion piece or promotes off the promotion edge")]
    PromotionMismatch(String),

    #[error("move parsed from '{0}' failed final validation")]
    FailedValidation(String),
}

/// Rule-configuration failures.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("rules JSON could not be read: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board dimensions {width}x{height} must be between 1 and {max}")]
    BoardDimensions { width: u8, height: u8, max: usize },
}

/// Umbrella error for callers that mix subsystems.
#[derive(Error, Debug)]
pub enum ChessError {
    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("illegal move {0:?}")]
    IllegalMove(Move),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;
