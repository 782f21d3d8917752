//! A game in progress: the live position plus bounded logs of what was
//! played.

use std::collections::VecDeque;

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult, LoaderError};
use crate::game_state::chess_rules::{GameRules, MAX_BOARD_SIZE, STORE_MAX_MOVES};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{all_legal_moves, is_legal, is_move_possible};
use crate::move_generation::position_state::classify_state;
use crate::moves::geometry::on_promotion_edge;
use crate::utils::move_notation::try_parse_move_text;
use crate::utils::position_loader::load_position;

/// Promotions kept in the log before the oldest is dropped.
pub const STORE_MAX_PROMOTIONS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    // Most recent last; capped at STORE_MAX_MOVES.
    history: VecDeque<Move>,
    promotions: VecDeque<MovePromotion>,
    moves_played: usize,
}

/// Standard two-player game from the opening position.
pub fn default_game() -> Game {
    Game::new(Position::standard())
}

impl Game {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            history: VecDeque::with_capacity(STORE_MAX_MOVES),
            promotions: VecDeque::new(),
            moves_played: 0,
        }
    }

    pub fn four_player() -> Self {
        Self::new(Position::four_player())
    }

    /// Loads `text` as the new position. On failure the game is reset to an
    /// empty board under default rules and the loader error is returned.
    pub fn set_to_description(&mut self, text: &str) -> Result<(), LoaderError> {
        match load_position(text) {
            Ok(position) => {
                *self = Self::new(position);
                Ok(())
            }
            Err(err) => {
                *self = Self::new(Position::new_empty(GameRules::default()));
                Err(err)
            }
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn to_move(&self) -> Color {
        self.position.to_move
    }

    /// Recent moves, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> {
        self.history.iter()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.back().copied()
    }

    pub fn promotions(&self) -> impl Iterator<Item = &MovePromotion> {
        self.promotions.iter()
    }

    /// Total moves made, including those dropped from the history.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn state(&self) -> PositionState {
        classify_state(&self.position)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        all_legal_moves(&self.position)
    }

    /// Applies `mv` without validation and records it.
    pub fn make_move(&mut self, mv: Move, promotion: PieceKind) {
        let piece = self.position.piece_at(mv.from);
        let promotes = piece.kind == PieceKind::Pawn
            && promotion.is_promotable()
            && piece
                .color
                .is_some_and(|color| on_promotion_edge(&self.position, mv.to, color));

        apply_move(&mut self.position, mv, promotion);

        if self.history.len() == STORE_MAX_MOVES {
            self.history.pop_front();
        }
        self.history.push_back(mv);

        if promotes {
            if self.promotions.len() == STORE_MAX_PROMOTIONS {
                self.promotions.pop_front();
            }
            self.promotions.push_back(MovePromotion::new(mv, promotion));
        }
        self.moves_played += 1;
    }

    /// Applies `mv` if it is legal and follows piece movement.
    pub fn play_move(&mut self, mv: Move, promotion: PieceKind) -> ChessResult<()> {
        if !is_legal(&self.position, mv, promotion) || !is_move_possible(&self.position, mv) {
            debug!(?mv, ?promotion, "illegal move refused");
            return Err(ChessError::IllegalMove(mv));
        }
        self.make_move(mv, promotion);
        Ok(())
    }

    /// Parses and plays move text.
    pub fn play_text(&mut self, text: &str) -> ChessResult<MovePromotion> {
        let parsed = try_parse_move_text(&self.position, text)?;
        self.play_move(parsed.mv, parsed.promotion)?;
        Ok(parsed)
    }
}

impl Default for Game {
    fn default() -> Self {
        default_game()
    }
}
