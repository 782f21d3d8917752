//! Crate root module declarations for the quad_chess rules engine.
//!
//! This file exposes the subsystems (game state, per-piece movement, move
//! generation and legality, and text utilities) so the binary, benchmarks
//! and front ends can import stable module paths. The handful of calls a
//! front end needs are re-exported at the root.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod castling;
    pub mod geometry;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod position_state;
}

pub mod utils {
    pub mod algebraic;
    pub mod move_notation;
    pub mod position_loader;
    pub mod position_writer;
    pub mod render_game_state;
}

pub use game_state::game::default_game;
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::all_legal_moves;
pub use move_generation::position_state::classify_state;
pub use utils::move_notation::parse_move_text;
