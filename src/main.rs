//! Line-oriented front end.
//!
//! Usage:
//! `cargo run -- [--four-player] [--position "<description>"] [--rules rules.json]`
//!
//! Each input line is move text, or one of `moves`, `board`, `desc`,
//! `load <description>`, `perft <depth>` and `quit`.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use quad_chess::chess_errors::{ChessError, ChessResult};
use quad_chess::game_state::chess_rules::GameRules;
use quad_chess::game_state::chess_types::*;
use quad_chess::move_generation::legal_move_generator::{probe_promotion, LegalMoveGenerator};
use quad_chess::move_generation::perft::perft;
use quad_chess::utils::move_notation::move_to_text;
use quad_chess::utils::position_writer::write_position;
use quad_chess::utils::render_game_state::render_position;

/// Deepest perft the front end will run.
const MAX_PERFT_DEPTH: u8 = 6;

fn parse_perft_depth(text: &str) -> ChessResult<u8> {
    let depth = text
        .parse::<u8>()
        .map_err(|err| ChessError::InvalidCommand(format!("perft depth '{text}': {err}")))?;
    if !(1..=MAX_PERFT_DEPTH).contains(&depth) {
        return Err(ChessError::InvalidCommand(format!(
            "perft depth must be between 1 and {MAX_PERFT_DEPTH}, got {depth}"
        )));
    }
    Ok(depth)
}

fn parse_arg_value(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

/// Rule toggles from `path`, keeping the starting position's board size.
fn apply_rules_file(game: &mut Game, path: &str) -> ChessResult<()> {
    let json = std::fs::read_to_string(path)?;
    let rules = GameRules::from_json(&json)?;
    let mut position = game.position().clone();
    if (rules.board_width, rules.board_height)
        != (position.rules.board_width, position.rules.board_height)
    {
        warn!(path, "board size in rules file ignored; the starting position decides it");
    }
    position.rules = GameRules {
        board_width: position.rules.board_width,
        board_height: position.rules.board_height,
        ..rules
    };
    *game = Game::new(position);
    Ok(())
}

fn starting_game() -> ChessResult<Game> {
    let mut game = if has_flag("--four-player") {
        Game::four_player()
    } else {
        quad_chess::default_game()
    };
    if let Some(description) = parse_arg_value("--position") {
        game.set_to_description(&description)?;
    }
    if let Some(path) = parse_arg_value("--rules") {
        apply_rules_file(&mut game, &path)?;
    }
    Ok(game)
}

fn list_moves(game: &Game) -> String {
    let position = game.position();
    game.legal_moves()
        .into_iter()
        .filter_map(|mv| move_to_text(position, mv, probe_promotion(position, mv)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn handle_line(game: &mut Game, line: &str, out: &mut impl Write) -> ChessResult<bool> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "quit" | "exit" => return Ok(false),
        "moves" => writeln!(out, "{}", list_moves(game))?,
        "board" => writeln!(out, "{}", render_position(game.position()))?,
        "desc" => writeln!(out, "{}", write_position(game.position()))?,
        "load" => {
            game.set_to_description(rest.trim())?;
            writeln!(out, "{}", render_position(game.position()))?;
        }
        "perft" => {
            let depth = parse_perft_depth(rest.trim())?;
            let counts = perft(&LegalMoveGenerator, game.position(), depth);
            writeln!(out, "{counts:?}")?;
        }
        _ => {
            let mover = game.to_move();
            game.play_text(line)?;
            info!(mover = mover.name(), text = line, "move played");
            writeln!(out, "{}", render_position(game.position()))?;
            match game.state() {
                PositionState::Normal => {}
                state => writeln!(out, "{} is {state:?}", game.to_move().name())?,
            }
        }
    }
    Ok(true)
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut game = starting_game()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", render_position(game.position()))?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match handle_line(&mut game, line, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err @ ChessError::Io(_)) => return Err(err),
            Err(err) => writeln!(out, "error: {err}")?,
        }
        out.flush()?;
    }
    Ok(())
}
