//! Game-state classification for the side to move.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub fn classify_state(position: &Position) -> PositionState {
    let in_check = is_in_check(position);
    let has_moves = !all_legal_moves(position).is_empty();

    match (has_moves, in_check) {
        (false, true) => PositionState::Checkmated,
        (false, false) => PositionState::Stalemated,
        (true, true) => PositionState::Checked,
        (true, false) => PositionState::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::utils::move_notation::parse_move_text;
    use crate::utils::position_loader::load_position;

    fn play(position: &mut Position, text: &str) {
        let parsed = parse_move_text(position, text);
        assert!(parsed.is_valid(), "'{text}' should parse");
        apply_move(position, parsed.mv, parsed.promotion);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut position = Position::standard();
        for text in ["f3", "e5", "g4", "Qh4"] {
            assert_eq!(classify_state(&position), PositionState::Normal);
            play(&mut position, text);
        }
        assert_eq!(classify_state(&position), PositionState::Checkmated);
        assert!(all_legal_moves(&position).is_empty());
    }

    #[test]
    fn check_with_escapes_is_checked() {
        let position = load_position("4k3/8/8/8/8/8/8/4R1K1 b - -").expect("position should load");
        assert_eq!(classify_state(&position), PositionState::Checked);
    }

    #[test]
    fn boxed_in_king_is_stalemated() {
        let position = load_position("7k/5Q2/6K1/8/8/8/8/8 b - -").expect("position should load");
        assert_eq!(classify_state(&position), PositionState::Stalemated);
    }
}
