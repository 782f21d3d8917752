//! Compact move text.
//!
//! Text is read right to left: an optional `=X` promotion, the destination
//! square, an optional `x`, then whatever is left as a hint about the source.
//! The hint is matched against the legal moves of the position, so `e4`,
//! `Nf3`, `Nbd2`, `R1a3`, `exd5` and `e2e4` all work. A file plus a rank with
//! no piece letter names the source square outright.

use tracing::debug;

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{all_legal_moves, is_legal, is_move_possible};
use crate::moves::geometry::on_promotion_edge;
use crate::utils::algebraic::{file_index, parse_square, rank_index, square_to_text};

pub const MIN_TEXT_LEN: usize = 2;
pub const MAX_TEXT_LEN: usize = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SourceHint {
    kind: Option<PieceKind>,
    file: Option<i8>,
    rank: Option<i8>,
}

impl SourceHint {
    fn matches(&self, position: &Position, from: Square) -> bool {
        self.kind.map_or(true, |kind| position.piece_at(from).kind == kind)
            && self.file.map_or(true, |col| from.col == col)
            && self.rank.map_or(true, |row| from.row == row)
    }
}

/// Parses `text` into a legal move, or [`MovePromotion::NONE`] when the text
/// is malformed, ambiguous or names no legal move.
pub fn parse_move_text(position: &Position, text: &str) -> MovePromotion {
    match try_parse_move_text(position, text) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(%err, text, "move text rejected");
            MovePromotion::NONE
        }
    }
}

pub fn try_parse_move_text(position: &Position, text: &str) -> Result<MovePromotion, NotationError> {
    let text = text.trim();
    let len = text.chars().count();
    if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
        return Err(NotationError::BadLength(len));
    }
    if !text.is_ascii() {
        return Err(NotationError::InvalidSourceHint(text.to_owned()));
    }

    let (rest, promotion) = split_promotion(text)?;
    let (rest, destination) =
        split_destination(rest).ok_or_else(|| NotationError::InvalidDestination(text.to_owned()))?;
    let rest = rest.strip_suffix('x').unwrap_or(rest);
    let hint = parse_source_hint(rest).ok_or_else(|| NotationError::InvalidSourceHint(text.to_owned()))?;

    let candidates: Vec<Move> = all_legal_moves(position)
        .into_iter()
        .filter(|mv| mv.to == destination && hint.matches(position, mv.from))
        .collect();
    let mv = match candidates.as_slice() {
        [] => return Err(NotationError::NoMatch(text.to_owned())),
        [mv] => *mv,
        _ => return Err(NotationError::Ambiguous(text.to_owned())),
    };

    let piece = position.piece_at(mv.from);
    let promotes = piece.kind == PieceKind::Pawn
        && piece.color.is_some_and(|color| on_promotion_edge(position, mv.to, color));
    if promotes != (promotion != PieceKind::Empty) {
        return Err(NotationError::PromotionMismatch(text.to_owned()));
    }
    if !is_legal(position, mv, promotion) || !is_move_possible(position, mv) {
        return Err(NotationError::FailedValidation(text.to_owned()));
    }

    Ok(MovePromotion::new(mv, promotion))
}

fn split_promotion(text: &str) -> Result<(&str, PieceKind), NotationError> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    if len < 2 || bytes[len - 2] != b'=' {
        return Ok((text, PieceKind::Empty));
    }
    let kind = PieceKind::from_letter(char::from(bytes[len - 1]))
        .filter(|kind| kind.is_promotable())
        .ok_or_else(|| NotationError::InvalidPromotion(text.to_owned()))?;
    Ok((&text[..len - 2], kind))
}

/// Destination is the last two characters, or the last three when the two
/// do not read as a square (two-digit ranks).
fn split_destination(rest: &str) -> Option<(&str, Square)> {
    let len = rest.len();
    [2, 3]
        .into_iter()
        .filter(|width| len >= *width)
        .find_map(|width| parse_square(&rest[len - width..]).map(|sq| (&rest[..len - width], sq)))
}

fn parse_source_hint(text: &str) -> Option<SourceHint> {
    let mut rest = text;
    let mut hint = SourceHint::default();

    if let Some(ch) = rest.chars().next().filter(char::is_ascii_uppercase) {
        hint.kind = Some(PieceKind::from_letter(ch)?);
        rest = &rest[1..];
    }
    if let Some(ch) = rest.chars().next().filter(char::is_ascii_lowercase) {
        hint.file = Some(file_index(ch)?);
        rest = &rest[1..];
    }
    if !rest.is_empty() {
        hint.rank = Some(rank_index(rest)?);
    }

    if hint.kind.is_none() && (hint.file.is_none() || hint.rank.is_none()) {
        hint.kind = Some(PieceKind::Pawn);
    }
    Some(hint)
}

/// Canonical text for a move: `[Piece]<from>[x]<to>[=P]`. Pawns carry no
/// letter. Reads back to the same move through [`parse_move_text`].
pub fn move_to_text(position: &Position, mv: Move, promotion: PieceKind) -> Option<String> {
    let piece = position.get(mv.from)?;
    let is_pawn = piece.kind == PieceKind::Pawn;

    let mut out = String::with_capacity(MAX_TEXT_LEN);
    if !is_pawn {
        out.push(piece.kind.letter()?);
    }
    out.push_str(&square_to_text(mv.from)?);

    let is_passant = is_pawn && position.rules.allow_passant && mv.to == position.passantable_square;
    if !position.piece_at(mv.to).is_empty() || is_passant {
        out.push('x');
    }
    out.push_str(&square_to_text(mv.to)?);

    if is_pawn && promotion.is_promotable() {
        out.push('=');
        out.push(promotion.letter()?);
    }
    Some(out)
}
