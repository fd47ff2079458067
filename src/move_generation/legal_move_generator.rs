//! Full legal move generation pipeline.
//!
//! Runs the per-kind pseudo-legal generators for every square the player
//! occupies, then keeps only the moves that survive the king-safety test.
//! Castling additionally has its one-step transit move checked first.

use std::collections::BTreeMap;

use log::trace;

use crate::board::chessboard::Chessboard;
use crate::errors::ChessErrors;
use crate::game_state::chess_types::Coord;
use crate::move_generation::legal_move_checks::is_checked_by_moving;
use crate::move_generation::legal_move_shared::{generator_for, EnPassantTarget};
use crate::moves::chess_move::{ChessMove, MoveVector};
use crate::moves::serialized_move::SerializedLegalMoves;
use crate::players::player::Player;

/// from-square name → to-square name → move.
pub type LegalMoves = BTreeMap<String, BTreeMap<String, ChessMove>>;

pub fn calculate_legal_moves(
    board: &mut Chessboard,
    player: &Player,
    en_passant: Option<EnPassantTarget>,
) -> Result<LegalMoves, ChessErrors> {
    let mut legal = LegalMoves::new();

    for from in board.occupied_by(player.color) {
        let piece = board.piece_at_or_err(from)?;
        let candidates = generator_for(piece.kind)(player, from, board, en_passant);

        for mv in candidates {
            if !is_safe(board, player, &mv)? {
                continue;
            }
            let from_name = board.square_name(mv.from())?.to_owned();
            let to_name = board.square_name(mv.to())?.to_owned();
            legal.entry(from_name).or_default().insert(to_name, mv);
        }
    }

    trace!("{} has {} legal moves", player.color, count_legal_moves(&legal));
    Ok(legal)
}

fn is_safe(board: &mut Chessboard, player: &Player, mv: &ChessMove) -> Result<bool, ChessErrors> {
    if let ChessMove::Castling { vector, .. } = *mv {
        let transit = ChessMove::Quiet(MoveVector::new(vector.from, vector.from + unit_step(vector)));
        if is_checked_by_moving(board, player, &transit)?.is_some() {
            return Ok(false);
        }
    }
    Ok(is_checked_by_moving(board, player, mv)?.is_none())
}

fn unit_step(vector: MoveVector) -> Coord {
    let delta = vector.to - vector.from;
    Coord::new(delta.x.signum(), delta.y.signum())
}

/// Presence-only view of `legal` for callers that must not see move internals.
pub fn serialize_legal_moves(legal: &LegalMoves) -> SerializedLegalMoves {
    legal
        .iter()
        .map(|(from, targets)| (from.clone(), targets.keys().map(|to| (to.clone(), true)).collect()))
        .collect()
}

pub fn count_legal_moves(legal: &LegalMoves) -> usize {
    legal.values().map(BTreeMap::len).sum()
}
