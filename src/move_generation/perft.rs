//! Perft node counting through the controller.
//!
//! Every node is reached with `try_move` and left with `cancel_last_move`,
//! so the counts exercise the full commit/undo path and not just the
//! generators.

use crate::errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::count_legal_moves;

pub fn perft(game: &mut GameState, depth: u8) -> Result<u64, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }
    if depth == 1 {
        return Ok(count_legal_moves(game.legal_moves()) as u64);
    }

    let mut nodes = 0;
    for (from, to) in game.legal_move_pairs() {
        game.try_move(&from, &to)?;
        nodes += perft(game, depth - 1)?;
        game.cancel_last_move()?;
    }
    Ok(nodes)
}

/// Per-root-move node counts, keyed `from` + `to`.
pub fn perft_divide(game: &mut GameState, depth: u8) -> Result<Vec<(String, u64)>, ChessErrors> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for (from, to) in game.legal_move_pairs() {
        game.try_move(&from, &to)?;
        let nodes = perft(game, depth - 1)?;
        game.cancel_last_move()?;
        out.push((format!("{from}{to}"), nodes));
    }
    Ok(out)
}
