use crate::board::chessboard::Chessboard;
use crate::game_state::chess_types::{Coord, KNIGHT_OFFSETS};
use crate::move_generation::legal_move_shared::{step_moves, EnPassantTarget};
use crate::moves::chess_move::ChessMove;
use crate::players::player::Player;

pub fn generate_knight_moves(
    player: &Player,
    from: Coord,
    board: &Chessboard,
    _en_passant: Option<EnPassantTarget>,
) -> Vec<ChessMove> {
    step_moves(player, from, board, &KNIGHT_OFFSETS)
}
