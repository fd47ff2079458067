use crate::board::chessboard::Chessboard;
use crate::game_state::chess_types::{Coord, BISHOP_DIRECTIONS};
use crate::move_generation::legal_move_shared::{slide_moves, EnPassantTarget};
use crate::moves::chess_move::ChessMove;
use crate::players::player::Player;

pub fn generate_bishop_moves(
    player: &Player,
    from: Coord,
    board: &Chessboard,
    _en_passant: Option<EnPassantTarget>,
) -> Vec<ChessMove> {
    slide_moves(player, from, board, &BISHOP_DIRECTIONS)
}
