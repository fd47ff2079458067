use crate::board::chessboard::Chessboard;
use crate::game_state::chess_types::{Coord, ROOK_DIRECTIONS};
use crate::move_generation::legal_move_shared::{slide_moves, EnPassantTarget};
use crate::moves::chess_move::ChessMove;
use crate::players::player::Player;

pub fn generate_rook_moves(
    player: &Player,
    from: Coord,
    board: &Chessboard,
    _en_passant: Option<EnPassantTarget>,
) -> Vec<ChessMove> {
    slide_moves(player, from, board, &ROOK_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::BoardGeometry;
    use crate::game_state::chess_types::CastlingRights;
    use crate::utils::fen_parser::parse_board_field;

    #[test]
    fn rook_ray_stops_at_first_piece() {
        let geometry = BoardGeometry::two_player();
        let board = parse_board_field(&geometry, "7k/8/8/8/R2p4/8/P7/7K").unwrap();
        let player = Player::new(geometry.seats()[0], CastlingRights::NONE, None);
        let moves = generate_rook_moves(&player, Coord::new(0, 3), &board, None);
        // up a5..a8, right b4 c4 xd4, down a3.
        assert_eq!(moves.len(), 8);
        assert_eq!(moves.iter().filter(|mv| mv.captured().is_some()).count(), 1);
    }
}
