use crate::board::chessboard::Chessboard;
use crate::game_state::chess_types::{Coord, QUEEN_DIRECTIONS};
use crate::move_generation::legal_move_shared::{slide_moves, EnPassantTarget};
use crate::moves::chess_move::ChessMove;
use crate::players::player::Player;

pub fn generate_queen_moves(
    player: &Player,
    from: Coord,
    board: &Chessboard,
    _en_passant: Option<EnPassantTarget>,
) -> Vec<ChessMove> {
    slide_moves(player, from, board, &QUEEN_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::BoardGeometry;
    use crate::game_state::chess_types::CastlingRights;
    use crate::utils::fen_parser::parse_board_field;

    #[test]
    fn queen_on_empty_board_reaches_twenty_seven_squares() {
        let geometry = BoardGeometry::two_player();
        let board = parse_board_field(&geometry, "8/8/8/8/3Q4/8/8/8").unwrap();
        let player = Player::new(geometry.seats()[0], CastlingRights::NONE, None);
        assert_eq!(generate_queen_moves(&player, Coord::new(3, 3), &board, None).len(), 27);
    }
}
