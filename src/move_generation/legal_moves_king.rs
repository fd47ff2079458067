//! King steps plus structural castling candidates.
//!
//! Castling here only checks what the board shows: rights, the ally rook at
//! its fixed gap, and empty squares in between. Transit and destination
//! safety are left to the legality calculator.

use crate::board::chessboard::Chessboard;
use crate::game_state::chess_types::{CastlingSide, Coord, Piece, PieceKind, QUEEN_DIRECTIONS};
use crate::move_generation::legal_move_shared::{step_moves, EnPassantTarget};
use crate::moves::chess_move::{ChessMove, MoveVector};
use crate::players::player::Player;

pub fn generate_king_moves(
    player: &Player,
    from: Coord,
    board: &Chessboard,
    _en_passant: Option<EnPassantTarget>,
) -> Vec<ChessMove> {
    let mut out = step_moves(player, from, board, &QUEEN_DIRECTIONS);
    out.extend(castling_candidates(player, from, board));
    out
}

pub fn castling_candidates(player: &Player, from: Coord, board: &Chessboard) -> Vec<ChessMove> {
    // Cannot castle out of check.
    if player.is_checked() || player.king_square != Some(from) {
        return Vec::new();
    }

    let ally_rook = Piece::new(PieceKind::Rook, player.color);
    let mut out = Vec::new();

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if !player.castling_rights.has(side) {
            continue;
        }

        let direction = player.castling_direction(side);
        let gap = side.rook_gap();
        let rook_from = from + direction * gap;
        if board.piece_at(rook_from) != Some(ally_rook) {
            continue;
        }

        let path_clear = (1..gap).all(|i| {
            board
                .square_in_direction(from, direction, i)
                .is_some_and(|s| s.is_empty())
        });
        if !path_clear {
            continue;
        }

        out.push(ChessMove::Castling {
            vector: MoveVector::new(from, from + direction * 2),
            side,
            rook: MoveVector::new(rook_from, from + direction),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::BoardGeometry;
    use crate::game_state::chess_types::{Attacker, CastlingRights, Color};
    use crate::utils::fen_parser::parse_board_field;

    fn c(name: &str) -> Coord {
        BoardGeometry::two_player().parse_square_name(name).unwrap()
    }

    fn white(rights: CastlingRights) -> Player {
        Player::new(BoardGeometry::two_player().seats()[0], rights, Some(c("e1")))
    }

    #[test]
    fn both_sides_offered_on_an_open_back_rank() {
        let board = parse_board_field(&BoardGeometry::two_player(), "4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let castles = castling_candidates(&white(CastlingRights::BOTH), c("e1"), &board);
        assert_eq!(castles.len(), 2);
        assert_eq!(castles[0].to(), c("g1"));
        assert_eq!(castles[1].to(), c("c1"));
        assert!(matches!(
            castles[1],
            ChessMove::Castling { rook, .. } if rook == MoveVector::new(c("a1"), c("d1"))
        ));
    }

    #[test]
    fn each_structural_precondition_is_required() {
        let geometry = BoardGeometry::two_player();
        let blocked_b1 = parse_board_field(&geometry, "4k3/8/8/8/8/8/8/RN2K2R").unwrap();
        let castles = castling_candidates(&white(CastlingRights::BOTH), c("e1"), &blocked_b1);
        assert_eq!(castles.len(), 1, "b1 blocks queenside");

        let enemy_rook = parse_board_field(&geometry, "4k3/8/8/8/8/8/8/R3K2r").unwrap();
        let castles = castling_candidates(&white(CastlingRights::BOTH), c("e1"), &enemy_rook);
        assert_eq!(castles.len(), 1, "h1 holds an opponent rook");

        let open = parse_board_field(&geometry, "4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let kingside_only = CastlingRights { kingside: true, queenside: false };
        assert_eq!(castling_candidates(&white(kingside_only), c("e1"), &open).len(), 1);

        let mut checked = white(CastlingRights::BOTH);
        checked.checked_by = Some(Attacker {
            piece: Piece::new(PieceKind::Rook, Color::Black),
            square: c("e8"),
        });
        assert!(castling_candidates(&checked, c("e1"), &open).is_empty());
    }

    #[test]
    fn king_steps_include_castling() {
        let board = parse_board_field(&BoardGeometry::two_player(), "4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let moves = generate_king_moves(&white(CastlingRights::BOTH), c("e1"), &board, None);
        assert_eq!(moves.len(), 7);
    }
}
