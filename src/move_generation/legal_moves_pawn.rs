//! Pawn pseudo-legal moves for any seat orientation.
//!
//! Pushes follow the player's forward vector; the two capture diagonals are
//! forward plus either perpendicular. Reaching the seat's last line turns the
//! push or capture into a promotion.

use crate::board::chessboard::Chessboard;
use crate::game_state::chess_types::{Coord, Piece, PieceKind};
use crate::move_generation::legal_move_shared::{target_status, EnPassantTarget, TargetStatus};
use crate::moves::chess_move::{ChessMove, MoveVector};
use crate::players::player::Player;

pub fn generate_pawn_moves(
    player: &Player,
    from: Coord,
    board: &Chessboard,
    en_passant: Option<EnPassantTarget>,
) -> Vec<ChessMove> {
    let geometry = board.geometry();
    let forward = player.forward;
    let mut out = Vec::with_capacity(4);

    let one = from + forward;
    if board.square_at(one).is_some_and(|s| s.is_empty()) {
        push_or_promote(&mut out, board, player, MoveVector::new(from, one), None);

        let two = one + forward;
        if geometry.is_pawn_home_line(forward, from) && board.square_at(two).is_some_and(|s| s.is_empty()) {
            out.push(ChessMove::Quiet(MoveVector::new(from, two)));
        }
    }

    let side = forward.rotate_clockwise();
    for to in [one + side, one - side] {
        match target_status(board, player.color, to) {
            TargetStatus::Opponent(captured) => {
                push_or_promote(&mut out, board, player, MoveVector::new(from, to), Some(captured));
            }
            TargetStatus::Empty => {
                if let Some(mv) = en_passant_capture(board, player, from, to, en_passant) {
                    out.push(mv);
                }
            }
            TargetStatus::Blocked => {}
        }
    }

    out
}

fn push_or_promote(
    out: &mut Vec<ChessMove>,
    board: &Chessboard,
    player: &Player,
    vector: MoveVector,
    captured: Option<Piece>,
) {
    let mv = if board.geometry().is_last_line(player.forward, vector.to) {
        ChessMove::Promotion { vector, captured }
    } else {
        match captured {
            Some(captured) => ChessMove::Capture { vector, captured },
            None => ChessMove::Quiet(vector),
        }
    };
    out.push(mv);
}

fn en_passant_capture(
    board: &Chessboard,
    player: &Player,
    from: Coord,
    to: Coord,
    en_passant: Option<EnPassantTarget>,
) -> Option<ChessMove> {
    let target = en_passant.filter(|t| t.square == to)?;
    let captured = board
        .piece_at(target.pawn)
        .filter(|p| p.kind == PieceKind::Pawn && p.color != player.color)?;

    Some(ChessMove::EnPassant {
        vector: MoveVector::new(from, to),
        capture_square: target.pawn,
        captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::BoardGeometry;
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::utils::fen_parser::parse_board_field;

    fn c(name: &str) -> Coord {
        BoardGeometry::two_player().parse_square_name(name).unwrap()
    }

    fn seat(index: usize) -> Player {
        Player::new(BoardGeometry::two_player().seats()[index], CastlingRights::NONE, None)
    }

    #[test]
    fn double_step_only_from_home_line_through_empty_squares() {
        let geometry = BoardGeometry::two_player();
        let board = parse_board_field(&geometry, "4k3/8/8/8/8/4p3/3P3P/4K3").unwrap();

        let d_pawn = generate_pawn_moves(&seat(0), c("d2"), &board, None);
        assert_eq!(d_pawn.len(), 3, "d3, d4 and the capture on e3");

        let blocked = parse_board_field(&geometry, "4k3/8/8/8/7p/8/7P/4K3").unwrap();
        let h_pawn = generate_pawn_moves(&seat(0), c("h2"), &blocked, None);
        assert_eq!(h_pawn, vec![ChessMove::Quiet(MoveVector::new(c("h2"), c("h3")))]);
    }

    #[test]
    fn black_pawns_advance_down_the_board() {
        let board = parse_board_field(&BoardGeometry::two_player(), "4k3/3p4/8/8/8/8/8/4K3").unwrap();
        let moves = generate_pawn_moves(&seat(1), c("d7"), &board, None);
        let targets: Vec<Coord> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![c("d6"), c("d5")]);
    }

    #[test]
    fn en_passant_requires_the_recorded_target() {
        let board = parse_board_field(&BoardGeometry::two_player(), "4k3/8/8/3pP3/8/8/8/4K3").unwrap();
        let target = EnPassantTarget { square: c("d6"), pawn: c("d5") };

        let with_target = generate_pawn_moves(&seat(0), c("e5"), &board, Some(target));
        let ep = with_target.iter().find(|m| matches!(m, ChessMove::EnPassant { .. })).unwrap();
        assert_eq!(ep.capture_square(), Some(c("d5")));
        assert_eq!(ep.captured(), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let without = generate_pawn_moves(&seat(0), c("e5"), &board, None);
        assert!(without.iter().all(|m| !matches!(m, ChessMove::EnPassant { .. })));
    }

    #[test]
    fn last_line_pushes_and_captures_promote() {
        let board = parse_board_field(&BoardGeometry::two_player(), "1n2k3/P7/8/8/8/8/8/4K3").unwrap();
        let moves = generate_pawn_moves(&seat(0), c("a7"), &board, None);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(ChessMove::is_promotion));
    }

    #[test]
    fn silver_pawns_move_right_and_capture_diagonally() {
        let geometry = BoardGeometry::four_player();
        let mut board = Chessboard::new(geometry.clone());
        let from = geometry.parse_square_name("b5").unwrap();
        let victim = geometry.parse_square_name("c6").unwrap();
        board.set_piece(from, Some(Piece::new(PieceKind::Pawn, Color::Silver))).unwrap();
        board.set_piece(victim, Some(Piece::new(PieceKind::Knight, Color::Gold))).unwrap();

        let silver = Player::new(geometry.seats()[1], CastlingRights::NONE, None);
        let moves = generate_pawn_moves(&silver, from, &board, None);
        let targets: Vec<String> = moves
            .iter()
            .map(|m| geometry.square_name(m.to()).unwrap())
            .collect();
        assert_eq!(targets, vec!["c5", "d5", "c6"]);
    }
}
