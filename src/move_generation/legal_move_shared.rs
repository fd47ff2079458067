//! Helpers shared by the per-piece generators and the kind → generator table.

use crate::board::chessboard::Chessboard;
use crate::game_state::chess_types::{Color, Coord, Piece, PieceKind};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::{ChessMove, MoveVector};
use crate::players::player::Player;

/// Square a pawn skipped on its double step, plus where that pawn now stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassantTarget {
    pub square: Coord,
    pub pawn: Coord,
}

/// Pure pseudo-legal generator for one piece kind.
pub type PieceMoveGenerator =
    fn(&Player, Coord, &Chessboard, Option<EnPassantTarget>) -> Vec<ChessMove>;

const GENERATORS: [PieceMoveGenerator; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

#[inline]
pub fn generator_for(kind: PieceKind) -> PieceMoveGenerator {
    GENERATORS[kind.index()]
}

/// What a piece of `color` finds on a destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Empty,
    Opponent(Piece),
    /// Off the board, an ally, or any king.
    Blocked,
}

#[inline]
pub fn target_status(board: &Chessboard, color: Color, coord: Coord) -> TargetStatus {
    let Some(square) = board.square_at(coord) else {
        return TargetStatus::Blocked;
    };
    match square.piece {
        None => TargetStatus::Empty,
        Some(piece) if piece.color == color || piece.kind == PieceKind::King => TargetStatus::Blocked,
        Some(piece) => TargetStatus::Opponent(piece),
    }
}

/// Quiet move or capture onto `to`, or nothing if the square is blocked.
#[inline]
pub fn step_move(board: &Chessboard, color: Color, from: Coord, to: Coord) -> Option<ChessMove> {
    let vector = MoveVector::new(from, to);
    match target_status(board, color, to) {
        TargetStatus::Empty => Some(ChessMove::Quiet(vector)),
        TargetStatus::Opponent(captured) => Some(ChessMove::Capture { vector, captured }),
        TargetStatus::Blocked => None,
    }
}

/// One move per offset (knight and king steps).
pub fn step_moves(player: &Player, from: Coord, board: &Chessboard, offsets: &[Coord]) -> Vec<ChessMove> {
    offsets
        .iter()
        .filter_map(|&offset| step_move(board, player.color, from, from + offset))
        .collect()
}

/// Rays for bishops, rooks and queens; each ray stops at the first occupied
/// square, which yields a capture when it holds a non-king opponent.
pub fn slide_moves(player: &Player, from: Coord, board: &Chessboard, directions: &[Coord]) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(28);

    for &direction in directions {
        let mut to = from + direction;
        loop {
            match target_status(board, player.color, to) {
                TargetStatus::Empty => {
                    out.push(ChessMove::Quiet(MoveVector::new(from, to)));
                    to = to + direction;
                }
                TargetStatus::Opponent(captured) => {
                    out.push(ChessMove::Capture { vector: MoveVector::new(from, to), captured });
                    break;
                }
                TargetStatus::Blocked => break,
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::BoardGeometry;
    use crate::game_state::chess_types::{CastlingRights, ROOK_DIRECTIONS};
    use crate::utils::fen_parser::parse_board_field;

    fn white(board: &Chessboard) -> Player {
        let seat = board.geometry().seats()[0];
        Player::new(seat, CastlingRights::NONE, board.find_kings(Color::White).first().copied())
    }

    #[test]
    fn kings_are_never_capture_targets() {
        let board = parse_board_field(&BoardGeometry::two_player(), "8/8/8/8/8/8/8/R2k3K").unwrap();
        let moves = slide_moves(&white(&board), Coord::new(0, 0), &board, &ROOK_DIRECTIONS);
        assert!(moves.iter().all(|mv| mv.captured().is_none()));
        assert!(moves.iter().all(|mv| mv.to() != Coord::new(3, 0)));
        // b1, c1 along the rank plus a2..a8 up the file.
        assert_eq!(moves.len(), 9);
    }

    #[test]
    fn rays_stop_on_removed_corners() {
        let geometry = BoardGeometry::four_player();
        let mut board = Chessboard::new(geometry.clone());
        let from = geometry.parse_square_name("d1").unwrap();
        board.set_piece(from, Some(Piece::new(PieceKind::Rook, Color::White))).unwrap();
        let seat = geometry.seats()[0];
        let player = Player::new(seat, CastlingRights::NONE, None);
        let moves = slide_moves(&player, from, &board, &[Coord::LEFT]);
        assert!(moves.is_empty());
    }

    #[test]
    fn table_dispatches_by_kind() {
        let board = parse_board_field(&BoardGeometry::two_player(), "8/8/8/8/8/8/8/1N5K").unwrap();
        let moves = generator_for(PieceKind::Knight)(&white(&board), Coord::new(1, 0), &board, None);
        assert_eq!(moves.len(), 3);
    }
}
