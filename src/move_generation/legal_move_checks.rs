//! Check detection and the simulate-detect-revert king-safety test.

use crate::board::chessboard::Chessboard;
use crate::errors::ChessErrors;
use crate::game_state::chess_types::{
    Attacker, Color, Coord, PieceKind, KNIGHT_OFFSETS, QUEEN_DIRECTIONS,
};
use crate::moves::chess_move::ChessMove;
use crate::players::player::Player;

/// First opponent piece found attacking `player`'s king, if any.
pub fn is_checked(board: &Chessboard, player: &Player) -> Option<Attacker> {
    let king = player.king_square?;
    sliding_attacker(board, player.color, king)
        .or_else(|| knight_attacker(board, player.color, king))
        .or_else(|| pawn_attacker(board, player.color, king))
        .or_else(|| king_attacker(board, player.color, king))
}

/// Applies `mv`, looks for an attacker of the mover's king, and reverts. The board is left
/// exactly as it was.
pub fn is_checked_by_moving(
    board: &mut Chessboard,
    player: &Player,
    mv: &ChessMove,
) -> Result<Option<Attacker>, ChessErrors> {
    let moved = if player.king_square == Some(mv.from()) {
        player.with_king_at(mv.to())
    } else {
        *player
    };

    board.apply(mv)?;
    let attacker = is_checked(board, &moved);
    board.revert(mv)?;
    Ok(attacker)
}

fn sliding_attacker(board: &Chessboard, color: Color, king: Coord) -> Option<Attacker> {
    for direction in QUEEN_DIRECTIONS {
        let mut at = king + direction;
        while let Some(square) = board.square_at(at) {
            if let Some(piece) = square.piece {
                if piece.color == color {
                    break;
                }
                let attacks = match piece.kind {
                    PieceKind::Queen => true,
                    PieceKind::Rook => direction.is_orthogonal(),
                    PieceKind::Bishop => direction.is_diagonal(),
                    _ => false,
                };
                if attacks {
                    return Some(Attacker { piece, square: at });
                }
                break;
            }
            at = at + direction;
        }
    }
    None
}

fn knight_attacker(board: &Chessboard, color: Color, king: Coord) -> Option<Attacker> {
    adjacent_attacker(board, color, king, &KNIGHT_OFFSETS, PieceKind::Knight)
}

fn king_attacker(board: &Chessboard, color: Color, king: Coord) -> Option<Attacker> {
    adjacent_attacker(board, color, king, &QUEEN_DIRECTIONS, PieceKind::King)
}

fn adjacent_attacker(
    board: &Chessboard,
    color: Color,
    king: Coord,
    offsets: &[Coord],
    kind: PieceKind,
) -> Option<Attacker> {
    offsets.iter().find_map(|&offset| {
        let at = king + offset;
        board
            .piece_at(at)
            .filter(|p| p.kind == kind && p.color != color)
            .map(|piece| Attacker { piece, square: at })
    })
}

/// Each opponent seat captures along its own forward diagonals, so the
/// squares to inspect depend on which seat the pawn belongs to.
fn pawn_attacker(board: &Chessboard, color: Color, king: Coord) -> Option<Attacker> {
    for seat in board.geometry().seats() {
        if seat.color == color {
            continue;
        }
        let side = seat.forward.rotate_clockwise();
        for at in [king - seat.forward + side, king - seat.forward - side] {
            if let Some(piece) = board.piece_at(at) {
                if piece.kind == PieceKind::Pawn && piece.color == seat.color {
                    return Some(Attacker { piece, square: at });
                }
            }
        }
    }
    None
}
