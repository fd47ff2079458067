//! Four-player starting layout on the cross board.
//!
//! White and Black sit on the orthogonal edges with ordinary pawn files;
//! Silver and Gold sit on the side edges with their pawn lines rotated.

use crate::board::chessboard::Chessboard;
use crate::board::geometry::BoardGeometry;
use crate::errors::ChessErrors;
use crate::game_state::chess_types::{CastlingRights, Color, Coord, Piece, PieceKind};
use crate::utils::fen_generator::generate_fen;

use crate::game_state::chess_types::PieceKind::{Bishop as B, King as K, Knight as N, Queen as Q, Rook as R};

/// Back line of one seat, listed from `start` stepping along `along`.
struct SeatLayout {
    color: Color,
    start: Coord,
    along: Coord,
    pieces: [PieceKind; 8],
}

const LAYOUTS: [SeatLayout; 4] = [
    SeatLayout { color: Color::White, start: Coord::new(3, 0), along: Coord::RIGHT, pieces: [R, N, B, Q, K, B, N, R] },
    SeatLayout { color: Color::Silver, start: Coord::new(0, 3), along: Coord::UP, pieces: [R, N, B, K, Q, B, N, R] },
    SeatLayout { color: Color::Black, start: Coord::new(3, 13), along: Coord::RIGHT, pieces: [R, N, B, K, Q, B, N, R] },
    SeatLayout { color: Color::Gold, start: Coord::new(13, 3), along: Coord::UP, pieces: [R, N, B, Q, K, B, N, R] },
];

pub fn starting_board() -> Result<Chessboard, ChessErrors> {
    let mut board = Chessboard::new(BoardGeometry::four_player());

    for layout in &LAYOUTS {
        let forward = layout.color.forward();
        for (i, kind) in layout.pieces.iter().enumerate() {
            let back = layout.start + layout.along * i as i8;
            board.set_piece(back, Some(Piece::new(*kind, layout.color)))?;
            board.set_piece(back + forward, Some(Piece::new(PieceKind::Pawn, layout.color)))?;
        }
    }

    Ok(board)
}

pub fn starting_fen() -> Result<String, ChessErrors> {
    let board = starting_board()?;
    let castling: Vec<(Color, CastlingRights)> =
        Color::ALL.iter().map(|&c| (c, CastlingRights::BOTH)).collect();
    Ok(generate_fen(&board, Color::White, &castling, None, 0, 1))
}
