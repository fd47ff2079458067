//! Terminal-oriented board renderer.
//!
//! Two-player boards use Unicode chess glyphs. Four-player boards need a
//! seat marker, so every square is two characters wide: the seat code and
//! the uppercase piece letter. Removed corner squares are left blank.

use crate::board::chessboard::Chessboard;
use crate::board::geometry::Topology;
use crate::game_state::chess_types::{Color, Coord, Piece, PieceKind};
use crate::game_state::game_state::GameState;

/// Render the board with file letters below and rank numbers on both sides.
pub fn render_game_state(game_state: &GameState) -> String {
    render_board(game_state.board())
}

pub fn render_board(board: &Chessboard) -> String {
    let geometry = board.geometry();
    let cell = match geometry.topology {
        Topology::TwoPlayer => 1,
        Topology::FourPlayer => 2,
    };
    let label_width = geometry.ranks.iter().map(String::len).max().unwrap_or(1);

    let mut files = " ".repeat(label_width + 1);
    for file in &geometry.files {
        files.push_str(&format!("{file:<cell$} "));
    }
    let files = files.trim_end().to_owned();

    let mut out = String::new();
    out.push_str(&files);
    out.push('\n');

    for y in (0..geometry.height()).rev() {
        let rank = &geometry.ranks[y as usize];
        out.push_str(&format!("{rank:>label_width$} "));

        for x in 0..geometry.width() {
            let coord = Coord::new(x, y);
            let text = match (board.square_at(coord), geometry.topology) {
                (None, _) => " ".repeat(cell),
                (Some(square), Topology::TwoPlayer) => {
                    square.piece.map_or('·', piece_to_unicode).to_string()
                }
                (Some(square), Topology::FourPlayer) => match square.piece {
                    Some(piece) => format!("{}{}", piece.color.code(), piece.kind.letter().to_ascii_uppercase()),
                    None => "··".to_owned(),
                },
            };
            out.push_str(&text);
            out.push(' ');
        }

        out.push_str(rank);
        out.push('\n');
    }

    out.push_str(&files);
    out
}

fn piece_to_unicode(piece: Piece) -> char {
    let light = piece.color == Color::White;
    match (light, piece.kind) {
        (true, PieceKind::Pawn) => '♙',
        (true, PieceKind::Knight) => '♘',
        (true, PieceKind::Bishop) => '♗',
        (true, PieceKind::Rook) => '♖',
        (true, PieceKind::Queen) => '♕',
        (true, PieceKind::King) => '♔',
        (false, PieceKind::Pawn) => '♟',
        (false, PieceKind::Knight) => '♞',
        (false, PieceKind::Bishop) => '♝',
        (false, PieceKind::Rook) => '♜',
        (false, PieceKind::Queen) => '♛',
        (false, PieceKind::King) => '♚',
    }
}
