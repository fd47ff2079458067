//! Position-notation encoder for both board topologies.
//!
//! Two-player rows use single letters (uppercase = first seat); four-player
//! rows use a seat prefix plus the uppercase piece letter. Empty squares and
//! removed corner squares collapse into run-length counts.

use crate::board::chessboard::Chessboard;
use crate::board::geometry::Topology;
use crate::game_state::chess_types::{CastlingRights, Color, Coord, Piece};

/// Full notation string from its parts.
pub fn generate_fen(
    board: &Chessboard,
    active: Color,
    castling: &[(Color, CastlingRights)],
    en_passant: Option<&str>,
    halfmove_clock: u32,
    fullmove_number: u32,
) -> String {
    format!(
        "{} {} {} {} {} {}",
        generate_board_field(board),
        active.code(),
        generate_castling_field(board.geometry().topology, castling),
        en_passant.unwrap_or("-"),
        halfmove_clock,
        fullmove_number
    )
}

/// Rows from the highest rank down, separated by `/`.
pub fn generate_board_field(board: &Chessboard) -> String {
    let geometry = board.geometry();
    let mut rows = Vec::with_capacity(geometry.height() as usize);

    for y in (0..geometry.height()).rev() {
        let mut row = String::new();
        let mut empty_count = 0u32;

        for x in 0..geometry.width() {
            match board.piece_at(Coord::new(x, y)) {
                Some(piece) => {
                    if empty_count > 0 {
                        row.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    push_piece_code(&mut row, geometry.topology, piece);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            row.push_str(&empty_count.to_string());
        }
        rows.push(row);
    }

    rows.join("/")
}

pub fn push_piece_code(out: &mut String, topology: Topology, piece: Piece) {
    let letter = piece.kind.letter();
    match topology {
        Topology::TwoPlayer => {
            if piece.color == Color::White {
                out.push(letter.to_ascii_uppercase());
            } else {
                out.push(letter);
            }
        }
        Topology::FourPlayer => {
            out.push(piece.color.code());
            out.push(letter.to_ascii_uppercase());
        }
    }
}

/// `KQkq` subset for two players, seat-prefixed groups for four; `-` if empty.
pub fn generate_castling_field(topology: Topology, castling: &[(Color, CastlingRights)]) -> String {
    let mut out = String::new();

    for (color, rights) in castling {
        if !rights.any() {
            continue;
        }
        match topology {
            Topology::TwoPlayer => {
                let mut group = String::new();
                if rights.kingside {
                    group.push('K');
                }
                if rights.queenside {
                    group.push('Q');
                }
                if *color == Color::White {
                    out.push_str(&group);
                } else {
                    out.push_str(&group.to_ascii_lowercase());
                }
            }
            Topology::FourPlayer => {
                out.push(color.code());
                if rights.kingside {
                    out.push('K');
                }
                if rights.queenside {
                    out.push('Q');
                }
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}
