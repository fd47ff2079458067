//! Strict position-notation parser.
//!
//! Every field is validated structurally before anything is placed on a
//! board, and only canonical spellings are accepted, so encoding a parsed
//! position always reproduces the input string.

use crate::board::chessboard::Chessboard;
use crate::board::geometry::{BoardGeometry, Topology};
use crate::errors::ChessErrors;
use crate::game_state::chess_types::{CastlingRights, Color, Coord, Piece, PieceKind};
use crate::utils::fen_generator::generate_castling_field;

/// Decoded contents of a position notation string.
#[derive(Debug, Clone)]
pub struct ParsedPosition {
    pub board: Chessboard,
    pub active: Color,
    /// One entry per seat of the geometry, in seat order.
    pub castling: Vec<(Color, CastlingRights)>,
    pub en_passant: Option<Coord>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

fn invalid(reason: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidNotation(reason.into())
}

pub fn parse_fen(geometry: &BoardGeometry, fen: &str) -> Result<ParsedPosition, ChessErrors> {
    if fen.split(' ').any(str::is_empty) {
        return Err(invalid("fields must be separated by single spaces"));
    }
    let mut parts = fen.split(' ');

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing active seat"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant target"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board_field(geometry, board_part)?;
    let active = parse_active_seat(geometry, side_part)?;
    let castling = parse_castling_field(geometry, castling_part)?;
    let en_passant = parse_en_passant_field(geometry, en_passant_part)?;
    let halfmove_clock = parse_counter("halfmove clock", halfmove_part)?;
    let fullmove_number = parse_counter("fullmove number", fullmove_part)?;

    Ok(ParsedPosition { board, active, castling, en_passant, halfmove_clock, fullmove_number })
}

/// Decodes the board field only.
pub fn parse_board_field(geometry: &BoardGeometry, field: &str) -> Result<Chessboard, ChessErrors> {
    let rows: Vec<&str> = field.split('/').collect();
    if rows.len() != geometry.height() as usize {
        return Err(invalid(format!(
            "board layout must contain {} rows, found {}",
            geometry.height(),
            rows.len()
        )));
    }

    let mut board = Chessboard::new(geometry.clone());

    for (row_index, row) in rows.iter().enumerate() {
        let y = geometry.height() - 1 - row_index as i8;
        let mut x: i32 = 0;
        let mut chars = row.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                if ch == '0' {
                    return Err(invalid(format!("empty run may not start with 0 in row '{row}'")));
                }
                let mut run = ch.to_digit(10).unwrap_or(0);
                while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                    run = run * 10 + next;
                    chars.next();
                    if run > geometry.width() as u32 {
                        break;
                    }
                }
                x += run as i32;
                if x > geometry.width() as i32 {
                    return Err(invalid(format!("row '{row}' has too many files")));
                }
                continue;
            }

            let piece = match geometry.topology {
                Topology::TwoPlayer => two_player_piece(ch)
                    .ok_or_else(|| invalid(format!("invalid piece character '{ch}'")))?,
                Topology::FourPlayer => {
                    let letter = chars
                        .next()
                        .ok_or_else(|| invalid(format!("seat '{ch}' without piece letter")))?;
                    four_player_piece(geometry, ch, letter)
                        .ok_or_else(|| invalid(format!("invalid piece code '{ch}{letter}'")))?
                }
            };

            if x >= geometry.width() as i32 {
                return Err(invalid(format!("row '{row}' has too many files")));
            }
            let coord = Coord::new(x as i8, y);
            if !geometry.contains(coord) {
                return Err(invalid(format!("piece placed on a missing square in row '{row}'")));
            }
            board.set_piece(coord, Some(piece))?;
            x += 1;
        }

        if x != geometry.width() as i32 {
            return Err(invalid(format!(
                "row '{row}' covers {x} files instead of {}",
                geometry.width()
            )));
        }
    }

    Ok(board)
}

fn two_player_piece(ch: char) -> Option<Piece> {
    let kind = PieceKind::from_letter(ch)?;
    let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
    Some(Piece::new(kind, color))
}

fn four_player_piece(geometry: &BoardGeometry, seat: char, letter: char) -> Option<Piece> {
    let color = Color::from_code(seat)?;
    if !letter.is_ascii_uppercase() || !is_seat_of(geometry, color) {
        return None;
    }
    Some(Piece::new(PieceKind::from_letter(letter)?, color))
}

fn is_seat_of(geometry: &BoardGeometry, color: Color) -> bool {
    geometry.seats().iter().any(|s| s.color == color)
}

fn parse_active_seat(geometry: &BoardGeometry, field: &str) -> Result<Color, ChessErrors> {
    let mut chars = field.chars();
    match (chars.next().and_then(Color::from_code), chars.next()) {
        (Some(color), None) if is_seat_of(geometry, color) => Ok(color),
        _ => Err(invalid(format!("invalid active seat: {field}"))),
    }
}

fn parse_castling_field(
    geometry: &BoardGeometry,
    field: &str,
) -> Result<Vec<(Color, CastlingRights)>, ChessErrors> {
    let mut castling: Vec<(Color, CastlingRights)> = geometry
        .seats()
        .iter()
        .map(|s| (s.color, CastlingRights::NONE))
        .collect();

    if field != "-" {
        let mut current: Option<usize> = None;
        for ch in field.chars() {
            let (seat, side_char) = match geometry.topology {
                Topology::TwoPlayer => match ch {
                    'K' | 'Q' => (Color::White, ch),
                    'k' | 'q' => (Color::Black, ch.to_ascii_uppercase()),
                    _ => return Err(invalid(format!("invalid castling character: {ch}"))),
                },
                Topology::FourPlayer => {
                    if let Some(color) = Color::from_code(ch) {
                        current = castling.iter().position(|(c, _)| *c == color);
                        if current.is_none() {
                            return Err(invalid(format!("unknown castling seat: {ch}")));
                        }
                        continue;
                    }
                    let index = current
                        .ok_or_else(|| invalid(format!("castling side '{ch}' without seat")))?;
                    (castling[index].0, ch)
                }
            };

            let entry = castling
                .iter_mut()
                .find(|(c, _)| *c == seat)
                .ok_or_else(|| invalid(format!("unknown castling seat for '{ch}'")))?;
            match side_char {
                'K' => entry.1.kingside = true,
                'Q' => entry.1.queenside = true,
                _ => return Err(invalid(format!("invalid castling character: {ch}"))),
            }
        }
    }

    if generate_castling_field(geometry.topology, &castling) != field {
        return Err(invalid(format!("non-canonical castling field: {field}")));
    }

    Ok(castling)
}

fn parse_en_passant_field(geometry: &BoardGeometry, field: &str) -> Result<Option<Coord>, ChessErrors> {
    if field == "-" {
        return Ok(None);
    }
    geometry
        .parse_square_name(field)
        .map(Some)
        .ok_or_else(|| invalid(format!("invalid en-passant square: {field}")))
}

fn parse_counter(label: &str, field: &str) -> Result<u32, ChessErrors> {
    let value = field
        .parse::<u32>()
        .map_err(|_| invalid(format!("invalid {label}: {field}")))?;
    if value.to_string() != field {
        return Err(invalid(format!("non-canonical {label}: {field}")));
    }
    Ok(value)
}
