//! Square-name conversions and coordinate move text.
//!
//! Converts between square names (for example `e4` or `k14`) and board
//! coordinates, and splits coordinate move text such as `e2e4`, `e2-e4` or
//! `a10a11` into a move request.

use crate::board::geometry::BoardGeometry;
use crate::errors::ChessErrors;
use crate::game_state::chess_types::Coord;
use crate::moves::serialized_move::MoveRequest;

#[inline]
pub fn square_to_coord(geometry: &BoardGeometry, name: &str) -> Result<Coord, ChessErrors> {
    geometry
        .parse_square_name(name)
        .ok_or_else(|| ChessErrors::InvalidSquareName(name.to_owned()))
}

#[inline]
pub fn coord_to_square(geometry: &BoardGeometry, coord: Coord) -> Result<String, ChessErrors> {
    geometry
        .square_name(coord)
        .ok_or(ChessErrors::SquareOutsideBoard(coord.x, coord.y))
}

/// Splits `<file><rank>[-]<file><rank>` into its two square names. Square
/// names are not checked against any board here.
pub fn parse_move_text(text: &str) -> Result<MoveRequest, ChessErrors> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    let invalid = || ChessErrors::InvalidSquareName(text.trim().to_owned());

    let split = compact
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_lowercase())
        .map(|(i, _)| i)
        .ok_or_else(invalid)?;
    let (from, to) = compact.split_at(split);

    if !is_square_shape(from) || !is_square_shape(to) {
        return Err(invalid());
    }
    Ok(MoveRequest::new(from, to))
}

fn is_square_shape(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && !chars.as_str().is_empty()
        && chars.all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_conversions_respect_the_board() {
        let two = BoardGeometry::two_player();
        assert_eq!(square_to_coord(&two, "e4").unwrap(), Coord::new(4, 3));
        assert_eq!(coord_to_square(&two, Coord::new(7, 7)).unwrap(), "h8");
        assert!(square_to_coord(&two, "k1").is_err());

        let four = BoardGeometry::four_player();
        assert_eq!(square_to_coord(&four, "k14").unwrap(), Coord::new(10, 13));
        assert_eq!(
            coord_to_square(&four, Coord::new(0, 0)),
            Err(ChessErrors::SquareOutsideBoard(0, 0))
        );
    }

    #[test]
    fn move_text_accepts_common_spellings() {
        assert_eq!(parse_move_text("e2e4").unwrap(), MoveRequest::new("e2", "e4"));
        assert_eq!(parse_move_text("e2-e4").unwrap(), MoveRequest::new("e2", "e4"));
        assert_eq!(parse_move_text(" g1 f3 ").unwrap(), MoveRequest::new("g1", "f3"));
        assert_eq!(parse_move_text("a10a11").unwrap(), MoveRequest::new("a10", "a11"));
        assert!(parse_move_text("e2").is_err());
        assert!(parse_move_text("ee4").is_err());
        assert!(parse_move_text("e2e4x").is_err());
    }
}
