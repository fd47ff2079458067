use crate::game_state::chess_types::{Color, Coord, Piece};

/// One addressable cell of a board. The board owns its squares; a square owns
/// the piece value standing on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub name: String,
    pub coord: Coord,
    pub piece: Option<Piece>,
}

impl Square {
    pub fn new(name: String, coord: Coord) -> Self {
        Self { name, coord, piece: None }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline]
    pub fn is_occupied_by_ally(&self, color: Color) -> bool {
        matches!(self.piece, Some(p) if p.color == color)
    }
}
