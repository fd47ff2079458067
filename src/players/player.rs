//! Per-seat player state.
//!
//! A `Player` only references its king by coordinate; the board owns the
//! piece. The controller keeps `king_square` current whenever the king moves
//! or a move is cancelled.

use crate::board::geometry::SeatGeometry;
use crate::game_state::chess_types::{Attacker, CastlingRights, CastlingSide, Color, Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub color: Color,
    /// Pawn advance direction.
    pub forward: Coord,
    /// Direction the king travels when castling kingside.
    pub kingside: Coord,
    pub castling_rights: CastlingRights,
    pub king_square: Option<Coord>,
    /// Set while this seat is to move and in check.
    pub checked_by: Option<Attacker>,
}

impl Player {
    pub fn new(seat: SeatGeometry, castling_rights: CastlingRights, king_square: Option<Coord>) -> Self {
        Self {
            color: seat.color,
            forward: seat.forward,
            kingside: seat.kingside,
            castling_rights,
            king_square,
            checked_by: None,
        }
    }

    #[inline]
    pub fn is_checked(&self) -> bool {
        self.checked_by.is_some()
    }

    pub fn castling_direction(&self, side: CastlingSide) -> Coord {
        match side {
            CastlingSide::Kingside => self.kingside,
            CastlingSide::Queenside => -self.kingside,
        }
    }

    /// Where the castling rook for `side` must stand while rights are held.
    pub fn castling_rook_home(&self, side: CastlingSide) -> Option<Coord> {
        let king = self.king_square?;
        Some(king + self.castling_direction(side) * side.rook_gap())
    }

    pub fn clear_castling_rights(&mut self) {
        self.castling_rights = CastlingRights::NONE;
    }

    /// Copy of this player with the king reference moved to `square`.
    pub fn with_king_at(&self, square: Coord) -> Self {
        Self { king_square: Some(square), ..*self }
    }
}
