//! Tagged-variant move model.
//!
//! A `ChessMove` is produced by the generators, filtered by the legality
//! calculator, and consumed by the controller. Each variant carries exactly
//! the payload needed to apply and revert it on a `Chessboard`
//! (see `Chessboard::apply` / `Chessboard::revert`).

use crate::board::chessboard::Chessboard;
use crate::errors::ChessErrors;
use crate::game_state::chess_types::{CastlingSide, Coord, Piece, PieceKind};
use crate::moves::serialized_move::{SerializedMove, SerializedPiece};

/// Start and destination of a single piece displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveVector {
    pub from: Coord,
    pub to: Coord,
}

impl MoveVector {
    #[inline]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessMove {
    /// Displacement onto an empty square.
    Quiet(MoveVector),
    /// Displacement onto a square held by an opponent; `captured` is the
    /// snapshot restored on revert.
    Capture { vector: MoveVector, captured: Piece },
    /// Pawn capture where the victim stands on `capture_square`, not on the
    /// destination.
    EnPassant { vector: MoveVector, capture_square: Coord, captured: Piece },
    /// King displacement plus the nested rook displacement.
    Castling { vector: MoveVector, side: CastlingSide, rook: MoveVector },
    /// Pawn reaching its last line; always materializes a queen.
    Promotion { vector: MoveVector, captured: Option<Piece> },
}

impl ChessMove {
    #[inline]
    pub fn vector(&self) -> MoveVector {
        match *self {
            ChessMove::Quiet(vector)
            | ChessMove::Capture { vector, .. }
            | ChessMove::EnPassant { vector, .. }
            | ChessMove::Castling { vector, .. }
            | ChessMove::Promotion { vector, .. } => vector,
        }
    }

    #[inline]
    pub fn from(&self) -> Coord {
        self.vector().from
    }

    #[inline]
    pub fn to(&self) -> Coord {
        self.vector().to
    }

    pub fn captured(&self) -> Option<Piece> {
        match *self {
            ChessMove::Capture { captured, .. } | ChessMove::EnPassant { captured, .. } => Some(captured),
            ChessMove::Promotion { captured, .. } => captured,
            ChessMove::Quiet(_) | ChessMove::Castling { .. } => None,
        }
    }

    /// Square whose occupant is removed by this move, if any.
    pub fn capture_square(&self) -> Option<Coord> {
        match *self {
            ChessMove::Capture { vector, .. } => Some(vector.to),
            ChessMove::EnPassant { capture_square, .. } => Some(capture_square),
            ChessMove::Promotion { vector, captured: Some(_) } => Some(vector.to),
            _ => None,
        }
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        matches!(self, ChessMove::Castling { .. })
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, ChessMove::Promotion { .. })
    }

    /// Short algebraic text. Must be called before the move is applied.
    pub fn algebraic(&self, board: &Chessboard) -> Result<String, ChessErrors> {
        let vector = self.vector();
        let piece = board.piece_at_or_err(vector.from)?;
        let to_name = board.square_name(vector.to)?;

        let text = match *self {
            ChessMove::Castling { side: CastlingSide::Kingside, .. } => "O-O".to_owned(),
            ChessMove::Castling { side: CastlingSide::Queenside, .. } => "O-O-O".to_owned(),
            ChessMove::Quiet(_) | ChessMove::Promotion { captured: None, .. } => {
                format!("{}{}", piece_prefix(piece), to_name)
            }
            ChessMove::Capture { .. } | ChessMove::EnPassant { .. } | ChessMove::Promotion { .. } => {
                if piece.kind == PieceKind::Pawn {
                    format!("{}x{}", board.square_name(vector.from)?, to_name)
                } else {
                    format!("{}x{}", piece_prefix(piece), to_name)
                }
            }
        };

        if self.is_promotion() {
            Ok(format!("{text}=Q"))
        } else {
            Ok(text)
        }
    }

    /// Algebraic text qualified by the origin's file, then rank, then full
    /// square when `rivals` (origins of other pieces of the same kind that
    /// can reach the same destination) would make it ambiguous.
    pub fn algebraic_among(&self, board: &Chessboard, rivals: &[Coord]) -> Result<String, ChessErrors> {
        let text = self.algebraic(board)?;
        let piece = board.piece_at_or_err(self.from())?;
        if rivals.is_empty() || piece.kind == PieceKind::Pawn || self.is_castling() {
            return Ok(text);
        }

        let from = self.from();
        let geometry = board.geometry();
        let qualifier = if rivals.iter().all(|r| r.x != from.x) {
            geometry.files[from.x as usize].as_str()
        } else if rivals.iter().all(|r| r.y != from.y) {
            geometry.ranks[from.y as usize].as_str()
        } else {
            board.square_name(from)?
        };

        // The piece letter is always a single ASCII character.
        let (letter, rest) = text.split_at(1);
        Ok(format!("{letter}{qualifier}{rest}"))
    }

    /// Wire form of the move. Must be called before the move is applied.
    pub fn serialize(&self, board: &Chessboard) -> Result<SerializedMove, ChessErrors> {
        let vector = self.vector();
        let mut out = SerializedMove {
            algebraic: self.algebraic(board)?,
            from_square: board.square_name(vector.from)?.to_owned(),
            to_square: board.square_name(vector.to)?.to_owned(),
            capture_square: None,
            captured_piece: None,
            nested_move: None,
            is_promoting: self.is_promotion(),
        };

        if let (Some(square), Some(piece)) = (self.capture_square(), self.captured()) {
            out.capture_square = Some(board.square_name(square)?.to_owned());
            out.captured_piece = Some(SerializedPiece::from(piece));
        }

        if let ChessMove::Castling { rook, .. } = *self {
            let rook_move = ChessMove::Quiet(rook);
            out.nested_move = Some(Box::new(rook_move.serialize(board)?));
        }

        Ok(out)
    }
}

fn piece_prefix(piece: Piece) -> String {
    match piece.kind {
        PieceKind::Pawn => String::new(),
        kind => kind.letter().to_ascii_uppercase().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_board_field;
    use crate::board::geometry::BoardGeometry;

    fn board(field: &str) -> Chessboard {
        parse_board_field(&BoardGeometry::two_player(), field).expect("board field should parse")
    }

    fn c(name: &str) -> Coord {
        BoardGeometry::two_player().parse_square_name(name).expect("square should exist")
    }

    #[test]
    fn algebraic_text_for_each_variant() {
        let b = board("r3k3/1P6/8/3p4/4P3/8/8/R3K1N1");

        let quiet = ChessMove::Quiet(MoveVector::new(c("g1"), c("f3")));
        assert_eq!(quiet.algebraic(&b).unwrap(), "Nf3");

        let pawn_push = ChessMove::Quiet(MoveVector::new(c("e4"), c("e5")));
        assert_eq!(pawn_push.algebraic(&b).unwrap(), "e5");

        let capture = ChessMove::Capture {
            vector: MoveVector::new(c("e4"), c("d5")),
            captured: Piece::new(PieceKind::Pawn, Color::Black),
        };
        assert_eq!(capture.algebraic(&b).unwrap(), "e4xd5");

        let castle = ChessMove::Castling {
            vector: MoveVector::new(c("e1"), c("c1")),
            side: CastlingSide::Queenside,
            rook: MoveVector::new(c("a1"), c("d1")),
        };
        assert_eq!(castle.algebraic(&b).unwrap(), "O-O-O");

        let promote = ChessMove::Promotion {
            vector: MoveVector::new(c("b7"), c("a8")),
            captured: Some(Piece::new(PieceKind::Rook, Color::Black)),
        };
        assert_eq!(promote.algebraic(&b).unwrap(), "b7xa8=Q");
    }

    #[test]
    fn origin_qualifier_prefers_file_then_rank_then_square() {
        let b = board("4k3/8/8/8/8/Q7/8/Q1Q1K3");
        let to_b2 = |from: &str| ChessMove::Quiet(MoveVector::new(c(from), c("b2")));

        assert_eq!(to_b2("c1").algebraic_among(&b, &[c("a1"), c("a3")]).unwrap(), "Qcb2");
        assert_eq!(to_b2("a3").algebraic_among(&b, &[c("a1"), c("c1")]).unwrap(), "Q3b2");
        assert_eq!(to_b2("a1").algebraic_among(&b, &[c("c1"), c("a3")]).unwrap(), "Qa1b2");
        assert_eq!(to_b2("a1").algebraic_among(&b, &[]).unwrap(), "Qb2");
    }

    #[test]
    fn serialized_castling_carries_nested_rook_move() {
        let b = board("4k3/8/8/8/8/8/8/4K2R");
        let castle = ChessMove::Castling {
            vector: MoveVector::new(c("e1"), c("g1")),
            side: CastlingSide::Kingside,
            rook: MoveVector::new(c("h1"), c("f1")),
        };
        let serialized = castle.serialize(&b).unwrap();
        assert_eq!(serialized.algebraic, "O-O");
        let nested = serialized.nested_move.expect("rook move should be nested");
        assert_eq!(nested.from_square, "h1");
        assert_eq!(nested.to_square, "f1");
        assert_eq!(nested.algebraic, "Rf1");
    }

    #[test]
    fn serialized_en_passant_names_the_victim_square() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3");
        let ep = ChessMove::EnPassant {
            vector: MoveVector::new(c("e5"), c("d6")),
            capture_square: c("d5"),
            captured: Piece::new(PieceKind::Pawn, Color::Black),
        };
        let serialized = ep.serialize(&b).unwrap();
        assert_eq!(serialized.capture_square.as_deref(), Some("d5"));
        assert_eq!(serialized.algebraic, "e5xd6");
        assert!(!serialized.is_promoting);
    }
}
