//! Wire records exchanged with the transport layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, Piece, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedPiece {
    /// Lowercase piece letter.
    pub name: String,
    /// Seat code (`w`, `s`, `b`, `g`).
    pub color: String,
}

impl From<Piece> for SerializedPiece {
    fn from(piece: Piece) -> Self {
        Self {
            name: piece.kind.letter().to_string(),
            color: piece.color.code().to_string(),
        }
    }
}

impl SerializedPiece {
    pub fn to_piece(&self) -> Option<Piece> {
        let kind = PieceKind::from_letter(self.name.chars().next()?)?;
        let color = Color::from_code(self.color.chars().next()?)?;
        Some(Piece::new(kind, color))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedMove {
    pub algebraic: String,
    pub from_square: String,
    pub to_square: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_square: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_piece: Option<SerializedPiece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested_move: Option<Box<SerializedMove>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_promoting: bool,
}

/// Presence-only export of the legal-moves map: from-square → to-square → `true`.
pub type SerializedLegalMoves = BTreeMap<String, BTreeMap<String, bool>>;

/// A `(from, to)` request as sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
}

impl MoveRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

impl From<&SerializedMove> for MoveRequest {
    fn from(mv: &SerializedMove) -> Self {
        Self::new(mv.from_square.clone(), mv.to_square.clone())
    }
}
