//! Linear game history.

use serde::{Deserialize, Serialize};

use crate::moves::serialized_move::SerializedMove;

/// One position in the game: the notation reached and the move that reached
/// it. The initial entry carries no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub fen: String,
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub mv: Option<SerializedMove>,
}

impl HistoryEntry {
    pub fn initial(fen: String) -> Self {
        Self { fen, mv: None }
    }

    pub fn after(fen: String, mv: SerializedMove) -> Self {
        Self { fen, mv: Some(mv) }
    }
}
