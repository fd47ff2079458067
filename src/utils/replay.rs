//! Replay records.
//!
//! A record is everything needed to rebuild a game bit for bit: the variant,
//! the starting notation when it cannot be derived from the variant, and the
//! ordered `(from, to)` pairs.

use serde::{Deserialize, Serialize};

use crate::errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Variant;
use crate::game_state::game_state::GameState;
use crate::moves::serialized_move::MoveRequest;
use crate::variants::four_player;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub variant: Variant,
    #[serde(default)]
    pub initial_fen: Option<String>,
    #[serde(default)]
    pub moves: Vec<MoveRequest>,
}

impl GameRecord {
    /// Fischer-random records and games started from a custom position
    /// always carry their initial notation.
    pub fn from_game(game: &GameState) -> Self {
        let initial = game.fen_position_at(0).unwrap_or_default().to_owned();
        let is_default_start = match game.variant() {
            Variant::Standard => initial == STARTING_POSITION_FEN,
            Variant::FourPlayer => four_player::starting_fen().is_ok_and(|fen| fen == initial),
            Variant::FischerRandom => false,
        };

        Self {
            variant: game.variant(),
            initial_fen: (!is_default_start).then_some(initial),
            moves: game
                .history()
                .iter()
                .filter_map(|entry| entry.mv.as_ref().map(MoveRequest::from))
                .collect(),
        }
    }

    pub fn replay(&self) -> Result<GameState, ChessErrors> {
        let mut game = match (&self.initial_fen, self.variant) {
            (Some(fen), variant) => GameState::from_variant_fen(variant, fen)?,
            (None, Variant::Standard) => GameState::new_game()?,
            (None, Variant::FourPlayer) => GameState::four_player()?,
            (None, Variant::FischerRandom) => {
                return Err(ChessErrors::MissingInitialPosition(Variant::FischerRandom))
            }
        };

        for request in &self.moves {
            game.try_move(&request.from, &request.to)?;
        }
        Ok(game)
    }

    pub fn to_json(&self) -> Result<String, ChessErrors> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ChessErrors> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn standard_record_omits_the_initial_position() {
        let mut game = GameState::new_game().unwrap();
        game.try_move("d2", "d4").unwrap();
        game.try_move("d7", "d5").unwrap();

        let record = game.to_record();
        assert_eq!(record.initial_fen, None);
        assert_eq!(record.moves, vec![MoveRequest::new("d2", "d4"), MoveRequest::new("d7", "d5")]);

        let replayed = GameState::replay(&record).unwrap();
        assert_eq!(replayed.fen(), game.fen());
        assert_eq!(replayed.legal_moves(), game.legal_moves());
    }

    #[test]
    fn fischer_random_needs_its_initial_position() {
        let mut game = GameState::fischer_random(&mut StdRng::seed_from_u64(11)).unwrap();
        let (from, to) = game.legal_move_pairs()[0].clone();
        game.try_move(&from, &to).unwrap();

        let record = game.to_record();
        assert!(record.initial_fen.is_some());
        assert_eq!(GameState::replay(&record).unwrap().fen(), game.fen());

        let stripped = GameRecord { initial_fen: None, ..record };
        assert_eq!(
            stripped.replay().unwrap_err(),
            ChessErrors::MissingInitialPosition(Variant::FischerRandom)
        );
    }

    #[test]
    fn json_shape_uses_camel_case() {
        let record = GameRecord {
            variant: Variant::FourPlayer,
            initial_fen: None,
            moves: vec![MoveRequest::new("h2", "h4")],
        };
        let json = record.to_json().unwrap();
        assert_eq!(json, r#"{"variant":"four-player","initialFen":null,"moves":[{"from":"h2","to":"h4"}]}"#);
        assert_eq!(GameRecord::from_json(&json).unwrap(), record);
        assert!(matches!(GameRecord::from_json("{"), Err(ChessErrors::Serialization(_))));
    }
}
