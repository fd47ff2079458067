//! Owned registry of live games.
//!
//! Each game sits behind its own `Mutex`, so at most one mutating call runs
//! per game id while different games proceed independently. The outer map is
//! guarded by an `RwLock` and only write-locked to insert or remove games.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use log::info;
use rand::Rng;

use crate::config::GameOptions;
use crate::errors::ChessErrors;
use crate::game_state::game_state::GameState;

/// 128-bit random id rendered as 32 lowercase hex digits.
pub type GameId = String;

#[derive(Debug, Default)]
pub struct GameStore {
    games: RwLock<HashMap<GameId, Mutex<GameState>>>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, options: &GameOptions) -> Result<GameId, ChessErrors> {
        let game = GameState::from_options(options)?;
        let mut games = self.games.write().map_err(|_| poisoned())?;

        let mut id = new_game_id();
        while games.contains_key(&id) {
            id = new_game_id();
        }
        games.insert(id.clone(), Mutex::new(game));

        info!("stored {} game {id}", options.variant);
        Ok(id)
    }

    /// Runs `f` with shared access to one game.
    pub fn with_game<T>(&self, id: &str, f: impl FnOnce(&GameState) -> T) -> Result<T, ChessErrors> {
        let games = self.games.read().map_err(|_| poisoned())?;
        let slot = games.get(id).ok_or_else(|| ChessErrors::GameNotFound(id.to_owned()))?;
        let game = slot.lock().map_err(|_| poisoned())?;
        Ok(f(&game))
    }

    /// Runs `f` as the single writer of one game.
    pub fn with_game_mut<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameState) -> T,
    ) -> Result<T, ChessErrors> {
        let games = self.games.read().map_err(|_| poisoned())?;
        let slot = games.get(id).ok_or_else(|| ChessErrors::GameNotFound(id.to_owned()))?;
        let mut game = slot.lock().map_err(|_| poisoned())?;
        Ok(f(&mut game))
    }

    pub fn remove(&self, id: &str) -> Result<GameState, ChessErrors> {
        let mut games = self.games.write().map_err(|_| poisoned())?;
        let slot = games.remove(id).ok_or_else(|| ChessErrors::GameNotFound(id.to_owned()))?;
        slot.into_inner().map_err(|_| poisoned())
    }

    pub fn len(&self) -> usize {
        self.games.read().map(|games| games.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn new_game_id() -> GameId {
    format!("{:032x}", rand::rng().random::<u128>())
}

fn poisoned() -> ChessErrors {
    ChessErrors::StorePoisoned
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::game_state::chess_types::Variant;

    #[test]
    fn create_play_and_remove() {
        let store = GameStore::new();
        let id = store.create(&GameOptions::default()).unwrap();
        assert_eq!(id.len(), 32);
        assert_eq!(store.len(), 1);

        let played = store.with_game_mut(&id, |game| game.try_move("e2", "e4")).unwrap().unwrap();
        assert_eq!(played.algebraic, "e4");
        let fen = store.with_game(&id, |game| game.fen()).unwrap();
        assert!(fen.contains(" b KQkq e3 "));

        let game = store.remove(&id).unwrap();
        assert_eq!(game.history().len(), 2);
        assert!(store.is_empty());
        assert_eq!(
            store.with_game(&id, |_| ()).unwrap_err(),
            ChessErrors::GameNotFound(id.clone())
        );
    }

    #[test]
    fn writers_on_one_game_are_serialized() {
        let store = Arc::new(GameStore::new());
        let id = store.create(&GameOptions::new(Variant::Standard)).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let id = id.clone();
                thread::spawn(move || store.with_game_mut(&id, |game| game.try_move("g1", "f3").is_ok()).unwrap())
            })
            .collect();

        let successes = handles.into_iter().map(|h| h.join().unwrap()).filter(|ok| *ok).count();
        assert_eq!(successes, 1);
        assert_eq!(store.with_game(&id, |game| game.history().len()).unwrap(), 2);
    }
}
