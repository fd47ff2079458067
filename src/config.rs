//! Game construction options.
//!
//! `GameOptions` is filled either directly or through the string-keyed
//! `set_option`, which is what the command front end forwards.

use serde::{Deserialize, Serialize};

use crate::errors::ChessErrors;
use crate::game_state::chess_types::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    pub variant: Variant,
    /// Fixes the Fischer-random shuffle; `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Start from this position instead of the variant's default.
    #[serde(default)]
    pub initial_fen: Option<String>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { variant: Variant::Standard, seed: None, initial_fen: None }
    }
}

impl GameOptions {
    pub fn new(variant: Variant) -> Self {
        Self { variant, ..Self::default() }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_fen(mut self, fen: impl Into<String>) -> Self {
        self.initial_fen = Some(fen.into());
        self
    }

    /// Option names are case-insensitive. An empty `seed` or `fen` value
    /// clears the option.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let value = value.trim();
        match name.trim().to_ascii_lowercase().as_str() {
            "variant" => {
                self.variant = Variant::parse(value)?;
            }
            "seed" => {
                self.seed = if value.is_empty() {
                    None
                } else {
                    Some(value.parse::<u64>().map_err(|_| ChessErrors::InvalidOptionValue {
                        name: name.to_owned(),
                        value: value.to_owned(),
                    })?)
                };
            }
            "fen" => {
                self.initial_fen = (!value.is_empty()).then(|| value.to_owned());
            }
            _ => return Err(ChessErrors::UnknownOption(name.to_owned())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_option_updates_each_field() {
        let mut options = GameOptions::default();
        options.set_option("Variant", "chess960").unwrap();
        options.set_option("seed", "42").unwrap();
        options.set_option("fen", "4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();

        assert_eq!(options.variant, Variant::FischerRandom);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.initial_fen.as_deref(), Some("4k3/8/8/8/8/8/8/4K3 w - - 0 1"));

        options.set_option("seed", "").unwrap();
        assert_eq!(options.seed, None);
    }

    #[test]
    fn bad_names_and_values_are_rejected() {
        let mut options = GameOptions::default();
        assert_eq!(
            options.set_option("hash", "16"),
            Err(ChessErrors::UnknownOption("hash".to_owned()))
        );
        assert!(matches!(
            options.set_option("seed", "minus one"),
            Err(ChessErrors::InvalidOptionValue { .. })
        ));
        assert!(matches!(options.set_option("variant", "crazyhouse"), Err(ChessErrors::UnknownVariant(_))));
        assert_eq!(options, GameOptions::default());
    }
}
