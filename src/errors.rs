//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type across the crate so it can be
//! propagated with `?` from notation parsing up through game construction
//! and move handling.
//!
//! Usage guidelines:
//! - Input-related variants (`IllegalMove`, `InvalidNotation`,
//!   `InvalidSquareName`, `UnknownVariant`, option errors) are recoverable;
//!   the game they were raised against is left untouched.
//! - Setup variants (`MissingKing`, `DuplicateKing`) abort game construction;
//!   no partially built game is ever handed out.
//! - `EmptySquare` and `SquareOutsideBoard` raised during move application
//!   indicate a move that does not belong to the current position, which is
//!   a logic error in the caller.
//! - `Io` only comes from the command front end; callers stop reading once
//!   their output is gone.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Variant};

/// Unified error type for the rules engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChessErrors {
    /// `(from, to)` is not a key pair of the current legal-moves map.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: String, to: String },

    /// `cancel_last_move` was called with only the initial history entry.
    #[error("no move to cancel")]
    NothingToCancel,

    /// A square name that does not exist on this board.
    #[error("invalid square name: {0}")]
    InvalidSquareName(String),

    /// Coordinates fall outside the board or on a removed corner.
    #[error("square outside board: ({0}, {1})")]
    SquareOutsideBoard(i8, i8),

    /// A move tried to lift a piece from an empty square.
    ///
    /// Payload: the square name.
    #[error("no piece on {0}")]
    EmptySquare(String),

    /// Position notation failed structural validation.
    ///
    /// Payload: human readable reason.
    #[error("invalid position notation: {0}")]
    InvalidNotation(String),

    /// The starting position has no king for a seat.
    #[error("no king found for {0}")]
    MissingKing(Color),

    /// The starting position has more than one king for a seat.
    #[error("two kings found for {0}")]
    DuplicateKing(Color),

    /// A replay record for a randomised variant without its initial position.
    #[error("variant {0} cannot be replayed without an initial position")]
    MissingInitialPosition(Variant),

    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// Game store lookup failed.
    #[error("game not found: {0}")]
    GameNotFound(String),

    /// A thread panicked while holding a game store lock.
    #[error("game store lock poisoned")]
    StorePoisoned,

    /// JSON encoding or decoding of a record failed.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Reading commands or writing replies failed.
    #[error("i/o failed: {0}")]
    Io(String),
}

impl From<std::io::Error> for ChessErrors {
    fn from(err: std::io::Error) -> Self {
        ChessErrors::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ChessErrors {
    fn from(err: serde_json::Error) -> Self {
        ChessErrors::Serialization(err.to_string())
    }
}
