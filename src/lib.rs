//! Crate root module declarations for the Prime Chess rules engine.
//!
//! This file exposes the board model, move model, per-seat player state,
//! legal move generation, variant setup, the game controller and the
//! notation/replay utilities so binaries, tests, and the surrounding network
//! layer can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod history;
}

pub mod board {
    pub mod chessboard;
    pub mod geometry;
    pub mod square;
}

pub mod moves {
    pub mod chess_move;
    pub mod serialized_move;
}

pub mod players {
    pub mod player;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod variants {
    pub mod fischer_random;
    pub mod four_player;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_store;
    pub mod pgn;
    pub mod render_game_state;
    pub mod replay;
}

pub use errors::ChessErrors;
pub use game_state::game_state::GameState;
