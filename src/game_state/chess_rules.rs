//! Canonical chess-rule constants.
//!
//! Static rule literals: starting positions for each topology and the
//! standard back-rank piece set used by the Fischer-random shuffle.

/// Standard chess starting position.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Four-player starting position on the 14x14 cross board. Rows are listed
/// from rank 14 down to rank 1; the 3x3 corners are encoded as empty runs.
pub const FOUR_PLAYER_STARTING_FEN: &str = concat!(
    "3bRbNbBbKbQbBbNbR3/",
    "3bPbPbPbPbPbPbPbP3/",
    "14/",
    "sRsP10gPgR/",
    "sNsP10gPgN/",
    "sBsP10gPgB/",
    "sQsP10gPgK/",
    "sKsP10gPgQ/",
    "sBsP10gPgB/",
    "sNsP10gPgN/",
    "sRsP10gPgR/",
    "14/",
    "3wPwPwPwPwPwPwPwP3/",
    "3wRwNwBwQwKwBwNwR3",
    " w wKQsKQbKQgKQ - 0 1"
);

/// Back-rank piece set shuffled by the Fischer-random initializer.
pub const STANDARD_BACK_RANK: &str = "rnbqkbnr";
