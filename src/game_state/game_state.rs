//! Game controller.
//!
//! `GameState` ties the board, the seats and the legality calculator
//! together. The only transitions are `try_move` and `cancel_last_move`;
//! after each one the active seat's check flag, the legal-moves map and the
//! game-over fields are recomputed, so none of them is ever read stale.
//!
//! Only the seat to move carries a check flag. The mover's flag is cleared
//! when it commits and recomputed for it when its move is cancelled.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::chessboard::Chessboard;
use crate::board::geometry::BoardGeometry;
use crate::config::GameOptions;
use crate::errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Attacker, CastlingRights, CastlingSide, Color, Coord, Piece, PieceKind, Variant};
use crate::game_state::history::HistoryEntry;
use crate::move_generation::legal_move_checks::is_checked;
use crate::move_generation::legal_move_generator::{
    calculate_legal_moves, count_legal_moves, serialize_legal_moves, LegalMoves,
};
use crate::move_generation::legal_move_shared::EnPassantTarget;
use crate::moves::chess_move::ChessMove;
use crate::moves::serialized_move::{SerializedLegalMoves, SerializedMove};
use crate::players::player::Player;
use crate::utils::fen_generator::{generate_castling_field, generate_fen};
use crate::utils::fen_parser::{parse_fen, ParsedPosition};
use crate::utils::replay::GameRecord;
use crate::variants::fischer_random::fischer_random_fen;
use crate::variants::four_player;

/// Typed view over the game-over fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    /// The seat to move is checked and has no legal move. `winner_seat` is
    /// the seat owning the checking piece.
    Checkmate { winner_seat: Color, attacker: Attacker },
    /// The seat to move is not checked and has no legal move.
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameState {
    variant: Variant,
    board: Chessboard,
    /// Seats in turn order.
    players: Vec<Player>,
    active: usize,
    en_passant: Option<EnPassantTarget>,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<HistoryEntry>,
    /// Moves committed so far, parallel to `history[1..]`.
    applied: Vec<ChessMove>,
    legal_moves: LegalMoves,
    game_over: bool,
    checkmate_piece: Option<Attacker>,
}

impl GameState {
    /// Standard starting position.
    pub fn new_game() -> Result<Self, ChessErrors> {
        Self::from_variant_fen(Variant::Standard, STARTING_POSITION_FEN)
    }

    pub fn fischer_random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, ChessErrors> {
        Self::from_variant_fen(Variant::FischerRandom, &fischer_random_fen(rng))
    }

    pub fn four_player() -> Result<Self, ChessErrors> {
        Self::from_variant_fen(Variant::FourPlayer, &four_player::starting_fen()?)
    }

    /// Builds a game from notation, inferring the topology from the row
    /// count: 8 rows is a standard game, 14 rows a four-player game.
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let rows = fen
            .split(' ')
            .next()
            .map(|board| board.split('/').count())
            .unwrap_or(0);
        let variant = match rows {
            8 => Variant::Standard,
            14 => Variant::FourPlayer,
            _ => return Err(ChessErrors::InvalidNotation(format!("cannot infer board from {rows} rows"))),
        };
        Self::from_variant_fen(variant, fen)
    }

    pub fn from_variant_fen(variant: Variant, fen: &str) -> Result<Self, ChessErrors> {
        let geometry = BoardGeometry::for_variant(variant);
        let parsed = parse_fen(&geometry, fen)?;
        Self::from_position(variant, parsed)
    }

    pub fn from_options(options: &GameOptions) -> Result<Self, ChessErrors> {
        match (&options.initial_fen, options.variant) {
            (Some(fen), variant) => Self::from_variant_fen(variant, fen),
            (None, Variant::Standard) => Self::new_game(),
            (None, Variant::FischerRandom) => match options.seed {
                Some(seed) => Self::fischer_random(&mut StdRng::seed_from_u64(seed)),
                None => Self::fischer_random(&mut rand::rng()),
            },
            (None, Variant::FourPlayer) => Self::four_player(),
        }
    }

    /// Rebuilds a game by re-playing every recorded move.
    pub fn replay(record: &GameRecord) -> Result<Self, ChessErrors> {
        record.replay()
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord::from_game(self)
    }

    fn from_position(variant: Variant, parsed: ParsedPosition) -> Result<Self, ChessErrors> {
        let ParsedPosition { board, active, castling, en_passant, halfmove_clock, fullmove_number } = parsed;

        let mut players = Vec::new();
        for seat in board.geometry().seats() {
            let king = match board.find_kings(seat.color).as_slice() {
                [] => return Err(ChessErrors::MissingKing(seat.color)),
                [king] => *king,
                _ => return Err(ChessErrors::DuplicateKing(seat.color)),
            };
            let rights = castling
                .iter()
                .find(|(color, _)| *color == seat.color)
                .map_or(CastlingRights::NONE, |(_, rights)| *rights);
            players.push(Player::new(seat, rights, Some(king)));
        }

        let active = seat_index(&players, active)?;
        let en_passant = en_passant.map(|square| en_passant_target(&players, active, square));

        let mut state = Self {
            variant,
            board,
            players,
            active,
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
            applied: Vec::new(),
            legal_moves: LegalMoves::new(),
            game_over: false,
            checkmate_piece: None,
        };
        state.refresh()?;
        state.history.push(HistoryEntry::initial(state.fen()));

        info!("created {} game at {}", variant, state.history[0].fen);
        if state.game_over {
            info!("game starts finished: {:?}", state.outcome());
        }
        Ok(state)
    }

    /// Commits `(from, to)` if it is in the current legal-moves map. A
    /// rejected move leaves the game untouched.
    pub fn try_move(&mut self, from: &str, to: &str) -> Result<SerializedMove, ChessErrors> {
        let Some(mv) = self.legal_move(from, to).copied() else {
            warn!("rejected illegal move {from} -> {to} for {}", self.active_player().color);
            return Err(ChessErrors::IllegalMove { from: from.to_owned(), to: to.to_owned() });
        };

        let mut serialized = mv.serialize(&self.board)?;
        serialized.algebraic = self.algebraic_for(&mv)?;
        let moved = self.board.piece_at_or_err(mv.from())?;
        let mover = self.active;

        self.players[mover].checked_by = None;
        self.board.apply(&mv)?;
        self.update_castling_rights(mover, moved, &mv);
        if moved.kind == PieceKind::King {
            self.players[mover].king_square = Some(mv.to());
        }

        let forward = self.players[mover].forward;
        self.en_passant = (moved.kind == PieceKind::Pawn && mv.to() - mv.from() == forward * 2).then(|| {
            EnPassantTarget { square: mv.from() + forward, pawn: mv.to() }
        });

        if moved.kind == PieceKind::Pawn || mv.captured().is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mover + 1 == self.players.len() {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.active = (mover + 1) % self.players.len();
        self.refresh()?;

        if self.active_player().is_checked() {
            serialized.algebraic.push(if self.game_over { '#' } else { '+' });
        }

        self.applied.push(mv);
        self.history.push(HistoryEntry::after(self.fen(), serialized.clone()));

        debug!(
            "{} played {} ({} legal replies)",
            self.players[mover].color,
            serialized.algebraic,
            count_legal_moves(&self.legal_moves)
        );
        if self.game_over {
            info!("game over: {:?}", self.outcome());
        }

        Ok(serialized)
    }

    /// Undoes the most recent move and returns its history entry. Castling
    /// rights, en passant and clocks are re-read from the restored notation.
    pub fn cancel_last_move(&mut self) -> Result<HistoryEntry, ChessErrors> {
        if self.history.len() <= 1 {
            return Err(ChessErrors::NothingToCancel);
        }
        let (Some(mv), Some(entry)) = (self.applied.pop(), self.history.pop()) else {
            return Err(ChessErrors::NothingToCancel);
        };

        self.board.revert(&mv)?;

        let current = self.history.last().map(|e| e.fen.as_str()).unwrap_or_default();
        let restored = parse_fen(self.board.geometry(), current)?;

        self.players[self.active].checked_by = None;
        self.active = seat_index(&self.players, restored.active)?;
        for player in &mut self.players {
            player.castling_rights = restored
                .castling
                .iter()
                .find(|(color, _)| *color == player.color)
                .map_or(CastlingRights::NONE, |(_, rights)| *rights);
        }
        self.en_passant = restored
            .en_passant
            .map(|square| en_passant_target(&self.players, self.active, square));
        self.halfmove_clock = restored.halfmove_clock;
        self.fullmove_number = restored.fullmove_number;

        let mover = &mut self.players[self.active];
        if self.board.piece_at(mv.from()) == Some(Piece::new(PieceKind::King, mover.color)) {
            mover.king_square = Some(mv.from());
        }

        self.refresh()?;

        debug!(
            "cancelled {} for {}",
            entry.mv.as_ref().map_or("?", |m| m.algebraic.as_str()),
            self.active_player().color
        );
        Ok(entry)
    }

    /// Recomputes the active seat's check flag, legal moves and game-over
    /// state from the current board.
    fn refresh(&mut self) -> Result<(), ChessErrors> {
        let checked_by = is_checked(&self.board, &self.players[self.active]);
        self.players[self.active].checked_by = checked_by;

        let player = self.players[self.active];
        self.legal_moves = calculate_legal_moves(&mut self.board, &player, self.en_passant)?;
        self.game_over = self.legal_moves.is_empty();
        self.checkmate_piece = if self.game_over { checked_by } else { None };
        Ok(())
    }

    /// A king move clears both rights of its seat; a move leaving or a
    /// capture landing on a rook home square clears that side for its owner.
    fn update_castling_rights(&mut self, mover: usize, moved: Piece, mv: &ChessMove) {
        if moved.kind == PieceKind::King {
            self.players[mover].clear_castling_rights();
        }

        let touched = [Some(mv.from()), mv.capture_square()];
        for player in &mut self.players {
            for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
                if !player.castling_rights.has(side) {
                    continue;
                }
                if player.castling_rook_home(side).is_some_and(|home| touched.contains(&Some(home))) {
                    player.castling_rights.clear(side);
                }
            }
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn board(&self) -> &Chessboard {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[inline]
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    #[inline]
    pub fn active_player_index(&self) -> usize {
        self.active
    }

    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    pub fn legal_move(&self, from: &str, to: &str) -> Option<&ChessMove> {
        self.legal_moves.get(from)?.get(to)
    }

    pub fn is_legal_move(&self, from: &str, to: &str) -> bool {
        self.legal_move(from, to).is_some()
    }

    pub fn serialize_legal_moves(&self) -> SerializedLegalMoves {
        serialize_legal_moves(&self.legal_moves)
    }

    /// Algebraic text of a move legal in the current position, qualified by
    /// its origin when another piece of the same kind can reach the same
    /// square.
    pub fn algebraic_for(&self, mv: &ChessMove) -> Result<String, ChessErrors> {
        let kind = self.board.piece_at_or_err(mv.from())?.kind;
        let rivals: Vec<Coord> = self
            .legal_moves
            .values()
            .flat_map(|targets| targets.values())
            .filter(|other| other.to() == mv.to() && other.from() != mv.from())
            .filter(|other| self.board.piece_at(other.from()).is_some_and(|p| p.kind == kind))
            .map(|other| other.from())
            .collect();
        mv.algebraic_among(&self.board, &rivals)
    }

    /// Every legal `(from, to)` pair, ordered by square name.
    pub fn legal_move_pairs(&self) -> Vec<(String, String)> {
        self.legal_moves
            .iter()
            .flat_map(|(from, targets)| targets.keys().map(move |to| (from.clone(), to.clone())))
            .collect()
    }

    /// Algebraic text of every committed move, oldest first.
    pub fn algebraic_moves(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter_map(|entry| entry.mv.as_ref().map(|m| m.algebraic.as_str()))
            .collect()
    }

    /// Current position notation.
    pub fn fen(&self) -> String {
        let castling: Vec<(Color, CastlingRights)> =
            self.players.iter().map(|p| (p.color, p.castling_rights)).collect();
        generate_fen(
            &self.board,
            self.active_player().color,
            &castling,
            self.en_passant_target(),
            self.halfmove_clock,
            self.fullmove_number,
        )
    }

    /// Notation after `index` plies; index 0 is the starting position.
    pub fn fen_position_at(&self, index: usize) -> Option<&str> {
        self.history.get(index).map(|e| e.fen.as_str())
    }

    pub fn castling_rights_field(&self) -> String {
        let castling: Vec<(Color, CastlingRights)> =
            self.players.iter().map(|p| (p.color, p.castling_rights)).collect();
        generate_castling_field(self.board.geometry().topology, &castling)
    }

    pub fn en_passant_target(&self) -> Option<&str> {
        let target = self.en_passant?;
        self.board.square_name(target.square).ok()
    }

    /// Square of the active king when it is in check.
    pub fn checked_square(&self) -> Option<&str> {
        let player = self.active_player();
        player.checked_by?;
        self.board.square_name(player.king_square?).ok()
    }

    /// Move played at ply `index` (0 is the first move).
    pub fn halfmove(&self, index: usize) -> Option<&SerializedMove> {
        self.history.get(index + 1)?.mv.as_ref()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn checkmate_piece(&self) -> Option<Attacker> {
        self.checkmate_piece
    }

    pub fn outcome(&self) -> Outcome {
        match (self.game_over, self.checkmate_piece) {
            (false, _) => Outcome::Ongoing,
            (true, Some(attacker)) => Outcome::Checkmate { winner_seat: attacker.piece.color, attacker },
            (true, None) => Outcome::Stalemate,
        }
    }
}

fn seat_index(players: &[Player], color: Color) -> Result<usize, ChessErrors> {
    players
        .iter()
        .position(|p| p.color == color)
        .ok_or_else(|| ChessErrors::InvalidNotation(format!("{color} is not seated in this game")))
}

/// The double-stepping pawn belongs to the seat that moved just before the
/// active one and stands one step past the target along its forward.
fn en_passant_target(players: &[Player], active: usize, square: Coord) -> EnPassantTarget {
    let previous = (active + players.len() - 1) % players.len();
    EnPassantTarget { square, pawn: square + players[previous].forward }
}
