//! Core value types shared by the board, move model and game controller.
//!
//! Seats are identified by `Color`; every seat carries an intrinsic forward
//! direction so pawn geometry can be derived without knowing the variant.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::ChessErrors;

/// Seat colour. Two-player games use `White` and `Black`; four-player games
/// seat all four in turn order `White, Silver, Black, Gold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Silver,
    Black,
    Gold,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::White, Color::Silver, Color::Black, Color::Gold];

    /// Single-letter seat code used in position notation and serialized pieces.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Silver => 's',
            Color::Black => 'b',
            Color::Gold => 'g',
        }
    }

    #[inline]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Color::White),
            's' => Some(Color::Silver),
            'b' => Some(Color::Black),
            'g' => Some(Color::Gold),
            _ => None,
        }
    }

    /// Direction in which this seat's pawns advance.
    #[inline]
    pub const fn forward(self) -> Coord {
        match self {
            Color::White => Coord::UP,
            Color::Silver => Coord::RIGHT,
            Color::Black => Coord::DOWN,
            Color::Gold => Coord::LEFT,
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Color::White => "Whites",
            Color::Silver => "Silvers",
            Color::Black => "Blacks",
            Color::Gold => "Golds",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Piece kind (colour is kept separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase notation letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Accepts either case.
    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// A piece currently giving check, with the square it attacks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attacker {
    pub piece: Piece,
    pub square: Coord,
}

/// Integer board coordinates. `x` indexes files, `y` indexes ranks; the
/// same type doubles as a direction vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const UP: Coord = Coord::new(0, 1);
    pub const DOWN: Coord = Coord::new(0, -1);
    pub const RIGHT: Coord = Coord::new(1, 0);
    pub const LEFT: Coord = Coord::new(-1, 0);

    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Quarter turn clockwise.
    #[inline]
    pub const fn rotate_clockwise(self) -> Self {
        Self::new(self.y, -self.x)
    }

    #[inline]
    pub fn is_orthogonal(self) -> bool {
        (self.x == 0) != (self.y == 0)
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.x != 0 && self.x.abs() == self.y.abs()
    }
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Coord;
    fn neg(self) -> Coord {
        Coord::new(-self.x, -self.y)
    }
}

impl Mul<i8> for Coord {
    type Output = Coord;
    fn mul(self, rhs: i8) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

pub const ROOK_DIRECTIONS: [Coord; 4] = [Coord::UP, Coord::RIGHT, Coord::DOWN, Coord::LEFT];

pub const BISHOP_DIRECTIONS: [Coord; 4] = [
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
    Coord::new(-1, 1),
];

pub const QUEEN_DIRECTIONS: [Coord; 8] = [
    Coord::UP,
    Coord::new(1, 1),
    Coord::RIGHT,
    Coord::new(1, -1),
    Coord::DOWN,
    Coord::new(-1, -1),
    Coord::LEFT,
    Coord::new(-1, 1),
];

pub const KNIGHT_OFFSETS: [Coord; 8] = [
    Coord::new(1, 2),
    Coord::new(2, 1),
    Coord::new(2, -1),
    Coord::new(1, -2),
    Coord::new(-1, -2),
    Coord::new(-2, -1),
    Coord::new(-2, 1),
    Coord::new(-1, 2),
];

/// Game variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    Standard,
    FischerRandom,
    FourPlayer,
}

impl Variant {
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::FischerRandom => "fischer-random",
            Variant::FourPlayer => "four-player",
        }
    }

    pub fn parse(name: &str) -> Result<Self, ChessErrors> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" | "" => Ok(Variant::Standard),
            "fischer-random" | "fischerrandom" | "chess960" => Ok(Variant::FischerRandom),
            "four-player" | "fourplayer" => Ok(Variant::FourPlayer),
            other => Err(ChessErrors::UnknownVariant(other.to_owned())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl CastlingSide {
    /// Distance from the king's home square to the castling rook.
    #[inline]
    pub const fn rook_gap(self) -> i8 {
        match self {
            CastlingSide::Kingside => 3,
            CastlingSide::Queenside => 4,
        }
    }
}

/// Per-seat castling eligibility. Rights are only ever cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights { kingside: false, queenside: false };
    pub const BOTH: CastlingRights = CastlingRights { kingside: true, queenside: true };

    #[inline]
    pub fn has(&self, side: CastlingSide) -> bool {
        match side {
            CastlingSide::Kingside => self.kingside,
            CastlingSide::Queenside => self.queenside,
        }
    }

    #[inline]
    pub fn clear(&mut self, side: CastlingSide) {
        match side {
            CastlingSide::Kingside => self.kingside = false,
            CastlingSide::Queenside => self.queenside = false,
        }
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.kingside || self.queenside
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::BOTH
    }
}
