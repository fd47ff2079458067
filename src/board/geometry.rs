//! Board topology as a configuration value.
//!
//! The two-player rectangle and the four-player cross share all board logic;
//! they differ only in the file/rank lists, which coordinates exist, and how
//! each seat is oriented.

use crate::game_state::chess_types::{Color, Coord, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    TwoPlayer,
    FourPlayer,
}

/// Orientation of one seat: where its pawns advance and which way its king
/// castles short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatGeometry {
    pub color: Color,
    pub forward: Coord,
    pub kingside: Coord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGeometry {
    pub topology: Topology,
    pub files: Vec<String>,
    pub ranks: Vec<String>,
    /// Side length of the square blocks removed from each corner.
    pub corner: i8,
}

impl BoardGeometry {
    pub fn two_player() -> Self {
        Self::build(Topology::TwoPlayer, 8, 0)
    }

    pub fn four_player() -> Self {
        Self::build(Topology::FourPlayer, 14, 3)
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::FourPlayer => Self::four_player(),
            Variant::Standard | Variant::FischerRandom => Self::two_player(),
        }
    }

    fn build(topology: Topology, size: u8, corner: i8) -> Self {
        let files = (0..size).map(|i| char::from(b'a' + i).to_string()).collect();
        let ranks = (1..=size).map(|i| i.to_string()).collect();
        Self { topology, files, ranks, corner }
    }

    #[inline]
    pub fn width(&self) -> i8 {
        self.files.len() as i8
    }

    #[inline]
    pub fn height(&self) -> i8 {
        self.ranks.len() as i8
    }

    /// Adjacency rule: a coordinate exists if it is inside the rectangle and
    /// not inside one of the removed corners.
    pub fn contains(&self, coord: Coord) -> bool {
        if coord.x < 0 || coord.y < 0 || coord.x >= self.width() || coord.y >= self.height() {
            return false;
        }
        if self.corner == 0 {
            return true;
        }
        let in_corner_files = coord.x < self.corner || coord.x >= self.width() - self.corner;
        let in_corner_ranks = coord.y < self.corner || coord.y >= self.height() - self.corner;
        !(in_corner_files && in_corner_ranks)
    }

    pub fn square_name(&self, coord: Coord) -> Option<String> {
        if !self.contains(coord) {
            return None;
        }
        Some(format!("{}{}", self.files[coord.x as usize], self.ranks[coord.y as usize]))
    }

    pub fn parse_square_name(&self, name: &str) -> Option<Coord> {
        let mut chars = name.chars();
        let file = chars.next()?;
        let rank = chars.as_str();
        let x = self.files.iter().position(|f| f.starts_with(file) && f.len() == 1)?;
        let y = self.ranks.iter().position(|r| r == rank)?;
        let coord = Coord::new(x as i8, y as i8);
        self.contains(coord).then_some(coord)
    }

    /// Seats in turn order.
    pub fn seats(&self) -> Vec<SeatGeometry> {
        match self.topology {
            Topology::TwoPlayer => vec![
                SeatGeometry { color: Color::White, forward: Coord::UP, kingside: Coord::RIGHT },
                SeatGeometry { color: Color::Black, forward: Coord::DOWN, kingside: Coord::RIGHT },
            ],
            Topology::FourPlayer => Color::ALL
                .iter()
                .map(|&color| SeatGeometry {
                    color,
                    forward: color.forward(),
                    kingside: color.forward().rotate_clockwise(),
                })
                .collect(),
        }
    }

    /// Distance along `forward` from the seat's back edge.
    fn depth(&self, forward: Coord, coord: Coord) -> i8 {
        match (forward.x, forward.y) {
            (0, 1) => coord.y,
            (0, -1) => self.height() - 1 - coord.y,
            (1, 0) => coord.x,
            _ => self.width() - 1 - coord.x,
        }
    }

    /// True on the line a seat's pawns start from.
    #[inline]
    pub fn is_pawn_home_line(&self, forward: Coord, coord: Coord) -> bool {
        self.depth(forward, coord) == 1
    }

    /// True on the far edge where a seat's pawns promote.
    #[inline]
    pub fn is_last_line(&self, forward: Coord, coord: Coord) -> bool {
        let span = if forward.x == 0 { self.height() } else { self.width() };
        self.depth(forward, coord) == span - 1
    }
}
