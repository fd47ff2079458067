//! Square-based board shared by every topology.
//!
//! The board owns one `Square` per existing coordinate and indexes them both
//! by coordinate and by name. Pieces are moved in place by `apply` / `revert`;
//! the board keeps no history of its own.

use std::collections::HashMap;

use crate::board::geometry::BoardGeometry;
use crate::board::square::Square;
use crate::errors::ChessErrors;
use crate::game_state::chess_types::{Color, Coord, Piece, PieceKind};
use crate::moves::chess_move::{ChessMove, MoveVector};
use crate::utils::fen_generator::generate_board_field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chessboard {
    geometry: BoardGeometry,
    squares: Vec<Square>,
    /// Row-major `width * height` grid of indices into `squares`.
    grid: Vec<Option<usize>>,
    by_name: HashMap<String, usize>,
}

impl Chessboard {
    /// Builds an empty board for `geometry`.
    pub fn new(geometry: BoardGeometry) -> Self {
        let width = geometry.width() as usize;
        let height = geometry.height() as usize;
        let mut squares = Vec::new();
        let mut grid = vec![None; width * height];
        let mut by_name = HashMap::new();

        for y in 0..geometry.height() {
            for x in 0..geometry.width() {
                let coord = Coord::new(x, y);
                if let Some(name) = geometry.square_name(coord) {
                    grid[y as usize * width + x as usize] = Some(squares.len());
                    by_name.insert(name.clone(), squares.len());
                    squares.push(Square::new(name, coord));
                }
            }
        }

        Self { geometry, squares, grid, by_name }
    }

    #[inline]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        if !self.geometry.contains(coord) {
            return None;
        }
        self.grid[coord.y as usize * self.geometry.width() as usize + coord.x as usize]
    }

    pub fn square_at_name(&self, name: &str) -> Option<&Square> {
        self.by_name.get(name).map(|&i| &self.squares[i])
    }

    /// Bounds-checked lookup; `None` outside the grid or on a removed corner.
    pub fn square_at(&self, coord: Coord) -> Option<&Square> {
        self.index_of(coord).map(|i| &self.squares[i])
    }

    pub fn square_in_direction(&self, from: Coord, direction: Coord, gap: i8) -> Option<&Square> {
        self.square_at(from + direction * gap)
    }

    pub fn coord_of(&self, name: &str) -> Result<Coord, ChessErrors> {
        self.square_at_name(name)
            .map(|s| s.coord)
            .ok_or_else(|| ChessErrors::InvalidSquareName(name.to_owned()))
    }

    pub fn square_name(&self, coord: Coord) -> Result<&str, ChessErrors> {
        self.square_at(coord)
            .map(|s| s.name.as_str())
            .ok_or(ChessErrors::SquareOutsideBoard(coord.x, coord.y))
    }

    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.square_at(coord).and_then(|s| s.piece)
    }

    pub fn piece_at_or_err(&self, coord: Coord) -> Result<Piece, ChessErrors> {
        let square = self
            .square_at(coord)
            .ok_or(ChessErrors::SquareOutsideBoard(coord.x, coord.y))?;
        square.piece.ok_or_else(|| ChessErrors::EmptySquare(square.name.clone()))
    }

    pub fn set_piece(&mut self, coord: Coord, piece: Option<Piece>) -> Result<(), ChessErrors> {
        let i = self
            .index_of(coord)
            .ok_or(ChessErrors::SquareOutsideBoard(coord.x, coord.y))?;
        self.squares[i].piece = piece;
        Ok(())
    }

    fn take_piece(&mut self, coord: Coord) -> Result<Piece, ChessErrors> {
        let piece = self.piece_at_or_err(coord)?;
        self.set_piece(coord, None)?;
        Ok(piece)
    }

    fn displace(&mut self, vector: MoveVector) -> Result<Piece, ChessErrors> {
        let piece = self.take_piece(vector.from)?;
        self.set_piece(vector.to, Some(piece))?;
        Ok(piece)
    }

    /// Squares holding a piece of `color`.
    pub fn occupied_by(&self, color: Color) -> Vec<Coord> {
        self.squares
            .iter()
            .filter(|s| s.is_occupied_by_ally(color))
            .map(|s| s.coord)
            .collect()
    }

    pub fn find_kings(&self, color: Color) -> Vec<Coord> {
        self.squares
            .iter()
            .filter(|s| s.piece == Some(Piece::new(PieceKind::King, color)))
            .map(|s| s.coord)
            .collect()
    }

    /// Mutates occupancy to the position after `mv`.
    pub fn apply(&mut self, mv: &ChessMove) -> Result<(), ChessErrors> {
        match *mv {
            ChessMove::Quiet(vector) | ChessMove::Capture { vector, .. } => {
                self.displace(vector)?;
            }
            ChessMove::EnPassant { vector, capture_square, .. } => {
                self.displace(vector)?;
                self.set_piece(capture_square, None)?;
            }
            ChessMove::Castling { vector, rook, .. } => {
                self.displace(vector)?;
                self.displace(rook)?;
            }
            ChessMove::Promotion { vector, .. } => {
                let pawn = self.take_piece(vector.from)?;
                self.set_piece(vector.to, Some(Piece::new(PieceKind::Queen, pawn.color)))?;
            }
        }
        Ok(())
    }

    /// Exact inverse of `apply`.
    pub fn revert(&mut self, mv: &ChessMove) -> Result<(), ChessErrors> {
        match *mv {
            ChessMove::Quiet(vector) => {
                self.displace(MoveVector::new(vector.to, vector.from))?;
            }
            ChessMove::Capture { vector, captured } => {
                self.displace(MoveVector::new(vector.to, vector.from))?;
                self.set_piece(vector.to, Some(captured))?;
            }
            ChessMove::EnPassant { vector, capture_square, captured } => {
                self.displace(MoveVector::new(vector.to, vector.from))?;
                self.set_piece(capture_square, Some(captured))?;
            }
            ChessMove::Castling { vector, rook, .. } => {
                self.displace(MoveVector::new(rook.to, rook.from))?;
                self.displace(MoveVector::new(vector.to, vector.from))?;
            }
            ChessMove::Promotion { vector, captured } => {
                let queen = self.take_piece(vector.to)?;
                self.set_piece(vector.from, Some(Piece::new(PieceKind::Pawn, queen.color)))?;
                self.set_piece(vector.to, captured)?;
            }
        }
        Ok(())
    }

    /// Board field of the position notation.
    pub fn to_notation_row(&self) -> String {
        generate_board_field(self)
    }
}
