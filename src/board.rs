use std::fmt;

use log::warn;

use crate::coord::Coord;
use crate::grid::Grid;
use crate::piece::{Piece, PieceKind};


// Result of looking up a square by its label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Occupancy {
    Empty,
    Piece(PieceKind),
    NotASquare,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacementConflict {
    pub square: Coord,
    pub occupant: PieceKind,
}

impl fmt::Display for PlacementConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is already occupied by {}", self.square, self.occupant)
    }
}

// The single source of truth for occupancy. It is created once and then only read:
// validating a move never changes it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Grid,
}

impl Board {
    pub fn new() -> Self { Board { grid: Grid::new() } }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn exists(&self, label: &str) -> bool { self.occupancy(label) != Occupancy::NotASquare }

    pub fn occupant(&self, pos: Coord) -> Option<PieceKind> { self.grid[pos] }

    pub fn occupancy(&self, label: &str) -> Occupancy {
        match Coord::from_algebraic(label) {
            None => Occupancy::NotASquare,
            Some(pos) => match self.grid[pos] {
                None => Occupancy::Empty,
                Some(kind) => Occupancy::Piece(kind),
            },
        }
    }

    pub fn is_free(&self, pos: Coord) -> bool { self.grid[pos].is_none() }

    pub fn place(&mut self, pos: Coord, kind: PieceKind) -> Result<(), PlacementConflict> {
        if let Some(occupant) = self.grid[pos] {
            return Err(PlacementConflict { square: pos, occupant });
        }
        self.grid[pos] = Some(kind);
        Ok(())
    }

    // Creates a piece bound to this board. On conflict the piece is returned unplaced.
    pub fn place_piece(&mut self, kind: PieceKind, pos: Coord) -> Piece {
        match self.place(pos, kind) {
            Ok(()) => Piece::placed(kind, pos),
            Err(conflict) => {
                warn!("Cannot place {kind} on {pos}: {conflict}. The {kind} stays unplaced.");
                Piece::unplaced(kind)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sq(label: &str) -> Coord { Coord::from_algebraic(label).unwrap() }

    #[test]
    fn exists_on_labels() {
        let board = Board::new();
        assert_eq!(Coord::all().filter(|c| board.exists(&c.to_algebraic())).count(), 64);
        assert!(!board.exists("J4"));
        assert!(!board.exists("a1"));
        assert!(!board.exists(""));
    }

    #[test]
    fn exists_on_occupied_squares() {
        let mut board = Board::new();
        board.place(sq("D5"), PieceKind::King).unwrap();
        assert!(board.exists("D5"));
        assert!(board.exists("D6"));
        assert!(!board.exists("D9"));
    }

    #[test]
    fn occupancy_distinguishes_unknown_from_empty() {
        let mut board = Board::new();
        board.place(sq("E4"), PieceKind::Pawn).unwrap();
        assert_eq!(board.occupancy("E4"), Occupancy::Piece(PieceKind::Pawn));
        assert_eq!(board.occupancy("E5"), Occupancy::Empty);
        assert_eq!(board.occupancy("E9"), Occupancy::NotASquare);
    }

    #[test]
    fn place_rejects_occupied_square() {
        let mut board = Board::new();
        board.place(sq("C2"), PieceKind::Knight).unwrap();
        assert_eq!(board.place(sq("C2"), PieceKind::King), Err(PlacementConflict {
            square: sq("C2"),
            occupant: PieceKind::Knight,
        }));
        assert_eq!(board.occupant(sq("C2")), Some(PieceKind::Knight));
    }

    #[test]
    fn place_piece_on_conflict_is_unplaced() {
        let mut board = Board::new();
        let first = board.place_piece(PieceKind::Pawn, sq("C5"));
        let second = board.place_piece(PieceKind::King, sq("C5"));
        assert_eq!(first.square(), Some(sq("C5")));
        assert!(!second.is_placed());
        assert_eq!(board.occupant(sq("C5")), Some(PieceKind::Pawn));
        assert_eq!(board.grid().occupied().count(), 1);
    }
}
