use enum_map::EnumMap;
use log::info;

use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceKind};
use crate::starter::Placement;
use crate::validation::{self, FieldError, MoveError};


// Application context: one board plus every piece placed on it. Built once at startup,
// read-only afterwards, so it can be shared between request handlers without locking.
#[derive(Clone, Debug)]
pub struct Registry {
    board: Board,
    pieces: Vec<Piece>,
    figures: EnumMap<PieceKind, Option<usize>>,
}

impl Registry {
    pub fn new(placements: &[Placement]) -> Self {
        let mut board = Board::new();
        let mut figures = EnumMap::<PieceKind, Option<usize>>::default();
        let mut pieces = Vec::with_capacity(placements.len());
        for placement in placements {
            let piece = board.place_piece(placement.figure, placement.field);
            if figures[placement.figure].is_none() {
                figures[placement.figure] = Some(pieces.len());
            }
            pieces.push(piece);
        }
        let num_placed = pieces.iter().filter(|p| p.is_placed()).count();
        info!("Placed {} of {} pieces: {:?}", num_placed, pieces.len(), board.grid());
        Registry { board, pieces, figures }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn pieces(&self) -> &[Piece] { &self.pieces }

    // The piece that requests for `kind` refer to.
    pub fn figure(&self, kind: PieceKind) -> Option<&Piece> {
        self.figures[kind].map(|idx| &self.pieces[idx])
    }

    pub fn query_moves(
        &self, piece: &Piece, current_field: &str,
    ) -> Result<Vec<Coord>, FieldError> {
        validation::query_moves(&self.board, piece, current_field)
    }

    pub fn validate_move(
        &self, piece: &Piece, current_field: &str, dest_field: &str,
    ) -> Result<Coord, MoveError> {
        validation::validate_move(&self.board, piece, current_field, dest_field)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::starter::default_placements;

    fn placement(figure: PieceKind, label: &str) -> Placement {
        Placement::new(figure, Coord::from_algebraic(label).unwrap())
    }

    #[test]
    fn first_piece_of_a_kind_is_the_figure() {
        let registry = Registry::new(&default_placements());
        let pawn = registry.figure(PieceKind::Pawn).unwrap();
        assert_eq!(pawn.square(), Coord::from_algebraic("C5"));
        assert_eq!(registry.pieces().len(), 11);
        assert_eq!(registry.board().grid().occupied().count(), 11);
    }

    #[test]
    fn board_is_shared_between_pieces() {
        let registry =
            Registry::new(&[placement(PieceKind::Pawn, "E1"), placement(PieceKind::Pawn, "E2")]);
        let pawn = registry.figure(PieceKind::Pawn).unwrap();
        assert!(registry.validate_move(pawn, "E1", "E2").is_err());
    }

    #[test]
    fn missing_kind() {
        let registry = Registry::new(&[placement(PieceKind::Rook, "A1")]);
        assert!(registry.figure(PieceKind::Queen).is_none());
    }

    #[test]
    fn conflicting_figure_stays_unplaced() {
        let registry =
            Registry::new(&[placement(PieceKind::Pawn, "C5"), placement(PieceKind::King, "C5")]);
        let king = registry.figure(PieceKind::King).unwrap();
        assert!(!king.is_placed());
        assert_eq!(registry.query_moves(king, "D5"), Ok(vec![]));
        let c5 = Coord::from_algebraic("C5").unwrap();
        assert_eq!(registry.board().occupant(c5), Some(PieceKind::Pawn));
    }
}
