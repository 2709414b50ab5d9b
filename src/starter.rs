use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::piece::PieceKind;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub figure: PieceKind,
    pub field: Coord,
}

impl Placement {
    pub fn new(figure: PieceKind, field: Coord) -> Self { Placement { figure, field } }
}

// Pieces placed at startup, in placement order. For each kind, the first piece listed is
// the one requests refer to.
pub fn default_placements() -> Vec<Placement> {
    use PieceKind::*;
    [
        (Pawn, "C5"),
        (Pawn, "C4"),
        (Pawn, "C3"),
        (Pawn, "F6"),
        (Pawn, "E4"),
        (Pawn, "E3"),
        (King, "D5"),
        (Queen, "D7"),
        (Bishop, "D3"),
        (Knight, "C2"),
        (Rook, "F4"),
    ]
    .into_iter()
    .filter_map(|(figure, label)| Coord::from_algebraic(label).map(|c| Placement::new(figure, c)))
    .collect()
}
