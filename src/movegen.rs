// Geometric move generation. Occupancy is not consulted here: blocked rays and taken
// destinations are rejected later, during validation.

use itertools::Itertools;

use crate::coord::{Coord, NUM_ROWS};
use crate::piece::{Piece, PieceKind};


// Directions are listed in the order squares are reported in.
const STRAIGHT_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];
const PAWN_STEP: (i8, i8) = (1, 0);

// Longest possible ray on the board.
const MAX_RAY_LENGTH: i8 = NUM_ROWS - 1;

fn steps(from: Coord, offsets: &[(i8, i8)]) -> Vec<Coord> {
    offsets.iter().filter_map(|&offset| from.checked_add(offset)).collect()
}

// Each distance is clipped on its own; obstruction is a separate concern.
fn rays(from: Coord, directions: &[(i8, i8)]) -> Vec<Coord> {
    directions
        .iter()
        .flat_map(|&(d_row, d_col)| {
            (1..=MAX_RAY_LENGTH).filter_map(move |i| from.checked_add((d_row * i, d_col * i)))
        })
        .collect()
}

pub fn sliding_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    use PieceKind::*;
    match kind {
        Rook => &STRAIGHT_DIRECTIONS,
        Bishop => &DIAGONAL_DIRECTIONS,
        Queen => &ALL_DIRECTIONS,
        King | Knight | Pawn => &[],
    }
}

pub fn reachable_squares(kind: PieceKind, from: Coord) -> Vec<Coord> {
    use PieceKind::*;
    match kind {
        King => steps(from, &ALL_DIRECTIONS),
        Knight => steps(from, &KNIGHT_JUMPS),
        Pawn => steps(from, &[PAWN_STEP]),
        Rook | Bishop | Queen => rays(from, sliding_directions(kind)),
    }
}

impl Piece {
    // Empty for an unplaced piece.
    pub fn reachable_squares(&self) -> Vec<Coord> {
        self.square().map_or_else(Vec::new, |from| reachable_squares(self.kind(), from))
    }

    pub fn reachable_labels(&self) -> Vec<String> {
        self.reachable_squares().into_iter().map(Coord::to_algebraic).collect_vec()
    }
}


#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    fn sq(label: &str) -> Coord { Coord::from_algebraic(label).unwrap() }

    fn labels(kind: PieceKind, from: &str) -> Vec<String> {
        reachable_squares(kind, sq(from)).into_iter().map(Coord::to_algebraic).collect()
    }

    fn label_set(kind: PieceKind, from: &str) -> HashSet<String> {
        labels(kind, from).into_iter().collect()
    }

    fn set_of(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn king_in_the_middle() {
        let moves = reachable_squares(PieceKind::King, sq("D5"));
        assert_eq!(moves.len(), 8);
        for to in moves {
            let (d_row, d_col) = to - sq("D5");
            assert_eq!(d_row.abs().max(d_col.abs()), 1);
        }
        assert_eq!(labels(PieceKind::King, "D5"), vec![
            "D4", "D6", "C5", "E5", "C4", "E6", "E4", "C6"
        ]);
    }

    #[test]
    fn king_in_the_corner() {
        assert_eq!(label_set(PieceKind::King, "A1"), set_of(&["A2", "B1", "B2"]));
        assert_eq!(label_set(PieceKind::King, "H8"), set_of(&["H7", "G8", "G7"]));
    }

    #[test]
    fn knight_offsets_are_clipped() {
        assert_eq!(labels(PieceKind::Knight, "C2"), vec!["E1", "E3", "D4", "A1", "A3", "B4"]);
        assert_eq!(label_set(PieceKind::Knight, "A1"), set_of(&["B3", "C2"]));
        assert_eq!(reachable_squares(PieceKind::Knight, sq("E5")).len(), 8);
    }

    #[test]
    fn pawn_steps_forward_only() {
        assert_eq!(labels(PieceKind::Pawn, "E1"), vec!["E2"]);
        assert_eq!(labels(PieceKind::Pawn, "C4"), vec!["C5"]);
        assert!(labels(PieceKind::Pawn, "E8").is_empty());
    }

    #[test]
    fn rook_rays() {
        assert_eq!(labels(PieceKind::Rook, "F4"), vec![
            "F3", "F2", "F1", "F5", "F6", "F7", "F8", "E4", "D4", "C4", "B4", "A4", "G4", "H4"
        ]);
        for from in Coord::all() {
            assert_eq!(reachable_squares(PieceKind::Rook, from).len(), 14);
        }
    }

    #[test]
    fn bishop_rays() {
        assert_eq!(label_set(PieceKind::Bishop, "A1"), set_of(&[
            "B2", "C3", "D4", "E5", "F6", "G7", "H8"
        ]));
        assert_eq!(labels(PieceKind::Bishop, "D3"), vec![
            "C2", "B1", "E4", "F5", "G6", "H7", "E2", "F1", "C4", "B5", "A6"
        ]);
    }

    #[test]
    fn queen_is_rook_plus_bishop() {
        for from in Coord::all() {
            let squares = |kind| reachable_squares(kind, from).into_iter().collect::<HashSet<_>>();
            let queen = squares(PieceKind::Queen);
            let rook = squares(PieceKind::Rook);
            let bishop = squares(PieceKind::Bishop);
            assert_eq!(queen, &rook | &bishop, "{from}");
            assert!(rook.is_disjoint(&bishop));
        }
    }

    #[test]
    fn never_includes_origin_or_duplicates() {
        for kind in PieceKind::iter() {
            for from in Coord::all() {
                let moves = reachable_squares(kind, from);
                assert!(!moves.contains(&from));
                assert!(moves.iter().all_unique(), "{kind} {from}");
            }
        }
    }

    #[test]
    fn unplaced_piece_has_no_moves() {
        assert!(Piece::unplaced(PieceKind::Queen).reachable_squares().is_empty());
        assert_eq!(Piece::placed(PieceKind::Pawn, sq("A7")).reachable_labels(), vec!["A8"]);
    }
}
