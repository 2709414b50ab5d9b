use std::{fmt, ops};

use ndarray::{Array, Array2};

use crate::coord::{Coord, NUM_COLS, NUM_ROWS};
use crate::piece::PieceKind;


// Fixed 8x8 occupancy storage. Every square is either empty or holds one piece name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    data: Array2<Option<PieceKind>>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            data: Array::from_elem((NUM_ROWS as usize, NUM_COLS as usize), None),
        }
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceKind)> + '_ {
        Coord::all().filter_map(|coord| self[coord].map(|kind| (coord, kind)))
    }
}

impl ops::Index<Coord> for Grid {
    type Output = Option<PieceKind>;
    fn index(&self, pos: Coord) -> &Self::Output { &self.data[coord_to_index(pos)] }
}

impl ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, pos: Coord) -> &mut Self::Output {
        &mut self.data[coord_to_index(pos)]
    }
}

// `Coord` is always in bounds, so indexing never panics.
fn coord_to_index(pos: Coord) -> [usize; 2] {
    [
        pos.row.to_zero_based() as usize,
        pos.col.to_zero_based() as usize,
    ]
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid ")?;
        f.debug_map()
            .entries(self.occupied().map(|(coord, kind)| (coord.to_algebraic(), kind.name())))
            .finish()
    }
}
