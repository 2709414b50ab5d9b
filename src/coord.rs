use std::fmt;
use std::ops;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::util::as_two_chars;


pub const NUM_ROWS: i8 = 8;
pub const NUM_COLS: i8 = 8;


// Row is rank minus one: 0 for rank 1, growing away from it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: i8, // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: i8) -> Option<Self> {
        if 0 <= idx && idx < NUM_ROWS { Some(Self { idx }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('1' as u32)?;
        Self::from_zero_based(i8::try_from(idx).ok()?)
    }
    pub const fn to_zero_based(self) -> i8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx as u8 + b'1') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_ROWS).map(|idx| Self { idx }) }
}

impl ops::Sub for Row {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output { self.idx - other.idx }
}


// Col is the file index: 0 for file A.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: i8, // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: i8) -> Option<Self> {
        if 0 <= idx && idx < NUM_COLS { Some(Self { idx }) } else { None }
    }
    pub fn from_algebraic(ch: char) -> Option<Self> {
        let idx = (ch as u32).checked_sub('A' as u32)?;
        Self::from_zero_based(i8::try_from(idx).ok()?)
    }
    pub const fn to_zero_based(self) -> i8 { self.idx }
    pub const fn to_algebraic(self) -> char { (self.idx as u8 + b'A') as char }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_COLS).map(|idx| Self { idx }) }
}

impl ops::Sub for Col {
    type Output = i8;
    fn sub(self, other: Self) -> Self::Output { self.idx - other.idx }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coord {
    pub row: Row,
    pub col: Col,
}

impl Coord {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_zero_based(row: i8, col: i8) -> Option<Self> {
        Some(Self::new(Row::from_zero_based(row)?, Col::from_zero_based(col)?))
    }

    // Accepts canonical labels only: upper-case file followed by rank, e.g. "D5".
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let (file, rank) = as_two_chars(s)?;
        Some(Self::new(Row::from_algebraic(rank)?, Col::from_algebraic(file)?))
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    // Returns `None` when the step leaves the board.
    pub fn checked_add(self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        Self::from_zero_based(
            self.row.to_zero_based().checked_add(d_row)?,
            self.col.to_zero_based().checked_add(d_col)?,
        )
    }

    pub fn all() -> impl Iterator<Item = Coord> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Coord { row, col })
    }
}

impl ops::Sub for Coord {
    type Output = (i8, i8);
    fn sub(self, other: Self) -> Self::Output { (self.row - other.row, self.col - other.col) }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "Coord({})", self) }
}

impl TryFrom<String> for Coord {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Coord::from_algebraic(&s).ok_or_else(|| format!("Invalid square: \"{s}\""))
    }
}

impl From<Coord> for String {
    fn from(coord: Coord) -> Self { coord.to_algebraic() }
}
