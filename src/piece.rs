use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::coord::Coord;


// Names are the lower-case identifiers used in requests, replies and config files.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Enum,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub fn name(self) -> &'static str { self.into() }

    // Sliding pieces move along rays and can be blocked by pieces in between.
    pub fn is_sliding(self) -> bool {
        use PieceKind::*;
        match self {
            Rook | Bishop | Queen => true,
            King | Knight | Pawn => false,
        }
    }
}

// A piece is placed once, when it's created. If the requested square was taken at that
// moment, the piece stays unplaced forever and cannot move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    kind: PieceKind,
    square: Option<Coord>,
}

impl Piece {
    pub(crate) fn placed(kind: PieceKind, square: Coord) -> Self {
        Piece { kind, square: Some(square) }
    }
    pub(crate) fn unplaced(kind: PieceKind) -> Self { Piece { kind, square: None } }

    pub fn kind(&self) -> PieceKind { self.kind }
    pub fn name(&self) -> &'static str { self.kind.name() }
    pub fn square(&self) -> Option<Coord> { self.square }
    pub fn is_placed(&self) -> bool { self.square.is_some() }
}
