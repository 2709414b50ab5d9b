// Legality checks for a single piece. Nothing here changes the board: a valid verdict
// means "the piece could go there", the move is never applied.

use std::fmt;

use log::debug;

use crate::board::Board;
use crate::coord::Coord;
use crate::path::first_obstruction;
use crate::piece::{Piece, PieceKind};


pub const MOVE_NOT_PERMITTED: &str = "Current move is not permitted";

// The field a request claims the piece stands on does not check out.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldError {
    // A real square, but not the one this piece is on.
    WrongFigure,
    // Not one of the 64 squares.
    FieldDoesNotExist,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RejectReason {
    Unplaced,
    Unreachable,
    DestinationOccupied(PieceKind),
    PathBlocked(Coord),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveVerdict {
    Valid,
    InvalidNotPermitted(RejectReason),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveError {
    CurrentField(FieldError),
    DestinationUnknownSquare,
    // The destination exists, but the piece cannot go there.
    DestinationConflict(RejectReason),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::WrongFigure => write!(f, "Wrong figure"),
            FieldError::FieldDoesNotExist => write!(f, "Field doesn't exist"),
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::CurrentField(err) => fmt::Display::fmt(err, f),
            MoveError::DestinationUnknownSquare | MoveError::DestinationConflict(_) => {
                write!(f, "{MOVE_NOT_PERMITTED}")
            }
        }
    }
}

impl From<FieldError> for MoveError {
    fn from(err: FieldError) -> Self { MoveError::CurrentField(err) }
}

impl Piece {
    // Does not look at the asserted current field; see `validate_move` for that.
    pub fn verdict(&self, board: &Board, to: Coord) -> MoveVerdict {
        use MoveVerdict::*;
        use RejectReason::*;
        let Some(from) = self.square() else {
            return InvalidNotPermitted(Unplaced);
        };
        if let Some(occupant) = board.occupant(to) {
            return InvalidNotPermitted(DestinationOccupied(occupant));
        }
        if !self.reachable_squares().contains(&to) {
            return InvalidNotPermitted(Unreachable);
        }
        if self.kind().is_sliding() {
            if let Some(blocker) = first_obstruction(board, from, to) {
                return InvalidNotPermitted(PathBlocked(blocker));
            }
        }
        Valid
    }
}

// An unplaced piece accepts any real square as its current field: it then simply has
// no moves.
pub fn check_current_field(
    board: &Board, piece: &Piece, current_field: &str,
) -> Result<(), FieldError> {
    if !board.exists(current_field) {
        return Err(FieldError::FieldDoesNotExist);
    }
    match piece.square() {
        Some(square) if square.to_algebraic() != current_field => Err(FieldError::WrongFigure),
        _ => Ok(()),
    }
}

pub fn query_moves(
    board: &Board, piece: &Piece, current_field: &str,
) -> Result<Vec<Coord>, FieldError> {
    check_current_field(board, piece, current_field)?;
    Ok(piece.reachable_squares())
}

// Returns the destination square on success.
pub fn validate_move(
    board: &Board, piece: &Piece, current_field: &str, dest_field: &str,
) -> Result<Coord, MoveError> {
    check_current_field(board, piece, current_field)?;
    let Some(to) = Coord::from_algebraic(dest_field) else {
        debug!("{} {current_field} -> {dest_field}: not a square", piece.name());
        return Err(MoveError::DestinationUnknownSquare);
    };
    let verdict = piece.verdict(board, to);
    debug!("{} {current_field} -> {dest_field}: {verdict:?}", piece.name());
    match verdict {
        MoveVerdict::Valid => Ok(to),
        MoveVerdict::InvalidNotPermitted(reason) => Err(MoveError::DestinationConflict(reason)),
    }
}
