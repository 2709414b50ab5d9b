// Reply envelopes for the two lookups, and the status each outcome maps to. Transport
// code only has to serialize `body` and translate `status`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::piece::{Piece, PieceKind};
use crate::registry::Registry;
use crate::validation::{FieldError, MoveError};


pub const UNKNOWN_FIGURE: &str = "Figure doesn't exist";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReplyStatus {
    Ok,
    NotFound,
    Conflict,
}

impl ReplyStatus {
    pub fn code(self) -> u16 {
        match self {
            ReplyStatus::Ok => 200,
            ReplyStatus::NotFound => 404,
            ReplyStatus::Conflict => 409,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableMovesBody {
    pub available_moves: Vec<String>,
    pub error: Option<String>,
    pub figure: Option<String>,
    pub current_field: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveStatus {
    Valid,
    Invalid,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveBody {
    #[serde(rename = "move")]
    pub status: MoveStatus,
    pub figure: Option<String>,
    pub error: Option<String>,
    pub current_field: String,
    pub dest_field: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Reply<T> {
    pub status: ReplyStatus,
    pub body: T,
}

// Note the pairing: a real square that is not the piece's is "not found", while a label
// that is not a square at all is a "conflict".
fn field_error_status(err: FieldError) -> ReplyStatus {
    match err {
        FieldError::WrongFigure => ReplyStatus::NotFound,
        FieldError::FieldDoesNotExist => ReplyStatus::Conflict,
    }
}

fn move_error_status(err: MoveError) -> ReplyStatus {
    match err {
        MoveError::CurrentField(err) => field_error_status(err),
        MoveError::DestinationUnknownSquare => ReplyStatus::NotFound,
        MoveError::DestinationConflict(_) => ReplyStatus::Conflict,
    }
}

fn find_figure<'a>(registry: &'a Registry, figure: &str) -> Option<&'a Piece> {
    registry.figure(PieceKind::from_str(figure).ok()?)
}

pub fn moves_reply(
    registry: &Registry, figure: &str, current_field: &str,
) -> Reply<AvailableMovesBody> {
    let failure = |status, error: String| Reply {
        status,
        body: AvailableMovesBody {
            available_moves: vec![],
            error: Some(error),
            figure: None,
            current_field: None,
        },
    };
    let Some(piece) = find_figure(registry, figure) else {
        return failure(ReplyStatus::NotFound, UNKNOWN_FIGURE.to_owned());
    };
    match registry.query_moves(piece, current_field) {
        Ok(moves) => Reply {
            status: ReplyStatus::Ok,
            body: AvailableMovesBody {
                available_moves: moves.into_iter().map(Coord::to_algebraic).collect(),
                error: None,
                figure: Some(piece.name().to_owned()),
                current_field: piece.square().map(Coord::to_algebraic),
            },
        },
        Err(err) => failure(field_error_status(err), err.to_string()),
    }
}

pub fn move_reply(
    registry: &Registry, figure: &str, current_field: &str, dest_field: &str,
) -> Reply<MoveBody> {
    let invalid = |status, figure: Option<&Piece>, error: String| Reply {
        status,
        body: MoveBody {
            status: MoveStatus::Invalid,
            figure: figure.map(|p| p.name().to_owned()),
            error: Some(error),
            current_field: current_field.to_owned(),
            dest_field: dest_field.to_owned(),
        },
    };
    let Some(piece) = find_figure(registry, figure) else {
        return invalid(ReplyStatus::NotFound, None, UNKNOWN_FIGURE.to_owned());
    };
    match registry.validate_move(piece, current_field, dest_field) {
        Ok(_) => Reply {
            status: ReplyStatus::Ok,
            body: MoveBody {
                status: MoveStatus::Valid,
                figure: Some(piece.name().to_owned()),
                error: None,
                current_field: current_field.to_owned(),
                dest_field: dest_field.to_owned(),
            },
        },
        Err(err) => invalid(move_error_status(err), Some(piece), err.to_string()),
    }
}
