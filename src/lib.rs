#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod board;
pub mod coord;
pub mod grid;
pub mod movegen;
pub mod path;
pub mod piece;
pub mod registry;
pub mod reply;
pub mod starter;
pub mod util;
pub mod validation;

pub use board::{Board, Occupancy, PlacementConflict};
pub use coord::{Col, Coord, Row};
pub use piece::{Piece, PieceKind};
pub use registry::Registry;
pub use reply::{AvailableMovesBody, MoveBody, MoveStatus, Reply, ReplyStatus};
pub use starter::{Placement, default_placements};
pub use validation::{FieldError, MoveError, MoveVerdict, RejectReason};
