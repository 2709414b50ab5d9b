// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use piece_moves::{Coord, Registry, default_placements};


#[macro_export]
macro_rules! placements {
    ($($kind:ident $square:ident),* $(,)?) => {
        vec![$(
            piece_moves::Placement::new(
                piece_moves::PieceKind::$kind,
                piece_moves::Coord::from_algebraic(stringify!($square)).unwrap(),
            )
        ),*]
    };
}

#[allow(dead_code)]
pub fn default_registry() -> Registry { Registry::new(&default_placements()) }

#[allow(dead_code)]
pub fn sq(label: &str) -> Coord { Coord::from_algebraic(label).unwrap() }

#[allow(dead_code)]
pub fn labels(squares: Vec<Coord>) -> Vec<String> {
    squares.into_iter().map(Coord::to_algebraic).collect()
}
