use crate::board::Board;
use crate::coord::Coord;


// Squares strictly between `from` and `to`, in order from `from`. Empty if the squares
// do not lie on one straight or diagonal line.
pub(crate) fn squares_between(from: Coord, to: Coord) -> impl Iterator<Item = Coord> {
    let (d_row, d_col) = to - from;
    let on_line = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();
    let direction = (d_row.signum(), d_col.signum());
    let distance = if on_line { d_row.abs().max(d_col.abs()) } else { 0 };
    (1..distance).filter_map(move |i| from.checked_add((direction.0 * i, direction.1 * i)))
}

// Returns the first occupied square on the way, if any.
pub fn first_obstruction(board: &Board, from: Coord, to: Coord) -> Option<Coord> {
    squares_between(from, to).find(|&pos| !board.is_free(pos))
}
