//! Move-log coordinates: `(column, row)`, both 1-based.

use crate::Position;

/// Formats the coordinates of a played cell.
///
/// `None` stands for "no move yet" (the game-start log entry) and yields an
/// empty label.
pub fn coordinates_of(position: Option<Position>) -> String {
    match position {
        Some(pos) => format!("({}, {})", pos.column(), pos.row()),
        None => String::new(),
    }
}

/// Raw-index form of [`coordinates_of`].
///
/// Negative sentinels and indices off the board produce an empty label.
pub fn coordinates_of_index(index: isize) -> String {
    let position = usize::try_from(index).ok().and_then(Position::from_index);
    coordinates_of(position)
}
