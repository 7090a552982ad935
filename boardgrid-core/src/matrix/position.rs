use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// An immutable `(x, y)` coordinate used to address a slot of a [`Matrix`][super::Matrix].
///
/// `x` is the column and `y` is the row. A `Position` is never validated against a
/// matrix when it is created; whether it is in bounds is decided by the matrix it is
/// used with, which is why both components are signed.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    x: isize,
    y: isize,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Builds a position from a `(column, row)` pair of storage indices.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn from_indices(column: usize, row: usize) -> Self {
        // A `Vec` never holds more than `isize::MAX` elements.
        Self::new(column as isize, row as isize)
    }

    #[must_use]
    pub const fn get_x(&self) -> isize {
        self.x
    }

    #[must_use]
    pub const fn get_y(&self) -> isize {
        self.y
    }

    /// The row this position addresses, same as [`Position::get_y`].
    #[must_use]
    pub const fn row(&self) -> isize {
        self.y
    }

    /// The column this position addresses, same as [`Position::get_x`].
    #[must_use]
    pub const fn column(&self) -> isize {
        self.x
    }
}

impl From<(isize, isize)> for Position {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (isize, isize) {
    fn from(position: Position) -> Self {
        (position.x, position.y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
