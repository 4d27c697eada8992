use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Position of a cell in the grid as `(row, col)`.
///
/// Signed, so that stepping off the edge of the grid produces a coordinate
/// that is simply out of bounds instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const ZERO: Coord = Coord(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Coord(tuple.0, tuple.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(val: Coord) -> Self {
        (val.0, val.1)
    }
}

#[cfg(test)]
mod tests {
    use super::Coord;

    #[test]
    fn stepping_off_the_edge_goes_negative() {
        assert_eq!(Coord(0, 3) + Coord(-1, 0), Coord(-1, 3));
        assert_eq!(Coord(2, 2) - Coord(2, 3), Coord(0, -1));
        assert!(!Coord(-1, 3).all_non_negative());
        assert!(Coord::ZERO.all_non_negative());
    }

    #[test]
    fn display_is_row_then_col() {
        assert_eq!(Coord(3, 7).to_string(), "(3, 7)");
    }
}
