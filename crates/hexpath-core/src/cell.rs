//! The [`Cell`] type — the grid address of a single hexagon.

use std::fmt;

/// A hexagon address in column-offset coordinates.
///
/// Columns run left to right, rows top to bottom. Identity is purely by
/// value: two cells with the same `col` and `row` are the same hexagon.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    /// The top-left cell (0, 0).
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Return a cell shifted by (dc, dr).
    #[inline]
    pub const fn shift(self, dc: i32, dr: i32) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Whether the cell sits in an odd column. Odd columns are drawn half a
    /// hex lower than even ones.
    #[inline]
    pub const fn is_odd_col(self) -> bool {
        self.col & 1 == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.col.cmp(&other.col).then(self.row.cmp(&other.row))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(4, 9);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"col":4,"row":9}"#);
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
