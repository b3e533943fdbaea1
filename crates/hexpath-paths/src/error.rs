use std::fmt;

use hexpath_core::Cell;

/// Errors returned by route queries.
///
/// An unreachable goal is not an error: it yields an empty
/// [`Route`](crate::Route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal lies outside the grid.
    OutOfBounds { cell: Cell, cols: i32, rows: i32 },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, cols, rows } => {
                write!(f, "cell {cell} is outside the {cols}x{rows} grid")
            }
        }
    }
}

impl std::error::Error for PathError {}
