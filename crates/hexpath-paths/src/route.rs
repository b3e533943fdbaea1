use std::ops::Deref;

use hexpath_core::Cell;

/// A shortest route, from the step after the start up to and including the
/// goal.
///
/// Empty when start and goal coincide or when the goal cannot be reached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    cells: Vec<Cell>,
}

impl Route {
    /// The empty route.
    pub const fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Number of hex steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len()
    }

    /// The last cell of the route, if any.
    #[inline]
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether `cell` is on the route.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// The route as a slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Consume the route, returning its cells.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl Deref for Route {
    type Target = [Cell];
    #[inline]
    fn deref(&self) -> &[Cell] {
        &self.cells
    }
}

impl IntoIterator for Route {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let r = Route::from_cells(vec![Cell::new(1, 0), Cell::new(2, 0)]);
        assert_eq!(r.steps(), 2);
        assert_eq!(r.goal(), Some(Cell::new(2, 0)));
        assert!(r.contains(Cell::new(1, 0)));
        assert!(!r.contains(Cell::new(0, 0)));
        assert_eq!(r[0], Cell::new(1, 0));
        assert_eq!(r.iter().count(), 2);
    }

    #[test]
    fn empty_route() {
        let r = Route::empty();
        assert!(r.is_empty());
        assert_eq!(r.goal(), None);
        assert_eq!(r, Route::default());
    }
}
