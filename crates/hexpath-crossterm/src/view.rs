use std::collections::HashSet;

use hexpath_core::{Cell, GridTopology};
use hexpath_preview::CellView;

/// Highlight state of the terminal board, addressed directly by cell.
#[derive(Clone, Debug)]
pub struct TermView {
    topology: GridTopology,
    highlighted: HashSet<Cell>,
}

impl TermView {
    /// A view of `topology` with nothing highlighted.
    pub fn new(topology: GridTopology) -> Self {
        Self {
            topology,
            highlighted: HashSet::new(),
        }
    }

    /// Whether `cell` is drawn as part of the route.
    #[inline]
    pub fn is_highlighted(&self, cell: Cell) -> bool {
        self.highlighted.contains(&cell)
    }
}

impl CellView for TermView {
    type Handle = Cell;

    fn locate(&self, cell: Cell) -> Option<Cell> {
        self.topology.contains(cell).then_some(cell)
    }

    fn set_highlighted(&mut self, handle: &Cell, on: bool) {
        if on {
            self.highlighted.insert(*handle);
        } else {
            self.highlighted.remove(handle);
        }
    }
}
