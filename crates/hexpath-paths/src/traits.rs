use hexpath_core::{Cell, GridTopology};

/// Minimal pathfinding interface — provides neighbor enumeration.
///
/// Implementations must only report cells inside the grid being searched.
/// Wrapping a [`GridTopology`] and filtering its neighbors is the usual way
/// to add obstacles.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

impl Pather for GridTopology {
    #[inline]
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        self.neighbors_into(c, buf);
    }
}
