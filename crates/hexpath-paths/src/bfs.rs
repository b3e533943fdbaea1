use std::collections::{HashMap, VecDeque};

use hexpath_core::{Cell, GridTopology};

use crate::error::PathError;
use crate::route::Route;
use crate::traits::Pather;

/// Compute the shortest route from `start` to `goal` on an open grid.
///
/// Pure function of its inputs. See [`PathFinder::compute_path`].
pub fn compute_path(topology: &GridTopology, start: Cell, goal: Cell) -> Result<Route, PathError> {
    search(topology, topology, start, goal)
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Breadth-first route search bound to one grid.
///
/// Several finders over different grids can coexist; a finder holds no state
/// between queries.
#[derive(Clone, Debug)]
pub struct PathFinder {
    topology: GridTopology,
}

impl PathFinder {
    /// Create a finder for `topology`.
    pub fn new(topology: GridTopology) -> Self {
        Self { topology }
    }

    /// The grid being searched.
    #[inline]
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Compute the shortest route (fewest hex steps) from `start` to `goal`.
    ///
    /// Returns the cells after `start` up to and including `goal`. The route
    /// is empty when `start == goal`, or when `goal` is unreachable. Among
    /// several shortest routes the one found first in neighbor-table order is
    /// returned, so repeated calls give the same route.
    ///
    /// Fails with [`PathError::OutOfBounds`] if either cell is outside the
    /// grid.
    pub fn compute_path(&self, start: Cell, goal: Cell) -> Result<Route, PathError> {
        search(&self.topology, &self.topology, start, goal)
    }

    /// Like [`compute_path`](Self::compute_path), but expands cells through
    /// `pather` instead of the plain grid adjacency. Neighbors the pather
    /// reports outside the grid are ignored.
    pub fn compute_path_with<P: Pather>(
        &self,
        pather: &P,
        start: Cell,
        goal: Cell,
    ) -> Result<Route, PathError> {
        search(&self.topology, pather, start, goal)
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Per-query bookkeeping, dropped when the query returns.
struct SearchState {
    visited: Vec<bool>,
    parents: HashMap<Cell, Cell>,
    frontier: VecDeque<Cell>,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            visited: vec![false; len],
            parents: HashMap::new(),
            frontier: VecDeque::new(),
        }
    }

    /// Mark `cell` as discovered from `parent` and queue it. Cells already
    /// discovered or outside the grid are skipped.
    fn discover(&mut self, topology: &GridTopology, cell: Cell, parent: Option<Cell>) {
        let Some(i) = topology.index(cell) else {
            return;
        };
        if self.visited[i] {
            return;
        }
        self.visited[i] = true;
        if let Some(p) = parent {
            self.parents.insert(cell, p);
        }
        self.frontier.push_back(cell);
    }

    /// Walk parent pointers from `goal` back to `start`.
    fn route(&self, start: Cell, goal: Cell) -> Route {
        let mut cells = Vec::new();
        let mut c = goal;
        while c != start {
            cells.push(c);
            match self.parents.get(&c) {
                Some(&p) => c = p,
                None => return Route::empty(),
            }
        }
        cells.reverse();
        Route::from_cells(cells)
    }
}

fn check_bounds(topology: &GridTopology, cell: Cell) -> Result<(), PathError> {
    if topology.contains(cell) {
        Ok(())
    } else {
        Err(PathError::OutOfBounds {
            cell,
            cols: topology.cols(),
            rows: topology.rows(),
        })
    }
}

fn search<P: Pather>(
    topology: &GridTopology,
    pather: &P,
    start: Cell,
    goal: Cell,
) -> Result<Route, PathError> {
    check_bounds(topology, start)?;
    check_bounds(topology, goal)?;

    if start == goal {
        return Ok(Route::empty());
    }

    let mut state = SearchState::new(topology.len());
    state.discover(topology, start, None);

    let mut nbuf = Vec::with_capacity(6);

    let found = loop {
        let Some(current) = state.frontier.pop_front() else {
            break false;
        };

        if current == goal {
            break true;
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            state.discover(topology, n, Some(current));
        }
    };

    log::trace!(
        "bfs {start} -> {goal}: found={found}, discovered {} cells",
        state.parents.len() + 1
    );

    if !found {
        return Ok(Route::empty());
    }
    Ok(state.route(start, goal))
}
