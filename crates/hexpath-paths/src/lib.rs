//! Shortest routes on flat-top hex grids in column-offset coordinates.
//!
//! Every step between adjacent hexes costs the same, so a plain
//! breadth-first search finds shortest routes: the first time a cell is
//! discovered is the shortest way to reach it.
//!
//! - [`compute_path`] — one-off query against a [`GridTopology`](hexpath_core::GridTopology)
//! - [`PathFinder`] — a finder bound to one grid, optionally searching
//!   through a custom [`Pather`] (e.g. one that skips blocked cells)

mod bfs;
mod error;
mod route;
mod traits;

pub use bfs::{PathFinder, compute_path};
pub use error::PathError;
pub use route::Route;
pub use traits::Pather;
