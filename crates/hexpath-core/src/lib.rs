//! **hexpath-core** — core types for previewing shortest routes on a hex grid.
//!
//! This crate provides the foundational types used across the *hexpath*
//! workspace: the [`Cell`] address, the [`GridTopology`] adjacency model for
//! flat-top hexagons in staggered columns, input messages, and the
//! single-threaded event loop.

pub mod app;
pub mod cell;
pub mod messages;
pub mod topology;

pub use app::{App, Context, Driver, Effect, Model};
pub use cell::Cell;
pub use messages::*;
pub use topology::{CellIter, GridConfig, GridTopology, Neighbors, TopologyError};
