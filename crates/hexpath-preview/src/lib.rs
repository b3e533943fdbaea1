//! Live shortest-route preview for interactive hex boards.
//!
//! While a hex is selected, the route to the hex under the pointer is kept
//! highlighted and follows the pointer:
//!
//! - [`CellView`] — how the preview reaches the rendered cells
//! - [`SelectionSource`] / [`Board`] — which hex is selected and hovered
//! - [`PathPreview`] — recomputes and re-marks the route on every pointer move
//! - [`Explorer`] — a [`Model`](hexpath_core::Model) tying the above to input messages

mod explorer;
mod preview;
mod selection;
mod view;

pub use explorer::Explorer;
pub use preview::PathPreview;
pub use selection::{Board, SelectionSource};
pub use view::CellView;
