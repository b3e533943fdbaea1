use hexpath_core::Cell;

/// Capability for marking rendered cells as part of the previewed route.
///
/// A renderer resolves a [`Cell`] to whatever it uses to address the drawn
/// hexagon (a widget id, a screen position, the cell itself) and toggles the
/// highlighted state on it.
pub trait CellView {
    /// Handle to one rendered cell.
    type Handle;

    /// Find the rendered element for `cell`, or `None` if nothing is drawn
    /// there.
    fn locate(&self, cell: Cell) -> Option<Self::Handle>;

    /// Turn the highlighted state of `handle` on or off.
    fn set_highlighted(&mut self, handle: &Self::Handle, on: bool);
}
