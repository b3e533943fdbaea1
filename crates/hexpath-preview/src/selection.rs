//! Selection tracking: [`SelectionSource`] and the [`Board`] model.

use hexpath_core::{Cell, MouseAction, Msg};

/// Where the route preview reads the currently selected cell from.
pub trait SelectionSource {
    fn selected(&self) -> Option<Cell>;
}

impl SelectionSource for Option<Cell> {
    #[inline]
    fn selected(&self) -> Option<Cell> {
        *self
    }
}

/// Selected and hovered hex of an interactive board.
///
/// Clicking a hex selects it, clicking it again deselects it, and clicking
/// the background drops the selection. At most one hex is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    selected: Option<Cell>,
    hovered: Option<Cell>,
}

impl Board {
    /// A board with nothing selected or hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hex under the pointer, if any.
    #[inline]
    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }

    /// The hovered hex unless it is the selected one; the selected hex keeps
    /// its selection marking instead.
    pub fn hover_marked(&self) -> Option<Cell> {
        self.hovered.filter(|&c| Some(c) != self.selected)
    }

    /// Record the hex under the pointer.
    pub fn hover(&mut self, cell: Option<Cell>) {
        self.hovered = cell;
    }

    /// Apply a primary click on `cell`, or on the background when `None`.
    pub fn click(&mut self, cell: Option<Cell>) {
        self.selected = match cell {
            Some(c) if self.selected != Some(c) => Some(c),
            _ => None,
        };
    }

    /// Drop both selection and hover.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Update from an input message. Other messages are ignored.
    pub fn handle(&mut self, msg: &Msg) {
        match msg {
            Msg::Mouse {
                action: MouseAction::Move,
                cell,
                ..
            } => self.hover(*cell),
            Msg::Mouse {
                action: MouseAction::Main,
                cell,
                ..
            } => {
                self.hover(*cell);
                self.click(*cell);
            }
            Msg::Reset => self.reset(),
            _ => {}
        }
    }
}

impl SelectionSource for Board {
    #[inline]
    fn selected(&self) -> Option<Cell> {
        self.selected
    }
}
