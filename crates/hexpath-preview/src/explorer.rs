use hexpath_core::{Effect, GridTopology, Key, Model, Msg};

use crate::preview::PathPreview;
use crate::selection::{Board, SelectionSource};
use crate::view::CellView;

/// Interactive hex board: selection plus live route preview.
///
/// Keys: `r` resets the board, `q` / `Escape` quits.
pub struct Explorer<V: CellView> {
    board: Board,
    preview: PathPreview<V>,
}

impl<V: CellView> Explorer<V> {
    /// Create an explorer over `topology`, marking routes on `view`.
    pub fn new(topology: GridTopology, view: V) -> Self {
        Self {
            board: Board::new(),
            preview: PathPreview::new(topology, view),
        }
    }

    /// Selection and hover state.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live route preview.
    #[inline]
    pub fn preview(&self) -> &PathPreview<V> {
        &self.preview
    }
}

impl<V: CellView> Model for Explorer<V> {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match &msg {
            Msg::KeyDown {
                key: Key::Char('r'),
                ..
            } => return Some(Effect::Msg(Msg::Reset)),
            Msg::KeyDown {
                key: Key::Escape | Key::Char('q'),
                ..
            }
            | Msg::Quit => return Some(Effect::End),
            Msg::Mouse {
                cell: Some(c),
                ..
            } if !self.preview.topology().contains(*c) => {
                log::warn!(
                    "ignoring pointer event outside the {}: {c}",
                    self.preview.topology()
                );
                self.preview.clear_highlight();
                return None;
            }
            _ => {}
        }

        self.board.handle(&msg);
        if let Err(e) = self.preview.handle(&msg, &self.board) {
            log::warn!("ignoring pointer event: {e}");
            self.preview.clear_highlight();
        }
        log::trace!(
            "selected={:?} hovered={:?} route={} steps",
            self.board.selected(),
            self.board.hovered(),
            self.preview.route().steps()
        );
        None
    }
}
