//! Live route highlighting: [`PathPreview`].

use hexpath_core::{Cell, GridTopology, MouseAction, Msg};
use hexpath_paths::{PathError, PathFinder, Route};

use crate::selection::SelectionSource;
use crate::view::CellView;

/// Keeps the shortest route between the selected hex and the hovered hex
/// highlighted on a [`CellView`].
///
/// Each recomputation unmarks every previously highlighted cell before the
/// new route is marked, inside a single `&mut self` call. Only the latest
/// route is ever shown.
pub struct PathPreview<V: CellView> {
    finder: PathFinder,
    view: V,
    active: Vec<V::Handle>,
    route: Route,
}

impl<V: CellView> PathPreview<V> {
    /// Wire a preview to a grid and the view that draws it. Starts with
    /// nothing highlighted.
    pub fn new(topology: GridTopology, view: V) -> Self {
        Self {
            finder: PathFinder::new(topology),
            view,
            active: Vec::new(),
            route: Route::empty(),
        }
    }

    /// The grid routes are computed on.
    #[inline]
    pub fn topology(&self) -> &GridTopology {
        self.finder.topology()
    }

    /// The route currently highlighted.
    #[inline]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Handles of the cells currently marked on the view.
    #[inline]
    pub fn highlighted(&self) -> &[V::Handle] {
        &self.active
    }

    /// The view routes are marked on.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view, e.g. for redrawing.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// React to the pointer moving over `hovered` (or the background) while
    /// `selection` is selected.
    ///
    /// With no selection, no hovered hex, or the pointer on the selected hex,
    /// the highlight is cleared. Otherwise the route from `selection` to
    /// `hovered` replaces the highlight; an unreachable hex clears it.
    ///
    /// Cells outside the grid fail with [`PathError::OutOfBounds`] and leave
    /// the current highlight untouched.
    pub fn on_pointer_move(
        &mut self,
        selection: Option<Cell>,
        hovered: Option<Cell>,
    ) -> Result<&Route, PathError> {
        let (Some(start), Some(goal)) = (selection, hovered) else {
            self.clear_highlight();
            return Ok(&self.route);
        };
        if start == goal {
            self.clear_highlight();
            return Ok(&self.route);
        }

        let route = self.finder.compute_path(start, goal)?;
        self.show(route);
        Ok(&self.route)
    }

    /// A click on the background: drop the highlight.
    pub fn on_background_click(&mut self) {
        self.clear_highlight();
    }

    /// Unmark every highlighted cell and forget the active route.
    pub fn clear_highlight(&mut self) {
        if !self.active.is_empty() {
            log::debug!("clearing {} highlighted cells", self.active.len());
        }
        self.unmark_all();
        self.route = Route::empty();
    }

    /// Dispatch an input message.
    ///
    /// Call this after the selection collaborator has processed the same
    /// message, so `selection` already reflects a click.
    pub fn handle<S: SelectionSource>(&mut self, msg: &Msg, selection: &S) -> Result<(), PathError> {
        match msg {
            Msg::Mouse {
                action: MouseAction::Move | MouseAction::Main,
                cell: Some(cell),
                ..
            } => {
                self.on_pointer_move(selection.selected(), Some(*cell))?;
            }
            Msg::Mouse {
                action: MouseAction::Move,
                cell: None,
                ..
            } => self.clear_highlight(),
            Msg::Mouse {
                action: MouseAction::Main,
                cell: None,
                ..
            } => self.on_background_click(),
            Msg::Reset => self.clear_highlight(),
            _ => {}
        }
        Ok(())
    }

    /// Turn off every marked handle. Runs before any new route is marked.
    fn unmark_all(&mut self) {
        for h in self.active.drain(..) {
            self.view.set_highlighted(&h, false);
        }
    }

    fn show(&mut self, route: Route) {
        self.unmark_all();
        for &c in route.iter() {
            if let Some(h) = self.view.locate(c) {
                self.view.set_highlighted(&h, true);
                self.active.push(h);
            }
        }
        log::debug!(
            "highlighting {} of {} route cells",
            self.active.len(),
            route.steps()
        );
        self.route = route;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Records marks per cell; `holes` are cells with nothing drawn.
    #[derive(Default)]
    struct FakeView {
        marked: HashSet<Cell>,
        holes: Vec<Cell>,
        toggles: Vec<(Cell, bool)>,
    }

    impl CellView for FakeView {
        type Handle = Cell;

        fn locate(&self, cell: Cell) -> Option<Cell> {
            (!self.holes.contains(&cell)).then_some(cell)
        }

        fn set_highlighted(&mut self, handle: &Cell, on: bool) {
            self.toggles.push((*handle, on));
            if on {
                self.marked.insert(*handle);
            } else {
                self.marked.remove(handle);
            }
        }
    }

    fn preview(cols: i32, rows: i32) -> PathPreview<FakeView> {
        PathPreview::new(GridTopology::new(cols, rows).unwrap(), FakeView::default())
    }

    fn marked(p: &PathPreview<FakeView>) -> HashSet<Cell> {
        p.view().marked.clone()
    }

    #[test]
    fn hover_marks_route() {
        let mut p = preview(5, 5);
        let route = p
            .on_pointer_move(Some(Cell::new(0, 0)), Some(Cell::new(2, 0)))
            .unwrap()
            .clone();
        assert_eq!(route.cells(), &[Cell::new(1, 0), Cell::new(2, 0)]);
        assert_eq!(marked(&p), route.iter().copied().collect::<HashSet<_>>());
        assert_eq!(p.highlighted(), route.cells());
    }

    #[test]
    fn hover_on_selection_clears() {
        let mut p = preview(5, 5);
        let sel = Some(Cell::new(0, 0));
        p.on_pointer_move(sel, Some(Cell::new(2, 0))).unwrap();
        let route = p.on_pointer_move(sel, sel).unwrap();
        assert!(route.is_empty());
        assert!(marked(&p).is_empty());
        assert!(p.highlighted().is_empty());
    }

    #[test]
    fn only_latest_route_stays_marked() {
        let mut p = preview(7, 6);
        let sel = Some(Cell::new(3, 3));
        let moves = [
            Cell::new(0, 0),
            Cell::new(6, 5),
            Cell::new(6, 0),
            Cell::new(3, 4),
            Cell::new(0, 5),
            Cell::new(4, 3),
        ];
        for goal in moves {
            let route = p.on_pointer_move(sel, Some(goal)).unwrap().clone();
            assert_eq!(route.goal(), Some(goal));
            assert_eq!(
                marked(&p),
                route.iter().copied().collect::<HashSet<_>>(),
                "after hovering {goal}"
            );
        }
    }

    #[test]
    fn previous_marks_cleared_before_new_ones_set() {
        let mut p = preview(5, 5);
        let sel = Some(Cell::new(0, 0));
        p.on_pointer_move(sel, Some(Cell::new(2, 0))).unwrap();
        p.view_mut().toggles.clear();
        p.on_pointer_move(sel, Some(Cell::new(0, 2))).unwrap();

        let toggles = &p.view().toggles;
        let first_on = toggles.iter().position(|&(_, on)| on).unwrap();
        assert!(toggles[..first_on].iter().all(|&(_, on)| !on));
        assert!(toggles[first_on..].iter().all(|&(_, on)| on));
        assert_eq!(first_on, 2);
    }

    #[test]
    fn no_selection_or_background_clears() {
        let mut p = preview(5, 5);
        p.on_pointer_move(Some(Cell::new(0, 0)), Some(Cell::new(4, 4)))
            .unwrap();
        assert!(!marked(&p).is_empty());
        p.on_pointer_move(None, Some(Cell::new(4, 4))).unwrap();
        assert!(marked(&p).is_empty());

        p.on_pointer_move(Some(Cell::new(0, 0)), Some(Cell::new(4, 4)))
            .unwrap();
        p.on_pointer_move(Some(Cell::new(0, 0)), None).unwrap();
        assert!(marked(&p).is_empty());

        p.on_pointer_move(Some(Cell::new(0, 0)), Some(Cell::new(4, 4)))
            .unwrap();
        p.on_background_click();
        assert!(marked(&p).is_empty());
        assert!(p.route().is_empty());
    }

    #[test]
    fn undrawn_cells_are_skipped() {
        let mut p = preview(5, 5);
        p.view_mut().holes.push(Cell::new(1, 0));
        let route = p
            .on_pointer_move(Some(Cell::new(0, 0)), Some(Cell::new(2, 0)))
            .unwrap()
            .clone();
        assert_eq!(route.steps(), 2);
        assert_eq!(p.highlighted(), &[Cell::new(2, 0)]);
    }

    #[test]
    fn out_of_bounds_keeps_highlight() {
        let mut p = preview(5, 5);
        let sel = Some(Cell::new(0, 0));
        p.on_pointer_move(sel, Some(Cell::new(2, 0))).unwrap();
        let err = p.on_pointer_move(sel, Some(Cell::new(9, 0))).unwrap_err();
        assert!(matches!(err, PathError::OutOfBounds { .. }));
        assert_eq!(p.route().steps(), 2);
        assert_eq!(marked(&p).len(), 2);
    }

    #[test]
    fn single_cell_grid() {
        let mut p = preview(1, 1);
        let route = p
            .on_pointer_move(Some(Cell::ORIGIN), Some(Cell::ORIGIN))
            .unwrap();
        assert!(route.is_empty());
    }

    #[test]
    fn handle_dispatches_messages() {
        let mut p = preview(5, 5);
        let sel = Some(Cell::new(0, 0));

        p.handle(&Msg::hover(Some(Cell::new(2, 0))), &sel).unwrap();
        assert_eq!(p.route().steps(), 2);

        p.handle(&Msg::hover(None), &sel).unwrap();
        assert!(p.route().is_empty());

        p.handle(&Msg::hover(Some(Cell::new(0, 3))), &sel).unwrap();
        assert!(!p.route().is_empty());
        p.handle(&Msg::click(None), &None::<Cell>).unwrap();
        assert!(p.route().is_empty());

        p.handle(&Msg::hover(Some(Cell::new(0, 3))), &sel).unwrap();
        p.handle(&Msg::Reset, &sel).unwrap();
        assert!(marked(&p).is_empty());

        assert!(p.handle(&Msg::hover(Some(Cell::new(5, 5))), &sel).is_err());
    }
}
