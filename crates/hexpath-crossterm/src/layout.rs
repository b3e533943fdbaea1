//! Placement of hexagons on a character grid.
//!
//! Each hex is drawn as a 3-character glyph. Columns are 4 characters apart
//! and rows 2 lines apart; odd columns sit one line (half a hex) lower, the
//! stagger the grid's neighbor tables assume. Gaps between glyphs and the
//! line under each glyph count as background.

use hexpath_core::{Cell, GridTopology};

/// Horizontal distance between adjacent columns, in characters.
pub const COL_PITCH: i32 = 4;
/// Vertical distance between adjacent rows, in lines.
pub const ROW_PITCH: i32 = 2;
/// Width of a hex glyph, in characters.
pub const GLYPH_WIDTH: i32 = 3;

/// Maps cells to terminal positions and back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HexLayout {
    topology: GridTopology,
    left: i32,
    top: i32,
}

impl HexLayout {
    /// Lay out `topology` with its top-left hex at column `left`, line `top`.
    pub fn new(topology: GridTopology, left: i32, top: i32) -> Self {
        Self {
            topology,
            left,
            top,
        }
    }

    /// The grid being laid out.
    #[inline]
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Terminal position `(x, y)` of the first glyph character of `cell`.
    pub fn position(&self, cell: Cell) -> (i32, i32) {
        (
            self.left + cell.col * COL_PITCH,
            self.top + cell.row * ROW_PITCH + (cell.col & 1),
        )
    }

    /// Width and height, in characters, covered by the grid.
    pub fn extent(&self) -> (i32, i32) {
        let stagger = if self.topology.cols() > 1 { 1 } else { 0 };
        (
            (self.topology.cols() - 1) * COL_PITCH + GLYPH_WIDTH,
            (self.topology.rows() - 1) * ROW_PITCH + 1 + stagger,
        )
    }

    /// The hex drawn at terminal position `(x, y)`, or `None` for background.
    pub fn pick(&self, x: i32, y: i32) -> Option<Cell> {
        let dx = x - self.left;
        let dy = y - self.top;
        if dx < 0 || dy < 0 || dx % COL_PITCH >= GLYPH_WIDTH {
            return None;
        }
        let col = dx / COL_PITCH;
        let dy = dy - (col & 1);
        if dy < 0 || dy % ROW_PITCH != 0 {
            return None;
        }
        let cell = Cell::new(col, dy / ROW_PITCH);
        self.topology.contains(cell).then_some(cell)
    }
}
