//! Grid shape and hex adjacency: [`GridTopology`], [`Neighbors`].
//!
//! Hexagons are flat-topped and arranged in vertical columns. Odd columns are
//! drawn half a hex lower than even columns, so the two diagonal neighbors on
//! each side sit one row *up* from an even column and one row *down* from an
//! odd column.

use std::fmt;

use crate::cell::Cell;

// ---------------------------------------------------------------------------
// Offset tables
// ---------------------------------------------------------------------------

/// Neighbor offsets `(dc, dr)` for a cell in an even column.
///
/// The order is part of the contract: breadth-first search breaks ties
/// between equally short routes by it.
pub const EVEN_COL_OFFSETS: [(i32, i32); 6] = [(1, 0), (0, -1), (-1, 0), (0, 1), (1, -1), (-1, -1)];

/// Neighbor offsets `(dc, dr)` for a cell in an odd column.
pub const ODD_COL_OFFSETS: [(i32, i32); 6] = [(1, 0), (0, -1), (-1, 0), (0, 1), (1, 1), (-1, 1)];

/// The offset table that applies to `cell`.
#[inline]
pub fn offsets_for(cell: Cell) -> &'static [(i32, i32); 6] {
    if cell.is_odd_col() {
        &ODD_COL_OFFSETS
    } else {
        &EVEN_COL_OFFSETS
    }
}

// ---------------------------------------------------------------------------
// TopologyError
// ---------------------------------------------------------------------------

/// Errors raised when building a [`GridTopology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyError {
    /// At least one dimension is zero or negative.
    Empty { cols: i32, rows: i32 },
}

impl fmt::Display for TopologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { cols, rows } => {
                write!(f, "hex grid must have positive dimensions, got {cols}x{rows}")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

// ---------------------------------------------------------------------------
// GridTopology
// ---------------------------------------------------------------------------

/// The shape of a rectangular hex grid: which cells exist and which are
/// adjacent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridTopology {
    cols: i32,
    rows: i32,
}

impl GridTopology {
    /// Create a topology of `cols` × `rows` cells. Both must be positive.
    pub fn new(cols: i32, rows: i32) -> Result<Self, TopologyError> {
        if cols <= 0 || rows <= 0 {
            return Err(TopologyError::Empty { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }

    /// Row-major flat index of `cell`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// In-bounds neighbors of `cell`, in offset-table order.
    #[inline]
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        Neighbors {
            topology: *self,
            origin: cell,
            offsets: offsets_for(cell),
            next: 0,
        }
    }

    /// Append the in-bounds neighbors of `cell` to `buf`. The caller clears
    /// `buf` beforehand.
    pub fn neighbors_into(&self, cell: Cell, buf: &mut Vec<Cell>) {
        buf.extend(self.neighbors(cell));
    }

    /// Number of hex steps between `a` and `b` on an open grid.
    ///
    /// Converts both cells to cube coordinates and takes the largest axis
    /// delta. Rectangular offset grids contain a shortest path between any two
    /// of their cells, so this matches the breadth-first step count.
    pub fn distance(&self, a: Cell, b: Cell) -> i32 {
        let (ax, ay, az) = to_cube(a);
        let (bx, by, bz) = to_cube(b);
        (ax - bx).abs().max((ay - by).abs()).max((az - bz).abs())
    }

    /// Column-major iterator over every cell.
    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter {
            cols: self.cols,
            rows: self.rows,
            cur: Cell::ORIGIN,
        }
    }
}

fn to_cube(c: Cell) -> (i32, i32, i32) {
    let x = c.col;
    let z = c.row - (c.col - (c.col & 1)) / 2;
    (x, -x - z, z)
}

impl IntoIterator for GridTopology {
    type Item = Cell;
    type IntoIter = CellIter;
    #[inline]
    fn into_iter(self) -> CellIter {
        self.iter()
    }
}

impl fmt::Display for GridTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} hex grid", self.cols, self.rows)
    }
}

// ---------------------------------------------------------------------------
// Neighbors / CellIter
// ---------------------------------------------------------------------------

/// Iterator over the in-bounds neighbors of a cell.
#[derive(Clone, Debug)]
pub struct Neighbors {
    topology: GridTopology,
    origin: Cell,
    offsets: &'static [(i32, i32); 6],
    next: usize,
}

impl Iterator for Neighbors {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while let Some(&(dc, dr)) = self.offsets.get(self.next) {
            self.next += 1;
            let n = self.origin.shift(dc, dr);
            if self.topology.contains(n) {
                return Some(n);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len() - self.next))
    }
}

/// Column-major iterator over every cell of a [`GridTopology`].
#[derive(Clone, Debug)]
pub struct CellIter {
    cols: i32,
    rows: i32,
    cur: Cell,
}

impl Iterator for CellIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.col >= self.cols {
            return None;
        }
        let c = self.cur;
        self.cur.row += 1;
        if self.cur.row >= self.rows {
            self.cur.row = 0;
            self.cur.col += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.cur.col >= self.cols {
            0
        } else {
            ((self.cols - self.cur.col) * self.rows - self.cur.row) as usize
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellIter {}

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Grid dimensions as supplied by an embedding application.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub cols: i32,
    pub rows: i32,
}

impl GridConfig {
    /// Validate the dimensions into a [`GridTopology`].
    pub fn topology(&self) -> Result<GridTopology, TopologyError> {
        GridTopology::new(self.cols, self.rows)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 10, rows: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(cols: i32, rows: i32) -> GridTopology {
        GridTopology::new(cols, rows).unwrap()
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            GridTopology::new(0, 4),
            Err(TopologyError::Empty { cols: 0, rows: 4 })
        );
        assert!(GridTopology::new(3, -1).is_err());
        assert!(GridTopology::new(1, 1).is_ok());
    }

    #[test]
    fn contains_bounds() {
        let t = grid(3, 2);
        assert!(t.contains(Cell::new(0, 0)));
        assert!(t.contains(Cell::new(2, 1)));
        assert!(!t.contains(Cell::new(3, 0)));
        assert!(!t.contains(Cell::new(0, 2)));
        assert!(!t.contains(Cell::new(-1, 0)));
        assert!(!t.contains(Cell::new(0, -1)));
    }

    #[test]
    fn interior_even_column_neighbors() {
        let t = grid(5, 5);
        let n: Vec<Cell> = t.neighbors(Cell::new(2, 2)).collect();
        assert_eq!(
            n,
            vec![
                Cell::new(3, 2),
                Cell::new(2, 1),
                Cell::new(1, 2),
                Cell::new(2, 3),
                Cell::new(3, 1),
                Cell::new(1, 1),
            ]
        );
    }

    #[test]
    fn interior_odd_column_neighbors() {
        let t = grid(5, 5);
        let n: Vec<Cell> = t.neighbors(Cell::new(1, 2)).collect();
        assert_eq!(
            n,
            vec![
                Cell::new(2, 2),
                Cell::new(1, 1),
                Cell::new(0, 2),
                Cell::new(1, 3),
                Cell::new(2, 3),
                Cell::new(0, 3),
            ]
        );
    }

    #[test]
    fn corner_neighbors_are_clipped() {
        let t = grid(5, 5);
        let n: Vec<Cell> = t.neighbors(Cell::new(0, 0)).collect();
        assert_eq!(n, vec![Cell::new(1, 0), Cell::new(0, 1)]);

        let single = grid(1, 1);
        assert_eq!(single.neighbors(Cell::ORIGIN).count(), 0);
    }

    #[test]
    fn neighbors_in_bounds_and_never_self() {
        for (cols, rows) in [(1, 1), (1, 4), (4, 1), (3, 3), (6, 5)] {
            let t = grid(cols, rows);
            for c in t.iter() {
                let n: Vec<Cell> = t.neighbors(c).collect();
                assert!(n.len() <= 6);
                for m in &n {
                    assert!(t.contains(*m), "{m} out of {t}");
                    assert_ne!(*m, c);
                }
            }
        }
    }

    #[test]
    fn adjacency_is_symmetric() {
        let t = grid(6, 5);
        for a in t.iter() {
            for b in t.neighbors(a) {
                assert!(
                    t.neighbors(b).any(|x| x == a),
                    "{b} is a neighbor of {a} but not the reverse"
                );
            }
        }
    }

    #[test]
    fn neighbors_into_appends() {
        let t = grid(3, 3);
        let mut buf = vec![Cell::new(9, 9)];
        t.neighbors_into(Cell::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 7);
        assert_eq!(buf[0], Cell::new(9, 9));
    }

    #[test]
    fn distance_of_neighbors_is_one() {
        let t = grid(7, 6);
        for a in t.iter() {
            assert_eq!(t.distance(a, a), 0);
            for b in t.neighbors(a) {
                assert_eq!(t.distance(a, b), 1);
            }
        }
    }

    #[test]
    fn distance_along_zigzag_row() {
        let t = grid(5, 5);
        assert_eq!(t.distance(Cell::new(0, 0), Cell::new(2, 0)), 2);
        assert_eq!(t.distance(Cell::new(0, 0), Cell::new(4, 4)), 6);
        assert_eq!(t.distance(Cell::new(0, 4), Cell::new(4, 0)), 6);
        assert_eq!(t.distance(Cell::new(0, 2), Cell::new(4, 0)), 4);
    }

    #[test]
    fn index_is_row_major() {
        let t = grid(4, 3);
        assert_eq!(t.index(Cell::new(0, 0)), Some(0));
        assert_eq!(t.index(Cell::new(3, 0)), Some(3));
        assert_eq!(t.index(Cell::new(0, 1)), Some(4));
        assert_eq!(t.index(Cell::new(3, 2)), Some(11));
        assert_eq!(t.index(Cell::new(4, 0)), None);
    }

    #[test]
    fn iter_is_column_major_and_exact() {
        let t = grid(2, 3);
        let it = t.iter();
        assert_eq!(it.len(), 6);
        let cells: Vec<Cell> = it.collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ]
        );
        assert_eq!(t.len(), 6);
        assert!(!t.is_empty());
    }

    #[test]
    fn default_config() {
        let cfg = GridConfig::default();
        let t = cfg.topology().unwrap();
        assert_eq!((t.cols(), t.rows()), (10, 10));
        assert!(GridConfig { cols: 0, rows: 3 }.topology().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg: GridConfig = serde_json::from_str(r#"{"cols":7,"rows":3}"#).unwrap();
        assert_eq!(cfg, GridConfig { cols: 7, rows: 3 });
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
