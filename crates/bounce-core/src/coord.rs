use std::fmt;

use crate::direction::Direction;

/// A `(row, col)` position on the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    #[inline(always)]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Returns the neighbour one step away in `dir`.
    ///
    /// # Arguments
    ///
    /// * `dir` - Direction of travel.
    /// * `rows` - Grid height.
    /// * `cols` - Grid width.
    ///
    /// # Returns
    ///
    /// `None` if the neighbour would lie outside a `rows` x `cols` grid.
    #[inline]
    pub fn step(self, dir: Direction, rows: usize, cols: usize) -> Option<Coord> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Coord { row, col })
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Coord) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        dr.hypot(dc)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
