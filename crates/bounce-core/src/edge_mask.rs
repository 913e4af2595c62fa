//! Per-cell record of traversed edges.

use std::fmt;
use std::ops::BitOr;

use crate::direction::Direction;
use crate::direction_list::DirectionList;

/// 8-bit set of blocked directions for one cell.
///
/// A set bit means the edge leaving the cell in that direction has been
/// traversed (or never existed, for border cells) and can no longer be used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EdgeMask(pub u8);

impl EdgeMask {
    /// Every direction open.
    pub const OPEN: EdgeMask = EdgeMask(0);

    /// Every direction blocked.
    pub const BLOCKED: EdgeMask = EdgeMask(0xFF);

    /// Creates a mask with exactly the given directions blocked.
    pub fn from_blocked(dirs: &[Direction]) -> EdgeMask {
        dirs.iter().fold(EdgeMask::OPEN, |acc, &dir| acc | EdgeMask(dir.bit()))
    }

    /// Creates a mask with every direction blocked except the given ones.
    pub fn only_open(dirs: &[Direction]) -> EdgeMask {
        EdgeMask(!Self::from_blocked(dirs).0)
    }

    #[inline(always)]
    pub fn is_blocked(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline(always)]
    pub fn is_open(self, dir: Direction) -> bool {
        !self.is_blocked(dir)
    }

    /// Returns the mask with `dir` blocked.
    #[inline(always)]
    pub fn block(self, dir: Direction) -> EdgeMask {
        EdgeMask(self.0 | dir.bit())
    }

    /// Returns the mask with `dir` open.
    #[inline(always)]
    pub fn open(self, dir: Direction) -> EdgeMask {
        EdgeMask(self.0 & !dir.bit())
    }

    /// Number of blocked directions.
    #[inline(always)]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// No direction left to leave the cell.
    #[inline(always)]
    pub fn is_dead_end(self) -> bool {
        self.0 == 0xFF
    }

    /// Exactly one edge touched: the cell had never been reached before the last move.
    #[inline(always)]
    pub fn is_fresh(self) -> bool {
        self.count() == 1
    }

    /// Open directions in canonical order.
    pub fn options(self) -> DirectionList {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_open(dir))
            .collect()
    }
}

impl BitOr for EdgeMask {
    type Output = EdgeMask;
    #[inline(always)]
    fn bitor(self, rhs: EdgeMask) -> EdgeMask {
        EdgeMask(self.0 | rhs.0)
    }
}

impl fmt::Binary for EdgeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
