//! Ordered, fixed-capacity list of legal directions.

use arrayvec::ArrayVec;
use std::slice;

use crate::constants::NUM_DIRECTIONS;
use crate::direction::Direction;

/// Legal directions from one cell, always in canonical order.
///
/// The order matters: the search enumerates directions in this order and keeps
/// the first one reaching the best value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectionList {
    dirs: ArrayVec<Direction, NUM_DIRECTIONS>,
}

impl DirectionList {
    /// Creates an empty list.
    pub fn new() -> DirectionList {
        DirectionList {
            dirs: ArrayVec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    #[inline]
    pub fn contains(&self, dir: Direction) -> bool {
        self.dirs.contains(&dir)
    }

    #[inline]
    pub fn first(&self) -> Option<Direction> {
        self.dirs.first().copied()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Direction> {
        self.dirs.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Direction] {
        &self.dirs
    }
}

impl FromIterator<Direction> for DirectionList {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut dirs = ArrayVec::new();
        for dir in iter {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }
        DirectionList { dirs }
    }
}

impl IntoIterator for DirectionList {
    type Item = Direction;
    type IntoIter = arrayvec::IntoIter<Direction, NUM_DIRECTIONS>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.into_iter()
    }
}

impl<'a> IntoIterator for &'a DirectionList {
    type Item = &'a Direction;
    type IntoIter = slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.iter()
    }
}
