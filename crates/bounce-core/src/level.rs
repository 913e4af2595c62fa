//! Difficulty levels and search depth configuration.

use crate::types::Depth;

/// A difficulty level of the computer player.
///
/// Depth counts single-direction moves, so bounces consume depth just like
/// turn-ending moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Search depth in plies.
    pub depth: Depth,
}

impl Level {
    /// Creates a level searching exactly `depth` plies.
    pub const fn with_depth(depth: Depth) -> Self {
        Level { depth }
    }
}

/// Highest valid level index.
pub const MAX_LEVEL: usize = LEVELS.len() - 1;

/// Retrieves the configuration for a specific difficulty level.
///
/// # Arguments
///
/// * `lv` - The level index (0-10), where 0 is the weakest and 10 is the strongest.
///
/// # Panics
///
/// Panics if `lv` is outside the valid range of 0-10.
pub fn get_level(lv: usize) -> Level {
    try_get_level(lv).unwrap_or_else(|| {
        panic!("Invalid level: {lv}. Valid range is 0 to {MAX_LEVEL}")
    })
}

/// Retrieves a level, or `None` if `lv` is out of range.
pub fn try_get_level(lv: usize) -> Option<Level> {
    LEVELS.get(lv).copied()
}

/// Pre-configured levels ranging from 0 (easiest) to 10 (hardest).
#[rustfmt::skip]
const LEVELS: [Level; 11] = [
    Level { depth:  1 },
    Level { depth:  1 },
    Level { depth:  2 },
    Level { depth:  3 },
    Level { depth:  4 },
    Level { depth:  5 },
    Level { depth:  6 },
    Level { depth:  7 },
    Level { depth:  8 },
    Level { depth:  9 },
    Level { depth: 10 },
];
