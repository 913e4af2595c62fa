//! Board geometry and evaluation constants.

/// Rows of the standard pitch.
pub const DEFAULT_ROWS: usize = 9;

/// Columns of the standard pitch, goal columns included.
pub const DEFAULT_COLS: usize = 11;

/// Smallest row count that leaves room for a three-cell gate.
pub const MIN_ROWS: usize = 3;

/// Smallest column count: two goal columns plus two field columns.
pub const MIN_COLS: usize = 4;

/// Number of compass directions.
pub const NUM_DIRECTIONS: usize = 8;

/// Penalty applied when the marker is stuck outside a goal.
pub const DEAD_END_PENALTY: f64 = 100.0;

/// Bonus for occupying the goal a player attacks (and penalty for the one it defends).
pub const GOAL_BONUS: f64 = 200.0;

/// Search depth used when nothing else is requested.
pub const DEFAULT_DEPTH: u32 = 3;
