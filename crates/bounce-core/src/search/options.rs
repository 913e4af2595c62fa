//! Search configuration.

use crate::constants::DEFAULT_DEPTH;
use crate::level::Level;
use crate::types::Depth;

/// Options fixed for the lifetime of a [`Search`](crate::search::Search).
#[derive(Clone, Debug)]
pub struct SearchOptions {
    /// Worker threads used to split the root. Clamped to the CPU count.
    pub n_threads: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            n_threads: num_cpus::get(),
        }
    }
}

impl SearchOptions {
    pub fn with_threads(n_threads: usize) -> Self {
        SearchOptions { n_threads }
    }
}

/// Options for a single call to [`Search::run`](crate::search::Search::run).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRunOptions {
    pub level: Level,
}

impl Default for SearchRunOptions {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

impl SearchRunOptions {
    /// Searches at the depth of `level`.
    pub fn with_level(level: Level) -> Self {
        SearchRunOptions { level }
    }

    /// Searches exactly `depth` plies.
    pub fn with_depth(depth: Depth) -> Self {
        SearchRunOptions {
            level: Level::with_depth(depth),
        }
    }
}
