//! Game tree search engine.

mod minimax;
pub mod options;
pub mod search_context;
pub mod search_result;
pub mod threading;

use log::{debug, warn};

use crate::board::Board;
use crate::search::options::SearchOptions;
use crate::search::search_result::SearchResult;
use crate::search::threading::search_root_parallel;
use crate::types::Score;

pub use minimax::{minimax, solve};
pub use options::SearchRunOptions;

/// Main search engine structure.
///
/// Holds the worker pool used to split the root. With a single thread the
/// engine runs [`solve`] directly on the calling thread.
pub struct Search {
    pool: Option<rayon::ThreadPool>,
    n_threads: usize,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: &SearchOptions) -> Search {
        let n_threads = options.n_threads.min(num_cpus::get()).max(1);

        let pool = if n_threads > 1 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .thread_name(|i| format!("search-{i}"))
                .build()
            {
                Ok(pool) => Some(pool),
                Err(err) => {
                    warn!("failed to start {n_threads} search threads, searching sequentially: {err}");
                    None
                }
            }
        } else {
            None
        };

        let n_threads = if pool.is_some() { n_threads } else { 1 };
        Search { pool, n_threads }
    }

    /// Number of threads the engine searches with.
    pub fn n_threads(&self) -> usize {
        self.n_threads
    }

    /// Chooses a direction for the side to move.
    ///
    /// The active player is the maximizing player and the root is searched
    /// with a full window. `best_move` is `None` when the game is over or no
    /// direction is open.
    pub fn run(&self, board: &Board, options: &SearchRunOptions) -> SearchResult {
        let depth = options.level.depth;
        let maximizing = board.active_player();

        let result = match &self.pool {
            Some(pool) => search_root_parallel(pool, board, depth, maximizing),
            None => solve(board, depth, Score::NEG_INFINITY, Score::INFINITY, maximizing),
        };

        debug!(
            "{maximizing} depth {depth}: score {:.3} move {} nodes {}",
            result.score,
            result.best_move.map_or_else(|| "-".to_string(), |d| d.to_string()),
            result.n_nodes
        );

        result
    }
}
