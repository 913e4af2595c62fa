//! In-process computer player.

use bounce_core::board::Board;
use bounce_core::direction::Direction;
use bounce_core::level::{Level, get_level};
use bounce_core::search::options::SearchOptions;
use bounce_core::search::{Search, SearchRunOptions};

use crate::error::{MatchRunnerError, Result};

/// A computer player searching at a fixed level.
pub struct Engine {
    name: String,
    search: Search,
    level: Level,
}

impl Engine {
    pub fn new(name: &str, level: usize, threads: Option<usize>) -> Engine {
        let options = match threads {
            Some(n_threads) => SearchOptions::with_threads(n_threads),
            None => SearchOptions::default(),
        };
        Engine {
            name: format!("{name} (lv{level})"),
            search: Search::new(&options),
            level: get_level(level),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chooses a direction for the side to move.
    ///
    /// # Errors
    ///
    /// Fails when the search finds no direction, which only happens on a
    /// finished game.
    pub fn genmove(&self, board: &Board) -> Result<Direction> {
        let result = self.search.run(board, &SearchRunOptions::with_level(self.level));
        result.best_move.ok_or_else(|| {
            MatchRunnerError::Game(format!("{} found no move at {}", self.name, board.current()))
        })
    }
}
