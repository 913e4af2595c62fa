//! Command-line configuration for the match runner.

use clap::Parser;

use bounce_core::board::Board;
use bounce_core::constants::{DEFAULT_COLS, DEFAULT_ROWS};
use bounce_core::level::MAX_LEVEL;

use crate::error::{MatchRunnerError, Result};

/// Configuration for running automated matches between two computer levels.
///
/// Games are played in pairs from the same random opening, with the engines
/// swapping sides for the second game of each pair.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tool for running matches between two computer levels of the bounce game"
)]
pub struct Config {
    /// Level of the first engine (0-10)
    #[arg(short = '1', long)]
    pub level1: usize,

    /// Level of the second engine (0-10)
    #[arg(short = '2', long)]
    pub level2: usize,

    /// Number of games to play
    #[arg(short, long, default_value_t = 100)]
    pub games: u32,

    /// Number of rows of the pitch
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns of the pitch
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Random directions played before the engines take over
    #[arg(long, default_value_t = 2)]
    pub opening_moves: u32,

    /// Search threads per engine
    #[arg(long)]
    pub threads: Option<usize>,

    /// Seed for the random openings
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Config {
    /// Parse command-line arguments into a Config instance.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Checks the values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns [`MatchRunnerError::Config`] for unknown levels or an empty
    /// match, and [`MatchRunnerError::Board`] for an invalid pitch size.
    pub fn validate(&self) -> Result<()> {
        for level in [self.level1, self.level2] {
            if level > MAX_LEVEL {
                return Err(MatchRunnerError::Config(format!(
                    "invalid level {level}, valid range is 0 to {MAX_LEVEL}"
                )));
            }
        }
        if self.games == 0 {
            return Err(MatchRunnerError::Config("at least one game is required".to_string()));
        }
        Board::try_new(self.rows, self.cols)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            level1: 1,
            level2: 3,
            games: 10,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            opening_moves: 2,
            threads: Some(1),
            seed: Some(1),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_invalid_level() {
        let config = Config {
            level2: MAX_LEVEL + 1,
            ..config()
        };
        assert!(matches!(config.validate(), Err(MatchRunnerError::Config(_))));
    }

    #[test]
    fn test_no_games() {
        let config = Config { games: 0, ..config() };
        assert!(matches!(config.validate(), Err(MatchRunnerError::Config(_))));
    }

    #[test]
    fn test_invalid_pitch() {
        let config = Config { rows: 2, ..config() };
        assert!(matches!(config.validate(), Err(MatchRunnerError::Board(_))));
    }

    #[test]
    fn test_parse_arguments() {
        let config = Config::try_parse_from(["match-runner", "-1", "2", "-2", "4", "--games", "6"]).unwrap();
        assert_eq!(config.level1, 2);
        assert_eq!(config.level2, 4);
        assert_eq!(config.games, 6);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.seed, None);
    }
}
