//! Match execution and game management.
//!
//! Runs games between two in-process engines, in pairs that share a random
//! opening and swap sides, and aggregates the results.

use log::debug;
use rand::prelude::*;
use rand::rngs::StdRng;

use bounce_core::board::Board;
use bounce_core::direction::Direction;
use bounce_core::types::Player;

use crate::config::Config;
use crate::display::DisplayManager;
use crate::engine::Engine;
use crate::error::Result;
use crate::statistics::{GameHistory, MatchStatistics, MatchWinner};

/// Outcome of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    /// `None` for a dead-end draw.
    pub winner: Option<Player>,
    pub plies: u32,
}

/// Orchestrates and executes automated matches between two engines.
pub struct MatchRunner {
    display: DisplayManager,
}

impl Default for MatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRunner {
    pub fn new() -> Self {
        Self {
            display: DisplayManager::new(),
        }
    }

    /// Execute a complete match using the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a game hits a board
    /// error or the terminal cannot be written.
    pub fn run_match(&mut self, config: &Config) -> Result<()> {
        config.validate()?;

        let engines = [
            Engine::new("Engine1", config.level1, config.threads),
            Engine::new("Engine2", config.level2, config.threads),
        ];

        self.display.show_match_header(engines[0].name(), engines[1].name())?;
        let progress_bar = self.display.create_progress_bar(u64::from(config.games));

        let result = play_match(config, &engines, |statistics| {
            self.display.report_game(&progress_bar, statistics);
        });
        progress_bar.finish_and_clear();
        let statistics = result?;

        println!();
        statistics.print_final_results(engines[0].name(), engines[1].name())?;
        Ok(())
    }
}

/// Plays all games of a match and returns the aggregated statistics.
///
/// `on_game` is called after each game with the updated statistics.
pub fn play_match<F>(config: &Config, engines: &[Engine; 2], mut on_game: F) -> Result<MatchStatistics>
where
    F: FnMut(&MatchStatistics),
{
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    debug!("match seed {base_seed}");

    let mut statistics = MatchStatistics::new();

    for game_idx in 0..config.games {
        let pair = game_idx / 2;
        let is_swapped = game_idx % 2 == 1;

        let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(u64::from(pair)));
        let opening = random_opening(config.rows, config.cols, config.opening_moves, &mut rng)?;

        // Index by player: the engine moving as First, then as Second.
        let (first, second) = if is_swapped {
            (&engines[1], &engines[0])
        } else {
            (&engines[0], &engines[1])
        };
        let record = play_game(config.rows, config.cols, &opening, [first, second])?;

        let engine1_side = if is_swapped { Player::Second } else { Player::First };
        let winner = match record.winner {
            Some(player) if player == engine1_side => MatchWinner::Engine1,
            Some(_) => MatchWinner::Engine2,
            None => MatchWinner::Draw,
        };
        debug!("game {}: {winner:?} after {} plies", game_idx + 1, record.plies);

        statistics.add_result(
            GameHistory {
                winner,
                plies: record.plies,
                opening: format_opening(&opening),
                engine1_side,
            },
            record.winner == Some(Player::First),
        );
        on_game(&statistics);
    }

    Ok(statistics)
}

/// Plays one game from the given opening to the end.
///
/// `engines[0]` moves for `Player::First`, `engines[1]` for `Player::Second`.
/// `Player::First` always starts.
pub fn play_game(rows: usize, cols: usize, opening: &[Direction], engines: [&Engine; 2]) -> Result<GameRecord> {
    let mut board = Board::try_new(rows, cols)?;
    let mut plies = 0;

    for &dir in opening {
        board.try_make_move(dir)?;
        plies += 1;
    }

    while !board.is_game_over() {
        let engine = engines[board.active_player().index()];
        let dir = engine.genmove(&board)?;
        board.try_make_move(dir)?;
        plies += 1;
    }

    Ok(GameRecord {
        winner: board.winner(),
        plies,
    })
}

/// Draws up to `n_moves` random directions that do not end the game.
fn random_opening<R: Rng + ?Sized>(rows: usize, cols: usize, n_moves: u32, rng: &mut R) -> Result<Vec<Direction>> {
    let mut board = Board::try_new(rows, cols)?;
    let mut opening = Vec::new();

    for _ in 0..n_moves {
        let candidates: Vec<Direction> = board
            .get_options(board.current())
            .iter()
            .filter(|&&dir| {
                let mut next = board.duplicate();
                !next.make_move(dir).is_terminal()
            })
            .copied()
            .collect();

        let Some(&dir) = candidates.choose(rng) else {
            break;
        };
        board.make_move(dir);
        opening.push(dir);
    }

    Ok(opening)
}

fn format_opening(opening: &[Direction]) -> String {
    opening
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
