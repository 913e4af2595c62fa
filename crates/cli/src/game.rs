//! Game state wrapper for the terminal front end.
//!
//! Adds colored board output on top of the core `GameState`.

use colored::{ColoredString, Colorize};

use bounce_core::board::{Board, MoveOutcome};
use bounce_core::coord::Coord;
use bounce_core::direction::Direction;
use bounce_core::error::BoardError;
use bounce_core::game_state::{self, PlayerStats};
use bounce_core::types::{Player, Score};
use rand::Rng;

/// A running game with terminal display.
pub struct GameState {
    core: game_state::GameState,
}

impl GameState {
    /// Creates a game on a fresh pitch with `starting` to move.
    pub fn new(rows: usize, cols: usize, starting: Player) -> Result<Self, BoardError> {
        let mut board = Board::try_new(rows, cols)?;
        board.set_active_player(starting);
        Ok(Self {
            core: game_state::GameState::from_board(board),
        })
    }

    pub fn board(&self) -> &Board {
        self.core.board()
    }

    pub fn side_to_move(&self) -> Player {
        self.core.side_to_move()
    }

    pub fn play(&mut self, dir: Direction) -> Result<MoveOutcome, BoardError> {
        self.core.play(dir)
    }

    /// Starts the next round with a random starting player.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Player {
        self.core.new_round_random(rng)
    }

    pub fn is_game_over(&self) -> bool {
        self.core.is_game_over()
    }

    pub fn stats(&self, player: Player) -> PlayerStats {
        self.core.stats(player)
    }

    pub fn draws(&self) -> u32 {
        self.core.draws()
    }

    pub fn evaluation(&self, player: Player) -> Score {
        self.core.evaluation(player)
    }

    pub fn round(&self) -> u32 {
        self.core.round()
    }

    /// Directions played this round, as short names.
    pub fn history_string(&self) -> String {
        self.core
            .history()
            .iter()
            .map(|m| m.direction.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Prints the pitch with a side panel.
    pub fn print(&self) {
        let board = self.core.board();
        let gate = board.rows() / 2;

        let mut panel: Vec<String> = Vec::new();
        panel.push(format!("Round {}", self.core.round()));
        if self.core.is_game_over() {
            panel.push(match self.core.winner() {
                Some(player) => format!("{}", format!("{player} wins!").color_for(player)),
                None => format!("{}", "Dead end: draw".bright_cyan()),
            });
            panel.push(format!("{}", "*** Game Over ***".bright_red()));
        } else {
            let side = self.side_to_move();
            panel.push(format!("{}", format!("{side}'s turn").color_for(side)));
            let options = board
                .get_options(board.current())
                .iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            panel.push(format!("Options: {options}"));
        }
        panel.push(String::new());
        for player in Player::ALL {
            let stats = self.stats(player);
            panel.push(format!(
                "{}: moves {:3}  bounces {:3}  wins {:2}",
                format!("{player}").color_for(player),
                stats.moves,
                stats.bounces,
                stats.wins
            ));
        }

        println!();
        for row in 0..board.rows() {
            print!("  ");
            for col in 0..board.cols() {
                let coord = Coord::new(row, col);
                let symbol: ColoredString = if coord == board.current() {
                    " @".bright_white().bold()
                } else if col == board.goal_column(Player::First) {
                    if row == gate { " G".bright_green() } else { "  ".normal() }
                } else if col == board.goal_column(Player::Second) {
                    if row == gate { " G".bright_yellow() } else { "  ".normal() }
                } else if board.mask(coord).is_dead_end() {
                    " #".red()
                } else if board.is_visited(coord) {
                    " o".cyan()
                } else {
                    " .".dimmed()
                };
                print!("{symbol}");
            }
            match panel.get(row) {
                Some(line) => println!("    {line}"),
                None => println!(),
            }
        }
        for line in panel.iter().skip(board.rows()) {
            println!("{:width$}    {line}", "", width = board.cols() * 2 + 2);
        }
    }
}

trait PlayerColor {
    fn color_for(self, player: Player) -> ColoredString;
}

impl PlayerColor for String {
    fn color_for(self, player: Player) -> ColoredString {
        match player {
            Player::First => self.bright_green(),
            Player::Second => self.bright_yellow(),
        }
    }
}
