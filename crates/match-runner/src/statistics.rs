use std::io;

use bounce_core::types::Player;
use colored::*;

const ELO_K: f64 = 400.0;
const RECENT_GAMES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchWinner {
    Engine1,
    Engine2,
    Draw,
}

#[derive(Debug, Clone)]
pub struct GameHistory {
    pub winner: MatchWinner,
    /// Directions played, opening included.
    pub plies: u32,
    pub opening: String,
    pub engine1_side: Player,
}

#[derive(Debug, Clone, Default)]
pub struct MatchStatistics {
    pub engine1_wins: u32,
    pub engine2_wins: u32,
    pub draws: u32,
    /// Games won by whoever moved first.
    pub starter_wins: u32,
    pub total_plies: u64,
    pub games_played: u32,
    pub recent_results: Vec<GameHistory>,
}

impl MatchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, game: GameHistory, starter_won: bool) {
        match game.winner {
            MatchWinner::Engine1 => self.engine1_wins += 1,
            MatchWinner::Engine2 => self.engine2_wins += 1,
            MatchWinner::Draw => self.draws += 1,
        }
        if starter_won {
            self.starter_wins += 1;
        }
        self.total_plies += u64::from(game.plies);
        self.games_played += 1;

        self.recent_results.push(game);
        if self.recent_results.len() > RECENT_GAMES {
            self.recent_results.remove(0);
        }
    }

    pub fn total_games(&self) -> u32 {
        self.engine1_wins + self.engine2_wins + self.draws
    }

    pub fn engine1_win_rate(&self) -> f64 {
        self.rate(self.engine1_wins)
    }

    pub fn engine2_win_rate(&self) -> f64 {
        self.rate(self.engine2_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn average_plies(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_plies as f64 / self.games_played as f64
        }
    }

    fn rate(&self, count: u32) -> f64 {
        if self.total_games() == 0 {
            0.0
        } else {
            (count as f64 / self.total_games() as f64) * 100.0
        }
    }

    pub fn print_final_results(&self, engine1_name: &str, engine2_name: &str) -> io::Result<()> {
        let total_games = self.total_games();

        if total_games == 0 {
            println!("No games were played.");
            return Ok(());
        }

        println!("{}", "═".repeat(80).bright_cyan());
        println!("{:^80}", "MATCH RESULTS".bright_white().bold());
        println!("{}", "═".repeat(80).bright_cyan());
        println!();

        println!(
            "{} {}",
            "Total Games:".bright_white(),
            total_games.to_string().bright_yellow().bold()
        );
        println!(
            "{} {} / {} / {}",
            "Results:".bright_white(),
            format!("{} wins", self.engine1_wins).bright_green(),
            format!("{} draws", self.draws).bright_blue(),
            format!("{} losses", self.engine2_wins).bright_red()
        );
        println!(
            "{} {:.1}",
            "Average plies:".bright_white(),
            self.average_plies()
        );
        println!(
            "{} {:.1}%",
            "Starting player wins:".bright_white(),
            self.rate(self.starter_wins)
        );
        println!();

        self.print_detailed_stats(engine1_name, engine2_name);
        println!();

        self.print_elo_rating(engine1_name, engine2_name);
        println!("{}", "═".repeat(80).bright_cyan());

        Ok(())
    }

    fn print_detailed_stats(&self, engine1_name: &str, engine2_name: &str) {
        println!("{}", "Detailed Statistics".bright_white().underline());
        println!();

        let name_width = engine1_name.len().max(engine2_name.len()).max("Engine".len());
        println!(
            "{:width$}  {:>7}  {:>7}  {:>7}  {:>9}",
            "Engine",
            "Wins",
            "Losses",
            "Draws",
            "Win Rate",
            width = name_width
        );
        println!("{}", "─".repeat(name_width + 38).bright_black());

        let rows = [
            (engine1_name, self.engine1_wins, self.engine2_wins, self.engine1_win_rate()),
            (engine2_name, self.engine2_wins, self.engine1_wins, self.engine2_win_rate()),
        ];
        for (name, wins, losses, rate) in rows {
            println!(
                "{:width$}  {:>7}  {:>7}  {:>7}  {:>9}",
                name.bright_cyan().bold(),
                wins.to_string().bright_green(),
                losses.to_string().bright_red(),
                self.draws.to_string().bright_blue(),
                format!("{rate:.1}%").bright_yellow(),
                width = name_width
            );
        }
    }

    fn print_elo_rating(&self, engine1_name: &str, engine2_name: &str) {
        let elo_stats = EloCalculator::calculate_stats(
            self.engine1_wins,
            self.engine2_wins,
            self.draws,
            self.total_games(),
        );

        println!("{}", "ELO Rating".bright_white().underline());
        println!();

        if elo_stats.elo_diff.is_infinite() {
            let leader = if elo_stats.elo_diff > 0.0 { engine1_name } else { engine2_name };
            println!(
                "{:>20}: {}",
                "ELO Difference".bright_white(),
                format!("{leader} won every decisive game").bright_yellow()
            );
            return;
        }

        let elo_str = format!("{:+.2}", elo_stats.elo_diff);
        let elo_display = if elo_stats.elo_diff > 0.0 {
            elo_str.bright_green().bold()
        } else if elo_stats.elo_diff < 0.0 {
            elo_str.bright_red().bold()
        } else {
            elo_str.bright_yellow().bold()
        };
        println!(
            "{:>20}: {} {}",
            "ELO Difference".bright_white(),
            elo_display,
            format!("± {:.2} (95%)", elo_stats.confidence_interval).bright_black()
        );
    }
}

pub struct EloStats {
    pub elo_diff: f64,
    pub confidence_interval: f64,
}

pub struct EloCalculator;

impl EloCalculator {
    pub fn calculate_stats(wins: u32, losses: u32, draws: u32, total_games: u32) -> EloStats {
        if total_games == 0 {
            return EloStats {
                elo_diff: 0.0,
                confidence_interval: 0.0,
            };
        }

        let n = total_games as f64;
        let w = wins as f64;
        let d = draws as f64;
        let l = losses as f64;

        let p_hat = (w + 0.5 * d) / n;

        if p_hat == 0.0 || p_hat == 1.0 {
            let elo_diff = if p_hat > 0.5 { f64::INFINITY } else { f64::NEG_INFINITY };
            return EloStats {
                elo_diff,
                confidence_interval: f64::INFINITY,
            };
        }

        let elo_diff = ELO_K * (p_hat / (1.0 - p_hat)).log10();

        let wld_var = w * (1.0 - p_hat).powi(2) + l * p_hat.powi(2) + d * (0.5 - p_hat).powi(2);
        let se_elo = (ELO_K / (std::f64::consts::LN_10 * n)) * wld_var.sqrt() / (p_hat * (1.0 - p_hat));

        EloStats {
            elo_diff,
            confidence_interval: 1.96 * se_elo,
        }
    }
}
