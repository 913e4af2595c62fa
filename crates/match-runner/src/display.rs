//! Display management for match runner UI.

use std::io::{self, Write};

use bounce_core::types::Player;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::statistics::{MatchStatistics, MatchWinner};

const DEFAULT_BAR_WIDTH: usize = 50;
const MAX_OPENING_DISPLAY_LEN: usize = 16;
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Manages terminal output while a match runs.
///
/// Live statistics go through the progress bar so they never interleave with
/// the bar itself.
pub struct DisplayManager;

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager {
    pub fn new() -> Self {
        Self
    }

    /// Clear the terminal screen and move cursor to top-left.
    pub fn clear_screen(&self) -> io::Result<()> {
        print!("{CLEAR_SCREEN}");
        io::stdout().flush()
    }

    pub fn show_match_header(&self, engine1_name: &str, engine2_name: &str) -> io::Result<()> {
        self.clear_screen()?;
        println!(
            "  {} vs {}",
            engine1_name.bright_cyan().bold(),
            engine2_name.bright_cyan().bold()
        );
        println!("  {}", "─".repeat(DEFAULT_BAR_WIDTH + 20).bright_black());
        Ok(())
    }

    /// Create a styled progress bar for match tracking.
    pub fn create_progress_bar(&self, total_games: u64) -> ProgressBar {
        let progress_bar = ProgressBar::new(total_games);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan}] {pos}/{len} ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        progress_bar.set_style(style);
        progress_bar
    }

    /// Prints the finished game above the bar and refreshes the running score.
    pub fn report_game(&self, progress_bar: &ProgressBar, statistics: &MatchStatistics) {
        if let Some(game) = statistics.recent_results.last() {
            progress_bar.println(format!(
                "  {:>5}: {} {:>4} plies  {}  {}",
                statistics.games_played.to_string().bright_black(),
                self.format_result_symbol(game.winner),
                game.plies,
                self.format_opening(&game.opening).bright_black(),
                self.format_vs_display(game.engine1_side).bright_black()
            ));
        }
        progress_bar.set_message(format!(
            "{} {:.1}%  {} {:.1}%  {} {:.1}%",
            "W".green().bold(),
            statistics.engine1_win_rate(),
            "D".blue().bold(),
            statistics.draw_rate(),
            "L".red().bold(),
            statistics.engine2_win_rate()
        ));
        progress_bar.inc(1);
    }

    fn format_result_symbol(&self, winner: MatchWinner) -> ColoredString {
        match winner {
            MatchWinner::Engine1 => "W".green().bold(),
            MatchWinner::Engine2 => "L".red().bold(),
            MatchWinner::Draw => "D".blue().bold(),
        }
    }

    fn format_opening(&self, opening: &str) -> String {
        if opening.is_empty() {
            "-".to_string()
        } else if opening.len() > MAX_OPENING_DISPLAY_LEN {
            format!("{}...", &opening[..MAX_OPENING_DISPLAY_LEN])
        } else {
            opening.to_string()
        }
    }

    fn format_vs_display(&self, engine1_side: Player) -> String {
        match engine1_side {
            Player::First => "Engine1 starts".to_string(),
            Player::Second => "Engine2 starts".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_opening() {
        let display = DisplayManager::new();
        assert_eq!(display.format_opening("N E"), "N E");
        assert_eq!(display.format_opening(""), "-");

        let long_opening = "N E S W NE NW SE SW N E S W";
        let formatted = display.format_opening(long_opening);
        assert!(formatted.len() <= MAX_OPENING_DISPLAY_LEN + 3);
        assert!(formatted.ends_with("..."));
    }

    #[test]
    fn test_format_vs_display() {
        let display = DisplayManager::new();
        assert_eq!(display.format_vs_display(Player::First), "Engine1 starts");
        assert_eq!(display.format_vs_display(Player::Second), "Engine2 starts");
    }
}
