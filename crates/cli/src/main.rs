mod game;
mod ui;

use clap::Parser;

use bounce_core::constants::{DEFAULT_COLS, DEFAULT_ROWS};
use bounce_core::level::MAX_LEVEL;

#[derive(Parser, Debug)]
#[command(name = "bounce-cli", version, about = "Play the bounce game in the terminal")]
struct Cli {
    /// Number of rows of the pitch
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of columns of the pitch, goal columns included
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Computer strength (0-10)
    #[arg(short, long, default_value_t = 3)]
    level: usize,

    /// 0: P1 human, P2 computer / 1: P1 computer, P2 human / 2: both computer / 3: both human
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=3))]
    mode: u8,

    /// Search threads (defaults to the number of CPUs)
    #[arg(long)]
    threads: Option<usize>,

    /// Seed for choosing the starting player
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    if args.level > MAX_LEVEL {
        eprintln!("Invalid level: {}. Valid range is 0 to {MAX_LEVEL}", args.level);
        std::process::exit(1);
    }

    let config = ui::UiConfig {
        rows: args.rows,
        cols: args.cols,
        level: args.level,
        mode: args.mode,
        threads: args.threads,
        seed: args.seed,
    };

    ui::ui_loop(&config).unwrap_or_else(|err| {
        eprintln!("Failed to start the game: {err}");
        std::process::exit(1);
    });
}
