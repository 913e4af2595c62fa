//! Interactive read-eval-print loop.
//!
//! Reads commands with rustyline and lets the computer move whenever the
//! current mode assigns the side to move to it.

use bounce_core::board::MoveOutcome;
use bounce_core::direction::{Direction, ParseDirectionError};
use bounce_core::level::{MAX_LEVEL, get_level};
use bounce_core::search::options::SearchOptions;
use bounce_core::search::search_result::SearchResult;
use bounce_core::search::{Search, SearchRunOptions};
use bounce_core::types::Player;
use colored::Colorize;
use log::{debug, warn};
use num_format::{Locale, ToFormattedString};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::game::GameState;

/// Start-up settings taken from the command line.
pub struct UiConfig {
    pub rows: usize,
    pub cols: usize,
    pub level: usize,
    pub mode: u8,
    pub threads: Option<usize>,
    pub seed: Option<u64>,
}

/// Main UI loop.
///
/// # Errors
///
/// Returns a message if the pitch size is invalid or the line editor cannot
/// be created.
pub fn ui_loop(config: &UiConfig) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let starting = Player::ALL[rng.random_range(0..Player::ALL.len())];
    let mut game = GameState::new(config.rows, config.cols, starting).map_err(|e| e.to_string())?;

    let search_options = match config.threads {
        Some(n_threads) => SearchOptions::with_threads(n_threads),
        None => SearchOptions::default(),
    };
    let search = Search::new(&search_options);
    let mut level = config.level;
    let mut game_mode = config.mode;

    println!("Type 'help' for the list of commands.");

    loop {
        game.print();
        println!();

        if is_computer(game_mode, game.side_to_move()) && !game.is_game_over() {
            let result = search.run(game.board(), &SearchRunOptions::with_level(get_level(level)));
            if let Some(message) = play_search_result(&mut game, &result) {
                println!("{message}");
                continue;
            }
        }

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {err:?}");
                break;
            }
        };
        let _ = rl.add_history_entry(&line);

        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };
        println!();

        match cmd {
            "new" => {
                let starting = game.new_round(&mut rng);
                println!("Round {} starts with {starting}", game.round());
            }
            "level" | "l" => match parts.next().map(str::parse::<usize>) {
                Some(Ok(lv)) if lv <= MAX_LEVEL => {
                    level = lv;
                    println!("Level changed to: {lv}");
                }
                Some(_) => println!("Invalid level. Please specify a value between 0-{MAX_LEVEL}."),
                None => println!(
                    "Current level: {level} (depth {})",
                    get_level(level).depth
                ),
            },
            "mode" | "m" => match parts.next().map(str::parse::<u8>) {
                Some(Ok(mode)) if mode <= 3 => {
                    game_mode = mode;
                    println!("Mode changed to: {mode}");
                }
                Some(_) => println!("Invalid mode number. Please specify a value between 0-3."),
                None => {
                    println!("Current mode: {game_mode}");
                    println!("0: Player 1-Human, Player 2-Computer");
                    println!("1: Player 1-Computer, Player 2-Human");
                    println!("2: Player 1-Computer, Player 2-Computer");
                    println!("3: Player 1-Human, Player 2-Human");
                }
            },
            "go" => {
                if game.is_game_over() {
                    println!("The round is over. Type 'new' to play again.");
                    continue;
                }
                let result = search.run(game.board(), &SearchRunOptions::with_level(get_level(level)));
                print_result(&result);
                if let Some(message) = play_search_result(&mut game, &result) {
                    println!("{message}\n");
                }
            }
            "hint" | "h" => {
                let result = search.run(game.board(), &SearchRunOptions::with_level(get_level(level)));
                print_result(&result);
                match result.best_move {
                    Some(dir) => println!("Suggested move: {}\n", dir.to_string().bright_cyan()),
                    None => println!("No move available.\n"),
                }
            }
            "eval" => {
                for player in Player::ALL {
                    println!("{player}: {:.3}", game.evaluation(player));
                }
                println!();
            }
            "options" | "o" => {
                let board = game.board();
                let options = board.get_options(board.current());
                let names: Vec<String> = options
                    .iter()
                    .map(|d| format!("{d} ({})", d.numpad_key()))
                    .collect();
                println!("Open at {}: {}\n", board.current(), names.join(", "));
            }
            "stats" => {
                for player in Player::ALL {
                    let stats = game.stats(player);
                    println!(
                        "{player}: moves {} bounces {} wins {}",
                        stats.moves, stats.bounces, stats.wins
                    );
                }
                println!("Draws: {}", game.draws());
                println!("Moves this round: {}\n", game.history_string());
            }
            "play" | "p" => {
                let moves: Vec<&str> = parts.collect();
                if let Err(err) = play_sequence(&mut game, &moves) {
                    println!("{err}\n");
                }
            }
            "help" | "?" => print_help(),
            "quit" | "q" => break,
            _ => {
                if let Err(err) = play_sequence(&mut game, &[cmd]) {
                    println!("{err}\n");
                }
            }
        }
    }

    Ok(())
}

fn is_computer(mode: u8, side: Player) -> bool {
    matches!(
        (mode, side),
        (0, Player::Second) | (1, Player::First) | (2, _)
    )
}

/// Splits `tokens` into directions. A token made only of digits is read as a
/// run of numeric keypad keys, so `play 4447` and `play W W W NW` agree.
fn parse_moves(tokens: &[&str]) -> Result<Vec<Direction>, ParseDirectionError> {
    let mut dirs = Vec::new();
    for token in tokens {
        if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit()) {
            for key in token.chars() {
                dirs.push(key.to_string().parse()?);
            }
        } else {
            dirs.push(token.parse()?);
        }
    }
    Ok(dirs)
}

fn play_sequence(game: &mut GameState, tokens: &[&str]) -> Result<(), String> {
    let dirs = parse_moves(tokens).map_err(|e| format!("Unknown command or move: {e}"))?;
    for dir in dirs {
        let mover = game.side_to_move();
        let outcome = game.play(dir).map_err(|e| format!("Illegal move: {e}"))?;
        println!("{mover} plays {dir}{}", describe(outcome));
        if outcome.is_terminal() {
            break;
        }
    }
    println!();
    Ok(())
}

/// Plays the best move of `result` and returns the line to show.
///
/// Returns `None` when the search found nothing to play.
fn play_search_result(game: &mut GameState, result: &SearchResult) -> Option<String> {
    let dir = result.best_move?;
    let mover = game.side_to_move();
    debug!(
        "{mover} plays {dir}: score {:.2}, depth {}, {} nodes",
        result.score, result.depth, result.n_nodes
    );
    let message = match game.play(dir) {
        Ok(outcome) => format!("{mover} plays {dir}{}", describe(outcome)),
        Err(err) => {
            warn!("engine move {dir} rejected: {err}");
            format!("Computer move rejected: {err}")
        }
    };
    Some(message)
}

fn describe(outcome: MoveOutcome) -> String {
    match outcome {
        MoveOutcome::Continue { bounced: true } => " (bounce, move again)".to_string(),
        MoveOutcome::Continue { bounced: false } => String::new(),
        MoveOutcome::DrawDeadEnd => " (dead end, draw)".to_string(),
        MoveOutcome::Win(player) => format!(" ({player} scores!)"),
    }
}

fn print_result(result: &SearchResult) {
    println!("depth | score    | nodes      | pv");
    println!("------------------------------------------");
    println!(
        "{:>5} | {:>8.3} | {:>10} | {}\n",
        result.depth,
        result.score,
        result.n_nodes.to_formatted_string(&Locale::en),
        result.pv_string()
    );
}

fn print_help() {
    println!("Moves:    n s e w ne nw se sw, or numeric keypad digits (8 2 6 4 9 7 3 1)");
    println!("play <moves>   play several moves, e.g. 'play 447' or 'play w w nw'");
    println!("go             let the computer move for the side to move");
    println!("hint           show the computer's choice without playing it");
    println!("new            start a new round with a random starting player");
    println!("mode [0-3]     show or change who plays which side");
    println!("level [0-{MAX_LEVEL}]   show or change the computer strength");
    println!("eval           static evaluation for both players");
    println!("options        open directions at the marker");
    println!("stats          moves, bounces and wins per player");
    println!("quit           leave the game\n");
}
