//! Enumeration of the direction sequences that make up one turn.
//!
//! A turn is every move a player makes until the marker lands on a fresh
//! cell. The walk below mirrors a perft run: it expands each open direction
//! and stops a line when the turn passes, the game ends or the ply limit is
//! reached.

use crate::board::{Board, MoveOutcome};
use crate::direction::Direction;

/// Lists every sequence of directions the active player can play this turn.
///
/// # Arguments
///
/// * `board` - Position to expand. It is never modified.
/// * `max_plies` - Longest sequence to follow. Longer bounce chains are cut
///   at this length.
///
/// # Returns
///
/// The sequences in canonical direction order. Empty when the game is over,
/// `max_plies` is 0 or the marker has no open direction.
pub fn turn_sequences(board: &Board, max_plies: u32) -> Vec<Vec<Direction>> {
    let mut sequences = Vec::new();
    let mut line = Vec::with_capacity(max_plies as usize);
    collect(board, max_plies, &mut line, &mut sequences);
    sequences
}

/// Counts the sequences [`turn_sequences`] would return without building them.
pub fn count_turns(board: &Board, max_plies: u32) -> u64 {
    if board.is_game_over() || max_plies == 0 {
        return 0;
    }

    let mut nodes = 0;
    for dir in board.get_options(board.current()) {
        let mut next = board.duplicate();
        let outcome = next.make_move(dir);

        if ends_turn(outcome) || max_plies <= 1 {
            nodes += 1;
        } else {
            nodes += count_turns(&next, max_plies - 1).max(1);
        }
    }
    nodes
}

fn collect(board: &Board, max_plies: u32, line: &mut Vec<Direction>, out: &mut Vec<Vec<Direction>>) {
    if board.is_game_over() || max_plies == 0 {
        return;
    }

    for dir in board.get_options(board.current()) {
        let mut next = board.duplicate();
        let outcome = next.make_move(dir);
        line.push(dir);

        if ends_turn(outcome) || max_plies <= 1 {
            out.push(line.clone());
        } else {
            let before = out.len();
            collect(&next, max_plies - 1, line, out);
            // Stuck after a bounce on a malformed board.
            if out.len() == before {
                out.push(line.clone());
            }
        }

        line.pop();
    }
}

#[inline]
fn ends_turn(outcome: MoveOutcome) -> bool {
    !matches!(outcome, MoveOutcome::Continue { bounced: true })
}
