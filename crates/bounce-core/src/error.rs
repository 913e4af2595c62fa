//! Error types for board operations.

use thiserror::Error;

use crate::coord::Coord;
use crate::direction::Direction;

/// Errors raised by [`Board`](crate::board::Board) construction and checked moves.
///
/// [`GameState`](crate::game_state::GameState) reports the same errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("invalid dimensions {rows}x{cols}: need at least {min_rows} rows and {min_cols} columns")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    #[error("invalid layout: expected {expected} cells, got {got}")]
    InvalidLayout { expected: usize, got: usize },

    #[error("coordinate {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },

    #[error("invalid move: direction {0} is blocked")]
    InvalidMove(Direction),

    #[error("game already over")]
    GameOver,
}
