//! Core library of the bounce board game: the board model, move rules, the
//! static evaluator and a minimax search with alpha-beta pruning.

pub mod board;
pub mod constants;
pub mod coord;
pub mod direction;
pub mod direction_list;
pub mod edge_mask;
pub mod error;
pub mod game_state;
pub mod level;
pub mod search;
pub mod turns;
pub mod types;
