//! Root splitting over a rayon pool.

use rayon::prelude::*;

use crate::board::Board;
use crate::direction::Direction;
use crate::search::minimax::{NodeValue, alpha_beta, select_best, solve};
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, Player, Score};

/// Searches each root direction as an independent task.
///
/// Every task gets its own board duplicate and a full window, so no state is
/// shared between workers. The children are reduced in canonical order, which
/// yields the same score and direction as a sequential [`solve`].
pub fn search_root_parallel(
    pool: &rayon::ThreadPool,
    board: &Board,
    depth: Depth,
    maximizing: Player,
) -> SearchResult {
    let options = board.get_options(board.current());
    if board.is_game_over() || depth == 0 || options.is_empty() {
        return solve(board, depth, Score::NEG_INFINITY, Score::INFINITY, maximizing);
    }

    let children: Vec<(Direction, NodeValue, SearchContext)> = pool.install(|| {
        options
            .as_slice()
            .par_iter()
            .map(|&dir| {
                let mut next = board.duplicate();
                next.make_move(dir);
                let mut ctx = SearchContext::new();
                let node = alpha_beta(
                    &mut ctx,
                    &next,
                    depth - 1,
                    Score::NEG_INFINITY,
                    Score::INFINITY,
                    maximizing,
                );
                (dir, node, ctx)
            })
            .collect()
    });

    // Root node itself.
    let mut total = SearchContext::new();
    total.n_nodes = 1;

    let mut scored = Vec::with_capacity(children.len());
    for (dir, node, ctx) in children {
        total.merge(&ctx);
        scored.push((dir, node));
    }

    let is_max_node = board.active_player() == maximizing;
    let best = select_best(scored, is_max_node).unwrap_or_default();
    SearchResult::from_node(best, &total, depth)
}
