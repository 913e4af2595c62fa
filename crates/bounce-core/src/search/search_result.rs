//! Search result types.

use crate::direction::Direction;
use crate::search::minimax::NodeValue;
use crate::search::search_context::SearchContext;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub score: Score,
    /// First direction of the best line, or `None` when there is nothing to play.
    pub best_move: Option<Direction>,
    pub pv_line: Vec<Direction>,
    pub n_nodes: u64,
    pub depth: Depth,
}

impl SearchResult {
    pub(crate) fn from_node(node: NodeValue, ctx: &SearchContext, depth: Depth) -> Self {
        SearchResult {
            score: node.score,
            best_move: node.pv.first().copied(),
            pv_line: node.pv,
            n_nodes: ctx.n_nodes,
            depth,
        }
    }

    /// Formats the principal variation as space-separated direction names.
    pub fn pv_string(&self) -> String {
        self.pv_line
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
