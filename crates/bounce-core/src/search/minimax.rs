//! Depth-limited minimax with alpha-beta pruning.
//!
//! Every node owns its own board duplicate, so sibling branches never share
//! mutable state. Directions are enumerated in canonical order and the first
//! direction reaching the best value is kept.

use log::trace;

use crate::board::Board;
use crate::direction::Direction;
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::{Depth, Player, Score};

/// Value and principal variation of a searched node.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeValue {
    pub score: Score,
    /// Best line from this node; empty at leaves.
    pub pv: Vec<Direction>,
}

impl NodeValue {
    fn leaf(score: Score) -> Self {
        NodeValue {
            score,
            pv: Vec::new(),
        }
    }
}

/// Explores the tree below `board` to at most `depth` plies.
///
/// # Arguments
///
/// * `board` - Root position. It is never modified.
/// * `depth` - Remaining plies.
/// * `alpha`, `beta` - Search window. Pass `-inf`/`+inf` for a full search.
/// * `maximizing` - The player whose score is maximized.
///
/// # Returns
///
/// The minimax score and the first direction of the best line. The direction
/// is `None` when the root is terminal, `depth` is 0 or no direction is open.
pub fn solve(
    board: &Board,
    depth: Depth,
    alpha: Score,
    beta: Score,
    maximizing: Player,
) -> SearchResult {
    let mut ctx = SearchContext::new();
    let node = alpha_beta(&mut ctx, board, depth, alpha, beta, maximizing);
    SearchResult::from_node(node, &ctx, depth)
}

/// Plain minimax without pruning.
///
/// Uses the same leaf rule and tie-break as [`solve`], so both agree on the
/// score and on the first best direction.
pub fn minimax(board: &Board, depth: Depth, maximizing: Player) -> SearchResult {
    let mut ctx = SearchContext::new();
    let node = full_width(&mut ctx, board, depth, maximizing);
    SearchResult::from_node(node, &ctx, depth)
}

/// Evaluates a leaf.
///
/// The side on move at the leaf is compared with the maximizing player; the
/// evaluator is called for whichever of the two sides is the maximizer, so
/// leaf scores from all branches share one perspective.
#[inline]
pub(crate) fn leaf_score(board: &Board, maximizing: Player) -> Score {
    if board.active_player() != maximizing {
        board.static_evaluator(board.non_active_player())
    } else {
        board.static_evaluator(board.active_player())
    }
}

pub(crate) fn alpha_beta(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
    mut alpha: Score,
    mut beta: Score,
    maximizing: Player,
) -> NodeValue {
    ctx.n_nodes += 1;

    if board.is_game_over() || depth == 0 {
        return NodeValue::leaf(leaf_score(board, maximizing));
    }

    let options = board.get_options(board.current());
    if options.is_empty() {
        // Only reachable on malformed boards; scored like a dead end.
        return NodeValue::leaf(leaf_score(board, maximizing));
    }

    let is_max_node = board.active_player() == maximizing;
    let mut best = NodeValue::leaf(if is_max_node {
        Score::NEG_INFINITY
    } else {
        Score::INFINITY
    });

    for dir in options {
        let mut next = board.duplicate();
        next.make_move(dir);

        let child = alpha_beta(ctx, &next, depth - 1, alpha, beta, maximizing);
        let score = child.score;

        if is_max_node {
            if score > best.score {
                best = NodeValue::extend(dir, child);
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = NodeValue::extend(dir, child);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            ctx.record_cutoff();
            break;
        }
    }

    best
}

fn full_width(
    ctx: &mut SearchContext,
    board: &Board,
    depth: Depth,
    maximizing: Player,
) -> NodeValue {
    ctx.n_nodes += 1;

    if board.is_game_over() || depth == 0 {
        return NodeValue::leaf(leaf_score(board, maximizing));
    }

    let options = board.get_options(board.current());
    if options.is_empty() {
        return NodeValue::leaf(leaf_score(board, maximizing));
    }

    let is_max_node = board.active_player() == maximizing;
    let mut best: Option<NodeValue> = None;

    for dir in options {
        let mut next = board.duplicate();
        next.make_move(dir);

        let child = full_width(ctx, &next, depth - 1, maximizing);
        let better = match &best {
            None => true,
            Some(b) if is_max_node => child.score > b.score,
            Some(b) => child.score < b.score,
        };
        if better {
            best = Some(NodeValue::extend(dir, child));
        }
    }

    best.unwrap_or_default()
}

impl NodeValue {
    /// Prepends `dir` to the child's line.
    pub(crate) fn extend(dir: Direction, child: NodeValue) -> NodeValue {
        let mut pv = Vec::with_capacity(child.pv.len() + 1);
        pv.push(dir);
        pv.extend(child.pv);
        NodeValue {
            score: child.score,
            pv,
        }
    }
}

/// Picks the best child of a root from scores computed independently.
///
/// `children` must be in canonical direction order; ties keep the earliest.
pub(crate) fn select_best(
    children: Vec<(Direction, NodeValue)>,
    is_max_node: bool,
) -> Option<NodeValue> {
    let mut best: Option<NodeValue> = None;
    for (dir, child) in children {
        trace!("root move {dir}: {:.3}", child.score);
        let better = match &best {
            None => true,
            Some(b) if is_max_node => child.score > b.score,
            Some(b) => child.score < b.score,
        };
        if better {
            best = Some(NodeValue::extend(dir, child));
        }
    }
    best
}
