//! Negamax implementation of Minimax with Alpha-Beta pruning.

use std::cmp;
use std::time::Instant;

use crate::coretypes::{PlyKind, Score, MAX_DEPTH};
use crate::movelist::{replace_line, Line};
use crate::moveorder::order_nodes;
use crate::node::SearchNode;
use crate::search::{ScoredResult, SearchContext, SearchResult};
use crate::state::GameState;
use crate::timeman::SearchBudget;

/// Converts a score relative to the searching player into one relative to the side
/// searched at this ply, and back.
const fn sign(maximizing: bool) -> i32 {
    if maximizing {
        1
    } else {
        -1
    }
}

/// Negamax implementation of Minimax with alpha-beta pruning.
/// Negamax searches to a given depth and returns the best action found.
/// Internally, Negamax treats the side to move at each ply as the maxing player,
/// however the final score returned is relative to the searching player,
/// exactly as `alpha_beta` reports it.
pub fn negamax<S: GameState>(
    state: &S,
    depth: PlyKind,
    budget: SearchBudget,
) -> SearchResult<S::Action> {
    debug_assert_ne!(depth, 0);
    debug_assert!(depth <= MAX_DEPTH);

    let instant = Instant::now();
    let mut ctx = SearchContext::new(state.to_move(), budget);
    let mut pv_line = Line::new();
    let root = SearchNode::root(state.clone());

    let scored = negamax_impl(&mut ctx, &root, depth, Score::MIN, Score::MAX, true, &mut pv_line);
    ctx.into_result(scored, pv_line, depth, instant.elapsed())
}

/// The side to move at a ply is always treated as the maxing player.
/// negamax_impl returns the max possible score of that side.
/// Therefore, when interpreting the score of a child node, the score needs to be negated.
///
/// `maximizing` tracks whether the searching player is to move, because the
/// evaluator and win checks are defined relative to the searching player.
///
/// Parameters:
///
/// ctx: Searching player, budget and node counter.
/// node: current node to search.
/// depth: remaining depth to search to.
/// alpha: Best (greatest) guaranteed value for current side.
/// beta: Best (lowest) guaranteed value for opposite side.
/// pv_line: Line of actions in principal variation.
fn negamax_impl<S: GameState>(
    ctx: &mut SearchContext,
    node: &SearchNode<S>,
    depth: PlyKind,
    mut alpha: Score,
    beta: Score,
    maximizing: bool,
    pv_line: &mut Line<S::Action>,
) -> ScoredResult<S::Action> {
    ctx.nodes += 1;

    // Stop search at terminal nodes, last depth, or when out of time.
    // Return evaluation with respect to current side.
    if node.state.is_terminal() || depth == 0 || ctx.out_of_time() {
        pv_line.clear();
        let score = ctx.evaluator.evaluate(node, maximizing) * sign(maximizing);
        return ScoredResult::new(score, None);
    }

    if ctx.side_has_won(&node.state, maximizing) {
        pv_line.clear();
        return ScoredResult::new(Score::WIN, node.action.clone());
    }

    let mut children = node.children();
    if children.is_empty() {
        pv_line.clear();
        let score = ctx.evaluator.evaluate(node, maximizing) * sign(maximizing);
        return ScoredResult::new(score, None);
    }
    order_nodes(&mut children, maximizing, ctx.player());

    let mut local_pv = Line::new();
    let mut best_score = Score::MIN;
    let mut best_action = None;

    // For each child of current node, recursively find maxing action.
    for child in children {
        if ctx.out_of_time() {
            return ScoredResult::new(best_score, best_action);
        }

        if ctx.side_has_won(&child.state, maximizing) {
            replace_line(pv_line, child.action.as_ref(), &Line::new());
            return ScoredResult::new(Score::WIN, child.action);
        }

        // Get value of an action relative to current side.
        let child_score =
            -negamax_impl(ctx, &child, depth - 1, -beta, -alpha, !maximizing, &mut local_pv).score;

        if child_score > best_score {
            best_score = child_score;
            replace_line(pv_line, child.action.as_ref(), &local_pv);
            best_action = child.action;
        }

        // Cut-off has occurred, no further children of this node need to be searched.
        alpha = cmp::max(alpha, best_score);
        if alpha >= beta {
            break;
        }
    }

    ScoredResult::new(best_score, best_action)
}
