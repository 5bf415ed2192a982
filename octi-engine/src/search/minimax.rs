//! Minimax implementation.
//!
//! Minimax visits every node to the requested depth. It shares node ordering,
//! win detection and evaluation with alpha-beta, so the two must always agree on
//! the score and action of a root, and only differ in the nodes they visit.

use std::time::Instant;

use crate::coretypes::{PlyKind, Score, MAX_DEPTH};
use crate::movelist::{replace_line, Line};
use crate::moveorder::order_nodes;
use crate::node::SearchNode;
use crate::search::{ScoredResult, SearchContext, SearchResult};
use crate::state::GameState;
use crate::timeman::SearchBudget;

/// Base minimax call. The player to move in `state` is the searching player.
/// There is no time budget, the search always completes.
pub fn minimax<S: GameState>(state: &S, depth: PlyKind) -> SearchResult<S::Action> {
    assert_ne!(depth, 0);
    assert!(depth <= MAX_DEPTH);

    let instant = Instant::now();
    let mut ctx = SearchContext::new(state.to_move(), SearchBudget::unlimited());
    let mut pv_line = Line::new();
    let root = SearchNode::root(state.clone());

    let scored = minimax_impl(&mut ctx, &root, depth, true, &mut pv_line);
    ctx.into_result(scored, pv_line, depth, instant.elapsed())
}

fn minimax_impl<S: GameState>(
    ctx: &mut SearchContext,
    node: &SearchNode<S>,
    depth: PlyKind,
    maximizing: bool,
    pv_line: &mut Line<S::Action>,
) -> ScoredResult<S::Action> {
    ctx.nodes += 1;

    // Stop at terminal node or last depth.
    if node.state.is_terminal() || depth == 0 {
        pv_line.clear();
        return ScoredResult::new(ctx.evaluator.evaluate(node, maximizing), None);
    }

    if ctx.side_has_won(&node.state, maximizing) {
        pv_line.clear();
        let score = if maximizing { Score::WIN } else { Score::LOSS };
        return ScoredResult::new(score, node.action.clone());
    }

    let mut children = node.children();
    if children.is_empty() {
        pv_line.clear();
        return ScoredResult::new(ctx.evaluator.evaluate(node, maximizing), None);
    }
    order_nodes(&mut children, maximizing, ctx.player());

    let (mut best_score, win_score) = if maximizing {
        (Score::MIN, Score::WIN)
    } else {
        (Score::MAX, Score::LOSS)
    };
    let mut best_action = None;
    let mut local_pv = Line::new();

    for child in children {
        if ctx.side_has_won(&child.state, maximizing) {
            replace_line(pv_line, child.action.as_ref(), &Line::new());
            return ScoredResult::new(win_score, child.action);
        }

        let scored = minimax_impl(ctx, &child, depth - 1, !maximizing, &mut local_pv);
        let improves = if maximizing {
            scored.score > best_score
        } else {
            scored.score < best_score
        };
        if improves {
            best_score = scored.score;
            replace_line(pv_line, child.action.as_ref(), &local_pv);
            best_action = child.action;
        }
    }

    ScoredResult::new(best_score, best_action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octi::OctiState;
    use crate::search::alpha_beta;

    #[test]
    fn minimax_matches_alpha_beta_from_start() {
        let state = OctiState::start_position();
        for depth in 1..=3 {
            let full = minimax(&state, depth);
            let pruned = alpha_beta(&state, depth, SearchBudget::unlimited());

            assert_eq!(full.score, pruned.score);
            assert_eq!(full.best_action, pruned.best_action);
            assert!(full.nodes >= pruned.nodes);
        }
    }

    #[test]
    fn depth_one_visits_every_child() {
        let state = OctiState::start_position();
        let result = minimax(&state, 1);
        assert_eq!(result.nodes, 1 + state.legal_actions().len() as u64);
    }
}
