//! Minimax with Alpha-Beta pruning implementation.

use std::cmp;
use std::time::Instant;

use crate::coretypes::{PlyKind, Score, MAX_DEPTH};
use crate::movelist::{replace_line, Line};
use crate::moveorder::order_nodes;
use crate::node::SearchNode;
use crate::search::{ScoredResult, SearchContext, SearchResult};
use crate::state::GameState;
use crate::timeman::SearchBudget;

/// Base alpha_beta call. The player to move in `state` is the searching player,
/// and the root is searched with bounds (-Inf, +Inf) as the maximizing side.
/// It returns the best action and score for the state in the search tree.
pub fn alpha_beta<S: GameState>(
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

    let scored = alpha_beta_impl(&mut ctx, &root, depth, Score::MIN, Score::MAX, true, &mut pv_line);
    ctx.into_result(scored, pv_line, depth, instant.elapsed())
}

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors, and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.
///
/// The search stops descending at terminal nodes, at depth 0, and when the budget
/// is exhausted. A child that is already won by the side to move at its parent
/// is taken immediately without being searched.
///
/// alpha_beta_impl stores the principal variation below `node` into `pv_line`.
pub(crate) fn alpha_beta_impl<S: GameState>(
    ctx: &mut SearchContext,
    node: &SearchNode<S>,
    depth: PlyKind,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    pv_line: &mut Line<S::Action>,
) -> ScoredResult<S::Action> {
    ctx.nodes += 1;

    if node.state.is_terminal() || depth == 0 || ctx.out_of_time() {
        pv_line.clear();
        return ScoredResult::new(ctx.evaluator.evaluate(node, maximizing), None);
    }

    // The side to move has already won here.
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

    let mut local_pv = Line::new();
    let mut best_action = None;

    if maximizing {
        let mut best_score = Score::MIN;

        for child in children {
            if ctx.out_of_time() {
                return ScoredResult::new(best_score, best_action);
            }

            if ctx.side_has_won(&child.state, true) {
                replace_line(pv_line, child.action.as_ref(), &Line::new());
                return ScoredResult::new(Score::WIN, child.action);
            }

            let scored = alpha_beta_impl(ctx, &child, depth - 1, alpha, beta, false, &mut local_pv);
            if scored.score > best_score {
                best_score = scored.score;
                replace_line(pv_line, child.action.as_ref(), &local_pv);
                best_action = child.action;
            }

            alpha = cmp::max(alpha, best_score);
            if beta <= alpha {
                // Beta cutoff
                break;
            }
        }
        ScoredResult::new(best_score, best_action)
    } else {
        let mut best_score = Score::MAX;

        for child in children {
            if ctx.out_of_time() {
                return ScoredResult::new(best_score, best_action);
            }

            if ctx.side_has_won(&child.state, false) {
                replace_line(pv_line, child.action.as_ref(), &Line::new());
                return ScoredResult::new(Score::LOSS, child.action);
            }

            let scored = alpha_beta_impl(ctx, &child, depth - 1, alpha, beta, true, &mut local_pv);
            if scored.score < best_score {
                best_score = scored.score;
                replace_line(pv_line, child.action.as_ref(), &local_pv);
                best_action = child.action;
            }

            beta = cmp::min(beta, best_score);
            if beta <= alpha {
                // Alpha cutoff
                break;
            }
        }
        ScoredResult::new(best_score, best_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::{Color, Point};
    use crate::evaluation::Evaluator;
    use crate::octi::{OctiAction, OctiState};
    use std::time::Duration;

    #[test]
    fn single_action_depth_one() {
        // Red's only pod is boxed into the corner except for one step.
        let state = OctiState::with_pods(
            Color::Red,
            &[(5, 6)],
            &[(5, 5), (4, 5), (5, 4), (3, 4), (3, 6)],
        );
        let actions = state.legal_actions();
        assert_eq!(actions, vec![OctiAction::step(Point::new(5, 6), Point::new(4, 6))]);

        let result = alpha_beta(&state, 1, SearchBudget::unlimited());
        let action = actions[0];
        let child = SearchNode::child(state.apply(&action), action);
        let direct = Evaluator::new(Color::Red).evaluate(&child, false);

        assert_eq!(result.best_action, Some(action));
        assert_eq!(result.score, direct);
        assert_eq!(result.pv.as_slice(), &[action]);
        assert!(!result.stopped);
    }

    #[test]
    fn immediate_win_taken_at_any_depth() {
        // Red can step onto the black base, or wander elsewhere.
        let state = OctiState::with_pods(Color::Red, &[(0, 4)], &[(5, 0)]);
        let win = OctiAction::step(Point::new(0, 4), Point::new(1, 5));

        for depth in 1..=4 {
            let result = alpha_beta(&state, depth, SearchBudget::unlimited());
            assert_eq!(result.best_action, Some(win));
            assert_eq!(result.score, Score::WIN);
            assert_eq!(result.pv.as_slice(), &[win]);
        }
    }

    #[test]
    fn root_already_decided_is_decisive() {
        // Red pod stands on the black base.
        let won = OctiState::with_pods(Color::Red, &[(2, 5)], &[(0, 6)]);
        let lost = OctiState::with_pods(Color::Black, &[(2, 5)], &[(0, 6)]);

        for depth in 1..=3 {
            let result = alpha_beta(&won, depth, SearchBudget::unlimited());
            assert_eq!(result.score, Score::WIN);
            assert_eq!(result.best_action, None);

            let result = alpha_beta(&lost, depth, SearchBudget::unlimited());
            assert_eq!(result.score, Score::LOSS);
            assert_eq!(result.best_action, None);
        }
    }

    #[test]
    fn exhausted_budget_evaluates_root() {
        let state = OctiState::start_position();
        let budget = SearchBudget::new(Duration::from_millis(1), Duration::from_millis(30));
        let result = alpha_beta(&state, 3, budget);

        assert!(result.stopped);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.best_action, None);
        let direct = Evaluator::new(Color::Red).evaluate(&SearchNode::root(state), true);
        assert_eq!(result.score, direct);
    }

    #[test]
    fn deeper_search_visits_more_nodes() {
        let state = OctiState::start_position();
        let shallow = alpha_beta(&state, 1, SearchBudget::unlimited());
        let deep = alpha_beta(&state, 3, SearchBudget::unlimited());
        assert!(deep.nodes > shallow.nodes);
        assert_eq!(deep.pv.len(), 3);
        assert!(deep.best_action.is_some());
    }
}
