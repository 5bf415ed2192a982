//! Iterative Deepening Search.

use tracing::debug;

use crate::coretypes::PlyKind;
use crate::search::{Algorithm, SearchResult};
use crate::state::GameState;
use crate::timeman::SearchBudget;

/// Searches game tree to depth `max_depth` using iterative deepening.
///
/// Each depth from 1 to `max_depth` is searched in turn. An iteration only
/// replaces the previous result if it completed before the budget ran out,
/// so the result returned always comes from the deepest complete iteration.
/// Deepening also ends early once an iteration proves a win or a loss.
///
/// Returns None if not even the depth 1 iteration completed in time.
pub fn ids<S: GameState>(
    state: &S,
    max_depth: PlyKind,
    budget: SearchBudget,
    algorithm: Algorithm,
) -> Option<SearchResult<S::Action>> {
    assert_ne!(max_depth, 0);

    let mut completed: Option<SearchResult<S::Action>> = None;
    let mut nodes = 0;

    for depth in 1..=max_depth {
        let result = algorithm.search(state, depth, budget);
        nodes += result.nodes;

        // A search that ran out of time may not have examined every action.
        if result.stopped || budget.is_exhausted() {
            debug!(
                depth,
                nodes = result.nodes,
                elapsed_ms = budget.elapsed().as_millis() as u64,
                "iteration discarded, time budget exhausted"
            );
            break;
        }

        debug!(
            depth,
            score = %result.score,
            nodes = result.nodes,
            elapsed_ms = budget.elapsed().as_millis() as u64,
            "iteration completed"
        );

        let decisive = result.score.is_decisive();
        completed = Some(result);

        if decisive {
            debug!(depth, "decisive score found, deepening stopped");
            break;
        }
    }

    completed.map(|mut result| {
        result.nodes = nodes;
        result.elapsed = budget.elapsed();
        result
    })
}
