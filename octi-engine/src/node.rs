//! Search tree nodes.

use crate::state::GameState;

/// A node in the search tree. It owns its state and the action that produced it.
/// The root node has no producing action.
///
/// Nodes hold no link to their parent. Each level of the search reports the
/// producing action of its best child, so the action played at the root is
/// carried back up by return value alone.
#[derive(Debug, Clone)]
pub struct SearchNode<S: GameState> {
    pub state: S,
    pub action: Option<S::Action>,
}

impl<S: GameState> SearchNode<S> {
    /// Create a root node with no producing action.
    pub fn root(state: S) -> Self {
        Self {
            state,
            action: None,
        }
    }

    /// Create a node for the state reached by playing `action`.
    pub fn child(state: S, action: S::Action) -> Self {
        Self {
            state,
            action: Some(action),
        }
    }

    /// Generate one child node per legal action from this node's state.
    pub fn children(&self) -> Vec<Self> {
        self.state
            .legal_actions()
            .into_iter()
            .map(|action| Self::child(self.state.apply(&action), action))
            .collect()
    }
}
