//! Move Ordering
//!
//! Functions used for ordering child nodes before they are searched.
//!
//! Move ordering is important for alpha-beta pruning performance.
//! If the best or good moves are searched early on in an alpha-beta search,
//! pruning occurs more frequently. Ordering never changes the value a search
//! returns, only how many nodes are visited to find it.
//!
//! The strategy is material based: children that leave the side not favored
//! in the current ply with the fewest pieces are searched first.

use crate::coretypes::Color;
use crate::node::SearchNode;
use crate::state::GameState;

/// Returns the piece count of the side that is not favored at this ply.
/// When maximizing that is the opponent of `player`, otherwise it is `player` itself.
pub fn unfavored_pieces<S: GameState>(node: &SearchNode<S>, maximizing: bool, player: Color) -> usize {
    let unfavored = if maximizing { !player } else { player };
    node.state.piece_count(unfavored)
}

/// Order child nodes in place, ascending by the unfavored side's piece count.
/// The sort is stable, so children with equal counts keep their generated order.
///
/// # Arguments
///
/// * `nodes`: Child nodes of the position being searched.
/// * `maximizing`: True if the searching player is to move at this ply.
/// * `player`: The searching player.
pub fn order_nodes<S: GameState>(nodes: &mut [SearchNode<S>], maximizing: bool, player: Color) {
    nodes.sort_by_cached_key(|node| unfavored_pieces(node, maximizing, player));
}
