//! The interface between the search core and the game it plays.
//!
//! The search never looks inside a game's board. Everything it needs to know
//! about a position is asked through [`GameState`], and everything it needs to
//! know about a move through [`Action`]. The reference Octi rules in
//! [`crate::octi`] are one implementation of these traits.

use std::fmt::Debug;

use crate::coretypes::{Color, Point};

/// A move that can be applied to a game state.
pub trait Action: Clone + Debug + PartialEq {
    /// Returns true if this action jumps over another piece.
    fn is_jump(&self) -> bool;
}

/// A position in a two player, zero-sum, perfect information game.
///
/// Applying an action yields a new state, the receiver is never mutated.
pub trait GameState: Clone {
    type Action: Action;
    type Piece;

    /// Returns true if the game is over in this state.
    fn is_terminal(&self) -> bool;

    /// Returns the color that has won in this state, or None if undecided.
    fn winner(&self) -> Option<Color>;

    /// Returns every action available to the player to move. Order is not significant.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Returns the state that results from playing `action` in this state.
    fn apply(&self, action: &Self::Action) -> Self;

    /// Returns the color of the player to move.
    fn to_move(&self) -> Color;

    /// Returns all pieces that belong to a player.
    fn pieces(&self, color: Color) -> Vec<Self::Piece>;

    /// Returns the board cell a piece stands on.
    fn position_of(&self, piece: &Self::Piece) -> Point;

    /// Returns the home base cells of a player.
    fn base(&self, color: Color) -> &[Point];

    /// Returns the number of pieces a player has on the board.
    fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).len()
    }
}
