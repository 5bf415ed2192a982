//! Static evaluation of positions.
//!
//! An evaluation is a plain `Score` relative to the searching player.
//! Decided games are scored at the `Score::WIN`/`Score::LOSS` extremes, which
//! no combination of the heuristic terms below can reach.

use crate::coretypes::{Color, Point, Score, ScoreKind};
use crate::node::SearchNode;
use crate::state::{Action, GameState};

// Evaluation Constants
pub const PIECE_VALUE: ScoreKind = 500;
pub const GOAL_DISTANCE_WEIGHT: ScoreKind = 10_000;
pub const GOAL_DISTANCE_CEILING: ScoreKind = 10;
pub const JUMP_BONUS: ScoreKind = 10_000;

/// Evaluator scores positions for one searching player.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Evaluator {
    player: Color,
}

impl Evaluator {
    pub const fn new(player: Color) -> Self {
        Self { player }
    }

    /// Returns the searching player.
    pub const fn player(&self) -> Color {
        self.player
    }

    /// Returns the searching player's opponent.
    pub fn opponent(&self) -> Color {
        !self.player
    }

    /// Primary evaluate function for engine.
    ///
    /// A decided game returns immediately. Otherwise the score sums material,
    /// goal distance for the side selected by `maximizing`, and a bonus for
    /// reaching the node by a jump.
    pub fn evaluate<S: GameState>(&self, node: &SearchNode<S>, maximizing: bool) -> Score {
        match node.state.winner() {
            Some(winner) if winner == self.player => return Score::WIN,
            Some(_) => return Score::LOSS,
            None => (),
        }

        let mut score = self.material(&node.state);

        if maximizing {
            score += goal_distance(&node.state, self.player);
        } else {
            score -= goal_distance(&node.state, self.opponent());
        }

        if node.action.as_ref().map_or(false, Action::is_jump) {
            if maximizing {
                score += Score(JUMP_BONUS);
            } else {
                score -= Score(JUMP_BONUS);
            }
        }

        score
    }

    /// Returns the piece count difference in favor of the searching player.
    pub fn material<S: GameState>(&self, state: &S) -> Score {
        let own = state.piece_count(self.player) as ScoreKind;
        let other = state.piece_count(self.opponent()) as ScoreKind;
        Score(PIECE_VALUE) * own - Score(PIECE_VALUE) * other
    }
}

/// Returns the goal distance score of one side. Every piece earns
/// `(10 - d) * 10000`, where `d` is its distance to the nearest cell of the opposing base.
pub fn goal_distance<S: GameState>(state: &S, color: Color) -> Score {
    let goal = state.base(!color);
    state
        .pieces(color)
        .iter()
        .map(|piece| {
            let distance = distance_to_goal(state.position_of(piece), goal);
            Score(GOAL_DISTANCE_CEILING - distance) * GOAL_DISTANCE_WEIGHT
        })
        .fold(Score::default(), |acc, value| acc + value)
}

/// Returns the minimum Manhattan distance from `point` to any goal cell.
/// A piece with no goal cells to reach contributes nothing to the goal distance score.
pub fn distance_to_goal(point: Point, goal: &[Point]) -> ScoreKind {
    goal.iter()
        .map(|cell| point.manhattan(cell))
        .min()
        .unwrap_or(GOAL_DISTANCE_CEILING)
}
