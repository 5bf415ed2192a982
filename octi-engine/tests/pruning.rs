//! Pruning
//!
//! Alpha-beta, negamax and plain minimax must agree on every tree.
//! The trees here are generated from a seed, so the search is exercised on a
//! game with irregular branching, early wins and positions with no actions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use octi_engine::coretypes::{Color, Point};
use octi_engine::search::{alpha_beta, minimax, negamax};
use octi_engine::*;

const RED_BASE: [Point; 2] = [Point::new(0, 0), Point::new(1, 0)];
const BLACK_BASE: [Point; 2] = [Point::new(4, 6), Point::new(5, 6)];

#[derive(Debug, Clone, PartialEq)]
struct TreeAction {
    index: u8,
    jump: bool,
}

impl Action for TreeAction {
    fn is_jump(&self) -> bool {
        self.jump
    }
}

/// A node of a random game tree. Everything about a node is derived from the
/// tree seed and the path of action indices that leads to it.
#[derive(Debug, Clone)]
struct TreeState {
    seed: u64,
    path: Vec<u8>,
    player: Color,
    red: Vec<Point>,
    black: Vec<Point>,
    winner: Option<Color>,
    jumps: Vec<bool>,
}

impl TreeState {
    fn root(seed: u64) -> Self {
        Self::generate(seed, Vec::new(), Color::Red)
    }

    fn generate(seed: u64, path: Vec<u8>, player: Color) -> Self {
        let key = path
            .iter()
            .fold(seed, |key, &index| key.wrapping_mul(31).wrapping_add(index as u64 + 1));
        let mut rng = StdRng::seed_from_u64(key);

        let pieces = |rng: &mut StdRng| -> Vec<Point> {
            let count = rng.gen_range(1..=4);
            (0..count)
                .map(|_| Point::new(rng.gen_range(0..6), rng.gen_range(0..7)))
                .collect()
        };
        let red = pieces(&mut rng);
        let black = pieces(&mut rng);

        // The root is never decided.
        let winner = match rng.gen_range(0..16) {
            0 if !path.is_empty() => Some(Color::Red),
            1 if !path.is_empty() => Some(Color::Black),
            _ => None,
        };
        let branching = if winner.is_some() { 0 } else { rng.gen_range(0..=4) };
        let branching = if path.is_empty() { branching.max(2) } else { branching };
        let jumps = (0..branching).map(|_| rng.gen_bool(0.25)).collect();

        Self {
            seed,
            path,
            player,
            red,
            black,
            winner,
            jumps,
        }
    }
}

impl GameState for TreeState {
    type Action = TreeAction;
    type Piece = Point;

    fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    fn winner(&self) -> Option<Color> {
        self.winner
    }

    fn legal_actions(&self) -> Vec<TreeAction> {
        self.jumps
            .iter()
            .enumerate()
            .map(|(index, &jump)| TreeAction {
                index: index as u8,
                jump,
            })
            .collect()
    }

    fn apply(&self, action: &TreeAction) -> Self {
        let mut path = self.path.clone();
        path.push(action.index);
        Self::generate(self.seed, path, !self.player)
    }

    fn to_move(&self) -> Color {
        self.player
    }

    fn pieces(&self, color: Color) -> Vec<Point> {
        match color {
            Color::Red => self.red.clone(),
            Color::Black => self.black.clone(),
        }
    }

    fn position_of(&self, piece: &Point) -> Point {
        *piece
    }

    fn base(&self, color: Color) -> &[Point] {
        match color {
            Color::Red => &RED_BASE,
            Color::Black => &BLACK_BASE,
        }
    }
}

#[test]
fn alpha_beta_matches_minimax_on_random_trees() {
    for seed in 0..40 {
        let state = TreeState::root(seed);
        for depth in 1..=5 {
            let full = minimax(&state, depth);
            let pruned = alpha_beta(&state, depth, SearchBudget::unlimited());

            assert_eq!(full.score, pruned.score, "seed {seed} depth {depth}");
            assert_eq!(full.best_action, pruned.best_action, "seed {seed} depth {depth}");
            assert!(full.nodes >= pruned.nodes);
        }
    }
}

#[test]
fn negamax_matches_alpha_beta_on_random_trees() {
    for seed in 100..140 {
        let state = TreeState::root(seed);
        for depth in 1..=5 {
            let ab = alpha_beta(&state, depth, SearchBudget::unlimited());
            let nm = negamax(&state, depth, SearchBudget::unlimited());

            assert_eq!(ab.score, nm.score, "seed {seed} depth {depth}");
            assert_eq!(ab.best_action, nm.best_action, "seed {seed} depth {depth}");
            assert_eq!(ab.pv, nm.pv, "seed {seed} depth {depth}");
            assert_eq!(ab.nodes, nm.nodes, "seed {seed} depth {depth}");
        }
    }
}

#[test]
fn searching_player_follows_side_to_move() {
    let mut state = TreeState::root(7);
    state.player = Color::Black;
    let result = alpha_beta(&state, 3, SearchBudget::unlimited());
    assert_eq!(result.player, Color::Black);
    assert_eq!(result.score, minimax(&state, 3).score);
}

#[test]
fn root_always_has_an_action() {
    for seed in 0..40 {
        let state = TreeState::root(seed);
        let result = alpha_beta(&state, 1, SearchBudget::unlimited());
        assert!(result.best_action.is_some(), "seed {seed}");
    }
}
