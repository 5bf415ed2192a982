//! Search functions.

mod alpha_beta;
mod ids;
mod minimax;
mod negamax;

pub use alpha_beta::*;
pub use ids::*;
pub use minimax::*;
pub use negamax::*;

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::Duration;

use crate::coretypes::{Color, PlyKind, Score};
use crate::error::{self, ErrorKind};
use crate::evaluation::Evaluator;
use crate::movelist::{display, Line};
use crate::state::GameState;
use crate::timeman::SearchBudget;

/// A score paired with the action that achieves it.
/// The action is unset for positions that were evaluated statically.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoredResult<A> {
    pub score: Score,
    pub action: Option<A>,
}

impl<A> ScoredResult<A> {
    pub fn new(score: Score, action: Option<A>) -> Self {
        Self { score, action }
    }
}

/// The results found from running a search on some root state.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// The best action to play discovered from search, if any action was searched.
    pub best_action: Option<A>,
    /// The score of playing the best action, relative to the searching player.
    pub score: Score,
    /// The principal variation, or the sequence of best actions that leads to `score`.
    pub pv: Line<A>,
    /// The player to move for the root state that was searched.
    pub player: Color,
    /// Depth in plies that was searched. This depth is only fully searched if `stopped` is false.
    pub depth: PlyKind,
    /// Total number of nodes visited in a search.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
    /// Flag that indicates this search ran out of time before it completed.
    pub stopped: bool,
}

impl<A> SearchResult<A> {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.nodes as f64 / secs).round()
        } else {
            0.0
        }
    }

    /// Returns the color who is leading in the search of the root state, or None if even.
    pub fn leading(&self) -> Option<Color> {
        match self.score.signum() {
            1 => Some(self.player),
            -1 => Some(!self.player),
            _ => None,
        }
    }
}

impl<A: Display> Display for SearchResult<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let best_action = self
            .best_action
            .as_ref()
            .map_or_else(|| "none".to_string(), ToString::to_string);

        writeln!(f, "SearchResult {{")?;
        writeln!(f, "    best_action: {best_action}")?;
        writeln!(f, "    score      : {}", self.score)?;
        writeln!(f, "    pv         : {}", display(&self.pv))?;
        writeln!(f, "    player     : {}", self.player)?;
        writeln!(f, "    depth      : {}", self.depth)?;
        writeln!(f, "    nodes      : {}", self.nodes)?;
        writeln!(f, "    nps        : {}", self.nps())?;
        writeln!(
            f,
            "    elapsed    : {}.{:03}s",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        )?;
        writeln!(f, "    stopped    : {}", self.stopped)?;
        write!(f, "}}")
    }
}

/// Search procedure used by iterative deepening for each depth.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Algorithm {
    /// Minimax with alpha-beta pruning, written with separate maximizing and minimizing branches.
    #[default]
    AlphaBeta,
    /// The same search in signed negamax form.
    Negamax,
}

impl Algorithm {
    /// Run one depth-limited search of `state` within `budget`.
    pub fn search<S: GameState>(
        &self,
        state: &S,
        depth: PlyKind,
        budget: SearchBudget,
    ) -> SearchResult<S::Action> {
        match self {
            Algorithm::AlphaBeta => alpha_beta(state, depth, budget),
            Algorithm::Negamax => negamax(state, depth, budget),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::Negamax => "negamax",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s {
            "alpha-beta" | "alphabeta" => Ok(Algorithm::AlphaBeta),
            "negamax" => Ok(Algorithm::Negamax),
            _ => Err((ErrorKind::ConfigInvalid, format!("unknown algorithm {s}")).into()),
        }
    }
}

/// State shared by every node of one depth-limited search.
#[derive(Debug)]
pub(crate) struct SearchContext {
    pub evaluator: Evaluator,
    pub budget: SearchBudget,
    pub nodes: u64,
    pub stopped: bool,
}

impl SearchContext {
    pub fn new(player: Color, budget: SearchBudget) -> Self {
        Self {
            evaluator: Evaluator::new(player),
            budget,
            nodes: 0,
            stopped: false,
        }
    }

    /// The searching player.
    pub fn player(&self) -> Color {
        self.evaluator.player()
    }

    /// Returns true once the budget is exhausted, and marks the search as stopped.
    pub fn out_of_time(&mut self) -> bool {
        if self.budget.is_exhausted() {
            self.stopped = true;
        }
        self.stopped
    }

    /// Returns true if `side` has won in `state`. The side is the searching
    /// player when `maximizing` and its opponent otherwise.
    pub fn side_has_won<S: GameState>(&self, state: &S, maximizing: bool) -> bool {
        let side = if maximizing {
            self.player()
        } else {
            !self.player()
        };
        state.winner() == Some(side)
    }

    /// Package the outcome of a root search.
    pub fn into_result<A>(
        self,
        scored: ScoredResult<A>,
        pv: Line<A>,
        depth: PlyKind,
        elapsed: Duration,
    ) -> SearchResult<A> {
        SearchResult {
            best_action: scored.action,
            score: scored.score,
            pv,
            player: self.evaluator.player(),
            depth,
            nodes: self.nodes,
            elapsed,
            stopped: self.stopped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octi::{OctiAction, OctiState};

    fn result_with_score(score: Score) -> SearchResult<OctiAction> {
        SearchResult {
            best_action: None,
            score,
            pv: Line::new(),
            player: Color::Black,
            depth: 1,
            nodes: 10,
            elapsed: Duration::ZERO,
            stopped: false,
        }
    }

    #[test]
    fn leading_is_relative_to_player() {
        assert_eq!(result_with_score(Score(5)).leading(), Some(Color::Black));
        assert_eq!(result_with_score(Score(-5)).leading(), Some(Color::Red));
        assert_eq!(result_with_score(Score(0)).leading(), None);
    }

    #[test]
    fn nps_of_zero_elapsed() {
        assert_eq!(result_with_score(Score(0)).nps(), 0.0);
    }

    #[test]
    fn algorithm_from_str() {
        assert_eq!("alpha-beta".parse::<Algorithm>().unwrap(), Algorithm::AlphaBeta);
        assert_eq!("negamax".parse::<Algorithm>().unwrap(), Algorithm::Negamax);
        assert!("mcts".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::default().to_string(), "alpha-beta");
    }

    #[test]
    fn algorithms_agree_on_start_position() {
        let state = OctiState::start_position();
        for depth in 1..=3 {
            let ab = Algorithm::AlphaBeta.search(&state, depth, SearchBudget::unlimited());
            let nm = Algorithm::Negamax.search(&state, depth, SearchBudget::unlimited());
            assert_eq!(ab.score, nm.score);
            assert_eq!(ab.best_action, nm.best_action);
            assert_eq!(ab.nodes, nm.nodes);
        }
    }

    #[test]
    fn side_has_won() {
        let red_won = OctiState::with_pods(Color::Black, &[(2, 5)], &[(0, 6)]);
        let ctx = SearchContext::new(Color::Red, SearchBudget::unlimited());
        assert!(ctx.side_has_won(&red_won, true));
        assert!(!ctx.side_has_won(&red_won, false));
    }

    #[test]
    fn display_result() {
        let mut result = result_with_score(Score(120));
        result.best_action = "1,1>1,2".parse().ok();
        let shown = result.to_string();
        assert!(shown.contains("best_action: 1,1>1,2"));
        assert!(shown.contains("score      : +120"));
    }
}
