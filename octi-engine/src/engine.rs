//! Engine struct acts as a simplified API for the various parts of the Octi engine.

use std::time::Duration;

use tracing::{info, warn};

use crate::coretypes::{PlyKind, DEFAULT_BUFFER, DEFAULT_MAX_DEPTH, MAX_DEPTH};
use crate::error::{self, ErrorKind};
use crate::search::{self, Algorithm, SearchResult};
use crate::state::GameState;
use crate::timeman::SearchBudget;

/// EngineBuilder allows for parameters of an Engine to be set and checked once,
/// before any decision is requested.
///
/// Default values:
///
/// * `max_depth`: 5 plies
/// * `buffer`: 30 milliseconds
/// * `algorithm`: Alpha-Beta
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EngineBuilder {
    max_depth: PlyKind,
    buffer: Duration,
    algorithm: Algorithm,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            buffer: DEFAULT_BUFFER,
            algorithm: Algorithm::default(),
        }
    }

    /// Create and return a new Engine.
    /// Fails if the maximum depth is zero or deeper than the engine can track.
    pub fn build(&self) -> error::Result<Engine> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH {
            let msg = format!("max depth must be in 1..={MAX_DEPTH}, got {}", self.max_depth);
            return Err((ErrorKind::ConfigInvalid, msg).into());
        }

        Ok(Engine {
            max_depth: self.max_depth,
            buffer: self.buffer,
            algorithm: self.algorithm,
        })
    }

    /// Set the deepest ply iterative deepening searches to.
    pub fn max_depth(mut self, max_depth: PlyKind) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the safety buffer reserved from every time limit.
    pub fn buffer(mut self, buffer: Duration) -> Self {
        self.buffer = buffer;
        self
    }

    /// Set the search used for each iteration.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine decides actions for any game that implements [`GameState`].
///
/// The engine holds no per-game state. Each decision is independent and
/// receives its own time limit.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Engine {
    max_depth: PlyKind,
    buffer: Duration,
    algorithm: Algorithm,
}

impl Engine {
    /// Returns the deepest ply searched by the engine.
    pub fn max_depth(&self) -> PlyKind {
        self.max_depth
    }

    /// Returns the safety buffer reserved from every time limit.
    pub fn buffer(&self) -> Duration {
        self.buffer
    }

    /// Returns the search used for each iteration.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Choose an action for the player to move in `state` within `time_limit`.
    ///
    /// The timer starts when this function is called. The result comes from the
    /// deepest iteration that completed in time, and its `elapsed` covers the
    /// whole decision.
    pub fn decide_move<S: GameState>(
        &self,
        state: &S,
        time_limit: Duration,
    ) -> error::Result<SearchResult<S::Action>> {
        let budget = SearchBudget::new(time_limit, self.buffer);
        self.decide_with_budget(state, budget)
    }

    /// Choose an action for the player to move in `state` within an already started budget.
    pub fn decide_with_budget<S: GameState>(
        &self,
        state: &S,
        budget: SearchBudget,
    ) -> error::Result<SearchResult<S::Action>> {
        if state.is_terminal() || state.legal_actions().is_empty() {
            return Err((ErrorKind::TerminalPosition, "no action to decide").into());
        }

        let result = search::ids(state, self.max_depth, budget, self.algorithm);

        match result {
            Some(result) if result.best_action.is_some() => {
                info!(
                    player = %result.player,
                    depth = result.depth,
                    score = %result.score,
                    nodes = result.nodes,
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "decision made"
                );
                Ok(result)
            }
            _ => {
                warn!(
                    time_limit_ms = budget.time_limit().as_millis() as u64,
                    buffer_ms = budget.buffer().as_millis() as u64,
                    "no search iteration completed in time"
                );
                Err((ErrorKind::NoDecision, "time budget exhausted").into())
            }
        }
    }

    /// Search `state` to exactly `depth` plies with no time limit.
    pub fn search_to_depth<S: GameState>(
        &self,
        state: &S,
        depth: PlyKind,
    ) -> error::Result<SearchResult<S::Action>> {
        if depth == 0 || depth > MAX_DEPTH {
            let msg = format!("depth must be in 1..={MAX_DEPTH}, got {depth}");
            return Err((ErrorKind::ConfigInvalid, msg).into());
        }
        if state.is_terminal() || state.legal_actions().is_empty() {
            return Err((ErrorKind::TerminalPosition, "no action to search").into());
        }

        Ok(self.algorithm.search(state, depth, SearchBudget::unlimited()))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            buffer: DEFAULT_BUFFER,
            algorithm: Algorithm::default(),
        }
    }
}
