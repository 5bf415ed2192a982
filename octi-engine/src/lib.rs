pub mod coretypes;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod movelist;
pub mod moveorder;
pub mod node;
pub mod octi;
pub mod search;
pub mod state;
pub mod timeman;

pub use coretypes::{Color, Point, Score};
pub use engine::{Engine, EngineBuilder};
pub use node::SearchNode;
pub use search::{Algorithm, SearchResult};
pub use state::{Action, GameState};
pub use timeman::SearchBudget;
