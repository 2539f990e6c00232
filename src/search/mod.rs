//! The sliding-tile search core: the transition model, heuristic evaluators
//! and the search engines built on top of them.

mod error;
pub mod heuristics;
mod moves;
mod plan;
mod puzzle;
mod search_node;
mod search_space;
mod search_statistics;
pub mod search_engines;
pub mod states;
mod validate;
mod verbosity;

pub use error::{PuzzleError, Result};
pub use heuristics::{
    HammingHeuristic, Heuristic, HeuristicName, HeuristicValue, ManhattanHeuristic,
};
pub use moves::{Direction, Move};
pub use plan::Plan;
pub use puzzle::SlidingPuzzle;
pub use search_node::SearchNode;
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::SearchStatistics;
pub use states::{State, Tile, BLANK};
pub use validate::validate;
pub use verbosity::Verbosity;

#[cfg(test)]
pub use heuristics::ZeroHeuristic;
