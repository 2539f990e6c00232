use crate::search::{
    heuristics::{HammingHeuristic, ManhattanHeuristic},
    PuzzleError, State,
};
use std::fmt::Debug;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Estimated number of moves left until the goal.
pub type HeuristicValue = u32;

/// A heuristic evaluator for sliding-tile states. Evaluators are pure, they
/// hold no mutable state and can be shared between concurrent searches.
pub trait Heuristic: Debug + Send + Sync {
    /// Estimate the remaining cost from `state` to the canonical goal.
    fn evaluate(&self, state: &State) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially.
    fn evaluate_batch(&self, states: &[State]) -> Vec<HeuristicValue> {
        states.iter().map(|state| self.evaluate(state)).collect()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Number of tiles, blank included, away from their goal cell.")]
    Hamming,
    #[clap(help = "Sum of the grid distances of each tile to its goal cell.")]
    Manhattan,
}

impl HeuristicName {
    /// Build the evaluator for a `size * size` grid.
    pub fn create(&self, size: usize) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Hamming => Box::new(HammingHeuristic::new()),
            HeuristicName::Manhattan => Box::new(ManhattanHeuristic::new(size)),
        }
    }

    /// Parse a heuristic name as it appears in solve requests.
    pub fn parse(name: &str) -> Result<Self, PuzzleError> {
        HeuristicName::from_str(name)
            .map_err(|_| PuzzleError::UnsupportedHeuristic(name.to_string()))
    }
}
