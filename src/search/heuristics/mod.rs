mod hamming;
mod heuristic;
mod manhattan;
#[cfg(test)]
mod zero_heuristic;

pub use hamming::HammingHeuristic;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan::ManhattanHeuristic;

#[cfg(test)]
pub use zero_heuristic::ZeroHeuristic;
