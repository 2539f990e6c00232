use thiserror::Error;

/// Errors raised when a caller hands the search core something it cannot
/// work with. Note that failing to find a plan is not an error, see
/// [`crate::search::search_engines::SearchResult::ProvablyUnsolvable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The tile sequence is not a permutation of `0..size*size`.
    #[error("malformed state: {0}")]
    MalformedState(String),

    /// The destination is not among the legal moves of the state.
    #[error("invalid move: cannot move blank at index {blank} to index {destination}")]
    InvalidMove { destination: usize, blank: usize },

    /// The requested heuristic does not exist, or an informed search engine
    /// was built without one.
    #[error("unsupported heuristic: {0}")]
    UnsupportedHeuristic(String),

    #[error("invalid puzzle size {0}, the grid side length must be between 2 and 255")]
    InvalidSize(usize),

    #[error("state has side length {actual}, but the puzzle has side length {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
