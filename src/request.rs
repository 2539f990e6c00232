//! Solve requests and responses. A request names a grid size, an initial
//! state, optionally a goal state and a heuristic; the response carries
//! either the plan as a list of move destinations or an error message.

use crate::search::{
    search_engines::{SearchEngine, SearchEngineName, SearchResult},
    HeuristicName, Plan, PuzzleError, State, Tile,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("failed to read request file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML request: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown request format for {0}, expected a .json or .toml file")]
    UnknownFormat(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SolveRequest {
    /// Side length of the grid
    pub size: usize,
    pub initial_state: Vec<Tile>,
    /// Defaults to the solved arrangement: `1..size*size`, then the blank
    #[serde(default)]
    pub goal_state: Option<Vec<Tile>>,
    /// Heuristic name, only used by informed search engines
    #[serde(default)]
    pub heuristic: Option<String>,
}

impl SolveRequest {
    pub fn from_path(path: &Path) -> Result<Self, RequestError> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Ok(toml::from_str(&contents)?),
            _ => Err(RequestError::UnknownFormat(path.to_path_buf())),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn initial_state(&self) -> Result<State, PuzzleError> {
        State::from_tiles(self.initial_state.iter().copied(), self.size)
    }

    pub fn goal_state(&self) -> Result<State, PuzzleError> {
        match &self.goal_state {
            Some(tiles) => State::from_tiles(tiles.iter().copied(), self.size),
            None => State::solved(self.size),
        }
    }

    pub fn heuristic_name(&self) -> Result<Option<HeuristicName>, PuzzleError> {
        self.heuristic
            .as_deref()
            .map(HeuristicName::parse)
            .transpose()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SolveResponse {
    /// `steps` is `null` when the goal cannot be reached
    Steps { steps: Option<Plan> },
    Error { error: String },
}

impl SolveResponse {
    /// Status code of the response: 200 for any search outcome, 400 for a
    /// rejected request.
    pub fn status(&self) -> u16 {
        match self {
            SolveResponse::Steps { .. } => 200,
            SolveResponse::Error { .. } => 400,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<SearchResult> for SolveResponse {
    fn from(result: SearchResult) -> Self {
        SolveResponse::Steps {
            steps: result.into_plan(),
        }
    }
}

impl From<PuzzleError> for SolveResponse {
    fn from(error: PuzzleError) -> Self {
        SolveResponse::Error {
            error: error.to_string(),
        }
    }
}

/// Outcome of running a request, with the engine kept around so its counters
/// can be inspected.
#[derive(Debug)]
pub struct SolveOutcome {
    pub initial_state: State,
    pub goal_state: State,
    pub result: SearchResult,
    pub engine: Box<dyn SearchEngine>,
}

/// Validate `request`, build the engine and search. The heuristic is resolved
/// once, before the engine is built, and only for engines that use one.
pub fn run(
    request: &SolveRequest,
    engine_name: SearchEngineName,
) -> Result<SolveOutcome, PuzzleError> {
    let initial_state = request.initial_state()?;
    let goal_state = request.goal_state()?;
    let heuristic_name = if engine_name.requires_heuristic() {
        request.heuristic_name()?
    } else {
        None
    };

    if !initial_state.is_solvable_towards(&goal_state) {
        warn!("goal is in a different parity class, the search will exhaust the state space");
    }

    let mut engine = engine_name.create(request.size, heuristic_name)?;
    info!(engine = ?engine_name, heuristic = ?heuristic_name, size = request.size);
    let result = engine.get_steps(&initial_state, &goal_state)?;

    Ok(SolveOutcome {
        initial_state,
        goal_state,
        result,
        engine,
    })
}

/// Like [`run`], but folds every outcome into a [`SolveResponse`].
pub fn solve(request: &SolveRequest, engine_name: SearchEngineName) -> SolveResponse {
    match run(request, engine_name) {
        Ok(outcome) => outcome.result.into(),
        Err(error) => error.into(),
    }
}
