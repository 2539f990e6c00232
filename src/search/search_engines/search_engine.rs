use crate::search::{
    search_engines::{AStar, Bfs, Gbfs},
    HeuristicName, Plan, PuzzleError, Result, SearchStatistics, State,
};
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful. The plan is empty when the initial state
    /// already is the goal.
    Success(Plan),
    /// The frontier ran dry without reaching the goal
    ProvablyUnsolvable,
}

impl SearchResult {
    pub fn plan(&self) -> Option<&Plan> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::ProvablyUnsolvable => None,
        }
    }

    pub fn into_plan(self) -> Option<Plan> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::ProvablyUnsolvable => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}

/// A search strategy over sliding-tile states. Every call to
/// [`SearchEngine::get_steps`] owns its own frontier and visited set; only
/// the node counters outlive it.
pub trait SearchEngine: Debug {
    /// Find a sequence of moves from `initial_state` to `goal_state`. Both
    /// states must have the side length the engine was built for.
    fn get_steps(&mut self, initial_state: &State, goal_state: &State) -> Result<SearchResult>;

    fn statistics(&self) -> &SearchStatistics;

    /// Number of legal move enumerations made by this engine so far.
    fn nodes_evaluated(&self) -> u64 {
        self.statistics().nodes_evaluated()
    }

    /// Number of successor states materialised by this engine so far.
    fn nodes_generated(&self) -> u64 {
        self.statistics().nodes_generated()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search, finds a shortest plan without a heuristic.")]
    Bfs,
    #[clap(help = "Greedy best-first search, ordered by the heuristic alone.")]
    Gbfs,
    #[clap(help = "A* search, finds a shortest plan with an admissible heuristic.")]
    Astar,
}

impl SearchEngineName {
    pub fn requires_heuristic(&self) -> bool {
        match self {
            SearchEngineName::Bfs => false,
            SearchEngineName::Gbfs | SearchEngineName::Astar => true,
        }
    }

    /// Build an engine for a `size * size` grid. The heuristic is resolved
    /// here, once; breadth-first search ignores it.
    pub fn create(
        &self,
        size: usize,
        heuristic_name: Option<HeuristicName>,
    ) -> Result<Box<dyn SearchEngine>> {
        let heuristic = match (self.requires_heuristic(), heuristic_name) {
            (true, None) => {
                return Err(PuzzleError::UnsupportedHeuristic(format!(
                    "the {:?} search engine requires a heuristic",
                    self
                )))
            }
            (_, name) => name.map(|name| name.create(size)),
        };

        let engine: Box<dyn SearchEngine> = match (self, heuristic) {
            (SearchEngineName::Gbfs, Some(heuristic)) => Box::new(Gbfs::new(size, heuristic)?),
            (SearchEngineName::Astar, Some(heuristic)) => Box::new(AStar::new(size, heuristic)?),
            _ => Box::new(Bfs::new(size)?),
        };
        Ok(engine)
    }
}
