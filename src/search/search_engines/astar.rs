//! A* search, ordered by `f = g + h`.

use crate::search::{
    search_engines::{PriorityFrontier, SearchEngine, SearchResult},
    Heuristic, HeuristicValue, Result, SearchSpace, SearchStatistics, SlidingPuzzle, State,
};
use std::collections::HashMap;
use tracing::debug;

/// A* search. A successor is pushed whenever it improves the best known
/// `g`-value of its state, which leaves older, costlier entries in the
/// frontier; those are skipped when popped. With an admissible heuristic the
/// first goal popped is reached by a shortest plan.
#[derive(Debug)]
pub struct AStar {
    puzzle: SlidingPuzzle,
    heuristic: Box<dyn Heuristic>,
}

impl AStar {
    pub fn new(size: usize, heuristic: Box<dyn Heuristic>) -> Result<Self> {
        Ok(Self {
            puzzle: SlidingPuzzle::new(size)?,
            heuristic,
        })
    }
}

impl SearchEngine for AStar {
    fn get_steps(&mut self, initial_state: &State, goal_state: &State) -> Result<SearchResult> {
        self.puzzle.check_state(initial_state)?;
        self.puzzle.check_state(goal_state)?;
        self.puzzle.statistics_mut().start_search();

        let mut search_space = SearchSpace::new(initial_state.clone());
        let mut frontier = PriorityFrontier::new();
        let mut g_values: HashMap<State, HeuristicValue> =
            HashMap::from([(initial_state.clone(), 0)]);
        frontier.push(search_space.get_root_id(), 0);

        while let Some(node_id) = frontier.pop() {
            let node_g = search_space.get_node(node_id).get_g();
            let state = search_space.get_state(node_id);
            if state == goal_state {
                self.puzzle.statistics_mut().finalise_search();
                return Ok(SearchResult::Success(search_space.extract_plan(node_id)));
            }

            let g_value = g_values.get(state).copied().unwrap_or(node_g);
            if node_g > g_value {
                // Superseded by a cheaper path to the same state
                self.puzzle.statistics_mut().increment_pruned_nodes();
                continue;
            }
            self.puzzle.statistics_mut().increment_expanded_nodes();

            for (action, successor) in self.puzzle.successors(state)? {
                let candidate_g = g_value + 1;
                let improves = g_values
                    .get(&successor)
                    .map_or(true, |&known_g| candidate_g < known_g);
                if !improves {
                    continue;
                }
                g_values.insert(successor.clone(), candidate_g);
                let h_value = self.heuristic.evaluate(&successor);
                self.puzzle.statistics_mut().register_heuristic_value(h_value);
                let child_id = search_space.insert_node(successor, action, node_id);
                frontier.push(child_id, candidate_g + h_value);
            }
        }

        debug!(reached_states = g_values.len());
        self.puzzle.statistics_mut().finalise_search();
        Ok(SearchResult::ProvablyUnsolvable)
    }

    fn statistics(&self) -> &SearchStatistics {
        self.puzzle.statistics()
    }
}
