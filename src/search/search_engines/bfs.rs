//! Breadth first search

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Result, SearchSpace, SearchStatistics, SlidingPuzzle, State,
};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Breadth-first search. States are marked as visited when generated rather
/// than when expanded, so each state enters the queue at most once.
#[derive(Debug)]
pub struct Bfs {
    puzzle: SlidingPuzzle,
}

impl Bfs {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            puzzle: SlidingPuzzle::new(size)?,
        })
    }
}

impl SearchEngine for Bfs {
    fn get_steps(&mut self, initial_state: &State, goal_state: &State) -> Result<SearchResult> {
        self.puzzle.check_state(initial_state)?;
        self.puzzle.check_state(goal_state)?;
        self.puzzle.statistics_mut().start_search();

        let mut search_space = SearchSpace::new(initial_state.clone());
        let mut visited = HashSet::from([initial_state.clone()]);
        let mut queue = VecDeque::from([search_space.get_root_id()]);

        while let Some(node_id) = queue.pop_front() {
            let state = search_space.get_state(node_id);
            if state == goal_state {
                self.puzzle.statistics_mut().finalise_search();
                return Ok(SearchResult::Success(search_space.extract_plan(node_id)));
            }
            self.puzzle.statistics_mut().increment_expanded_nodes();

            for (action, successor) in self.puzzle.successors(state)? {
                if visited.contains(&successor) {
                    self.puzzle.statistics_mut().increment_pruned_nodes();
                    continue;
                }
                visited.insert(successor.clone());
                let child_id = search_space.insert_node(successor, action, node_id);
                queue.push_back(child_id);
            }
        }

        debug!(visited_states = visited.len());
        self.puzzle.statistics_mut().finalise_search();
        Ok(SearchResult::ProvablyUnsolvable)
    }

    fn statistics(&self) -> &SearchStatistics {
        self.puzzle.statistics()
    }
}
