//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{PriorityFrontier, SearchEngine, SearchResult},
    Heuristic, Result, SearchSpace, SearchStatistics, SlidingPuzzle, State,
};
use std::collections::HashSet;
use tracing::debug;

/// Greedy best-first search, ordered by the heuristic value of each state
/// alone. States are closed when popped; entries for states closed in the
/// meantime stay in the frontier and are skipped when they come up. The plan
/// found is not necessarily a shortest one.
#[derive(Debug)]
pub struct Gbfs {
    puzzle: SlidingPuzzle,
    heuristic: Box<dyn Heuristic>,
}

impl Gbfs {
    pub fn new(size: usize, heuristic: Box<dyn Heuristic>) -> Result<Self> {
        Ok(Self {
            puzzle: SlidingPuzzle::new(size)?,
            heuristic,
        })
    }
}

impl SearchEngine for Gbfs {
    fn get_steps(&mut self, initial_state: &State, goal_state: &State) -> Result<SearchResult> {
        self.puzzle.check_state(initial_state)?;
        self.puzzle.check_state(goal_state)?;
        self.puzzle.statistics_mut().start_search();

        let mut search_space = SearchSpace::new(initial_state.clone());
        let mut frontier = PriorityFrontier::new();
        let mut closed = HashSet::new();

        let h_value = self.heuristic.evaluate(initial_state);
        self.puzzle.statistics_mut().register_heuristic_value(h_value);
        frontier.push(search_space.get_root_id(), h_value);

        while let Some(node_id) = frontier.pop() {
            let state = search_space.get_state(node_id);
            if closed.contains(state) {
                self.puzzle.statistics_mut().increment_pruned_nodes();
                continue;
            }
            closed.insert(state.clone());

            if state == goal_state {
                self.puzzle.statistics_mut().finalise_search();
                return Ok(SearchResult::Success(search_space.extract_plan(node_id)));
            }
            self.puzzle.statistics_mut().increment_expanded_nodes();

            let (actions, successors): (Vec<_>, Vec<_>) = self
                .puzzle
                .successors(state)?
                .into_iter()
                .filter(|(_, successor)| !closed.contains(successor))
                .unzip();
            let h_values = self.heuristic.evaluate_batch(&successors);

            for ((action, successor), h_value) in actions.into_iter().zip(successors).zip(h_values)
            {
                self.puzzle.statistics_mut().register_heuristic_value(h_value);
                let child_id = search_space.insert_node(successor, action, node_id);
                frontier.push(child_id, h_value);
            }
        }

        debug!(closed_states = closed.len());
        self.puzzle.statistics_mut().finalise_search();
        Ok(SearchResult::ProvablyUnsolvable)
    }

    fn statistics(&self) -> &SearchStatistics {
        self.puzzle.statistics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{
        search_engines::Bfs, HammingHeuristic, ManhattanHeuristic, Plan, ZeroHeuristic,
    };
    use crate::test_utils::*;

    fn solve(initial: &[Tile], heuristic: Box<dyn Heuristic>) -> SearchResult {
        let size = side_length(initial);
        let goal = State::solved(size).unwrap();
        let mut engine = Gbfs::new(size, heuristic).unwrap();
        engine.get_steps(&state(initial), &goal).unwrap()
    }

    fn shortest_length(initial: &[Tile]) -> usize {
        let size = side_length(initial);
        let goal = State::solved(size).unwrap();
        let mut engine = Bfs::new(size).unwrap();
        let result = engine.get_steps(&state(initial), &goal).unwrap();
        result.plan().unwrap().len()
    }

    #[test]
    fn initial_state_is_goal() {
        assert_eq!(
            solve(&SOLVED_3X3, Box::new(ManhattanHeuristic::new(3))),
            SearchResult::Success(Plan::empty())
        );
    }

    #[test]
    fn plans_are_valid() {
        for tiles in [
            &ONE_MOVE_3X3[..],
            &THREE_MOVES_3X3[..],
            &FOUR_MOVES_3X3[..],
            &SIX_MOVES_3X3[..],
            &EIGHT_MOVES_3X3[..],
            &NINE_MOVES_4X4[..],
        ] {
            let size = side_length(tiles);
            let heuristics: [Box<dyn Heuristic>; 2] = [
                Box::new(HammingHeuristic::new()),
                Box::new(ManhattanHeuristic::new(size)),
            ];
            for heuristic in heuristics {
                let result = solve(tiles, heuristic);
                let plan = result.plan().expect("fixture is solvable");
                assert_eq!(replay(&state(tiles), plan), State::solved(size).unwrap());
                assert!(plan.len() >= shortest_length(tiles));
            }
        }
    }

    #[test]
    fn greedy_plan_may_be_longer_than_shortest() {
        let result = solve(&EIGHT_MOVES_3X3, Box::new(HammingHeuristic::new()));
        let plan = result.plan().unwrap();
        assert_eq!(replay(&state(&EIGHT_MOVES_3X3), plan), state(&SOLVED_3X3));
        assert!(plan.len() > 8);
    }

    #[test]
    fn unreachable_goal_terminates() {
        let mut engine = Gbfs::new(3, Box::new(ManhattanHeuristic::new(3))).unwrap();
        let result = engine
            .get_steps(&state(&UNREACHABLE_3X3), &state(&SOLVED_3X3))
            .unwrap();
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        // Each state of the parity class is closed, and hence expanded, once
        assert_eq!(engine.nodes_evaluated(), 181_440);
        assert!(engine.statistics().pruned_nodes() > 0);
    }

    #[test]
    fn ties_do_not_break_search() {
        // Every entry ties on a constant heuristic
        let result = solve(&FOUR_MOVES_3X3, Box::new(ZeroHeuristic::new()));
        let plan = result.plan().unwrap();
        assert_eq!(replay(&state(&FOUR_MOVES_3X3), plan), state(&SOLVED_3X3));
    }
}
