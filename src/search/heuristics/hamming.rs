use crate::search::{Heuristic, HeuristicValue, State};

/// Counts the tiles, blank included, that are not on their goal cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingHeuristic;

impl HammingHeuristic {
    pub fn new() -> Self {
        HammingHeuristic {}
    }
}

impl Heuristic for HammingHeuristic {
    fn evaluate(&self, state: &State) -> HeuristicValue {
        let num_cells = state.len();
        let mut positions = vec![0; num_cells];
        for (index, &tile) in state.tiles().iter().enumerate() {
            positions[tile as usize] = index;
        }

        positions
            .iter()
            .enumerate()
            .filter(|&(tile, &index)| index != State::goal_index(tile as u16, num_cells))
            .count() as HeuristicValue
    }
}
