use crate::search::{Heuristic, HeuristicValue, State, BLANK};

/// Sum over the non-blank tiles of the row and column distance between the
/// tile's cell and its goal cell.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanHeuristic {
    size: usize,
}

impl ManhattanHeuristic {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl Heuristic for ManhattanHeuristic {
    fn evaluate(&self, state: &State) -> HeuristicValue {
        let size = self.size;
        state
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| {
                let goal = tile as usize - 1;
                (index / size).abs_diff(goal / size) + (index % size).abs_diff(goal % size)
            })
            .sum::<usize>() as HeuristicValue
    }
}
