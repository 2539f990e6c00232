//! The sliding-tile transition model: which moves are legal in a state and
//! what state a move leads to.

use crate::search::{
    moves::{Direction, Move},
    states::{State, MAX_SIZE},
    PuzzleError, Result, SearchStatistics,
};
use smallvec::SmallVec;
use strum::IntoEnumIterator;

/// Transition model of a `size * size` sliding-tile puzzle. It also owns the
/// node counters, so they live as long as the search engine that owns the
/// puzzle.
#[derive(Debug)]
pub struct SlidingPuzzle {
    size: usize,
    statistics: SearchStatistics,
}

impl SlidingPuzzle {
    pub fn new(size: usize) -> Result<Self> {
        if !(2..=MAX_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidSize(size));
        }
        Ok(Self {
            size,
            statistics: SearchStatistics::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn statistics_mut(&mut self) -> &mut SearchStatistics {
        &mut self.statistics
    }

    /// Check that a state belongs to a grid of this puzzle's size.
    pub fn check_state(&self, state: &State) -> Result<()> {
        self.blank_of(state).map(|_| ())
    }

    fn blank_of(&self, state: &State) -> Result<usize> {
        if state.len() != self.num_cells() {
            return Err(PuzzleError::SizeMismatch {
                expected: self.size,
                actual: state.side_length(),
            });
        }
        state.blank_index()
    }

    /// Enumerate the legal moves of `state` in the order up, right, down,
    /// left. Counts as one evaluated node.
    pub fn legal_moves(&mut self, state: &State) -> Result<SmallVec<[Move; 4]>> {
        let blank = self.blank_of(state)?;
        self.statistics.increment_evaluated_nodes();
        Ok(Direction::iter()
            .filter_map(|direction| direction.destination_from(blank, self.size))
            .map(Move::new)
            .collect())
    }

    /// Slide the tile at the move's destination into the blank. Counts as one
    /// generated node.
    pub fn apply_move(&mut self, state: &State, action: Move) -> Result<State> {
        let blank = self.blank_of(state)?;
        let destination = action.destination();
        if Direction::between(blank, destination, self.size).is_none() {
            return Err(PuzzleError::InvalidMove { destination, blank });
        }
        self.statistics.increment_generated_nodes(1);
        Ok(state.swapped(blank, destination))
    }

    /// All successors of `state`, paired with the move producing them, in
    /// legal move order.
    pub fn successors(&mut self, state: &State) -> Result<Vec<(Move, State)>> {
        let moves = self.legal_moves(state)?;
        let mut successors = Vec::with_capacity(moves.len());
        for action in moves {
            successors.push((action, self.apply_move(state, action)?));
        }
        Ok(successors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn legal_moves_of_solved_state() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        let moves = puzzle.legal_moves(&state(&SOLVED_3X3)).unwrap();
        // Up, then left
        assert_eq!(moves.as_slice(), &[Move::new(5), Move::new(7)]);
    }

    #[test]
    fn legal_moves_from_centre_in_fixed_order() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        let centre = state(&[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let moves = puzzle.legal_moves(&centre).unwrap();
        assert_eq!(
            moves.as_slice(),
            &[Move::new(1), Move::new(5), Move::new(7), Move::new(3)]
        );
    }

    #[test]
    fn legal_moves_from_top_left_corner() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        let moves = puzzle.legal_moves(&state(&FOUR_MOVES_3X3)).unwrap();
        assert_eq!(moves.as_slice(), &[Move::new(1), Move::new(3)]);
    }

    #[test]
    fn apply_move_swaps_blank() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        let next = puzzle
            .apply_move(&state(&SOLVED_3X3), Move::new(7))
            .unwrap();
        assert_eq!(next.tiles(), &ONE_MOVE_3X3);
    }

    #[test]
    fn apply_move_rejects_illegal_destination() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        let result = puzzle.apply_move(&state(&SOLVED_3X3), Move::new(0));
        assert_eq!(
            result,
            Err(PuzzleError::InvalidMove {
                destination: 0,
                blank: 8
            })
        );
        // Wrapping onto the next row is not a move either
        let wrap = state(&[1, 2, 0, 3, 4, 5, 6, 7, 8]);
        assert!(puzzle.apply_move(&wrap, Move::new(3)).is_err());
    }

    #[test]
    fn move_then_reverse_is_identity() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        for tiles in [SOLVED_3X3, FOUR_MOVES_3X3, EIGHT_MOVES_3X3, SIX_MOVES_3X3] {
            let original = state(&tiles);
            let blank = original.blank_index().unwrap();
            for action in puzzle.legal_moves(&original).unwrap() {
                let moved = puzzle.apply_move(&original, action).unwrap();
                let back = puzzle.apply_move(&moved, Move::new(blank)).unwrap();
                assert_eq!(back, original);
            }
        }
    }

    #[test]
    fn counters_track_enumerations_and_successors() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        let successors = puzzle.successors(&state(&SOLVED_3X3)).unwrap();
        assert_eq!(successors.len(), 2);
        assert_eq!(puzzle.statistics().nodes_evaluated(), 1);
        assert_eq!(puzzle.statistics().nodes_generated(), 2);
    }

    #[test]
    fn check_state_rejects_other_sizes() {
        let puzzle = SlidingPuzzle::new(3).unwrap();
        assert_eq!(
            puzzle.check_state(&state(&SOLVED_2X2)),
            Err(PuzzleError::SizeMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(puzzle.check_state(&state(&SOLVED_3X3)).is_ok());
    }

    #[test]
    fn moves_on_other_sizes_are_rejected() {
        let mut puzzle = SlidingPuzzle::new(3).unwrap();
        let small = state(&SOLVED_2X2);
        let mismatch = PuzzleError::SizeMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(puzzle.legal_moves(&small), Err(mismatch.clone()));
        assert_eq!(puzzle.apply_move(&small, Move::new(6)), Err(mismatch.clone()));
        assert_eq!(puzzle.successors(&small), Err(mismatch));
        assert_eq!(puzzle.statistics().nodes_evaluated(), 0);
        assert_eq!(puzzle.statistics().nodes_generated(), 0);
    }

    #[test]
    fn size_must_be_at_least_two() {
        assert!(matches!(
            SlidingPuzzle::new(1),
            Err(PuzzleError::InvalidSize(1))
        ));
    }
}
