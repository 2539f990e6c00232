//! A plan is the sequence of moves that takes the initial state to the goal.
//! This module provides the [`Plan`] struct, which represents a plan.

use crate::search::{Direction, Move, PuzzleError, Result, State};
use itertools::Itertools;
use serde::Serialize;
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Plan {
    steps: Vec<Move>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Move>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The destination index of every move, in order.
    pub fn to_indices(&self) -> Vec<usize> {
        self.steps.iter().map(Move::destination).collect()
    }

    /// The direction the blank travels at each step, starting from
    /// `initial_state` on a `size * size` grid.
    pub fn directions(&self, initial_state: &State, size: usize) -> Result<Vec<Direction>> {
        let mut blank = initial_state.blank_index()?;
        let mut directions = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let destination = step.destination();
            let direction = Direction::between(blank, destination, size)
                .ok_or(PuzzleError::InvalidMove { destination, blank })?;
            directions.push(direction);
            blank = destination;
        }
        Ok(directions)
    }

    /// The directions joined by spaces, e.g. `right down right down`.
    pub fn describe(&self, initial_state: &State, size: usize) -> Result<String> {
        Ok(self.directions(initial_state, size)?.iter().join(" "))
    }
}

impl IntoIterator for Plan {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
