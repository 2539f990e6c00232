use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// A move, identified by the cell the blank occupies after it. A move only
/// makes sense relative to the state it was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Move(usize);

impl Move {
    pub fn new(destination: usize) -> Self {
        Self(destination)
    }

    pub fn destination(&self) -> usize {
        self.0
    }
}

/// The direction the blank travels. Iterating over the variants yields the
/// fixed order in which legal moves are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Where the blank at `blank` ends up on a `size * size` grid, or `None`
    /// if the move would leave the grid or wrap onto another row.
    pub fn destination_from(&self, blank: usize, size: usize) -> Option<usize> {
        let num_cells = size * size;
        let destination = match self {
            Direction::Up => blank.checked_sub(size)?,
            Direction::Right => {
                if (blank + 1) % size == 0 {
                    return None;
                }
                blank + 1
            }
            Direction::Down => blank + size,
            Direction::Left => {
                if blank % size == 0 {
                    return None;
                }
                blank - 1
            }
        };
        (destination < num_cells).then_some(destination)
    }

    /// The direction that takes the blank from `from` to `to`, if the two
    /// cells are neighbours.
    pub fn between(from: usize, to: usize, size: usize) -> Option<Direction> {
        use strum::IntoEnumIterator;
        Direction::iter().find(|direction| direction.destination_from(from, size) == Some(to))
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}
