use crate::search::{PuzzleError, Result};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::{self, Display};

/// Identifier of a single tile. The blank is [`BLANK`].
pub type Tile = u16;

pub const BLANK: Tile = 0;

/// Largest grid side length whose tiles still fit in a [`Tile`].
pub const MAX_SIZE: usize = 255;

/// A full arrangement of a `size * size` grid, flattened row by row.
///
/// States are compared and hashed element-wise, so they can be used directly
/// as keys of visited sets and `g`-tables. Up to a 4x4 grid the tiles are
/// stored inline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    tiles: SmallVec<[Tile; 16]>,
}

impl State {
    /// Build a state from caller-supplied tiles, checking that they form a
    /// permutation of `0..size*size`.
    pub fn from_tiles<I>(tiles: I, size: usize) -> Result<Self>
    where
        I: IntoIterator<Item = Tile>,
    {
        check_size(size)?;
        let tiles: SmallVec<[Tile; 16]> = tiles.into_iter().collect();
        let num_cells = size * size;

        if tiles.len() != num_cells {
            return Err(PuzzleError::MalformedState(format!(
                "expected {} tiles for a {}x{} grid, found {}",
                num_cells,
                size,
                size,
                tiles.len()
            )));
        }
        if let Some(&tile) = tiles.iter().find(|&&tile| tile as usize >= num_cells) {
            return Err(PuzzleError::MalformedState(format!(
                "tile {} is out of range, tiles must be below {}",
                tile, num_cells
            )));
        }
        if !tiles.contains(&BLANK) {
            return Err(PuzzleError::MalformedState(
                "blank tile (0) is missing".to_string(),
            ));
        }
        let mut seen = vec![false; num_cells];
        for &tile in &tiles {
            if std::mem::replace(&mut seen[tile as usize], true) {
                return Err(PuzzleError::MalformedState(format!(
                    "tile {} appears more than once",
                    tile
                )));
            }
        }

        Ok(Self { tiles })
    }

    /// The canonical goal: tiles `1..size*size` in order, then the blank.
    pub fn solved(size: usize) -> Result<Self> {
        check_size(size)?;
        let num_cells = size * size;
        let tiles = (0..num_cells)
            .map(|index| Self::goal_tile(index, num_cells))
            .collect();
        Ok(Self { tiles })
    }

    /// Only for states derived from an already valid state.
    pub(crate) fn from_tiles_unchecked(tiles: SmallVec<[Tile; 16]>) -> Self {
        Self { tiles }
    }

    /// The cell a tile occupies in the canonical goal of a grid with
    /// `num_cells` cells.
    #[inline]
    pub fn goal_index(tile: Tile, num_cells: usize) -> usize {
        if tile == BLANK {
            num_cells - 1
        } else {
            tile as usize - 1
        }
    }

    /// The tile found at `index` in the canonical goal.
    #[inline]
    pub fn goal_tile(index: usize, num_cells: usize) -> Tile {
        if index == num_cells - 1 {
            BLANK
        } else {
            (index + 1) as Tile
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Side length of the grid this state lives on.
    pub fn side_length(&self) -> usize {
        let mut size = 0;
        while (size + 1) * (size + 1) <= self.tiles.len() {
            size += 1;
        }
        size
    }

    /// Index of the blank, found by scanning the tiles.
    pub fn blank_index(&self) -> Result<usize> {
        self.tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or_else(|| PuzzleError::MalformedState("blank tile (0) is missing".to_string()))
    }

    /// Return a copy of this state with the tiles at `a` and `b` exchanged.
    pub(crate) fn swapped(&self, a: usize, b: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Self::from_tiles_unchecked(tiles)
    }

    /// Every move is a transposition of the blank with a neighbour, which
    /// flips both the permutation parity and the parity of the blank's
    /// row + column. Their combination is therefore invariant under moves,
    /// and two states are mutually reachable iff it agrees.
    pub fn parity_class(&self) -> bool {
        let size = self.side_length().max(1);
        let mut visited = vec![false; self.tiles.len()];
        let mut cycles = 0;
        for start in 0..self.tiles.len() {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut current = start;
            while !visited[current] {
                visited[current] = true;
                current = self.tiles[current] as usize;
            }
        }
        let permutation_odd = (self.tiles.len() - cycles) % 2 == 1;
        let blank = self.blank_index().unwrap_or_default();
        let blank_odd = (blank / size + blank % size) % 2 == 1;
        permutation_odd ^ blank_odd
    }

    /// Whether `goal` can be reached from this state at all. Search engines do
    /// not consult this, they exhaust the frontier instead.
    pub fn is_solvable_towards(&self, goal: &State) -> bool {
        self.tiles.len() == goal.tiles.len() && self.parity_class() == goal.parity_class()
    }
}

fn check_size(size: usize) -> Result<()> {
    if (2..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(PuzzleError::InvalidSize(size))
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.side_length().max(1);
        let width = (self.tiles.len().saturating_sub(1)).to_string().len();
        let rows = self.tiles.chunks(size).map(|row| {
            row.iter()
                .map(|&tile| {
                    if tile == BLANK {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", tile, width = width)
                    }
                })
                .join(" ")
        });
        write!(f, "{}", rows.format("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn solved_state_layout() {
        let state = State::solved(3).unwrap();
        assert_eq!(state.tiles(), &SOLVED_3X3);
        assert_eq!(state.side_length(), 3);
        assert_eq!(state.len(), 9);
        assert!(!state.is_empty());
        assert_eq!(state.blank_index(), Ok(8));
    }

    #[test]
    fn from_tiles_accepts_permutation() {
        let state = State::from_tiles(FOUR_MOVES_3X3, 3).unwrap();
        assert_eq!(state.tiles(), &FOUR_MOVES_3X3);
        assert_eq!(state.blank_index(), Ok(0));
    }

    #[test]
    fn from_tiles_rejects_wrong_length() {
        let result = State::from_tiles([1, 2, 3, 0], 3);
        assert!(matches!(result, Err(PuzzleError::MalformedState(_))));
    }

    #[test]
    fn from_tiles_rejects_out_of_range() {
        let result = State::from_tiles([1, 2, 9, 4, 5, 6, 7, 8, 0], 3);
        assert!(matches!(result, Err(PuzzleError::MalformedState(_))));
    }

    #[test]
    fn from_tiles_rejects_duplicates() {
        let result = State::from_tiles([1, 1, 3, 4, 5, 6, 7, 8, 0], 3);
        assert!(matches!(result, Err(PuzzleError::MalformedState(_))));
    }

    #[test]
    fn from_tiles_rejects_missing_blank() {
        let result = State::from_tiles([1, 2, 3, 4, 5, 6, 7, 8, 8], 3);
        assert_eq!(
            result,
            Err(PuzzleError::MalformedState(
                "blank tile (0) is missing".to_string()
            ))
        );
    }

    #[test]
    fn invalid_sizes_are_rejected() {
        assert_eq!(State::solved(1), Err(PuzzleError::InvalidSize(1)));
        assert_eq!(State::solved(0), Err(PuzzleError::InvalidSize(0)));
        assert_eq!(State::solved(256), Err(PuzzleError::InvalidSize(256)));
    }

    #[test]
    fn goal_index_and_goal_tile_agree() {
        for index in 0..16 {
            let tile = State::goal_tile(index, 16);
            assert_eq!(State::goal_index(tile, 16), index);
        }
    }

    #[test]
    fn parity_separates_swapped_tiles() {
        let solved = state(&SOLVED_3X3);
        assert!(state(&FOUR_MOVES_3X3).is_solvable_towards(&solved));
        assert!(state(&EIGHT_MOVES_3X3).is_solvable_towards(&solved));
        assert!(!state(&UNREACHABLE_3X3).is_solvable_towards(&solved));
        assert!(!state(&UNREACHABLE_2X2).is_solvable_towards(&state(&SOLVED_2X2)));
        assert!(state(&NINE_MOVES_4X4).is_solvable_towards(&state(&SOLVED_4X4)));
    }

    #[test]
    fn display_renders_grid() {
        let state = State::solved(2).unwrap();
        assert_eq!(state.to_string(), "1 2\n3 .");
    }
}
