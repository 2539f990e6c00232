use crate::search::{Plan, SlidingPuzzle, State};

pub use crate::search::Tile;

pub const SOLVED_2X2: [Tile; 4] = [1, 2, 3, 0];

/// Six moves from [`SOLVED_2X2`], the longest distance in its parity class.
pub const SIX_MOVES_2X2: [Tile; 4] = [0, 3, 2, 1];

/// Tiles 1 and 2 swapped, so the goal is in the other parity class.
pub const UNREACHABLE_2X2: [Tile; 4] = [2, 1, 3, 0];

pub const SOLVED_3X3: [Tile; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

pub const ONE_MOVE_3X3: [Tile; 9] = [1, 2, 3, 4, 5, 6, 7, 0, 8];

pub const THREE_MOVES_3X3: [Tile; 9] = [1, 2, 3, 0, 4, 6, 7, 5, 8];

pub const FOUR_MOVES_3X3: [Tile; 9] = [0, 1, 3, 4, 2, 5, 7, 8, 6];

pub const SIX_MOVES_3X3: [Tile; 9] = [4, 1, 3, 7, 2, 6, 0, 5, 8];

pub const EIGHT_MOVES_3X3: [Tile; 9] = [1, 3, 6, 5, 0, 2, 4, 7, 8];

/// Tiles 1 and 2 swapped, so the goal is in the other parity class.
pub const UNREACHABLE_3X3: [Tile; 9] = [2, 1, 3, 4, 5, 6, 7, 8, 0];

pub const SOLVED_4X4: [Tile; 16] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];

pub const NINE_MOVES_4X4: [Tile; 16] = [5, 1, 2, 4, 9, 6, 3, 8, 13, 10, 7, 11, 0, 14, 15, 12];

pub fn side_length(tiles: &[Tile]) -> usize {
    let mut size = 0;
    while (size + 1) * (size + 1) <= tiles.len() {
        size += 1;
    }
    size
}

/// Build a validated state, inferring the grid size from the tile count.
pub fn state(tiles: &[Tile]) -> State {
    State::from_tiles(tiles.iter().copied(), side_length(tiles)).expect("invalid fixture")
}

/// Apply every move of `plan` to `initial`, panicking on an illegal move.
pub fn replay(initial: &State, plan: &Plan) -> State {
    let mut puzzle = SlidingPuzzle::new(initial.side_length()).unwrap();
    plan.iter().fold(initial.clone(), |current, &action| {
        puzzle.apply_move(&current, action).expect("illegal move in plan")
    })
}
