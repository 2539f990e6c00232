mod state;

pub use state::{State, Tile, BLANK, MAX_SIZE};
