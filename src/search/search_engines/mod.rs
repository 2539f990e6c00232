mod astar;
mod bfs;
mod frontier;
mod gbfs;
mod search_engine;

pub use astar::AStar;
pub use bfs::Bfs;
pub use frontier::PriorityFrontier;
pub use gbfs::Gbfs;
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
