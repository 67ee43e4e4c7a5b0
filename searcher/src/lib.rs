//! Generalized search algorithms, especially useful for grid traversal.
//!
//! To use these search algorithms, implement at least the trait [SearchSpace]
//! which hands out the successors of a state. A* additionally requires
//! [SearchHeuristic].
//!
//! Searches never log or print. Every outcome, including running out of
//! steps, is reported through the returned [SearchResult].

pub mod algorithm;
pub mod arena;
mod errors;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::SearchHeuristic;
pub use traits::SearchSpace;

pub use algorithm::astar::{astar, AStarQueue, AStarSearch, Scored};
pub use algorithm::basic::{bfs, BreadthFirstSearch, BreadthQueue};
pub use algorithm::cache::VisitedSet;
pub use algorithm::{Route, SearchOptions, SearchQueue};
pub use arena::{NodeArena, NodeId, SearchNode};
