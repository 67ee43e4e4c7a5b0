//! Pathfinding on a 2D occupancy grid, using the search algorithms
//! from `searcher`.

use searcher::{self, SearchError, SearchHeuristic, SearchOptions, SearchSpace};
use thiserror::Error;

pub use super::map::{InvalidInput, Map};
pub use super::path::Path;
use super::{Connectivity, Direction, Position};

/// Adapts a map to the search algorithms: which cells can be
/// reached from a cell, and in what order they are offered.
#[derive(Debug)]
struct GridSpace<'m, M> {
    map: &'m M,
    moves: Vec<Direction>,
}

impl<'m, M> GridSpace<'m, M>
where
    M: Map,
{
    fn new(map: &'m M, moves: impl Iterator<Item = Direction>) -> Self {
        Self {
            map,
            moves: moves.collect(),
        }
    }
}

impl<'m, M> SearchSpace for GridSpace<'m, M>
where
    M: Map,
{
    type State = Position;

    fn successors(&self, state: &Self::State) -> Vec<Self::State> {
        self.moves
            .iter()
            .map(|d| state.step(*d))
            .filter(|p| self.map.in_bounds(*p) && self.map.is_walkable(*p))
            .collect()
    }
}

/// Squared straight-line distance to the goal.
///
/// Every move costs one, including diagonals, so this estimate can
/// exceed the true remaining cost. The search then favours cells
/// closer to the goal and may settle for a longer route.
impl<'m, M> SearchHeuristic for GridSpace<'m, M>
where
    M: Map,
{
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> usize {
        state.squared_distance(*goal) as usize
    }
}

/// A route found on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: Path,

    /// Number of cells popped from the frontier.
    pub iterations: usize,
}

impl Route {
    fn from_search(route: searcher::Route<Position>) -> Self {
        Route {
            path: Path::from_trace(route.path),
            iterations: route.iterations,
        }
    }
}

/// Why a route could not be produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathfindingError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("No path found after {iterations} iterations")]
    NoPathFound { iterations: usize },

    /// The search ran out of steps. `partial` leads to the last cell
    /// examined and is not a verified route to the goal.
    #[error("Gave up after {iterations} iterations, partial path is unverified")]
    IterationBoundExceeded { iterations: usize, partial: Path },
}

impl From<SearchError<Position>> for PathfindingError {
    fn from(error: SearchError<Position>) -> Self {
        match error {
            SearchError::NoPathFound { iterations } => PathfindingError::NoPathFound { iterations },
            SearchError::IterationBoundExceeded {
                iterations,
                partial,
            } => PathfindingError::IterationBoundExceeded {
                iterations,
                partial: Path::from_trace(partial),
            },
        }
    }
}

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder.
    pub(crate) fn new(map: &'m M) -> Self {
        Self { map }
    }

    /// Default A* step limit: half the cells of the map, rounded
    /// down, but at least one so a single-cell map can be searched.
    pub fn default_step_limit(&self) -> usize {
        std::cmp::max(self.map.rows() * self.map.cols() / 2, 1)
    }

    /// Validate the endpoints. `Ok(false)` means the goal is blocked,
    /// so no search is needed to know it cannot be reached.
    fn prepare(&self, origin: Position, destination: Position) -> Result<bool, InvalidInput> {
        self.map.validate(origin, destination)?;
        Ok(self.map.is_walkable(destination))
    }

    /// Find a route with A*, using the default step limit.
    pub fn astar(
        &self,
        origin: Position,
        destination: Position,
        diagonal: bool,
    ) -> Result<Route, PathfindingError> {
        self.astar_with(origin, destination, diagonal, SearchOptions::default())
    }

    /// Find a route with A*.
    ///
    /// Moves are orthogonal, plus diagonal when `diagonal` is set, and
    /// all cost one. When `options` carries no step limit, the search
    /// stops after [Pathfinder::default_step_limit] pops.
    pub fn astar_with(
        &self,
        origin: Position,
        destination: Position,
        diagonal: bool,
        options: SearchOptions,
    ) -> Result<Route, PathfindingError> {
        if !self.prepare(origin, destination)? {
            return Err(PathfindingError::NoPathFound { iterations: 0 });
        }

        let options = SearchOptions {
            step_limit: options.step_limit.or_else(|| Some(self.default_step_limit())),
        };
        let space = GridSpace::new(self.map, Connectivity::new(diagonal).directions());
        let route = searcher::astar(&space, origin, destination, options)?;

        Ok(Route::from_search(route))
    }

    /// Find the route with the fewest orthogonal moves using a
    /// breadth-first search. No step limit applies.
    pub fn bfs(&self, origin: Position, destination: Position) -> Result<Route, PathfindingError> {
        self.bfs_with(origin, destination, SearchOptions::default())
    }

    /// Breadth-first search with explicit options.
    pub fn bfs_with(
        &self,
        origin: Position,
        destination: Position,
        options: SearchOptions,
    ) -> Result<Route, PathfindingError> {
        if !self.prepare(origin, destination)? {
            return Err(PathfindingError::NoPathFound { iterations: 0 });
        }

        let space = GridSpace::new(self.map, Direction::breadth_order());
        let route = searcher::bfs(&space, origin, destination, options)?;

        Ok(Route::from_search(route))
    }
}
