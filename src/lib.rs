#![deny(clippy::all)]

//! Route finding on occupancy grids.
//!
//! The search itself lives in the `searcher` and `geometry` crates.
//! This crate reads grids, picks a strategy and renders results.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::str::FromStr;

use thiserror::Error;

use geometry::coord2d::map::{GridMap, Map, ParseGridError};
use geometry::coord2d::pathfinder::{PathfindingError, Route};
use geometry::coord2d::{ParsePositionError, Position};
use searcher::SearchOptions;

pub mod render;

pub use render::{Glyph, Rendering};

/// Search strategy to route with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Heuristic best-first search, optionally with diagonal moves.
    AStar,

    /// Breadth-first search, orthogonal moves only.
    BreadthFirst,
}

impl Strategy {
    pub fn names() -> &'static [&'static str] {
        &["astar", "bfs"]
    }
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Strategy::BreadthFirst),
            _ => Err(RouteError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AStar => write!(f, "astar"),
            Strategy::BreadthFirst => write!(f, "bfs"),
        }
    }
}

/// A routing request: where to go, and how to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub start: Position,
    pub goal: Position,
    pub strategy: Strategy,

    /// Allow diagonal moves. Only used by A*.
    pub diagonal: bool,

    /// Step limit override. Only used by A*; breadth-first search
    /// always runs until the frontier is empty.
    pub options: SearchOptions,
}

impl Request {
    pub fn new(start: Position, goal: Position, strategy: Strategy) -> Self {
        Self {
            start,
            goal,
            strategy,
            diagonal: false,
            options: SearchOptions::default(),
        }
    }

    pub fn diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub fn options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the search this request describes.
    pub fn route<M: Map>(&self, map: &M) -> Result<Route, PathfindingError> {
        let pathfinder = map.pathfinder();
        match self.strategy {
            Strategy::AStar => {
                pathfinder.astar_with(self.start, self.goal, self.diagonal, self.options)
            }
            Strategy::BreadthFirst => pathfinder.bfs(self.start, self.goal),
        }
    }
}

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Unknown strategy {0:?}, expected one of: astar, bfs")]
    UnknownStrategy(String),

    #[error("Grid not found: {0}")]
    GridNotFound(String, #[source] io::Error),

    #[error("Unable to read grid")]
    Read(#[from] io::Error),

    #[error("Invalid grid: {0}")]
    Grid(#[from] ParseGridError),

    #[error("Invalid position: {0}")]
    Position(#[from] ParsePositionError),
}

type BoxedRead = Box<dyn Read + 'static>;

/// Open the grid source: a path, or stdin for `-` or no path at all.
pub fn get_input_reader(filename: Option<&str>) -> Result<BoxedRead, RouteError> {
    let reader: BoxedRead = match filename {
        None | Some("-") => Box::new(io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| RouteError::GridNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };
    Ok(reader)
}

/// Read a whole grid from a reader.
pub fn read_grid(mut reader: impl Read) -> Result<GridMap, RouteError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text.parse()?)
}
