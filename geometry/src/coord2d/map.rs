//! Occupancy grids suitable for pathfinding
//! on a 2D coordinate grid.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::path::Path;
use super::pathfinder::{PathfindingError, Pathfinder, Route};
use super::Position;
use crate::Coordinate;

/// Defines a map of locations on a rectangular grid.
///
/// The storage of the map is left to the implementing
/// structure, this trait simply requires a map to report
/// its extent and whether a given location is walkable.
pub trait Map: Sized + fmt::Debug {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Can the walker step on this location?
    ///
    /// Locations outside the map are never walkable.
    fn is_walkable(&self, location: Position) -> bool;

    /// Is the location inside the map?
    fn in_bounds(&self, location: Position) -> bool {
        location.row >= 0
            && location.col >= 0
            && (location.row as usize) < self.rows()
            && (location.col as usize) < self.cols()
    }

    /// Check that a route between these two points can be searched for.
    ///
    /// Both points must lie on the map, and the start must be free.
    /// A blocked goal is not an input error: it simply cannot be
    /// reached, which the pathfinder reports as no path.
    fn validate(&self, start: Position, goal: Position) -> Result<(), InvalidInput> {
        for (endpoint, location) in [(Endpoint::Start, start), (Endpoint::Goal, goal)].iter() {
            if !self.in_bounds(*location) {
                return Err(InvalidInput::OutOfBounds(*endpoint, *location));
            }
        }
        if !self.is_walkable(start) {
            return Err(InvalidInput::Blocked(Endpoint::Start, start));
        }
        Ok(())
    }

    /// Build a re-usable pathfinder for this map
    fn pathfinder(&self) -> Pathfinder<Self> {
        Pathfinder::new(self)
    }

    /// Find a route on this map with A*.
    fn astar(
        &self,
        origin: Position,
        destination: Position,
        diagonal: bool,
    ) -> Result<Route, PathfindingError> {
        self.pathfinder().astar(origin, destination, diagonal)
    }

    /// Find a route on this map with a breadth-first search.
    fn bfs(&self, origin: Position, destination: Position) -> Result<Route, PathfindingError> {
        self.pathfinder().bfs(origin, destination)
    }
}

/// Which end of a route a position was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Problems with a grid or with the points to route between.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Grid has no cells")]
    EmptyGrid,

    #[error("Row {row} has {found} cells, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("The {0} {1} is outside the grid")]
    OutOfBounds(Endpoint, Position),

    #[error("The {0} {1} is on a blocked cell")]
    Blocked(Endpoint, Position),
}

/// State of a single grid cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Cell {
    Free,

    /// An obstacle. The value is kept for display only.
    Blocked(Coordinate),
}

impl From<Coordinate> for Cell {
    fn from(value: Coordinate) -> Self {
        match value {
            0 => Cell::Free,
            v => Cell::Blocked(v),
        }
    }
}

impl Cell {
    pub fn is_free(self) -> bool {
        self == Cell::Free
    }
}

/// An immutable, rectangular occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl GridMap {
    /// Build a grid from rows of cell values, where 0 is free
    /// and anything else is an obstacle.
    pub fn new(grid: Vec<Vec<Coordinate>>) -> Result<Self, InvalidInput> {
        let cols = grid.first().map(|row| row.len()).unwrap_or(0);
        if cols == 0 {
            return Err(InvalidInput::EmptyGrid);
        }

        let rows = grid.len();
        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in grid.into_iter().enumerate() {
            if row.len() != cols {
                return Err(InvalidInput::NonRectangular {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row.into_iter().map(Cell::from));
        }

        Ok(Self { rows, cols, cells })
    }

    fn index(&self, location: Position) -> Option<usize> {
        if self.in_bounds(location) {
            Some(location.row as usize * self.cols + location.col as usize)
        } else {
            None
        }
    }

    /// The cell at a location, or `None` outside the grid.
    pub fn get(&self, location: Position) -> Option<Cell> {
        self.index(location).map(|i| self.cells[i])
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Does `path` step only on free cells?
    pub fn is_clear(&self, path: &Path) -> bool {
        path.iter().all(|p| self.is_walkable(*p))
    }
}

impl Map for GridMap {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn is_walkable(&self, location: Position) -> bool {
        self.get(location).map(Cell::is_free).unwrap_or(false)
    }
}

/// Error when reading a grid from text.
#[derive(Debug, Error)]
pub enum ParseGridError {
    #[error("Invalid cell {literal:?} on line {line}")]
    InvalidCell {
        line: usize,
        literal: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    Invalid(#[from] InvalidInput),
}

/// Parses one row per line, with cell values separated by
/// whitespace and/or commas. Blank lines and brackets are ignored,
/// so a nested list literal like `[[1, 0], [0, 0]]` laid out one
/// row per line also parses.
impl FromStr for GridMap {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Vec::new();
        for (n, line) in s.lines().enumerate() {
            let mut row = Vec::new();
            for literal in line
                .split(|c: char| c.is_whitespace() || c == ',' || c == '[' || c == ']')
                .filter(|l| !l.is_empty())
            {
                let value = literal
                    .parse::<Coordinate>()
                    .map_err(|source| ParseGridError::InvalidCell {
                        line: n + 1,
                        literal: literal.to_string(),
                        source,
                    })?;
                row.push(value);
            }
            if !row.is_empty() {
                grid.push(row);
            }
        }
        Ok(GridMap::new(grid)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid() -> GridMap {
        GridMap::new(vec![vec![1, 0, 2], vec![0, 0, 0]]).unwrap()
    }

    #[test]
    fn bounds() {
        let grid = grid();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);

        assert!(grid.in_bounds((0, 0).into()));
        assert!(grid.in_bounds((1, 2).into()));
        assert!(!grid.in_bounds((2, 0).into()));
        assert!(!grid.in_bounds((0, 3).into()));
        assert!(!grid.in_bounds((-1, 0).into()));
        assert!(!grid.in_bounds((0, -1).into()));
    }

    #[test]
    fn walkable() {
        let grid = grid();
        assert!(!grid.is_walkable((0, 0).into()));
        assert!(grid.is_walkable((0, 1).into()));
        assert!(!grid.is_walkable((0, 2).into()));
        assert!(grid.is_walkable((1, 2).into()));
        assert!(!grid.is_walkable((5, 5).into()));

        assert_eq!(grid.get((0, 2).into()), Some(Cell::Blocked(2)));
        assert_eq!(grid.get((9, 9).into()), None);
    }

    #[test]
    fn invalid() {
        assert_eq!(GridMap::new(vec![]), Err(InvalidInput::EmptyGrid));
        assert_eq!(GridMap::new(vec![vec![]]), Err(InvalidInput::EmptyGrid));
        assert_eq!(
            GridMap::new(vec![vec![0, 0], vec![0]]),
            Err(InvalidInput::NonRectangular {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn validate() {
        let grid = grid();
        let free = Position::new(1, 1);
        assert_eq!(grid.validate(free, (0, 1).into()), Ok(()));
        assert_eq!(
            grid.validate((3, 0).into(), free),
            Err(InvalidInput::OutOfBounds(Endpoint::Start, (3, 0).into()))
        );
        assert_eq!(
            grid.validate((0, 0).into(), free),
            Err(InvalidInput::Blocked(Endpoint::Start, (0, 0).into()))
        );
        assert_eq!(
            grid.validate(free, (0, 3).into()),
            Err(InvalidInput::OutOfBounds(Endpoint::Goal, (0, 3).into()))
        );
        assert_eq!(grid.validate(free, (0, 2).into()), Ok(()));
    }

    #[test]
    fn parse() {
        let grid: GridMap = "1 0 2\n\n0,0,0\n".parse().unwrap();
        assert_eq!(grid, self::grid());

        let nested: GridMap = "[[1, 0, 2],\n [0, 0, 0]]".parse().unwrap();
        assert_eq!(nested, self::grid());

        assert!(matches!(
            "0 x".parse::<GridMap>(),
            Err(ParseGridError::InvalidCell { line: 1, .. })
        ));
        assert!(matches!(
            "0 0\n0".parse::<GridMap>(),
            Err(ParseGridError::Invalid(InvalidInput::NonRectangular { .. }))
        ));
        assert!(matches!(
            "".parse::<GridMap>(),
            Err(ParseGridError::Invalid(InvalidInput::EmptyGrid))
        ));
    }

    #[test]
    fn rows() {
        let grid = grid();
        let rows: Vec<&[Cell]> = grid.cells().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[Cell::Free, Cell::Free, Cell::Free][..]);
    }
}
