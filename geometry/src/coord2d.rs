//! Coordinate work in two dimensions.
//!
//! Positions are addressed as (row, column), with rows growing
//! downwards and columns growing to the right.

use std::cmp;
use std::convert::TryFrom;
use std::fmt;
use std::num::TryFromIntError;
use std::ops;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Coordinate;

pub mod map;
pub mod path;
pub mod pathfinder;

/// A single move on the grid, orthogonal or diagonal.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

const ORTHOGONAL: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

const DIAGONAL: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

const BREADTH_ORDER: [Direction; 4] = [
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::North,
];

impl Direction {
    /// The four orthogonal moves, west, east, north then south.
    pub fn orthogonal() -> impl Iterator<Item = Self> {
        ORTHOGONAL.iter().cloned()
    }

    /// The four diagonal moves.
    pub fn diagonal() -> impl Iterator<Item = Self> {
        DIAGONAL.iter().cloned()
    }

    /// Orthogonal moves in the fixed order used by breadth-first
    /// search: east, south, west, north.
    pub fn breadth_order() -> impl Iterator<Item = Self> {
        BREADTH_ORDER.iter().cloned()
    }

    /// Row and column change for this move.
    pub fn offset(self) -> (Coordinate, Coordinate) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.offset();
        dr != 0 && dc != 0
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

/// Which moves are legal from a cell.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Connectivity {
    /// North, south, east and west.
    Four,

    /// The orthogonal moves plus the four diagonals.
    Eight,
}

impl Connectivity {
    pub fn new(diagonal: bool) -> Self {
        if diagonal {
            Connectivity::Eight
        } else {
            Connectivity::Four
        }
    }

    /// Legal moves, orthogonal ones first.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        let diagonals = match self {
            Connectivity::Four => 0,
            Connectivity::Eight => DIAGONAL.len(),
        };
        Direction::orthogonal().chain(Direction::diagonal().take(diagonals))
    }

    /// Do `from` and `to` differ by exactly one legal move?
    pub fn is_move(self, from: Position, to: Position) -> bool {
        match from.direction(to) {
            Some(d) => self == Connectivity::Eight || !d.is_diagonal(),
            None => false,
        }
    }

    /// Length of the shortest route between two cells when
    /// nothing is in the way.
    pub fn open_distance(self, from: Position, to: Position) -> Coordinate {
        match self {
            Connectivity::Four => from.manhattan_distance(to),
            Connectivity::Eight => from.chebyshev_distance(to),
        }
    }
}

/// A cell location on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: Coordinate,
    pub col: Coordinate,
}

impl Position {
    /// Build a new position from coordinates.
    pub fn new(row: Coordinate, col: Coordinate) -> Self {
        Self { row, col }
    }

    /// Returns the position at (0, 0)
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Step in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Iterate over the neighbours reachable with the given moves.
    pub fn adjacent(self, connectivity: Connectivity) -> impl Iterator<Item = Self> {
        connectivity.directions().map(move |d| self.step(d))
    }

    /// Signed difference `self - other`.
    pub fn offset(self, other: Position) -> Position {
        Position {
            row: self.row - other.row,
            col: self.col - other.col,
        }
    }

    /// Distance counting only orthogonal moves.
    pub fn manhattan_distance(self, other: Position) -> Coordinate {
        let d = self.offset(other);
        d.row.abs() + d.col.abs()
    }

    /// Distance when diagonal moves cost the same as orthogonal ones.
    pub fn chebyshev_distance(self, other: Position) -> Coordinate {
        let d = self.offset(other);
        cmp::max(d.row.abs(), d.col.abs())
    }

    /// Square of the straight-line distance.
    ///
    /// Computed in 64 bits: the square of a coordinate difference
    /// overflows `Coordinate` once it passes 46340.
    pub fn squared_distance(self, other: Position) -> u64 {
        let d = self.offset(other);
        let (rows, cols) = (i64::from(d.row), i64::from(d.col));
        (rows * rows + cols * cols) as u64
    }

    /// What single move leads from this position to `other`?
    ///
    /// If they are not neighbours, return `None`.
    pub fn direction(self, other: Position) -> Option<Direction> {
        let d = other.offset(self);
        Direction::orthogonal()
            .chain(Direction::diagonal())
            .find(|dir| dir.offset() == (d.row, d.col))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl ops::Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Self::Output {
        Self {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }
}

/// Reading order: row first, then column.
impl cmp::Ord for Position {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl cmp::PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl From<(Coordinate, Coordinate)> for Position {
    fn from(coordinates: (Coordinate, Coordinate)) -> Self {
        Self {
            row: coordinates.0,
            col: coordinates.1,
        }
    }
}

/// Grid indices beyond `Coordinate::MAX` have no position.
impl TryFrom<(usize, usize)> for Position {
    type Error = TryFromIntError;

    fn try_from(indices: (usize, usize)) -> Result<Self, Self::Error> {
        Ok(Self {
            row: Coordinate::try_from(indices.0)?,
            col: Coordinate::try_from(indices.1)?,
        })
    }
}

/// Error when parsing a position from string.
#[derive(Debug, Error)]
pub enum ParsePositionError {
    #[error("Invalid position: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid number literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePositionError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePositionError::InvalidNumber
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*\(?\s*(?P<row>-?\d+)\s*,\s*(?P<col>-?\d+)\s*\)?\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePositionError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["row"].parse()?, cap["col"].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position() {
        let position = Position::new(1, 1);

        assert_eq!(position.step(Direction::North), Position::new(0, 1));
        assert_eq!(position.step(Direction::South), Position::new(2, 1));
        assert_eq!(position.step(Direction::West), Position::new(1, 0));
        assert_eq!(position.step(Direction::East), Position::new(1, 2));
        assert_eq!(position.step(Direction::SouthWest), Position::new(2, 0));

        assert_eq!(&position.to_string(), "1,1");

        assert_eq!(
            position.adjacent(Connectivity::Four).collect::<Vec<_>>(),
            vec![
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(2, 1)
            ]
        );

        assert_eq!(
            position.adjacent(Connectivity::Eight).collect::<Vec<_>>(),
            vec![
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(2, 0),
                Position::new(2, 2)
            ]
        );
    }

    #[test]
    fn breadth_order() {
        let origin = Position::new(5, 5);
        let steps: Vec<Position> = Direction::breadth_order().map(|d| origin.step(d)).collect();
        assert_eq!(
            steps,
            vec![
                Position::new(5, 6),
                Position::new(6, 5),
                Position::new(5, 4),
                Position::new(4, 5)
            ]
        );
    }

    #[test]
    fn direction() {
        let origin = Position::new(3, 3);
        for direction in Direction::orthogonal().chain(Direction::diagonal()) {
            let next = origin.step(direction);
            assert_eq!(origin.direction(next), Some(direction));
            assert_eq!(next.step(direction.reverse()), origin);
        }
        assert_eq!(origin.direction(origin), None);
        assert_eq!(origin.direction(Position::new(5, 3)), None);
    }

    #[test]
    fn moves() {
        let a = Position::new(2, 2);
        assert!(Connectivity::Four.is_move(a, Position::new(2, 3)));
        assert!(!Connectivity::Four.is_move(a, Position::new(3, 3)));
        assert!(Connectivity::Eight.is_move(a, Position::new(3, 3)));
        assert!(!Connectivity::Eight.is_move(a, a));
        assert!(!Connectivity::Eight.is_move(a, Position::new(4, 2)));
        assert_eq!(Connectivity::new(true), Connectivity::Eight);
        assert_eq!(Connectivity::new(false), Connectivity::Four);
    }

    #[test]
    fn distances() {
        let a = Position::new(0, 1);
        let b = Position::new(5, 4);

        assert_eq!(a.manhattan_distance(b), 8);
        assert_eq!(a.chebyshev_distance(b), 5);
        assert_eq!(a.squared_distance(b), 34);
        assert_eq!(b.squared_distance(a), 34);

        let far = Position::new(49_999, 0);
        assert_eq!(Position::origin().squared_distance(far), 2_499_900_001);

        assert_eq!(Connectivity::Four.open_distance(a, b), 8);
        assert_eq!(Connectivity::Eight.open_distance(a, b), 5);
    }

    #[test]
    fn parse() {
        assert_eq!("3,4".parse::<Position>().unwrap(), Position::new(3, 4));
        assert_eq!(" (10, 2) ".parse::<Position>().unwrap(), Position::new(10, 2));
        assert_eq!("-1,0".parse::<Position>().unwrap(), Position::new(-1, 0));
        assert!("3".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
    }

    #[test]
    fn reading_order() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0)
            ]
        );
    }

    #[test]
    fn from_indices() {
        assert_eq!(Position::try_from((3usize, 4usize)), Ok(Position::new(3, 4)));
        assert!(Position::try_from((usize::MAX, 0usize)).is_err());
    }
}
