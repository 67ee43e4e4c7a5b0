//! Path data structures
//!
//! A path is a sequence of grid positions, from the start of a
//! route to its end, both inclusive.

use std::convert::From;
use std::fmt;
use std::ops::Deref;

use thiserror::Error;

use super::{Connectivity, Position};

/// Error returned for invalid paths
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A path needs at least one position.
    #[error("A path must contain at least one position")]
    Empty,

    /// A new step added to this path was not one move away from the
    /// previous step.
    #[error("{0} is not adjacent to the end of the path {1}")]
    NotAdjacentSequence(Position, Position),
}

type PathResult<T> = Result<T, PathError>;

/// A sequence of steps on a grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Position>,
}

impl Path {
    /// Construct a new path which starts from this position.
    pub fn new(origin: Position) -> Self {
        Path {
            steps: vec![origin],
        }
    }

    /// Build a path from positions, which must not be empty.
    pub fn from_steps(steps: Vec<Position>) -> PathResult<Self> {
        if steps.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Path { steps })
    }

    /// Wrap a trace reconstructed by a search.
    ///
    /// A trace always holds at least the node it was taken from.
    pub(crate) fn from_trace(steps: Vec<Position>) -> Self {
        debug_assert!(!steps.is_empty(), "search produced an empty trace");
        Path { steps }
    }

    /// Return a copy of this path, but reversed.
    pub fn reversed(&self) -> Self {
        let mut steps = self.steps.clone();
        steps.reverse();
        Path { steps }
    }

    /// Return a new path after stepping to a particular position.
    pub fn step_to(&self, position: Position, connectivity: Connectivity) -> PathResult<Self> {
        if !connectivity.is_move(*self.destination(), position) {
            return Err(PathError::NotAdjacentSequence(
                position,
                *self.destination(),
            ));
        }

        let mut steps = self.steps.clone();
        steps.push(position);
        Ok(Path { steps })
    }

    /// Iterate over the positions in this path.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.steps.iter()
    }

    /// Where this path started
    pub fn origin(&self) -> &Position {
        &self.steps[0]
    }

    /// Where this path ends
    pub fn destination(&self) -> &Position {
        &self.steps[self.steps.len() - 1]
    }

    /// How many moves this path takes.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }

    /// Is every consecutive pair of positions one legal move apart?
    pub fn is_contiguous(&self, connectivity: Connectivity) -> bool {
        self.steps
            .windows(2)
            .all(|pair| connectivity.is_move(pair[0], pair[1]))
    }

    pub fn into_inner(self) -> Vec<Position> {
        self.steps
    }
}

impl Deref for Path {
    type Target = [Position];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let steps: Vec<String> = self.steps.iter().map(|p| format!("({})", p)).collect();
        write!(f, "{}", steps.join(" "))
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.steps
    }
}
