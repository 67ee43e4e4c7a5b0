use std::fmt::Debug;

use thiserror::Error;

/// Error produced when a search fails.
///
/// Neither variant is fatal: both describe how a search over a
/// well-formed space ended without reaching its goal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError<S>
where
    S: Debug,
{
    /// The frontier emptied before the goal was reached.
    #[error("No path found after {iterations} iterations")]
    NoPathFound { iterations: usize },

    /// The step limit was reached before the goal was popped.
    ///
    /// `partial` is the trace from the origin to the most recently
    /// expanded state. It is not a verified route and need not end
    /// at the goal.
    #[error("Iteration bound exceeded after {iterations} iterations")]
    IterationBoundExceeded { iterations: usize, partial: Vec<S> },
}

impl<S> SearchError<S>
where
    S: Debug,
{
    /// Number of frontier pops performed before the search gave up.
    pub fn iterations(&self) -> usize {
        match self {
            SearchError::NoPathFound { iterations } => *iterations,
            SearchError::IterationBoundExceeded { iterations, .. } => *iterations,
        }
    }
}

/// Result when a search method might fail.
pub type Result<T, S> = std::result::Result<T, SearchError<S>>;
