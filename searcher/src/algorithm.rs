//! Provides the building blocks for search algorithms

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod cache;

/// Trait used to implement the frontier: queues of search
/// candidates waiting to be expanded.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tunable knobs shared by the search algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of frontier pops. `None` means the caller's
    /// default applies.
    pub step_limit: Option<usize>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }
}

/// A successful search: the states from origin to goal, inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<S> {
    pub path: Vec<S>,

    /// Number of frontier pops the search took.
    pub iterations: usize,
}

/// Counts frontier pops against an optional maximum.
#[derive(Debug)]
pub(crate) struct StepLimit {
    current: usize,
    maximum: Option<usize>,
}

impl StepLimit {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    /// Record one more pop. Once the count exceeds the maximum the
    /// pop must not happen, and the maximum is returned as the error.
    pub(crate) fn increment(&mut self) -> std::result::Result<(), usize> {
        self.current += 1;

        match self.maximum {
            Some(maximum) if self.current > maximum => Err(maximum),
            _ => Ok(()),
        }
    }
}
