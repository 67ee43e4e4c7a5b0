//! Tracking of states which a search has already handled.

use std::collections::HashSet;
use std::hash::Hash;

/// Records states already expanded (A*) or already discovered
/// (breadth-first), so that the search never loops.
#[derive(Debug)]
pub struct VisitedSet<S>
where
    S: Eq + Hash,
{
    seen: HashSet<S>,
}

impl<S> Default for VisitedSet<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        VisitedSet {
            seen: HashSet::default(),
        }
    }
}

impl<S> VisitedSet<S>
where
    S: Eq + Hash,
{
    /// Mark a state as visited. Returns `true` if the state
    /// had not been seen before.
    pub fn mark(&mut self, state: S) -> bool {
        self.seen.insert(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.seen.contains(state)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
