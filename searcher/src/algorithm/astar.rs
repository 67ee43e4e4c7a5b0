//! A* search with a position-indexed open set.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BTreeMap, BinaryHeap, HashMap};
use std::default::Default;
use std::hash::Hash;

use super::cache::VisitedSet;
use super::{Route, SearchOptions, SearchQueue, StepLimit};
use crate::arena::{NodeArena, NodeId, SearchNode};
use crate::errors::{Result, SearchError};
use crate::traits::SearchHeuristic;

/// A frontier entry: a node and its total estimated cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub f: usize,
    pub node: NodeId,
}

/// Heap element. Lower `f` sorts first; among equal `f` the entry
/// pushed earliest sorts first.
#[derive(Debug)]
struct Heuristic {
    entry: Scored,
    sequence: usize,
}

impl Heuristic {
    fn key(&self) -> (usize, usize) {
        (self.entry.f, self.sequence)
    }
}

impl PartialEq for Heuristic {
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl Eq for Heuristic {}

impl Ord for Heuristic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl PartialOrd for Heuristic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue ordered by ascending `f`.
#[derive(Debug, Default)]
pub struct AStarQueue {
    queue: BinaryHeap<Heuristic>,
    pushed: usize,
}

impl SearchQueue for AStarQueue {
    type Candidate = Scored;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|h| h.entry)
    }

    fn push(&mut self, item: Self::Candidate) {
        self.queue.push(Heuristic {
            entry: item,
            sequence: self.pushed,
        });
        self.pushed += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// The `g` values of every entry currently in the frontier,
/// grouped by state.
///
/// A state may sit in the frontier several times with different
/// costs, so each state keeps a count per distinct `g`.
#[derive(Debug)]
pub(crate) struct OpenIndex<S>
where
    S: Eq + Hash,
{
    costs: HashMap<S, BTreeMap<usize, usize>>,
}

impl<S> Default for OpenIndex<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        OpenIndex {
            costs: HashMap::new(),
        }
    }
}

impl<S> OpenIndex<S>
where
    S: Eq + Hash,
{
    pub(crate) fn insert(&mut self, state: S, g: usize) {
        *self.costs.entry(state).or_default().entry(g).or_insert(0) += 1;
    }

    pub(crate) fn remove(&mut self, state: &S, g: usize) {
        let emptied = match self.costs.get_mut(state) {
            Some(costs) => {
                if let Some(count) = costs.get_mut(&g) {
                    *count -= 1;
                    if *count == 0 {
                        costs.remove(&g);
                    }
                }
                costs.is_empty()
            }
            None => false,
        };

        if emptied {
            self.costs.remove(state);
        }
    }

    /// Is there an entry for `state` in the frontier whose cost is
    /// strictly below `g`?
    pub(crate) fn has_cheaper(&self, state: &S, g: usize) -> bool {
        self.costs
            .get(state)
            .and_then(|costs| costs.keys().next())
            .map(|&cheapest| cheapest < g)
            .unwrap_or(false)
    }
}

/// Best-first search guided by a heuristic.
///
/// Every move costs one. Children of an expanded node are dropped
/// when their state has already been expanded, or when the frontier
/// already holds the same state with a strictly smaller cost.
/// Duplicates with an equal or larger cost are kept, and a popped
/// duplicate of an expanded state is expanded again.
#[derive(Debug)]
pub struct AStarSearch<'p, P> {
    space: &'p P,
    options: SearchOptions,
}

impl<'p, P> AStarSearch<'p, P>
where
    P: SearchHeuristic,
{
    pub fn new(space: &'p P, options: SearchOptions) -> Self {
        Self { space, options }
    }

    /// Search from `start` to `goal`.
    ///
    /// When the step limit runs out, the error carries the trace to
    /// the most recently popped node, which need not reach the goal.
    pub fn search(&self, start: P::State, goal: P::State) -> Result<Route<P::State>, P::State> {
        let mut arena = NodeArena::default();
        let mut open = AStarQueue::default();
        let mut index = OpenIndex::default();
        let mut closed = VisitedSet::default();
        let mut limit = StepLimit::new(self.options.step_limit);

        let root = arena.insert(SearchNode::root(start.clone()));
        open.push(Scored { f: 0, node: root });
        index.insert(start, 0);

        let mut last = root;
        while !open.is_empty() {
            if let Err(iterations) = limit.increment() {
                return Err(SearchError::IterationBoundExceeded {
                    iterations,
                    partial: arena.trace(last),
                });
            }

            let current = match open.pop() {
                Some(entry) => entry.node,
                None => break,
            };
            last = current;

            let state = arena[current].state.clone();
            let g = arena[current].g;
            index.remove(&state, g);
            closed.mark(state.clone());

            if state == goal {
                return Ok(Route {
                    path: arena.trace(current),
                    iterations: limit.current(),
                });
            }

            for child in self.space.successors(&state) {
                if closed.contains(&child) {
                    continue;
                }

                let child_g = g + 1;
                if index.has_cheaper(&child, child_g) {
                    continue;
                }

                let h = self.space.heuristic(&child, &goal);
                let id = arena.insert(SearchNode::child(child.clone(), current, child_g, h));
                open.push(Scored {
                    f: arena[id].f,
                    node: id,
                });
                index.insert(child, child_g);
            }
        }

        Err(SearchError::NoPathFound {
            iterations: limit.current(),
        })
    }
}

/// Run an A* search over `space` from `start` to `goal`.
pub fn astar<P>(
    space: &P,
    start: P::State,
    goal: P::State,
    options: SearchOptions,
) -> Result<Route<P::State>, P::State>
where
    P: SearchHeuristic,
{
    AStarSearch::new(space, options).search(start, goal)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::helpers::Maze;
    use crate::traits::SearchSpace;

    fn maze() -> Maze {
        "#.####
         #.#..#
         #....#
         #..#.#
         #..#.#
         ####.#"
            .parse()
            .unwrap()
    }

    #[test]
    fn queue_order() {
        let mut queue = AStarQueue::default();
        let mut arena = NodeArena::default();
        let ids: Vec<NodeId> = (0..4).map(|i| arena.insert(SearchNode::root(i))).collect();

        queue.push(Scored { f: 5, node: ids[0] });
        queue.push(Scored { f: 2, node: ids[1] });
        queue.push(Scored { f: 5, node: ids[2] });
        queue.push(Scored { f: 2, node: ids[3] });
        assert_eq!(queue.len(), 4);

        let order: Vec<NodeId> = std::iter::from_fn(|| queue.pop()).map(|s| s.node).collect();
        assert_eq!(order, vec![ids[1], ids[3], ids[0], ids[2]]);
        assert!(queue.is_empty());
    }

    #[test]
    fn open_index() {
        let mut index = OpenIndex::default();
        index.insert('a', 3);
        index.insert('a', 3);
        index.insert('a', 5);

        assert!(index.has_cheaper(&'a', 4));
        assert!(!index.has_cheaper(&'a', 3));
        assert!(!index.has_cheaper(&'b', 100));

        index.remove(&'a', 3);
        assert!(index.has_cheaper(&'a', 4));
        index.remove(&'a', 3);
        assert!(!index.has_cheaper(&'a', 4));
        assert!(index.has_cheaper(&'a', 6));

        index.remove(&'a', 5);
        assert!(index.costs.is_empty());
    }

    #[test]
    fn same_start_and_goal() {
        let maze = maze();
        let route = astar(&maze, (2, 2), (2, 2), SearchOptions::default()).unwrap();
        assert_eq!(route.path, vec![(2, 2)]);
        assert_eq!(route.iterations, 1);
    }

    #[test]
    fn shortest() {
        let maze = maze();
        let route = astar(&maze, (0, 1), (5, 4), SearchOptions::default()).unwrap();

        assert_eq!(route.path.len(), 9);
        assert_eq!(route.path.first(), Some(&(0, 1)));
        assert_eq!(route.path.last(), Some(&(5, 4)));
        for pair in route.path.windows(2) {
            assert!(maze.successors(&pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn unreachable() {
        let maze: Maze = "..#.
                          ..#."
            .parse()
            .unwrap();

        // (1, 1) is reached from both (0, 1) and (1, 0) with the same
        // cost, so it is queued and popped twice.
        let err = astar(&maze, (0, 0), (1, 3), SearchOptions::default()).unwrap_err();
        assert_eq!(err, SearchError::NoPathFound { iterations: 5 });
    }

    #[test]
    fn step_limit() {
        let maze = maze();
        let options = SearchOptions::default().with_step_limit(2);
        let err = astar(&maze, (0, 1), (5, 4), options).unwrap_err();

        assert_eq!(
            err,
            SearchError::IterationBoundExceeded {
                iterations: 2,
                partial: vec![(0, 1), (1, 1)],
            }
        );
    }

    #[test]
    fn zero_step_limit() {
        let maze = maze();
        let options = SearchOptions::default().with_step_limit(0);
        let err = astar(&maze, (0, 1), (5, 4), options).unwrap_err();

        assert_eq!(
            err,
            SearchError::IterationBoundExceeded {
                iterations: 0,
                partial: vec![(0, 1)],
            }
        );
    }
}
