pub use bfs::{bfs, BreadthFirstSearch, BreadthQueue};

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::cache::VisitedSet;
    use crate::algorithm::{Route, SearchOptions, SearchQueue, StepLimit};
    use crate::arena::{NodeArena, NodeId, SearchNode};
    use crate::errors::{Result, SearchError};
    use crate::SearchSpace;

    /// First-in, first-out frontier.
    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    /// Breadth-first search, where the order is determined by the
    /// states returned by [SearchSpace::successors].
    ///
    /// States are marked visited when they are discovered, so each
    /// one is queued at most once, and the first route to reach the
    /// goal has the fewest moves.
    #[derive(Debug)]
    pub struct BreadthFirstSearch<'p, P> {
        space: &'p P,
        options: SearchOptions,
    }

    impl<'p, P> BreadthFirstSearch<'p, P>
    where
        P: SearchSpace,
    {
        pub fn new(space: &'p P, options: SearchOptions) -> Self {
            Self { space, options }
        }

        pub fn search(&self, start: P::State, goal: P::State) -> Result<Route<P::State>, P::State> {
            let mut arena = NodeArena::default();
            let mut queue: BreadthQueue<NodeId> = BreadthQueue::default();
            let mut visited = VisitedSet::default();
            let mut limit = StepLimit::new(self.options.step_limit);

            visited.mark(start.clone());
            let root = arena.insert(SearchNode::root(start));
            queue.push(root);

            let mut last = root;
            while !queue.is_empty() {
                if let Err(iterations) = limit.increment() {
                    return Err(SearchError::IterationBoundExceeded {
                        iterations,
                        partial: arena.trace(last),
                    });
                }

                let current = match queue.pop() {
                    Some(id) => id,
                    None => break,
                };
                last = current;

                let state = arena[current].state.clone();
                if state == goal {
                    return Ok(Route {
                        path: arena.trace(current),
                        iterations: limit.current(),
                    });
                }

                let g = arena[current].g + 1;
                for next in self.space.successors(&state) {
                    if !visited.mark(next.clone()) {
                        continue;
                    }
                    queue.push(arena.insert(SearchNode::child(next, current, g, 0)));
                }
            }

            Err(SearchError::NoPathFound {
                iterations: limit.current(),
            })
        }
    }

    /// Run a breadth-first search over `space` from `start` to `goal`.
    pub fn bfs<P>(
        space: &P,
        start: P::State,
        goal: P::State,
        options: SearchOptions,
    ) -> Result<Route<P::State>, P::State>
    where
        P: SearchSpace,
    {
        BreadthFirstSearch::new(space, options).search(start, goal)
    }

}
