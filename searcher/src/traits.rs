use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for conducting searches.
///
/// A search space hands out the states reachable from a
/// given state in a single unit-cost move. The order of the
/// returned states is the order in which they are considered,
/// so implementations should keep it fixed to make searches
/// reproducible.
pub trait SearchSpace {
    type State: Debug + Clone + Eq + Hash;

    /// States reachable in one move from `state`.
    fn successors(&self, state: &Self::State) -> Vec<Self::State>;
}

/// An interface for searching when a heuristic can be provided.
///
/// The estimate is used only to order the frontier. It need
/// not be admissible, in which case the search may return a
/// route which is longer than the shortest one.
pub trait SearchHeuristic: SearchSpace {
    /// Best guess of the remaining cost from `state` to `goal`.
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> usize;
}

#[cfg(test)]
pub(crate) mod helpers {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::{SearchHeuristic, SearchSpace};

    /// A small 4-connected maze for exercising the algorithms,
    /// states are (row, col) pairs.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct Maze {
        open: HashSet<(i32, i32)>,
    }

    impl FromStr for Maze {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let mut maze = Maze::default();
            for (row, line) in s.lines().enumerate() {
                for (col, c) in line.trim().chars().enumerate() {
                    match c {
                        '.' => {
                            maze.open.insert((row as i32, col as i32));
                        }
                        '#' => {}
                        _ => return Err(format!("Unexpected maze character: {}", c)),
                    };
                }
            }
            Ok(maze)
        }
    }

    impl SearchSpace for Maze {
        type State = (i32, i32);

        fn successors(&self, state: &Self::State) -> Vec<Self::State> {
            let (row, col) = *state;
            [(0, -1), (0, 1), (-1, 0), (1, 0)]
                .iter()
                .map(|(dr, dc)| (row + dr, col + dc))
                .filter(|s| self.open.contains(s))
                .collect()
        }
    }

    impl SearchHeuristic for Maze {
        fn heuristic(&self, state: &Self::State, goal: &Self::State) -> usize {
            ((state.0 - goal.0).abs() + (state.1 - goal.1).abs()) as usize
        }
    }
}
