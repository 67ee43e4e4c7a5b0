//! Text rendering of a grid with a route drawn over it.
//!
//! Rendering works on a copy of the cells, so the grid handed to the
//! search is never touched.

use std::fmt;

use geometry::coord2d::map::{Cell, GridMap, Map};
use geometry::coord2d::path::Path;
use geometry::coord2d::Position;
use geometry::Coordinate;

/// What to draw in a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Glyph {
    Empty,
    Obstacle(Coordinate),
    Start,
    Goal,
    Step,
}

impl From<Cell> for Glyph {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Free => Glyph::Empty,
            Cell::Blocked(v) => Glyph::Obstacle(v),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Empty => write!(f, " "),
            Glyph::Obstacle(v) => write!(f, "{}", v),
            Glyph::Start => write!(f, "s"),
            Glyph::Goal => write!(f, "e"),
            Glyph::Step => write!(f, "*"),
        }
    }
}

/// A rendering-ready copy of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    rows: Vec<Vec<Glyph>>,
}

impl Rendering {
    /// Render the bare grid.
    pub fn new(grid: &GridMap) -> Self {
        Self {
            rows: grid
                .cells()
                .map(|row| row.iter().map(|c| Glyph::from(*c)).collect())
                .collect(),
        }
    }

    /// Draw a path over the grid: `s` at its origin, `e` where it
    /// touches `goal`, and `*` everywhere else along it.
    pub fn with_path(mut self, path: &Path, goal: Position) -> Self {
        let start = *path.origin();
        for &position in path.iter() {
            let glyph = if position == start {
                Glyph::Start
            } else if position == goal {
                Glyph::Goal
            } else {
                Glyph::Step
            };
            if let Some(cell) = self.cell_mut(position) {
                *cell = glyph;
            }
        }
        self
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Glyph> {
        if position.row < 0 || position.col < 0 {
            return None;
        }
        self.rows
            .get_mut(position.row as usize)
            .and_then(|row| row.get_mut(position.col as usize))
    }

    /// The glyph drawn at a position, if it is on the grid.
    pub fn get(&self, position: Position) -> Option<Glyph> {
        if position.row < 0 || position.col < 0 {
            return None;
        }
        self.rows
            .get(position.row as usize)
            .and_then(|row| row.get(position.col as usize))
            .copied()
    }
}

/// One line per row, each glyph followed by a space.
impl fmt::Display for Rendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for glyph in row {
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render a grid, with the path drawn on when there is one.
pub fn render(grid: &GridMap, path: Option<&Path>, goal: Position) -> Rendering {
    let rendering = Rendering::new(grid);
    match path {
        Some(path) => rendering.with_path(path, goal),
        None => rendering,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid() -> GridMap {
        "1 0 1
         0 0 2
         1 0 1"
            .parse()
            .unwrap()
    }

    #[test]
    fn bare() {
        let grid = grid();
        let rendering = Rendering::new(&grid);
        assert_eq!(rendering.to_string(), "1   1 \n    2 \n1   1 \n");
        assert_eq!(rendering.get((1, 2).into()), Some(Glyph::Obstacle(2)));
        assert_eq!(rendering.get((3, 0).into()), None);
        assert!(grid.is_walkable((0, 1).into()));
    }

    #[test]
    fn with_path() {
        let grid = grid();
        let route = grid.bfs((0, 1).into(), (2, 1).into()).unwrap();
        let rendering = render(&grid, Some(&route.path), (2, 1).into());

        assert_eq!(rendering.to_string(), "1 s 1 \n  * 2 \n1 e 1 \n");

        // The grid itself is untouched.
        assert_eq!(Rendering::new(&grid).get((1, 1).into()), Some(Glyph::Empty));
    }

    #[test]
    fn partial_path() {
        let grid = grid();
        let path = Path::from_steps(vec![(0, 1).into(), (1, 1).into(), (1, 0).into()]).unwrap();
        let rendering = render(&grid, Some(&path), (2, 1).into());

        assert_eq!(rendering.to_string(), "1 s 1 \n* * 2 \n1   1 \n");
        assert_eq!(render(&grid, None, (2, 1).into()), Rendering::new(&grid));
    }
}
