//! Maze data and management module.
//!
//! This module contains the `Maze` struct, which pairs the text rows of an ASCII maze with the
//! occupancy grid parsed from them, along with the built-in default maze and the endpoint choice
//! used when none is given on the command line.

use crate::{
    file_loader::{self, ParseError},
    grid::Grid,
    pathfinding::Path,
    types::Coord,
};

/// Marker drawn on path cells when a solution is rendered as text.
const PATH_MARKER: char = '*';
/// Marker drawn on the first cell of a rendered solution.
const START_MARKER: char = 'S';
/// Marker drawn on the last cell of a rendered solution.
const GOAL_MARKER: char = 'G';

/// Named ASCII maze.
///
/// This structure keeps the padded text rows next to the grid built from them so that solutions
/// can be drawn over the original artwork.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Display name of the maze, usually the file stem it was loaded from.
    name: String,
    /// Maze rows, right-padded to a common width.
    rows: Vec<String>,
    /// Occupancy grid parsed from the rows.
    grid: Grid,
}

impl Default for Maze {
    fn default() -> Self {
        Self::parse("Default".to_owned(), DEFAULT_MAZE).expect("failed to parse default maze")
    }
}

impl Maze {
    /// Builds a maze from its name and ASCII text.
    ///
    /// # Errors
    ///
    /// This function returns a [`ParseError`] if the text holds no rows.
    pub fn parse(name: String, text: &str) -> Result<Self, ParseError> {
        let rows = file_loader::parse_rows(text)?;
        let grid = file_loader::grid_from_rows(&rows)?;

        Ok(Self { name, rows, grid })
    }

    /// Returns the display name of the maze.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the occupancy grid of the maze.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the padded text rows of the maze.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Returns the cell a walker enters the maze through.
    ///
    /// This is the first gap in the outer wall in row-major order, or the top-left corner when the
    /// outer wall has fewer than two gaps.
    #[must_use]
    pub fn entry(&self) -> Coord {
        self.endpoints().0
    }

    /// Returns the cell a walker leaves the maze through.
    ///
    /// This is the last gap in the outer wall in row-major order, or the bottom-right corner when
    /// the outer wall has fewer than two gaps.
    #[must_use]
    pub fn exit(&self) -> Coord {
        self.endpoints().1
    }

    /// Returns the default entry and exit cells.
    fn endpoints(&self) -> (Coord, Coord) {
        let mut openings = self.grid.openings();

        match (openings.next(), openings.last()) {
            (Some(entry), Some(exit)) => (entry, exit),
            _ => (
                Coord::new(0, 0),
                Coord::new(
                    self.grid.width().saturating_sub(1),
                    self.grid.height().saturating_sub(1),
                ),
            ),
        }
    }

    /// Renders the maze as text with an optional solution drawn over it.
    ///
    /// Path cells are marked with `*`, the first cell with `S` and the last cell with `G`.
    #[must_use]
    pub fn render(&self, path: Option<&Path>) -> String {
        let mut canvas: Vec<Vec<char>> = self.rows.iter().map(|row| row.chars().collect()).collect();

        if let Some(path) = path {
            for coord in path.coords() {
                mark(&mut canvas, *coord, PATH_MARKER);
            }
            if let Some(start) = path.start() {
                mark(&mut canvas, start, START_MARKER);
            }
            if let Some(goal) = path.goal() {
                mark(&mut canvas, goal, GOAL_MARKER);
            }
        }

        canvas
            .into_iter()
            .map(String::from_iter)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Overwrites one character of a text canvas, ignoring coordinates outside it.
fn mark(canvas: &mut [Vec<char>], coord: Coord, marker: char) {
    if let Some(cell) = canvas
        .get_mut(coord.y)
        .and_then(|row| row.get_mut(coord.x))
    {
        *cell = marker;
    }
}

/// Default maze used when no maze file is given.
///
/// The outer wall has one gap on the left of the second row and one on the right of the
/// second-to-last row.
static DEFAULT_MAZE: &str = concat!(
    "+--+--+--+--+--+--+--+--+--+--+\n",
    "                  |        |  |\n",
    "+--+--+  +--+--+  +  +--+  +  +\n",
    "|     |  |  |     |  |     |  |\n",
    "+  +  +  +  +  +--+--+  +--+  +\n",
    "|  |  |  |  |        |     |  |\n",
    "+  +--+  +  +--+--+  +  +  +  +\n",
    "|           |     |     |     |\n",
    "+--+--+  +--+  +  +--+--+--+  +\n",
    "|     |     |  |  |        |  |\n",
    "+  +  +  +  +  +  +  +--+  +  +\n",
    "|  |     |  |  |     |     |  |\n",
    "+  +--+--+  +  +--+--+  +--+  +\n",
    "|        |     |  |     |     |\n",
    "+--+--+  +--+--+  +  +--+--+--+\n",
    "|           |  |     |        |\n",
    "+  +--+--+  +  +--+--+  +--+  +\n",
    "|        |     |     |  |     |\n",
    "+--+--+  +  +--+  +  +  +  +--+\n",
    "|        |        |     |      \n",
    "+--+--+--+--+--+--+--+--+--+--+",
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding;

    #[test]
    fn test_maze_default() {
        let maze = Maze::default();

        assert_eq!(maze.name(), "Default");
        assert_eq!(maze.grid().width(), 31);
        assert_eq!(maze.grid().height(), 21);
        assert!(
            maze.rows()
                .first()
                .expect("maze should have at least one row")
                .starts_with("+--+"),
            "first row is the top wall"
        );
    }

    #[test]
    fn test_maze_default_endpoints() {
        let maze = Maze::default();

        assert_eq!(maze.entry(), Coord::new(0, 1));
        assert_eq!(maze.exit(), Coord::new(30, 19));
    }

    #[test]
    fn test_maze_default_is_solvable() {
        let maze = Maze::default();

        let path = pathfinding::find_path(maze.grid(), maze.entry(), maze.exit())
            .expect("default endpoints are in bounds")
            .expect("default maze has a solution");

        assert_eq!(path.cost(), 78);
    }

    #[test]
    fn test_maze_endpoints_fall_back_to_corners() {
        let maze = Maze::parse("closed".to_owned(), "+-+\n| |\n+-+").expect("maze should parse");

        assert_eq!(maze.entry(), Coord::new(0, 0));
        assert_eq!(maze.exit(), Coord::new(2, 2));
    }

    #[test]
    fn test_maze_render_without_path() {
        let text = "+-+\n  |\n+-+";
        let maze = Maze::parse("plain".to_owned(), text).expect("maze should parse");

        assert_eq!(maze.render(None), text);
    }

    #[test]
    fn test_maze_render_with_path() {
        let maze = Maze::parse("tiny".to_owned(), "+--+\n    \n+--+").expect("maze should parse");
        let path = pathfinding::find_path(maze.grid(), maze.entry(), maze.exit())
            .expect("endpoints are in bounds")
            .expect("the corridor is open");

        assert_eq!(maze.render(Some(&path)), "+--+\nS**G\n+--+");
    }

    #[test]
    fn test_maze_parse_empty_text() {
        assert_eq!(
            Maze::parse("empty".to_owned(), "   \n\n"),
            Err(ParseError::Empty)
        );
    }
}
