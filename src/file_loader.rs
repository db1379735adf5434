//! File loading and parsing utilities for ASCII maze files.

use std::{fs, iter, path::Path};

use color_eyre::eyre::{OptionExt as _, Result, WrapErr as _};
use thiserror::Error;
use tracing::info;

use crate::{
    grid::{Cell, Grid, ShapeError},
    maze::Maze,
};

/// Failure to turn maze text into a grid.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The text holds no non-empty rows.
    #[error("maze text holds no rows")]
    Empty,
    /// The rows do not form a valid grid.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Loads and parses a maze file.
///
/// The maze is named after the file stem, so `mazes/spiral.txt` becomes `spiral`.
///
/// # Errors
///
/// This function may return errors if:
/// - The file cannot be read
/// - The file name has no stem or is not valid UTF-8
/// - The contents do not hold a maze
pub fn load_maze(path: &Path) -> Result<Maze> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read maze file {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_eyre("failed to extract a maze name from the file name")?
        .to_owned();

    let maze = Maze::parse(name, &contents)
        .wrap_err_with(|| format!("failed to parse maze file {}", path.display()))?;
    info!(
        name = maze.name(),
        width = maze.grid().width(),
        height = maze.grid().height(),
        "loaded maze"
    );

    Ok(maze)
}

/// Parses ASCII maze text into an occupancy grid.
///
/// `+`, `-` and `|` are walls; every other character is open floor.
///
/// # Errors
///
/// This function returns [`ParseError::Empty`] if the text holds no rows.
pub fn parse_maze(text: &str) -> Result<Grid, ParseError> {
    grid_from_rows(&parse_rows(text)?)
}

/// Splits maze text into rows of equal width.
///
/// Surrounding whitespace is trimmed from the whole text and empty lines are dropped. Short rows are
/// right-padded with spaces. Line endings may be `\n` or `\r\n`.
pub(crate) fn parse_rows(text: &str) -> Result<Vec<String>, ParseError> {
    let lines: Vec<&str> = text
        .trim()
        .lines()
        .filter(|line| !line.is_empty())
        .collect();

    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .ok_or(ParseError::Empty)?;

    Ok(lines
        .into_iter()
        .map(|line| {
            let padding = width.saturating_sub(line.chars().count());
            let mut row = String::with_capacity(line.len() + padding);
            row.push_str(line);
            row.extend(iter::repeat_n(' ', padding));
            row
        })
        .collect())
}

/// Builds a grid from rows produced by [`parse_rows`].
pub(crate) fn grid_from_rows(rows: &[String]) -> Result<Grid, ParseError> {
    let cells = rows
        .iter()
        .map(|row| row.chars().map(cell_from_char).collect())
        .collect();

    Ok(Grid::from_rows(cells)?)
}

/// Maps a maze character to the state of its cell.
const fn cell_from_char(char: char) -> Cell {
    match char {
        '+' | '-' | '|' => Cell::Blocked,
        _ => Cell::Open,
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::types::Coord;

    #[test]
    fn test_parse_maze_walls_and_floor() {
        let grid = parse_maze("+-+\n| |\n+ +").expect("maze should parse");

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.is_blocked(0, 0), Ok(true));
        assert_eq!(grid.is_blocked(1, 0), Ok(true));
        assert_eq!(grid.is_blocked(0, 1), Ok(true));
        assert_eq!(grid.is_blocked(1, 1), Ok(false));
        assert_eq!(grid.is_blocked(1, 2), Ok(false));
    }

    #[test]
    fn test_parse_maze_other_characters_are_open() {
        let grid = parse_maze("#.x").expect("maze should parse");

        assert!(
            grid.cells().all(|(_, cell)| cell == Cell::Open),
            "only +, - and | are walls"
        );
    }

    #[test]
    fn test_parse_maze_pads_short_rows() {
        let grid = parse_maze("+--+\n|\n+--+").expect("maze should parse");

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.cell(Coord::new(3, 1)), Ok(Cell::Open));
    }

    #[test]
    fn test_parse_maze_trims_and_skips_blank_lines() {
        let grid = parse_maze("\n\n+-+\n\n+-+\n\n").expect("maze should parse");

        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_parse_maze_ignores_carriage_returns() {
        let grid = parse_maze("+-+\r\n| |\r\n+-+\r\n").expect("maze should parse");

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.is_blocked(2, 1), Ok(true));
    }

    #[test]
    fn test_parse_maze_empty_input() {
        assert_eq!(parse_maze(""), Err(ParseError::Empty));
        assert_eq!(parse_maze(" \n \t\n"), Err(ParseError::Empty));
    }

    #[test]
    fn test_parse_rows_keeps_text() {
        let rows = parse_rows("ab\nc").expect("rows should parse");

        assert_eq!(rows, vec!["ab".to_owned(), "c ".to_owned()]);
    }

    #[test]
    fn test_load_maze_from_file() {
        let path = env::temp_dir().join(format!("mazewalk-load-{}.txt", std::process::id()));
        fs::write(&path, "+--+\n    \n+--+\n").expect("temporary maze should be writable");

        let maze = load_maze(&path).expect("maze file should load");
        fs::remove_file(&path).expect("temporary maze should be removable");

        assert_eq!(
            maze.name(),
            format!("mazewalk-load-{}", std::process::id())
        );
        assert_eq!(maze.grid().width(), 4);
        assert_eq!(maze.entry(), Coord::new(0, 1));
        assert_eq!(maze.exit(), Coord::new(3, 1));
    }

    #[test]
    fn test_load_maze_missing_file() {
        let path = env::temp_dir().join("mazewalk-this-file-does-not-exist.txt");

        let err = load_maze(&path).expect_err("missing file should fail");

        assert!(
            err.to_string().starts_with("failed to read maze file"),
            "the report should name the failing step"
        );
    }
}
