//! Type definitions shared by the grid model, the search engine and the terminal front end.

use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Integer cell coordinate in a maze grid.
///
/// The `x` component is the column and grows to the right, the `y` component is the row and grows
/// downwards, so `(0, 0)` is the first character of the first maze line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl Coord {
    /// Builds a coordinate from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the Manhattan distance between two coordinates.
    ///
    /// This is the number of unit steps a walker needs on an empty 4-connected grid, which makes it
    /// the admissible and consistent estimate used by the path search.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns whether both coordinates differ by exactly one unit along exactly one axis.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.x, self.y)
    }
}

/// Failure to read a coordinate from its `x,y` text form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordParseError {
    /// The text has no comma separating the two components.
    #[error("expected a coordinate in the form `x,y`, got `{0}`")]
    MissingSeparator(String),
    /// One of the components is not an unsigned integer.
    #[error("invalid coordinate component: {0}")]
    Component(#[from] ParseIntError),
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (x, y) = text
            .split_once(',')
            .ok_or_else(|| CoordParseError::MissingSeparator(text.to_owned()))?;

        Ok(Self::new(x.trim().parse()?, y.trim().parse()?))
    }
}

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the application. It is used to
/// determine which screen to render and which keys have an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Walk-through screen.
    ///
    /// This variant represents the screen where the maze is displayed and the walker moves along
    /// the solved path.
    Walk,
    /// Unreachable goal screen.
    ///
    /// This variant represents the screen shown when the search reports that no path connects the
    /// chosen endpoints. Only the maze and a message are rendered.
    NoPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_parse_valid() {
        assert_eq!("3,4".parse::<Coord>(), Ok(Coord::new(3, 4)));
        assert_eq!(" 10 , 0 ".parse::<Coord>(), Ok(Coord::new(10, 0)));
    }

    #[test]
    fn test_coord_parse_missing_separator() {
        let result = "34".parse::<Coord>();
        assert_eq!(
            result,
            Err(CoordParseError::MissingSeparator("34".to_owned())),
            "a coordinate without a comma should be rejected"
        );
    }

    #[test]
    fn test_coord_parse_negative_component() {
        assert!(
            matches!("-1,0".parse::<Coord>(), Err(CoordParseError::Component(_))),
            "negative components cannot address a grid cell"
        );
    }

    #[test]
    fn test_coord_manhattan() {
        let origin = Coord::new(0, 0);

        assert_eq!(origin.manhattan(Coord::new(2, 2)), 4);
        assert_eq!(Coord::new(5, 1).manhattan(Coord::new(2, 3)), 5);
        assert_eq!(origin.manhattan(origin), 0);
    }

    #[test]
    fn test_coord_adjacency() {
        let center = Coord::new(1, 1);

        assert!(center.is_adjacent(Coord::new(1, 0)), "up is adjacent");
        assert!(center.is_adjacent(Coord::new(0, 1)), "left is adjacent");
        assert!(!center.is_adjacent(Coord::new(2, 2)), "diagonal is not");
        assert!(!center.is_adjacent(center), "a cell is not its own neighbour");
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(7, 2).to_string(), "(7, 2)");
    }

    #[test]
    fn test_screen_variants() {
        assert_ne!(Screen::Walk, Screen::NoPath);
        assert_eq!(format!("{:?}", Screen::NoPath), "NoPath");
    }
}
