//! Camera framing for canvas rendering.

use color_eyre::eyre::Result;

use crate::{grid::Grid, types::Coord};

/// Transforms maze coordinates to screen coordinates centred on the middle of the maze.
///
/// Columns map to `x = col - (width - 1) / 2` and rows map to `y = (height - 1) / 2 - row`, so the
/// first row ends up at the top of the canvas and the maze centre sits on the origin.
///
/// # Errors
///
/// This function returns an error if the grid or a coordinate does not fit in a terminal
/// dimension.
pub(crate) fn to_screen_coords(coords: &[Coord], grid: &Grid) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.height())?);
    let cols_n = f64::from(u16::try_from(grid.width())?);

    coords
        .iter()
        .map(|coord| {
            let screen_x = f64::from(u16::try_from(coord.x)?) - (cols_n - 1.) / 2.;
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(coord.y)?);

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    /// Asserts that two screen points match within floating point tolerance.
    fn assert_point(actual: Option<&(f64, f64)>, expected: (f64, f64)) {
        let (x, y) = *actual.expect("point should exist");

        assert!(
            (x - expected.0).abs() < f64::EPSILON && (y - expected.1).abs() < f64::EPSILON,
            "expected {expected:?}, got ({x}, {y})"
        );
    }

    #[test]
    fn test_to_screen_coords_odd_extents() {
        let grid = Grid::new(3, 3, vec![Cell::Open; 9]).expect("grid should build");
        let coords = [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)];

        let screen = to_screen_coords(&coords, &grid).expect("coordinates should convert");

        assert_eq!(screen.len(), 3);
        assert_point(screen.first(), (-1., 1.));
        assert_point(screen.get(1), (0., 0.));
        assert_point(screen.get(2), (1., -1.));
    }

    #[test]
    fn test_to_screen_coords_even_extents() {
        let grid = Grid::new(4, 2, vec![Cell::Open; 8]).expect("grid should build");

        let screen =
            to_screen_coords(&[Coord::new(0, 0), Coord::new(3, 1)], &grid).expect("should convert");

        assert_point(screen.first(), (-1.5, 0.5));
        assert_point(screen.get(1), (1.5, -0.5));
    }

    #[test]
    fn test_to_screen_coords_empty() {
        let grid = Grid::new(1, 1, vec![Cell::Open]).expect("grid should build");

        let screen = to_screen_coords(&[], &grid).expect("no coordinates should convert");

        assert!(screen.is_empty(), "no coordinates produce no points");
    }

    #[test]
    fn test_to_screen_coords_rejects_huge_grid() {
        let grid = Grid::new(70_000, 1, vec![Cell::Open; 70_000]).expect("grid should build");

        assert!(
            to_screen_coords(&[Coord::new(0, 0)], &grid).is_err(),
            "a grid wider than a terminal cannot be framed"
        );
    }
}
