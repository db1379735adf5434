//! Grid model module.
//!
//! This module contains the immutable occupancy grid the path search operates on, along with the
//! bounds-checked queries and the errors they report.

use thiserror::Error;

use crate::types::Coord;

/// Offsets of the four axis-aligned neighbours, in the order up, down, left, right.
///
/// The order is part of the search's tie-breaking contract, so it must not change.
const NEIGHBOUR_OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The cell can be walked through.
    Open,
    /// The cell is a wall.
    Blocked,
}

impl Cell {
    /// Returns whether the cell is impassable.
    #[must_use]
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }
}

/// A coordinate query fell outside the grid extents.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("coordinate {coord} lies outside the {width}x{height} grid")]
pub struct OutOfBounds {
    /// The offending coordinate.
    pub coord: Coord,
    /// Width of the queried grid.
    pub width: usize,
    /// Height of the queried grid.
    pub height: usize,
}

/// A grid could not be built from the given cells.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    /// One of the extents is zero.
    #[error("grid extents must be at least 1x1, got {width}x{height}")]
    Empty {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The number of cells does not match `width * height`.
    #[error("expected {expected} cells, got {actual}")]
    CellCount {
        /// Number of cells implied by the extents.
        expected: usize,
        /// Number of cells provided.
        actual: usize,
    },
    /// A row is longer or shorter than the first row.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
}

/// Immutable rectangular occupancy grid.
///
/// Cells are stored in row-major order, so the cell at `(x, y)` lives at index `y * width + x`.
/// That flattened index doubles as the coordinate key used by the path search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cell states.
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from its extents and row-major cells.
    ///
    /// # Errors
    ///
    /// This function returns an error if:
    /// - Either extent is zero
    /// - The number of cells is not `width * height`
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty { width, height });
        }

        let expected = width
            .checked_mul(height)
            .ok_or(ShapeError::Empty { width, height })?;
        if cells.len() != expected {
            return Err(ShapeError::CellCount {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a grid from a list of equally long rows.
    ///
    /// # Errors
    ///
    /// This function returns an error if there are no rows, the rows are empty or the rows differ
    /// in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(width.saturating_mul(height));
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: width,
                    actual: line.len(),
                });
            }
            cells.extend(line);
        }

        Self::new(width, height, cells)
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether the coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Returns the row-major index of an in-bounds coordinate.
    #[must_use]
    pub const fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    /// Returns the coordinate stored at a row-major index.
    #[must_use]
    pub fn coord_of(&self, index: usize) -> Option<Coord> {
        if index < self.cells.len() {
            Some(Coord::new(index % self.width, index / self.width))
        } else {
            None
        }
    }

    /// Returns the state of a cell.
    ///
    /// # Errors
    ///
    /// This function returns [`OutOfBounds`] if the coordinate lies outside the grid.
    pub fn cell(&self, coord: Coord) -> Result<Cell, OutOfBounds> {
        self.index_of(coord)
            .and_then(|index| self.cells.get(index).copied())
            .ok_or(OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
    }

    /// Returns whether the cell at column `x` and row `y` is impassable.
    ///
    /// # Errors
    ///
    /// This function returns [`OutOfBounds`] if `x` is not in `[0, width)` or `y` is not in
    /// `[0, height)`.
    pub fn is_blocked(&self, x: usize, y: usize) -> Result<bool, OutOfBounds> {
        self.cell(Coord::new(x, y)).map(Cell::is_blocked)
    }

    /// Returns the in-bounds 4-connected neighbours of a coordinate.
    ///
    /// Neighbours are yielded in the order up, down, left, right, whether they are open or not.
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        NEIGHBOUR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let neighbour = Coord::new(
                coord.x.checked_add_signed(dx)?,
                coord.y.checked_add_signed(dy)?,
            );
            self.contains(neighbour).then_some(neighbour)
        })
    }

    /// Returns every coordinate of the grid together with its state, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| Some((self.coord_of(index)?, *cell)))
    }

    /// Returns the open cells on the outer border, in row-major order.
    ///
    /// These are the gaps in the surrounding wall through which a walker enters or leaves a maze.
    pub fn openings(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells().filter_map(|(coord, cell)| {
            let on_border = coord.x == 0
                || coord.y == 0
                || coord.x + 1 == self.width
                || coord.y + 1 == self.height;
            (on_border && !cell.is_blocked()).then_some(coord)
        })
    }
}
