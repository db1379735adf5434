//! Solves ASCII mazes with an A* path search and walks through the solution in the terminal.
//!
//! The core of the crate is the [`Grid`] occupancy model and [`find_path`], an A* search over
//! 4-connected unit-cost grids with a fixed tie-breaking rule. Around it sit the maze loader, the
//! [`Walker`] playback and a Ratatui front end driven by [`App`].

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod camera;
mod cli;
mod events;
mod file_loader;
mod grid;
mod logging;
mod maze;
mod pathfinding;
mod types;
mod ui;
mod walker;

pub use app::{App, Solution};
pub use cli::{Cli, Config};
pub use file_loader::{load_maze, parse_maze, ParseError};
pub use grid::{Cell, Grid, OutOfBounds, ShapeError};
pub use logging::init as init_logging;
pub use maze::Maze;
pub use pathfinding::{find_path, find_path_cancellable, Endpoint, Path, SearchError};
pub use types::{Coord, CoordParseError};
pub use walker::{Walker, DEFAULT_FRAME_DELAY_MS};
