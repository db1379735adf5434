//! Walk-through playback module.
//!
//! This module contains the walker that replays a solved path one cell at a time, the way a sprite
//! walks from the maze entry to its exit.

use std::time::{Duration, Instant};

use crate::{pathfinding::Path, types::Coord};

/// Default delay between two walker steps, in milliseconds.
///
/// This constant controls the pace of the walk-through. A lower value makes the walker move faster,
/// while a higher value slows it down to make the route easier to follow.
pub const DEFAULT_FRAME_DELAY_MS: u64 = 200;

/// Playback state for a walk along a solved path.
///
/// The walker starts on the first cell of the path and stops on the last one. Every cell it has
/// stood on so far forms its trail.
#[derive(Clone, Debug)]
pub struct Walker {
    /// Cells to walk, from start to goal.
    path: Vec<Coord>,
    /// Index of the cell the walker currently stands on.
    current_index: usize,
    /// Timestamp of the last step.
    last_update_time: Instant,
    /// Minimum time between two steps.
    frame_delay: Duration,
    /// Whether time-driven steps are suspended.
    paused: bool,
}

impl Walker {
    /// Creates a walker standing on the first cell of `path`.
    #[must_use]
    pub fn new(path: &Path, frame_delay: Duration) -> Self {
        Self {
            path: path.coords().to_vec(),
            current_index: 0,
            last_update_time: Instant::now(),
            frame_delay,
            paused: false,
        }
    }

    /// Returns the cell the walker stands on.
    #[must_use]
    pub fn position(&self) -> Option<Coord> {
        self.path.get(self.current_index).copied()
    }

    /// Returns the cells walked so far, the current one included.
    #[must_use]
    pub fn trail(&self) -> &[Coord] {
        self.path.get(..=self.current_index).unwrap_or_default()
    }

    /// Returns the number of steps taken and the number of steps in the whole walk.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.current_index, self.path.len().saturating_sub(1))
    }

    /// Returns whether the walker stands on the goal.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_index + 1 >= self.path.len()
    }

    /// Returns whether time-driven steps are suspended.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Moves the walker one cell forward. Does nothing once the goal is reached.
    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.current_index += 1;
        }
    }

    /// Puts the walker back on the first cell.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.last_update_time = Instant::now();
    }

    /// Suspends or resumes time-driven steps.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.last_update_time = Instant::now();
    }

    /// Advances the walker if the frame delay has elapsed since the last step.
    pub fn update(&mut self) {
        if self.paused || self.is_finished() {
            return;
        }

        if self.last_update_time.elapsed() >= self.frame_delay {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::{Cell, Grid},
        pathfinding,
    };

    /// Solves a three-cell corridor and returns its path.
    fn corridor_path() -> Path {
        let grid = Grid::new(3, 1, vec![Cell::Open; 3]).expect("corridor should build");

        pathfinding::find_path(&grid, Coord::new(0, 0), Coord::new(2, 0))
            .expect("endpoints are in bounds")
            .expect("corridor is open")
    }

    #[test]
    fn test_walker_starts_on_first_cell() {
        let walker = Walker::new(&corridor_path(), Duration::ZERO);

        assert_eq!(walker.position(), Some(Coord::new(0, 0)));
        assert_eq!(walker.trail(), [Coord::new(0, 0)]);
        assert_eq!(walker.progress(), (0, 2));
        assert!(!walker.is_finished(), "a fresh walker has steps left");
    }

    #[test]
    fn test_walker_advance_until_goal() {
        let mut walker = Walker::new(&corridor_path(), Duration::ZERO);

        walker.advance();
        assert_eq!(walker.position(), Some(Coord::new(1, 0)));

        walker.advance();
        walker.advance();
        assert_eq!(walker.position(), Some(Coord::new(2, 0)));
        assert_eq!(
            walker.trail(),
            [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
        );
        assert!(walker.is_finished(), "walker should stop on the goal");
    }

    #[test]
    fn test_walker_restart() {
        let mut walker = Walker::new(&corridor_path(), Duration::ZERO);
        walker.advance();
        walker.advance();

        walker.restart();

        assert_eq!(walker.position(), Some(Coord::new(0, 0)));
        assert_eq!(walker.progress(), (0, 2));
    }

    #[test]
    fn test_walker_update_without_delay() {
        let mut walker = Walker::new(&corridor_path(), Duration::ZERO);

        walker.update();

        assert_eq!(walker.position(), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_walker_update_waits_for_delay() {
        let mut walker = Walker::new(&corridor_path(), Duration::from_secs(3600));

        walker.update();

        assert_eq!(walker.position(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_walker_paused_update() {
        let mut walker = Walker::new(&corridor_path(), Duration::ZERO);

        walker.toggle_pause();
        walker.update();
        assert!(walker.is_paused(), "walker should be paused");
        assert_eq!(walker.position(), Some(Coord::new(0, 0)));

        walker.toggle_pause();
        walker.update();
        assert_eq!(walker.position(), Some(Coord::new(1, 0)));
    }

    #[test]
    fn test_walker_single_cell_path() {
        let grid = Grid::new(1, 1, vec![Cell::Open]).expect("grid should build");
        let path = pathfinding::find_path(&grid, Coord::new(0, 0), Coord::new(0, 0))
            .expect("endpoint is in bounds")
            .expect("a cell reaches itself");
        let mut walker = Walker::new(&path, Duration::ZERO);

        walker.update();

        assert!(walker.is_finished(), "a one-cell walk is already over");
        assert_eq!(walker.progress(), (0, 0));
    }
}
