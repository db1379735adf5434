//! Core application state and logic for the maze walk-through.

use color_eyre::eyre::{Result, WrapErr as _};
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use crate::{
    cli::Config,
    events,
    maze::Maze,
    pathfinding::{self, Path},
    types::{Coord, Screen},
    ui,
    walker::Walker,
};

/// Outcome of solving a maze between two endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Cell the search started from.
    pub start: Coord,
    /// Cell the search headed to.
    pub goal: Coord,
    /// Shortest path between both cells, if one exists.
    pub path: Option<Path>,
}

impl Solution {
    /// Solves a maze between the configured endpoints.
    ///
    /// Endpoints missing from the configuration default to the maze entry and exit.
    ///
    /// # Errors
    ///
    /// This function returns an error if an endpoint lies outside the maze.
    pub fn solve(maze: &Maze, config: &Config) -> Result<Self> {
        let start = config.start.unwrap_or_else(|| maze.entry());
        let goal = config.goal.unwrap_or_else(|| maze.exit());

        let path = pathfinding::find_path(maze.grid(), start, goal)
            .wrap_err_with(|| format!("failed to solve maze {}", maze.name()))?;

        match &path {
            Some(path) => info!(
                maze = maze.name(),
                %start,
                %goal,
                cost = path.cost(),
                "solved maze"
            ),
            None => warn!(maze = maze.name(), %start, %goal, "no path connects the endpoints"),
        }

        Ok(Self { start, goal, path })
    }

    /// Returns a one-line description of the outcome.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.path {
            Some(path) => format!(
                "path from {} to {} takes {} steps",
                self.start,
                self.goal,
                path.cost()
            ),
            None => format!("no path from {} to {}", self.start, self.goal),
        }
    }
}

/// Application state container for the maze walk-through.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the screen and Crossterm events will write to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Maze being walked.
    pub(crate) maze: Maze,
    /// Solved endpoints and path.
    pub(crate) solution: Solution,
    /// Playback of the solved path.
    ///
    /// This field is `None` when the search found no path, in which case there is nothing to walk.
    pub(crate) walker: Option<Walker>,
}

impl App {
    /// Solves the maze and prepares the walk-through.
    ///
    /// # Errors
    ///
    /// This function returns an error if an endpoint lies outside the maze.
    pub fn new(maze: Maze, config: &Config) -> Result<Self> {
        let solution = Solution::solve(&maze, config)?;
        let walker = solution
            .path
            .as_ref()
            .map(|path| Walker::new(path, config.frame_delay));
        let screen = if walker.is_some() {
            Screen::Walk
        } else {
            Screen::NoPath
        };

        Ok(Self {
            exit: false,
            screen,
            maze,
            solution,
            walker,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| {
                ui::draw(self, frame).map_err(|err| std::io::Error::other(err.to_string()))
            })?;
            events::handle_events(self)?;
        }

        Ok(())
    }
}
