//! Command-line interface and run configuration.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{types::Coord, walker::DEFAULT_FRAME_DELAY_MS};

/// Solve an ASCII maze with A* and walk through the shortest path.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to an ASCII maze file. The built-in maze is used when omitted.
    pub maze: Option<PathBuf>,
    /// Cell to start from, as `x,y`. Defaults to the first gap in the outer wall.
    #[arg(long, value_name = "X,Y")]
    pub start: Option<Coord>,
    /// Cell to reach, as `x,y`. Defaults to the last gap in the outer wall.
    #[arg(long, value_name = "X,Y")]
    pub goal: Option<Coord>,
    /// Milliseconds between two walker steps.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay: u64,
    /// Print the solved maze instead of opening the terminal interface.
    #[arg(long)]
    pub print: bool,
}

impl Cli {
    /// Extracts the settings that drive solving and playback.
    #[must_use]
    pub const fn config(&self) -> Config {
        Config {
            start: self.start,
            goal: self.goal,
            frame_delay: Duration::from_millis(self.frame_delay),
        }
    }
}

/// Settings for solving a maze and replaying the solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Start cell override.
    pub start: Option<Coord>,
    /// Goal cell override.
    pub goal: Option<Coord>,
    /// Delay between two walker steps.
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: None,
            goal: None,
            frame_delay: Duration::from_millis(DEFAULT_FRAME_DELAY_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["mazewalk"]).expect("no arguments should parse");

        assert_eq!(cli.maze, None);
        assert!(!cli.print, "printing is opt-in");
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn test_cli_all_arguments() {
        let cli = Cli::try_parse_from([
            "mazewalk",
            "mazes/spiral.txt",
            "--start",
            "1,2",
            "--goal",
            "7,3",
            "--frame-delay",
            "50",
            "--print",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.maze, Some(PathBuf::from("mazes/spiral.txt")));
        assert!(cli.print, "--print was given");
        assert_eq!(
            cli.config(),
            Config {
                start: Some(Coord::new(1, 2)),
                goal: Some(Coord::new(7, 3)),
                frame_delay: Duration::from_millis(50),
            }
        );
    }

    #[test]
    fn test_cli_rejects_malformed_coordinate() {
        let result = Cli::try_parse_from(["mazewalk", "--start", "12"]);

        assert!(result.is_err(), "a coordinate needs both components");
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
