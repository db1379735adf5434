//! This crate contains the source code for the binary of the maze walk-through.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazewalk::{init_logging, load_maze, App, Cli, Maze, Solution};

fn main() -> Result<()> {
    install()?;
    init_logging()?;

    let cli = Cli::parse();
    let config = cli.config();
    let maze = match &cli.maze {
        Some(path) => load_maze(path)?,
        None => Maze::default(),
    };

    if cli.print {
        let solution = Solution::solve(&maze, &config)?;
        println!("{}", maze.render(solution.path.as_ref()));
        println!("{}", solution.summary());

        return Ok(());
    }

    let mut app = App::new(maze, &config)?;
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
