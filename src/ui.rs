//! User interface rendering functions for the application screens.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    camera,
    grid::Grid,
    types::{Coord, Screen},
    App,
};

/// Narrowest width given to the status line below the maze.
const STATUS_MIN_WIDTH: usize = 48;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from layout or coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    match app.screen {
        Screen::Walk => walk(app, frame),
        Screen::NoPath => no_path(app, frame),
    }
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the walk-through screen.
///
/// This function draws the maze walls, the trail the walker has left behind and the walker itself,
/// followed by a status line reporting the walk progress.
///
/// # Errors
///
/// This function may return errors from layout or coordinate conversion failures.
pub(crate) fn walk(app: &App, frame: &mut Frame) -> Result<()> {
    let grid = app.maze.grid();
    let walker = app
        .walker
        .as_ref()
        .ok_or_eyre("failed to retrieve walker for the solved path")?;

    let (space, status_area) = maze_layout(frame, grid)?;

    let wall_screen_coords = camera::to_screen_coords(&walls(grid), grid)?;
    let trail_screen_coords = camera::to_screen_coords(walker.trail(), grid)?;
    let walker_screen_coords =
        camera::to_screen_coords(&walker.position().into_iter().collect::<Vec<_>>(), grid)?;

    let (x_bounds, y_bounds) = canvas_bounds(space);
    let maze = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &trail_screen_coords,
                color: Color::Red,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &walker_screen_coords,
                color: Color::Yellow,
            });
        });
    frame.render_widget(maze, space);

    let (step, steps) = walker.progress();
    let mut status = format!(
        "step {step}/{steps} from {} to {}",
        app.solution.start, app.solution.goal
    );
    if walker.is_paused() {
        status.push_str(" (paused)");
    }
    render_status(
        frame,
        status_area,
        "(r) restart / (p) pause / (q) quit",
        status,
    );

    Ok(())
}

/// Renders the screen shown when the endpoints are not connected.
///
/// This function draws the maze walls with both endpoints highlighted, followed by a status line
/// naming the endpoints that could not be joined.
///
/// # Errors
///
/// This function may return errors from layout or coordinate conversion failures.
pub(crate) fn no_path(app: &App, frame: &mut Frame) -> Result<()> {
    let grid = app.maze.grid();
    let (space, status_area) = maze_layout(frame, grid)?;

    let wall_screen_coords = camera::to_screen_coords(&walls(grid), grid)?;
    let endpoint_screen_coords =
        camera::to_screen_coords(&[app.solution.start, app.solution.goal], grid)?;

    let (x_bounds, y_bounds) = canvas_bounds(space);
    let maze = Canvas::default()
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &endpoint_screen_coords,
                color: Color::Magenta,
            });
        });
    frame.render_widget(maze, space);

    render_status(frame, status_area, "(q) quit", app.solution.summary());

    Ok(())
}

/// Splits the frame into a centred maze area and a status area below it.
///
/// # Errors
///
/// This function may return errors if the maze does not fit in terminal dimensions or the layout
/// does not yield the expected areas.
fn maze_layout(frame: &Frame, grid: &Grid) -> Result<(Rect, Rect)> {
    let maze_rows = u16::try_from(grid.height())?;
    let maze_columns = u16::try_from(grid.width())?;
    let status_columns = u16::try_from(grid.width().max(STATUS_MIN_WIDTH))?;

    // Maze and padding area on top, status block at the bottom
    let overall_layout =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let status_full_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get status area from layout")?;

    let status_area = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(status_columns),
        Constraint::Min(1),
    ])
    .split(status_full_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get centered status area from horizontal layout")?;

    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(maze_rows),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;

    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(maze_columns),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    Ok((space, status_area))
}

/// Returns canvas bounds that map one canvas unit to one terminal cell of `space`.
fn canvas_bounds(space: Rect) -> ([f64; 2], [f64; 2]) {
    (
        [
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ],
        [
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ],
    )
}

/// Returns the coordinates of every wall cell of a grid.
fn walls(grid: &Grid) -> Vec<Coord> {
    grid.cells()
        .filter(|(_, cell)| cell.is_blocked())
        .map(|(coord, _)| coord)
        .collect()
}

/// Renders the status block with its key hints and message.
fn render_status(frame: &mut Frame, area: Rect, hints: &str, message: String) {
    let status_block = Block::bordered()
        .title(hints)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);
    let inner = status_block.inner(area);

    frame.render_widget(status_block, area);
    frame.render_widget(Line::raw(message).centered(), inner);
}
