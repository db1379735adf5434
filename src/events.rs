//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::{types::Screen, App};

/// Time to wait for input before advancing the walk-through.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a timeout
/// to avoid blocking the UI, then lets the walker take its next step if one is due.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    if matches!(app.screen, Screen::Walk) {
        if let Some(walker) = app.walker.as_mut() {
            walker.update();
        }
    }

    Ok(())
}

/// Applies a single key press to the application state.
///
/// `q` quits, `r` puts the walker back on the start and `p` pauses or resumes the walk. Other keys
/// are ignored, as are the walk controls while no path is shown.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('r') => {
            if let Some(walker) = app.walker.as_mut() {
                walker.restart();
            }
        }
        KeyCode::Char('p') => {
            if let Some(walker) = app.walker.as_mut() {
                walker.toggle_pause();
            }
        }
        _ => {}
    }
}
