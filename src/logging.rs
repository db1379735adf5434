//! Log output setup.

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global log subscriber.
///
/// Events are written to stderr so they never mix with a printed solution on stdout. The filter
/// is read from `RUST_LOG` and falls back to warnings only.
///
/// # Errors
///
/// This function returns an error if a global subscriber is already installed.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
