//! Logging and configuration setup for bodytrack-rs.

use bodytrack_core::{Options, Result};

/// Initializes `env_logger` from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// Initializes logging and loads options from `path`, or uses the defaults
/// when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```no_run
/// use bodytrack::*;
///
/// fn main() -> Result<()> {
///     let options = init(Some("bodytrack.json"))?;
///     let monitor = LimbAngleMonitor::from_options(&options);
///     Ok(())
/// }
/// ```
pub fn init(path: Option<&str>) -> Result<Options> {
    init_logging();
    let options = match path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    log::info!("bodytrack-rs initialized");
    Ok(options)
}
